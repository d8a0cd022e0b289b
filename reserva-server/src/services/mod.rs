//! 服务层 - 领域服务
//!
//! # 服务列表
//!
//! - [`ReservationService`] - 预订领域规则

pub mod reservation;

pub use reservation::{ReservationError, ReservationService};
