//! Reserva Server - 餐厅桌台预订 CRUD 服务
//!
//! # 模块结构
//!
//! ```text
//! reserva-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 预订领域服务
//! ├── db/            # 数据库层 (SQLite)
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, Server, ServerState};
pub use self::core::config::setup_environment;
pub use self::services::{ReservationError, ReservationService};
pub use self::utils::{AppError, AppResult};

// Re-export logger functions
pub use self::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   ______ _
  / /_/ / _ \/ ___/ _ \/ ___/ | / / __ `/
 / _, _/  __(__  )  __/ /   | |/ / /_/ /
/_/ |_|\___/____/\___/_/    |___/\__,_/
    "#
    );
}
