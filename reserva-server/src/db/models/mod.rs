//! Database Models

pub mod reservation;

// Re-exports
pub use reservation::{Reservation, ReservationCreate, ReservationUpdate};
