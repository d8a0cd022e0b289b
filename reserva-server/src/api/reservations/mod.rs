//! Reservation API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservaciones", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update))
        .route("/nombre/{nombre}", get(handler::list_by_holder_name))
        .route("/fecha/{fecha}", delete(handler::delete_by_date))
}
