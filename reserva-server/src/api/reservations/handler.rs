//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationUpdate};
use crate::utils::{AppError, AppResult};

/// GET /api/reservaciones - 获取所有预订
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.reservations.list().await?;
    Ok(Json(reservations))
}

/// GET /api/reservaciones/nombre/:nombre - 按预订人姓名查询
pub async fn list_by_holder_name(
    State(state): State<ServerState>,
    Path(nombre): Path<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    let reservations = state.reservations.list_by_holder_name(&nombre).await?;
    Ok(Json(reservations))
}

/// POST /api/reservaciones - 登记新预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<String> {
    state.reservations.create(Reservation::from(payload)).await?;
    Ok("Reservación registrada exitosamente.".to_string())
}

/// PUT /api/reservaciones/:id - 更新预订
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<String> {
    state.reservations.update(id, payload).await?;
    Ok("Reservación actualizada exitosamente.".to_string())
}

/// DELETE /api/reservaciones/fecha/:fecha - 按日期删除预订
pub async fn delete_by_date(
    State(state): State<ServerState>,
    Path(fecha): Path<String>,
) -> AppResult<String> {
    let fecha = fecha
        .parse::<NaiveDate>()
        .map_err(|_| AppError::validation(format!("Fecha inválida: {fecha}")))?;
    state.reservations.delete_by_date(fecha).await?;
    Ok("Reservación eliminada exitosamente.".to_string())
}
