use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{Booking, Room};
use crate::services::booking;
use crate::state::AppState;

// GET /api/rooms
pub async fn get_rooms(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Room>>, AppError> {
    Ok(Json(booking::view_rooms(&state.store)?))
}

// GET /api/bookings
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    Ok(Json(booking::view_bookings(&state.store)?))
}
