pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/tools", get(handlers::tools::list_tools))
        .route("/api/tools/:name", post(handlers::tools::invoke_tool))
        .route("/api/rooms", get(handlers::bookings::get_rooms))
        .route("/api/bookings", get(handlers::bookings::get_bookings))
        .with_state(state)
}
