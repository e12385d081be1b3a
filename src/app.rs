use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/counter", get(handlers::get_counter))
        .route("/api/counter/reset", post(handlers::reset_counter))
        .route("/api/habits", get(handlers::list_habits).post(handlers::create_habit))
        .route("/api/habits/:id", delete(handlers::delete_habit))
        .route("/api/habits/:id/log", post(handlers::log_habit))
        .route("/api/followup/summary", get(handlers::followup_summary))
        .route("/api/followup/calendar", get(handlers::followup_calendar))
        .route("/api/followup/log", post(handlers::log_followup))
        .with_state(state)
}
