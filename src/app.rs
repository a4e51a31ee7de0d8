use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/journal",
            get(handlers::list_entries).post(handlers::create_entry),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/analytics", get(handlers::get_analytics))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/sentiment", post(handlers::analyze_sentiment))
        .route("/api/quote", get(handlers::get_quote))
        .route("/api/voice", post(handlers::voice_command))
        .route("/api/export", get(handlers::export_week))
        .route(
            "/api/preferences",
            get(handlers::get_preferences).post(handlers::update_preferences),
        )
        .route("/api/preferences/theme/toggle", post(handlers::toggle_theme))
        .with_state(state)
}
