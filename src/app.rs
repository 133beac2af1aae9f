use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, put}, Router};
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/moods", get(handlers::list_moods))
        .route("/api/achievements", get(handlers::list_achievements))
        .route("/api/users/:user_id/mood", put(handlers::log_mood))
        .route("/api/users/:user_id/mood/today", get(handlers::get_today_mood))
        .route("/api/users/:user_id/streaks", get(handlers::get_streaks))
        .route("/api/users/:user_id/stats", get(handlers::get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
