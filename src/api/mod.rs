pub mod pr;
pub mod review;
pub mod schemas;
pub mod stats;
pub mod team;
pub mod user;

use std::sync::Arc;

use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::db::Database;
use crate::engine::ReviewerSelector;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub selector: Arc<dyn ReviewerSelector>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/team/add", post(team::add_team))
        .route("/team/get", get(team::get_team))
        .route("/users/setIsActive", post(user::set_is_active))
        .route("/users/getReview", get(review::get_review))
        .route("/pullRequest/create", post(pr::create_pr))
        .route("/pullRequest/merge", post(pr::merge_pr))
        .route("/pullRequest/reassign", post(pr::reassign_reviewer))
        .route("/stats", get(stats::get_stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "pr-review-service",
        "timestamp": chrono::Utc::now()
    }))
}
