#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use pr_review_service::api::{router, AppState};
use pr_review_service::db::models::User;
use pr_review_service::db::Database;
use pr_review_service::engine::{RandomSelector, ReviewerSelector};
use pr_review_service::service::team::{NewTeamMember, TeamService};

/// Setup an in-memory SQLite database for testing.
pub async fn setup_test_db() -> Database {
    Database::new_in_memory()
        .await
        .expect("Failed to create test database")
}

pub fn test_app(db: Database) -> Router {
    router(AppState {
        db,
        selector: Arc::new(RandomSelector),
    })
}

pub fn test_app_with(db: Database, selector: Arc<dyn ReviewerSelector>) -> Router {
    router(AppState { db, selector })
}

/// Deterministic selector: always takes candidates in pool order.
pub struct PickFirst;

impl ReviewerSelector for PickFirst {
    fn pick_many(&self, candidates: &[User], count: usize) -> Vec<String> {
        candidates
            .iter()
            .take(count)
            .map(|u| u.user_id.clone())
            .collect()
    }

    fn pick_one(&self, candidates: &[User]) -> Option<String> {
        candidates.first().map(|u| u.user_id.clone())
    }
}

/// Create a team with the given (user_id, is_active) members.
pub async fn seed_team(db: &Database, team_name: &str, members: &[(&str, bool)]) {
    let members: Vec<NewTeamMember> = members
        .iter()
        .map(|(id, active)| NewTeamMember {
            user_id: id.to_string(),
            username: format!("{id}-name"),
            is_active: *active,
        })
        .collect();
    TeamService::new(db)
        .add_team(team_name, &members)
        .await
        .expect("Failed to seed team");
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Body was not JSON")
    };
    (status, value)
}

/// Machine-readable code from an error response body.
pub fn error_code(body: &Value) -> &str {
    body["error"]["code"].as_str().unwrap_or("")
}
