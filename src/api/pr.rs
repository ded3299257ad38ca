use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::schemas::{pr_to_schema, PullRequestResponse, ReassignResponse};
use super::AppState;
use crate::error::ServiceError;
use crate::service::pr::PullRequestService;

#[derive(Debug, Deserialize)]
pub struct CreatePrRequest {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

#[derive(Debug, Deserialize)]
pub struct MergePrRequest {
    pub pull_request_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReassignRequest {
    pub pull_request_id: String,
    pub old_user_id: String,
}

pub async fn create_pr(
    State(state): State<AppState>,
    Json(payload): Json<CreatePrRequest>,
) -> Result<(StatusCode, Json<PullRequestResponse>), ServiceError> {
    let service = PullRequestService::new(&state.db, state.selector.as_ref());
    let pr = service
        .create_pr(
            &payload.pull_request_id,
            &payload.pull_request_name,
            &payload.author_id,
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(PullRequestResponse {
            pr: pr_to_schema(pr),
        }),
    ))
}

pub async fn merge_pr(
    State(state): State<AppState>,
    Json(payload): Json<MergePrRequest>,
) -> Result<Json<PullRequestResponse>, ServiceError> {
    let service = PullRequestService::new(&state.db, state.selector.as_ref());
    let pr = service.merge_pr(&payload.pull_request_id).await?;
    Ok(Json(PullRequestResponse {
        pr: pr_to_schema(pr),
    }))
}

pub async fn reassign_reviewer(
    State(state): State<AppState>,
    Json(payload): Json<ReassignRequest>,
) -> Result<Json<ReassignResponse>, ServiceError> {
    let service = PullRequestService::new(&state.db, state.selector.as_ref());
    let (pr, replaced_by) = service
        .reassign_reviewer(&payload.pull_request_id, &payload.old_user_id)
        .await?;
    Ok(Json(ReassignResponse {
        pr: pr_to_schema(pr),
        replaced_by,
    }))
}
