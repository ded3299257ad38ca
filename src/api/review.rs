use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use super::schemas::{pr_to_short, ReviewListResponse};
use super::AppState;
use crate::error::ServiceError;
use crate::service::pr::PullRequestService;

#[derive(Debug, Deserialize)]
pub struct GetReviewQuery {
    pub user_id: String,
}

/// PRs currently assigned to the user for review. Unknown users get an
/// empty list rather than an error.
pub async fn get_review(
    State(state): State<AppState>,
    Query(query): Query<GetReviewQuery>,
) -> Result<Json<ReviewListResponse>, ServiceError> {
    let service = PullRequestService::new(&state.db, state.selector.as_ref());
    let prs = service.prs_for_reviewer(&query.user_id).await?;
    Ok(Json(ReviewListResponse {
        user_id: query.user_id,
        pull_requests: prs.iter().map(pr_to_short).collect(),
    }))
}
