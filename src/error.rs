use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("PR already exists: {0}")]
    PrExists(String),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Team already exists: {0}")]
    TeamExists(String),

    #[error("PR not found: {0}")]
    PrNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("PR {0} is merged, changes are forbidden")]
    PrMerged(String),

    #[error("Reviewer {user_id} is not assigned to PR {pr_id}")]
    ReviewerNotAssigned { pr_id: String, user_id: String },

    #[error("No active replacement candidate in team")]
    NoCandidate,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ServiceError {
    /// Machine-readable code surfaced in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::PrExists(_) => "PR_EXISTS",
            Self::AuthorNotFound(_)
            | Self::TeamNotFound(_)
            | Self::PrNotFound(_)
            | Self::UserNotFound(_) => "NOT_FOUND",
            Self::TeamExists(_) => "TEAM_EXISTS",
            Self::PrMerged(_) => "PR_MERGED",
            Self::ReviewerNotAssigned { .. } => "NOT_ASSIGNED",
            Self::NoCandidate => "NO_CANDIDATE",
            Self::Database(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::PrExists(_) | Self::PrMerged(_) | Self::ReviewerNotAssigned { .. } | Self::NoCandidate => {
                StatusCode::CONFLICT
            }
            Self::AuthorNotFound(_)
            | Self::TeamNotFound(_)
            | Self::PrNotFound(_)
            | Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::TeamExists(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("internal error: {}", self);
        }
        let body = Json(serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        }));
        (status, body).into_response()
    }
}
