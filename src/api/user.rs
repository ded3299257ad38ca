use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use super::schemas::{user_to_schema, UserResponse};
use super::AppState;
use crate::error::ServiceError;
use crate::service::user::UserService;

#[derive(Debug, Deserialize)]
pub struct SetIsActiveRequest {
    pub user_id: String,
    pub is_active: bool,
}

pub async fn set_is_active(
    State(state): State<AppState>,
    Json(payload): Json<SetIsActiveRequest>,
) -> Result<Json<UserResponse>, ServiceError> {
    let service = UserService::new(&state.db);
    let user = service
        .set_is_active(&payload.user_id, payload.is_active)
        .await?;
    Ok(Json(UserResponse {
        user: user_to_schema(user),
    }))
}
