use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use super::schemas::{team_to_schema, TeamResponse, TeamSchema};
use super::AppState;
use crate::error::ServiceError;
use crate::service::team::{NewTeamMember, TeamService};

#[derive(Debug, Deserialize)]
pub struct AddTeamRequest {
    pub team_name: String,
    pub members: Vec<NewTeamMember>,
}

#[derive(Debug, Deserialize)]
pub struct GetTeamQuery {
    pub team_name: String,
}

pub async fn add_team(
    State(state): State<AppState>,
    Json(payload): Json<AddTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ServiceError> {
    let service = TeamService::new(&state.db);
    let members = service.add_team(&payload.team_name, &payload.members).await?;
    Ok((
        StatusCode::CREATED,
        Json(TeamResponse {
            team: team_to_schema(payload.team_name, members),
        }),
    ))
}

pub async fn get_team(
    State(state): State<AppState>,
    Query(query): Query<GetTeamQuery>,
) -> Result<Json<TeamSchema>, ServiceError> {
    let service = TeamService::new(&state.db);
    let members = service.get_team(&query.team_name).await?;
    Ok(Json(team_to_schema(query.team_name, members)))
}
