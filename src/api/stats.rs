use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use super::AppState;
use crate::error::ServiceError;
use crate::service::stats::{self, Stats};

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Stats>, ServiceError> {
    let stats = stats::collect(&state.db, query.limit).await?;
    Ok(Json(stats))
}
