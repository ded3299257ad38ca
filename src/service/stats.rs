//! Read-side aggregation over PRs and review assignments. No invariants of
//! its own; everything here is derived from the four base relations.

use serde::{Deserialize, Serialize};

use crate::db::models::PrStatus;
use crate::db::{queries, Database};
use crate::error::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: PrStatus,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewerCount {
    pub user_id: String,
    pub review_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stats {
    pub total_prs: i64,
    pub total_reviews: i64,
    pub prs_by_status: Vec<StatusCount>,
    pub top_reviewers: Vec<ReviewerCount>,
}

pub async fn collect(db: &Database, limit: i64) -> Result<Stats, ServiceError> {
    let pool = db.pool();

    let total_prs = queries::count_pull_requests(pool).await?;
    let total_reviews = queries::count_assignments(pool).await?;
    let counted = queries::pr_counts_by_status(pool).await?;

    // Both statuses always appear, zero-filled when absent.
    let prs_by_status = [PrStatus::Open, PrStatus::Merged]
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: counted
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, c)| *c)
                .unwrap_or(0),
        })
        .collect();

    let top_reviewers = queries::top_reviewers(pool, limit)
        .await?
        .into_iter()
        .map(|(user_id, review_count)| ReviewerCount {
            user_id,
            review_count,
        })
        .collect();

    Ok(Stats {
        total_prs,
        total_reviews,
        prs_by_status,
        top_reviewers,
    })
}
