//! Pull request lifecycle: creation with initial reviewer assignment, the
//! single OPEN -> MERGED transition, and reviewer reassignment.

use chrono::Utc;
use tracing::info;

use crate::db::models::{PrStatus, PullRequest, ReviewAssignment};
use crate::db::{queries, Database};
use crate::engine::{self, ReviewerSelector};
use crate::error::ServiceError;

fn reviewer_ids(assignments: &[ReviewAssignment]) -> Vec<String> {
    assignments.iter().map(|a| a.reviewer_id.clone()).collect()
}

/// A pull request together with its current reviewer set.
#[derive(Debug, Clone)]
pub struct PrWithReviewers {
    pub pr: PullRequest,
    pub reviewers: Vec<String>,
}

pub struct PullRequestService<'a> {
    db: &'a Database,
    selector: &'a dyn ReviewerSelector,
}

impl<'a> PullRequestService<'a> {
    pub fn new(db: &'a Database, selector: &'a dyn ReviewerSelector) -> Self {
        Self { db, selector }
    }

    pub async fn create_pr(
        &self,
        pr_id: &str,
        pr_name: &str,
        author_id: &str,
    ) -> Result<PrWithReviewers, ServiceError> {
        let pool = self.db.pool();

        if queries::get_pull_request(pool, pr_id).await?.is_some() {
            return Err(ServiceError::PrExists(pr_id.to_string()));
        }
        let author = queries::get_user(pool, author_id)
            .await?
            .ok_or_else(|| ServiceError::AuthorNotFound(author_id.to_string()))?;
        let team = queries::get_team(pool, &author.team_name)
            .await?
            .ok_or_else(|| ServiceError::TeamNotFound(author.team_name.clone()))?;
        let members = queries::team_members(pool, &team.team_name).await?;

        let reviewers = engine::select_initial_reviewers(self.selector, &members, author_id);

        let pr = PullRequest {
            pull_request_id: pr_id.to_string(),
            pull_request_name: pr_name.to_string(),
            author_id: author_id.to_string(),
            status: PrStatus::Open,
            created_at: Utc::now(),
            merged_at: None,
        };

        // PR row and its assignments land together or not at all.
        let mut tx = pool.begin().await?;
        queries::insert_pull_request(&mut tx, &pr).await?;
        for reviewer_id in &reviewers {
            queries::insert_assignment(&mut tx, pr_id, reviewer_id).await?;
        }
        tx.commit().await?;

        info!(
            "created PR {} by {} with reviewers {:?}",
            pr_id, author_id, reviewers
        );
        Ok(PrWithReviewers { pr, reviewers })
    }

    pub async fn merge_pr(&self, pr_id: &str) -> Result<PrWithReviewers, ServiceError> {
        let pool = self.db.pool();

        let pr = queries::get_pull_request(pool, pr_id)
            .await?
            .ok_or_else(|| ServiceError::PrNotFound(pr_id.to_string()))?;
        let reviewers = reviewer_ids(&queries::list_assignments(pool, pr_id).await?);

        // Idempotent: a merged PR is returned as-is, merged_at untouched.
        if pr.status == PrStatus::Merged {
            return Ok(PrWithReviewers { pr, reviewers });
        }

        queries::mark_merged(pool, pr_id, Utc::now()).await?;
        info!("merged PR {}", pr_id);

        // Re-read so the returned timestamp is exactly what storage holds.
        let pr = queries::get_pull_request(pool, pr_id)
            .await?
            .ok_or_else(|| ServiceError::PrNotFound(pr_id.to_string()))?;
        Ok(PrWithReviewers { pr, reviewers })
    }

    pub async fn reassign_reviewer(
        &self,
        pr_id: &str,
        old_user_id: &str,
    ) -> Result<(PrWithReviewers, String), ServiceError> {
        let pool = self.db.pool();

        let pr = queries::get_pull_request(pool, pr_id)
            .await?
            .ok_or_else(|| ServiceError::PrNotFound(pr_id.to_string()))?;
        if pr.status == PrStatus::Merged {
            return Err(ServiceError::PrMerged(pr_id.to_string()));
        }
        let assignments = queries::list_assignments(pool, pr_id).await?;
        let outgoing = assignments
            .iter()
            .find(|a| a.reviewer_id == old_user_id)
            .ok_or_else(|| ServiceError::ReviewerNotAssigned {
                pr_id: pr_id.to_string(),
                user_id: old_user_id.to_string(),
            })?;
        let reviewers = reviewer_ids(&assignments);
        // The assignment referenced this user; a missing row means corrupt data.
        let old_user = queries::get_user(pool, old_user_id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(old_user_id.to_string()))?;

        // Replacement pool is the outgoing reviewer's team.
        let members = queries::team_members(pool, &old_user.team_name).await?;
        let candidates = engine::replacement_candidates(&members, old_user_id, &reviewers);
        let new_reviewer_id = self
            .selector
            .pick_one(&candidates)
            .ok_or(ServiceError::NoCandidate)?;

        // Swap the assignment atomically so the set never shrinks or grows.
        let mut tx = pool.begin().await?;
        queries::delete_assignment(&mut tx, outgoing).await?;
        queries::insert_assignment(&mut tx, pr_id, &new_reviewer_id).await?;
        tx.commit().await?;

        let reviewers = reviewer_ids(&queries::list_assignments(pool, pr_id).await?);
        info!(
            "reassigned PR {}: {} -> {}",
            pr_id, old_user_id, new_reviewer_id
        );
        Ok((PrWithReviewers { pr, reviewers }, new_reviewer_id))
    }

    /// PRs the user is currently assigned to review. Unknown users simply
    /// have no assignments; this never fails.
    pub async fn prs_for_reviewer(
        &self,
        user_id: &str,
    ) -> Result<Vec<PullRequest>, ServiceError> {
        Ok(queries::pull_requests_for_reviewer(self.db.pool(), user_id).await?)
    }
}
