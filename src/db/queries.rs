use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use super::models::{PrStatus, PullRequest, ReviewAssignment, Team, User};

pub async fn get_team(pool: &SqlitePool, team_name: &str) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>("SELECT team_name FROM teams WHERE team_name = ?")
        .bind(team_name)
        .fetch_optional(pool)
        .await
}

pub async fn insert_team(conn: &mut SqliteConnection, team_name: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO teams (team_name) VALUES (?)")
        .bind(team_name)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn insert_user(conn: &mut SqliteConnection, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (user_id, username, is_active, team_name) VALUES (?, ?, ?, ?)",
    )
    .bind(&user.user_id)
    .bind(&user.username)
    .bind(user.is_active)
    .bind(&user.team_name)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn team_members(pool: &SqlitePool, team_name: &str) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT user_id, username, is_active, team_name FROM users WHERE team_name = ? ORDER BY user_id",
    )
    .bind(team_name)
    .fetch_all(pool)
    .await
}

pub async fn get_user(pool: &SqlitePool, user_id: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT user_id, username, is_active, team_name FROM users WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Returns the number of rows touched; 0 means the user does not exist.
pub async fn set_user_active(
    pool: &SqlitePool,
    user_id: &str,
    is_active: bool,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET is_active = ? WHERE user_id = ?")
        .bind(is_active)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn get_pull_request(
    pool: &SqlitePool,
    pr_id: &str,
) -> Result<Option<PullRequest>, sqlx::Error> {
    sqlx::query_as::<_, PullRequest>(
        "SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at \
         FROM pull_requests WHERE pull_request_id = ?",
    )
    .bind(pr_id)
    .fetch_optional(pool)
    .await
}

pub async fn insert_pull_request(
    conn: &mut SqliteConnection,
    pr: &PullRequest,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO pull_requests (pull_request_id, pull_request_name, author_id, status, created_at, merged_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&pr.pull_request_id)
    .bind(&pr.pull_request_name)
    .bind(&pr.author_id)
    .bind(pr.status)
    .bind(pr.created_at)
    .bind(pr.merged_at)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn mark_merged(
    pool: &SqlitePool,
    pr_id: &str,
    merged_at: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE pull_requests SET status = ?, merged_at = ? WHERE pull_request_id = ?")
        .bind(PrStatus::Merged)
        .bind(merged_at)
        .bind(pr_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_assignments(
    pool: &SqlitePool,
    pr_id: &str,
) -> Result<Vec<ReviewAssignment>, sqlx::Error> {
    sqlx::query_as::<_, ReviewAssignment>(
        "SELECT pull_request_id, reviewer_id FROM pull_request_reviewers \
         WHERE pull_request_id = ? ORDER BY reviewer_id",
    )
    .bind(pr_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_assignment(
    conn: &mut SqliteConnection,
    pr_id: &str,
    reviewer_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO pull_request_reviewers (pull_request_id, reviewer_id) VALUES (?, ?)")
        .bind(pr_id)
        .bind(reviewer_id)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn delete_assignment(
    conn: &mut SqliteConnection,
    assignment: &ReviewAssignment,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM pull_request_reviewers WHERE pull_request_id = ? AND reviewer_id = ?")
        .bind(&assignment.pull_request_id)
        .bind(&assignment.reviewer_id)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn pull_requests_for_reviewer(
    pool: &SqlitePool,
    user_id: &str,
) -> Result<Vec<PullRequest>, sqlx::Error> {
    sqlx::query_as::<_, PullRequest>(
        "SELECT pr.pull_request_id, pr.pull_request_name, pr.author_id, pr.status, pr.created_at, pr.merged_at \
         FROM pull_requests pr \
         JOIN pull_request_reviewers r ON r.pull_request_id = pr.pull_request_id \
         WHERE r.reviewer_id = ? \
         ORDER BY pr.pull_request_id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn count_pull_requests(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pull_requests")
        .fetch_one(pool)
        .await
}

pub async fn count_assignments(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM pull_request_reviewers")
        .fetch_one(pool)
        .await
}

pub async fn pr_counts_by_status(
    pool: &SqlitePool,
) -> Result<Vec<(PrStatus, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (PrStatus, i64)>(
        "SELECT status, COUNT(*) FROM pull_requests GROUP BY status",
    )
    .fetch_all(pool)
    .await
}

pub async fn top_reviewers(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<(String, i64)>, sqlx::Error> {
    sqlx::query_as::<_, (String, i64)>(
        "SELECT reviewer_id, COUNT(*) AS review_count \
         FROM pull_request_reviewers \
         GROUP BY reviewer_id \
         ORDER BY review_count DESC, reviewer_id \
         LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
