//! Wire shapes for the HTTP surface. Field names follow the public API
//! contract, including the camelCase timestamp fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::models::{PrStatus, PullRequest, User};
use crate::service::pr::PrWithReviewers;
use crate::service::team::NewTeamMember;

#[derive(Debug, Serialize, Deserialize)]
pub struct PullRequestSchema {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt")]
    pub merged_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PullRequestShort {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: PrStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamSchema {
    pub team_name: String,
    pub members: Vec<NewTeamMember>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserSchema {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PullRequestResponse {
    pub pr: PullRequestSchema,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReassignResponse {
    pub pr: PullRequestSchema,
    pub replaced_by: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub team: TeamSchema,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserSchema,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewListResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShort>,
}

pub fn pr_to_schema(pr: PrWithReviewers) -> PullRequestSchema {
    PullRequestSchema {
        pull_request_id: pr.pr.pull_request_id,
        pull_request_name: pr.pr.pull_request_name,
        author_id: pr.pr.author_id,
        status: pr.pr.status,
        assigned_reviewers: pr.reviewers,
        created_at: pr.pr.created_at,
        merged_at: pr.pr.merged_at,
    }
}

pub fn pr_to_short(pr: &PullRequest) -> PullRequestShort {
    PullRequestShort {
        pull_request_id: pr.pull_request_id.clone(),
        pull_request_name: pr.pull_request_name.clone(),
        author_id: pr.author_id.clone(),
        status: pr.status,
    }
}

pub fn user_to_schema(user: User) -> UserSchema {
    UserSchema {
        user_id: user.user_id,
        username: user.username,
        team_name: user.team_name,
        is_active: user.is_active,
    }
}

pub fn team_to_schema(team_name: String, members: Vec<User>) -> TeamSchema {
    TeamSchema {
        team_name,
        members: members
            .into_iter()
            .map(|u| NewTeamMember {
                user_id: u.user_id,
                username: u.username,
                is_active: u.is_active,
            })
            .collect(),
    }
}
