use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::models::User;
use crate::db::{queries, Database};
use crate::error::ServiceError;

/// Member payload accepted at team creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeamMember {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

pub struct TeamService<'a> {
    db: &'a Database,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a team and its member users in one transaction.
    pub async fn add_team(
        &self,
        team_name: &str,
        members: &[NewTeamMember],
    ) -> Result<Vec<User>, ServiceError> {
        let pool = self.db.pool();

        if queries::get_team(pool, team_name).await?.is_some() {
            return Err(ServiceError::TeamExists(team_name.to_string()));
        }

        let mut tx = pool.begin().await?;
        queries::insert_team(&mut tx, team_name).await?;
        for member in members {
            let user = User {
                user_id: member.user_id.clone(),
                username: member.username.clone(),
                is_active: member.is_active,
                team_name: team_name.to_string(),
            };
            queries::insert_user(&mut tx, &user).await?;
        }
        tx.commit().await?;

        info!("created team {} with {} members", team_name, members.len());
        queries::team_members(pool, team_name)
            .await
            .map_err(Into::into)
    }

    pub async fn get_team(&self, team_name: &str) -> Result<Vec<User>, ServiceError> {
        let pool = self.db.pool();
        queries::get_team(pool, team_name)
            .await?
            .ok_or_else(|| ServiceError::TeamNotFound(team_name.to_string()))?;
        queries::team_members(pool, team_name)
            .await
            .map_err(Into::into)
    }
}
