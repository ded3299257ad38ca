use tracing::info;

use crate::db::models::User;
use crate::db::{queries, Database};
use crate::error::ServiceError;

pub struct UserService<'a> {
    db: &'a Database,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn set_is_active(
        &self,
        user_id: &str,
        is_active: bool,
    ) -> Result<User, ServiceError> {
        let pool = self.db.pool();
        let touched = queries::set_user_active(pool, user_id, is_active).await?;
        if touched == 0 {
            return Err(ServiceError::UserNotFound(user_id.to_string()));
        }
        info!("set user {} active={}", user_id, is_active);
        queries::get_user(pool, user_id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(user_id.to_string()))
    }
}
