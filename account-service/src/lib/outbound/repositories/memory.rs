use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-process user store keyed by username.
///
/// Used by tests and local runs without a database. Uniqueness is enforced by
/// checking and inserting under a single write lock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn count_by_username(&self, username: &Username) -> Result<u64, UserError> {
        let users = self.users.read().await;
        Ok(u64::from(users.contains_key(username.as_str())))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|user| user.token.as_deref() == Some(token))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.username.as_str()) {
            return Err(UserError::DuplicateUsername(user.username.to_string()));
        }

        users.insert(user.username.as_str().to_string(), user.clone());
        Ok(user)
    }

    async fn update_token(&self, username: &Username, token: &str) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        let user = users
            .get_mut(username.as_str())
            .ok_or_else(|| UserError::NotFound(username.to_string()))?;
        user.token = Some(token.to_string());

        Ok(user.clone())
    }
}
