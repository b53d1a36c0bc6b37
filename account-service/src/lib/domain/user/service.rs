use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use tokio::sync::OnceCell;

use crate::domain::user::models::LoginUserCommand;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserSession;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    /// Hash verified against when the username is unknown, built on first use.
    unknown_user_hash: OnceCell<String>,
}

const UNKNOWN_USER_PASSWORD: &str = "unknown-user-placeholder";

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and session token issuance
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
            unknown_user_hash: OnceCell::new(),
        }
    }

    async fn hash_password(&self, password: Password) -> Result<String, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(anyhow::Error::from)??;

        Ok(password_hash)
    }

    async fn verify_password(
        &self,
        password: Password,
        password_hash: String,
    ) -> Result<auth::SessionToken, UserError> {
        let authenticator = Arc::clone(&self.authenticator);

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), &password_hash)
        })
        .await
        .map_err(anyhow::Error::from)??;

        Ok(result.session_token)
    }

    /// Run one verification against a placeholder hash so that an unknown
    /// username costs the same as a wrong password.
    async fn verify_unknown_user(&self, password: Password) -> Result<(), UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let unknown_user_hash = self
            .unknown_user_hash
            .get_or_try_init(|| async move {
                let hash = tokio::task::spawn_blocking(move || {
                    authenticator.hash_password(UNKNOWN_USER_PASSWORD)
                })
                .await
                .map_err(anyhow::Error::from)??;
                Ok::<String, UserError>(hash)
            })
            .await?
            .clone();

        // Outcome is irrelevant, only the work matters
        let _ = self.verify_password(password, unknown_user_hash).await;

        Ok(())
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<UserProfile, UserError> {
        tracing::info!(request = ?command, "Register new user");

        if self.repository.count_by_username(&command.username).await? > 0 {
            return Err(UserError::DuplicateUsername(command.username.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let user = User {
            username: command.username,
            name: command.name,
            password_hash,
            token: None,
        };

        let created_user = self.repository.create(user).await?;

        Ok(UserProfile::from(&created_user))
    }

    async fn login(&self, command: LoginUserCommand) -> Result<UserSession, UserError> {
        tracing::info!(request = ?command, "Login user");

        let user = match self.repository.find_by_username(&command.username).await? {
            Some(user) => user,
            None => {
                self.verify_unknown_user(command.password).await?;
                return Err(UserError::InvalidCredentials);
            }
        };

        let session_token = self
            .verify_password(command.password, user.password_hash)
            .await?;

        let updated_user = self
            .repository
            .update_token(&user.username, session_token.as_str())
            .await?;

        Ok(UserSession {
            username: updated_user.username,
            name: updated_user.name,
            token: session_token.into_string(),
        })
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, UserError> {
        if token.is_empty() {
            return Err(UserError::Unauthenticated);
        }

        self.repository
            .find_by_token(token)
            .await?
            .map(|ref user| UserProfile::from(user))
            .ok_or(UserError::Unauthenticated)
    }
}
