use async_trait::async_trait;

use crate::domain::user::models::LoginUserCommand;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserProfile;
use crate::domain::user::models::UserSession;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated fields.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, name, and password
    ///
    /// # Returns
    /// Profile of the created user (no password, no token)
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<UserProfile, UserError>;

    /// Verify credentials and rotate the user's session token.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username and password
    ///
    /// # Returns
    /// Profile plus the newly issued token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown username or wrong password
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginUserCommand) -> Result<UserSession, UserError>;

    /// Resolve the user owning a session token.
    ///
    /// # Errors
    /// * `Unauthenticated` - No user holds this token
    /// * `DatabaseError` - Database operation failed
    async fn current_user(&self, token: &str) -> Result<UserProfile, UserError>;
}

/// Persistence operations for user records.
///
/// Implementations must enforce username uniqueness themselves; callers only
/// pre-check with `count_by_username`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Count records with the given username (0 or 1).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn count_by_username(&self, username: &Username) -> Result<u64, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve the user currently holding a session token.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token(&self, token: &str) -> Result<Option<User>, UserError>;

    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `DuplicateUsername` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Overwrite the session token of an existing user.
    ///
    /// # Returns
    /// Updated user entity
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_token(&self, username: &Username, token: &str) -> Result<User, UserError>;
}
