use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::session::SessionToken;

/// Authentication coordinator combining password verification and session
/// token issuance.
///
/// Hashing and verification are CPU-bound; async callers should run them on a
/// blocking thread. The type is cheap to clone for that purpose.
#[derive(Debug, Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Freshly generated session token
    pub session_token: SessionToken,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `password_hasher` - Hasher used for new passwords
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(password_hasher: PasswordHasher) -> Self {
        Self { password_hasher }
    }

    /// Hash a password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Hashed password string
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a new session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    ///
    /// # Returns
    /// AuthenticationResult with a new session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(AuthenticationResult {
            session_token: self.issue_session_token(),
        })
    }

    /// Generate a session token without password verification.
    pub fn issue_session_token(&self) -> SessionToken {
        SessionToken::generate()
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(PasswordHasher::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authenticator() -> Authenticator {
        Authenticator::new(PasswordHasher::bcrypt(4).expect("Valid cost"))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash)
            .expect("Authentication failed");

        assert!(!result.session_token.as_str().is_empty());
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_corrupt_hash() {
        let result = authenticator().authenticate("my_password", "not-a-hash");
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(
                PasswordError::VerificationFailed(_)
            ))
        ));
    }

    #[test]
    fn test_each_authentication_issues_new_token() {
        let authenticator = authenticator();
        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let first = authenticator
            .authenticate("my_password", &hash)
            .expect("Authentication failed");
        let second = authenticator
            .authenticate("my_password", &hash)
            .expect("Authentication failed");

        assert_ne!(first.session_token, second.session_token);
    }
}
