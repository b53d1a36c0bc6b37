use std::fmt;

use crate::user::errors::FieldError;

/// Longest accepted value for any user-supplied text field.
const MAX_FIELD_LENGTH: usize = 100;

/// Check a raw field against the shared length bounds (1..=100 characters).
///
/// Control characters are rejected as well: PostgreSQL refuses NUL in text
/// columns.
fn validate_field(field: &'static str, value: &str) -> Result<(), FieldError> {
    let length = value.chars().count();
    if length == 0 {
        Err(FieldError::Empty { field })
    } else if length > MAX_FIELD_LENGTH {
        Err(FieldError::TooLong {
            field,
            max: MAX_FIELD_LENGTH,
            actual: length,
        })
    } else if value.chars().any(char::is_control) {
        Err(FieldError::ControlCharacter { field })
    } else {
        Ok(())
    }
}

/// User aggregate entity.
///
/// Represents a registered user record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: Username,
    pub name: Name,
    /// One-way hash of the password, never the plaintext.
    pub password_hash: String,
    /// Session token from the most recent login, if any.
    pub token: Option<String>,
}

/// Username value type
///
/// Unique key of a user record. Must be 1-100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty
    /// * `TooLong` - Username longer than 100 characters
    pub fn new(username: String) -> Result<Self, FieldError> {
        validate_field("username", &username)?;
        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type (1-100 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(name: String) -> Result<Self, FieldError> {
        validate_field("name", &name)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plaintext password as submitted by the client (1-100 characters).
///
/// `Debug` never prints the value, so commands holding a password can be
/// logged as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: String) -> Result<Self, FieldError> {
        validate_field("password", &password)?;
        Ok(Self(password))
    }

    /// Get the plaintext. Only for hashing and verification.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

/// Command to register a new user with domain types
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub name: Name,
    pub password: Password,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `name` - Validated display name
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(username: Username, name: Name, password: Password) -> Self {
        Self {
            username,
            name,
            password,
        }
    }
}

/// Command to log a user in with domain types
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: Username,
    pub password: Password,
}

impl LoginUserCommand {
    pub fn new(username: Username, password: Password) -> Self {
        Self { username, password }
    }
}

/// Public view of a user: never carries the password hash or token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub username: Username,
    pub name: Name,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            name: user.name.clone(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub username: Username,
    pub name: Name,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_valid() {
        let username = Username::new("alice".to_string()).expect("Valid username");
        assert_eq!(username.as_str(), "alice");
    }

    #[test]
    fn test_username_empty() {
        assert_eq!(
            Username::new(String::new()),
            Err(FieldError::Empty { field: "username" })
        );
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(Username::new("a".to_string()).is_ok());
        assert!(Username::new("a".repeat(100)).is_ok());
        assert_eq!(
            Username::new("a".repeat(101)),
            Err(FieldError::TooLong {
                field: "username",
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_control_characters_rejected() {
        assert_eq!(
            Username::new("ali\0ce".to_string()),
            Err(FieldError::ControlCharacter { field: "username" })
        );
        assert_eq!(
            Name::new("Alice\n".to_string()),
            Err(FieldError::ControlCharacter { field: "name" })
        );
        assert!(matches!(
            Password::new("secret\u{7f}".to_string()),
            Err(FieldError::ControlCharacter { .. })
        ));
        assert!(Name::new("Alice Smith".to_string()).is_ok());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 100 two-byte characters
        assert!(Name::new("é".repeat(100)).is_ok());
    }

    #[test]
    fn test_name_and_password_validation() {
        assert_eq!(
            Name::new(String::new()),
            Err(FieldError::Empty { field: "name" })
        );
        assert!(matches!(
            Password::new("x".repeat(101)),
            Err(FieldError::TooLong {
                field: "password",
                ..
            })
        ));
    }

    #[test]
    fn test_password_debug_is_redacted() {
        let command = RegisterUserCommand::new(
            Username::new("alice".to_string()).unwrap(),
            Name::new("Alice".to_string()).unwrap(),
            Password::new("secret123".to_string()).unwrap(),
        );

        let logged = format!("{:?}", command);
        assert!(logged.contains("alice"));
        assert!(!logged.contains("secret123"));
        assert!(logged.contains("[REDACTED]"));
    }

    #[test]
    fn test_profile_drops_credentials() {
        let user = User {
            username: Username::new("alice".to_string()).unwrap(),
            name: Name::new("Alice".to_string()).unwrap(),
            password_hash: "$2b$10$hash".to_string(),
            token: Some("token".to_string()),
        };

        let profile = UserProfile::from(&user);
        assert_eq!(profile.username.as_str(), "alice");
        assert_eq!(profile.name.as_str(), "Alice");
    }
}
