//! Authentication utilities library
//!
//! Provides reusable credential infrastructure for services:
//! - Password hashing (bcrypt with configurable cost, or Argon2id)
//! - Opaque session token generation
//! - Authentication coordination
//!
//! Services define their own persistence and error types and adapt these
//! primitives. Nothing here performs I/O.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::bcrypt(4).unwrap();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordHasher};
//!
//! let auth = Authenticator::new(PasswordHasher::bcrypt(4).unwrap());
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a session token
//! let result = auth.authenticate("password123", &hash).unwrap();
//! assert!(!result.session_token.as_str().is_empty());
//! ```

pub mod authenticator;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::HashAlgorithm;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionToken;
