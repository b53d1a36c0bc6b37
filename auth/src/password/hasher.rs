use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Hashing algorithm used for new password hashes.
///
/// Verification does not depend on this setting: the algorithm is read back
/// from the stored hash, so records hashed under a previous configuration keep
/// working after the algorithm or cost changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// bcrypt with the given cost (log2 of the number of rounds).
    Bcrypt { cost: u32 },
    /// Argon2id with the library's default parameters.
    Argon2id,
}

/// Password hashing implementation.
///
/// Produces salted one-way hashes and verifies plaintext passwords against
/// them. Both bcrypt and Argon2 compare digests in constant time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    algorithm: HashAlgorithm,
}

impl PasswordHasher {
    pub const MIN_BCRYPT_COST: u32 = 4;
    pub const MAX_BCRYPT_COST: u32 = 31;
    pub const DEFAULT_BCRYPT_COST: u32 = 10;

    /// Create a hasher using bcrypt with the default cost of 10.
    pub fn new() -> Self {
        Self {
            algorithm: HashAlgorithm::Bcrypt {
                cost: Self::DEFAULT_BCRYPT_COST,
            },
        }
    }

    /// Create a bcrypt hasher with a custom cost.
    ///
    /// # Errors
    /// * `InvalidCost` - Cost is outside the range bcrypt accepts (4..=31)
    pub fn bcrypt(cost: u32) -> Result<Self, PasswordError> {
        Self::with_algorithm(HashAlgorithm::Bcrypt { cost })
    }

    /// Create an Argon2id hasher.
    pub fn argon2id() -> Self {
        Self {
            algorithm: HashAlgorithm::Argon2id,
        }
    }

    /// Create a hasher for an explicit algorithm, validating its parameters.
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Result<Self, PasswordError> {
        if let HashAlgorithm::Bcrypt { cost } = algorithm {
            if !(Self::MIN_BCRYPT_COST..=Self::MAX_BCRYPT_COST).contains(&cost) {
                return Err(PasswordError::InvalidCost {
                    min: Self::MIN_BCRYPT_COST,
                    max: Self::MAX_BCRYPT_COST,
                    actual: cost,
                });
            }
        }

        Ok(Self { algorithm })
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Returns
    /// Modular crypt string (`$2b$...` for bcrypt, PHC `$argon2id$...` for Argon2)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        match self.algorithm {
            HashAlgorithm::Bcrypt { cost } => bcrypt::hash(password, cost)
                .map_err(|e| PasswordError::HashingFailed(e.to_string())),
            HashAlgorithm::Argon2id => {
                let salt = SaltString::generate(&mut OsRng);

                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| PasswordError::HashingFailed(e.to_string()))
            }
        }
    }

    /// Verify a password against a stored hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is not recognised or is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        if hash.starts_with("$argon2") {
            let parsed_hash = PasswordHash::new(hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
            })?;

            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok());
        }

        if hash.starts_with("$2") {
            return bcrypt::verify(password, hash).map_err(|e| {
                PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
            });
        }

        Err(PasswordError::VerificationFailed(
            "Unrecognised password hash format".to_string(),
        ))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
