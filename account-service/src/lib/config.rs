use std::env;

use auth::HashAlgorithm;
use auth::PasswordError;
use auth::PasswordHasher;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    Bcrypt,
    Argon2id,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub algorithm: PasswordAlgorithm,
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

fn default_bcrypt_cost() -> u32 {
    PasswordHasher::DEFAULT_BCRYPT_COST
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            algorithm: PasswordAlgorithm::Bcrypt,
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl PasswordConfig {
    /// Build the password hasher described by this section.
    ///
    /// # Errors
    /// * `InvalidCost` - bcrypt cost outside 4..=31
    pub fn password_hasher(&self) -> Result<PasswordHasher, PasswordError> {
        let algorithm = match self.algorithm {
            PasswordAlgorithm::Bcrypt => HashAlgorithm::Bcrypt {
                cost: self.bcrypt_cost,
            },
            PasswordAlgorithm::Argon2id => HashAlgorithm::Argon2id,
        };

        PasswordHasher::with_algorithm(algorithm)
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, PASSWORD__BCRYPT_COST, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(Environment::default().separator("__").try_parsing(true))
    }

    fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(environment)
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }
}
