// src/config.rs

pub const DEFAULT_PORT: u16 = 3306;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    MissingEnv(&'static str),

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Failed to parse MYSQL_PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },
}

/// Connection parameters for the quiz database.
///
/// Read from `MYSQL_HOST`, `MYSQL_PORT`, `MYSQL_USER`, `MYSQL_PASSWORD` and
/// `MYSQL_DB`. Only the port is optional.
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DatabaseConfig {
    /// Loads the configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` first if a local `.env` file should be honoured.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingEnv(key));

        let port = match lookup("MYSQL_PORT") {
            Some(value) if !value.trim().is_empty() => {
                value
                    .trim()
                    .parse::<u16>()
                    .map_err(|e| ConfigError::InvalidPort {
                        value: value.clone(),
                        reason: e.to_string(),
                    })?
            }
            _ => DEFAULT_PORT,
        };

        let config = DatabaseConfig {
            host: required("MYSQL_HOST")?,
            port,
            user: required("MYSQL_USER")?,
            password: required("MYSQL_PASSWORD")?,
            database: required("MYSQL_DB")?,
        };
        config.validate()?;

        Ok(config)
    }

    // The password may legitimately be empty on a local server.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Empty("MYSQL_HOST"));
        }
        if self.user.trim().is_empty() {
            return Err(ConfigError::Empty("MYSQL_USER"));
        }
        if self.database.trim().is_empty() {
            return Err(ConfigError::Empty("MYSQL_DB"));
        }
        Ok(())
    }

    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .finish()
    }
}


use sqlx::mysql::MySqlConnectOptions;
use std::env;
use std::fmt;
use thiserror::Error;
