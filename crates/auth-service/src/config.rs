use std::collections::HashMap;
use std::env;
use thiserror::Error;

/// Default bind address when `BIND_ADDRESS` is not set.
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Default bcrypt work factor for password hashing.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

// Valid bcrypt work factor range.
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub bcrypt_cost: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidVar { var: String, reason: String },
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a HashMap (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let bcrypt_cost = match vars.get("AUTH_BCRYPT_COST") {
            Some(raw) => raw.parse::<u32>().map_err(|e| ConfigError::InvalidVar {
                var: "AUTH_BCRYPT_COST".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_BCRYPT_COST,
        };

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidVar {
                var: "AUTH_BCRYPT_COST".to_string(),
                reason: format!(
                    "cost {bcrypt_cost} outside {MIN_BCRYPT_COST}..={MAX_BCRYPT_COST}"
                ),
            });
        }

        Ok(Config {
            bind_address,
            bcrypt_cost,
        })
    }
}
