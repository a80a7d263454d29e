// src/config.rs
use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::application::{commands::posts::DEFAULT_CREATE_MAX_ATTEMPTS, services::ServiceSettings};
use crate::domain::post::{
    SlugPolicy,
    services::{DEFAULT_SLUG_MAX_LENGTH, DEFAULT_SLUG_MAX_PROBES},
};

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    database_max_connections: u32,
    slug_policy: SlugPolicy,
    create_max_attempts: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite::memory:".into()
}

fn default_max_connections() -> u32 {
    5
}

impl AppConfig {
    /// Build configuration from environment variables, reading a `.env` file
    /// first when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys fall back
    /// to defaults; set but unparseable keys are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_database_url);

        let database_max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", default_max_connections())?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let slug_max_length = parse_or(&lookup, "SLUG_MAX_LENGTH", DEFAULT_SLUG_MAX_LENGTH)?;
        let slug_max_probes = parse_or(&lookup, "SLUG_MAX_PROBES", DEFAULT_SLUG_MAX_PROBES)?;
        let slug_policy = SlugPolicy::new(slug_max_length, slug_max_probes)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        let create_max_attempts = parse_or(
            &lookup,
            "POST_CREATE_MAX_ATTEMPTS",
            DEFAULT_CREATE_MAX_ATTEMPTS,
        )?;
        if create_max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "POST_CREATE_MAX_ATTEMPTS must be at least 1".into(),
            ));
        }

        Ok(Self {
            database_url,
            database_max_connections,
            slug_policy,
            create_max_attempts,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn slug_policy(&self) -> SlugPolicy {
        self.slug_policy
    }

    pub fn create_max_attempts(&self) -> u32 {
        self.create_max_attempts
    }

    pub fn service_settings(&self) -> ServiceSettings {
        ServiceSettings {
            slug_policy: self.slug_policy,
            create_max_attempts: self.create_max_attempts,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value '{raw}'"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url(), "sqlite::memory:");
        assert_eq!(config.database_max_connections(), 5);
        assert_eq!(config.slug_policy(), SlugPolicy::default());
        assert_eq!(config.create_max_attempts(), DEFAULT_CREATE_MAX_ATTEMPTS);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite://posts.db"),
            ("SLUG_MAX_LENGTH", "80"),
            ("SLUG_MAX_PROBES", "25"),
            ("POST_CREATE_MAX_ATTEMPTS", "5"),
        ])
        .unwrap();
        assert_eq!(config.database_url(), "sqlite://posts.db");
        assert_eq!(config.slug_policy().max_length(), 80);
        assert_eq!(config.slug_policy().max_probes(), 25);
        assert_eq!(config.service_settings().create_max_attempts, 5);
    }

    #[test]
    fn unparseable_values_are_rejected() {
        let err = config_from(&[("SLUG_MAX_PROBES", "lots")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("SLUG_MAX_PROBES")));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(config_from(&[("SLUG_MAX_LENGTH", "4")]).is_err());
        assert!(config_from(&[("SLUG_MAX_PROBES", "0")]).is_err());
        assert!(config_from(&[("POST_CREATE_MAX_ATTEMPTS", "0")]).is_err());
        assert!(config_from(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
    }
}
