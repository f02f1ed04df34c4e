//! Configuration file loading

use super::Settings;
use super::validation::{validate_settings, validation_errors_to_anyhow};
use crate::constants::config::APP_PASSWORD_ENV;
use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bitbucket: Settings,
}

impl Config {
    /// Load configuration from a file
    ///
    /// A missing `app_password` is taken from the `BITBUCKET_APP_PASSWORD`
    /// environment variable. The result is validated before it is returned.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_with_app_password(path, None)
    }

    /// Load configuration, preferring `app_password` over file and environment
    pub fn load_with_app_password(path: &str, app_password: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_with_app_password(&content, app_password)
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with_app_password(content, None)
    }

    pub fn parse_with_app_password(content: &str, app_password: Option<&str>) -> Result<Self> {
        let mut config: Config =
            serde_yaml::from_str(content).context("Failed to parse configuration")?;

        if let Some(app_password) = app_password {
            config.bitbucket = config.bitbucket.with_app_password(app_password);
        } else if !config.bitbucket.has_app_password()
            && let Ok(app_password) = std::env::var(APP_PASSWORD_ENV)
        {
            config.bitbucket = config.bitbucket.with_app_password(app_password);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        validate_settings(&self.bitbucket).map_err(validation_errors_to_anyhow)
    }

    /// Alias for load method
    pub fn load_config(path: &str) -> Result<Self> {
        Self::load(path).with_context(|| format!("Failed to load config from {}", path))
    }
}
