//! Configuration validation

use super::Settings;
use anyhow::anyhow;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Username is empty or whitespace-only
    EmptyUsername,
    /// Base URL is empty or whitespace-only
    EmptyBaseUrl,
    /// Neither the config file nor the environment provided a secret
    MissingAppPassword(String),
    /// Project key has an invalid format
    InvalidProjectKey(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyUsername => write!(f, "Username cannot be empty"),
            ValidationError::EmptyBaseUrl => write!(f, "Base URL cannot be empty"),
            ValidationError::MissingAppPassword(env_var) => write!(
                f,
                "App password is required. Set it in the config file or the {} environment variable",
                env_var
            ),
            ValidationError::InvalidProjectKey(key) => {
                write!(f, "Invalid project key: '{}'", key)
            }
        }
    }
}

/// Validates loaded settings, collecting every problem found
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.username().trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }

    if settings.base_url().trim().is_empty() {
        errors.push(ValidationError::EmptyBaseUrl);
    }

    if !settings.has_app_password() {
        errors.push(ValidationError::MissingAppPassword(
            crate::constants::config::APP_PASSWORD_ENV.to_string(),
        ));
    }

    if let Some(project) = settings.project()
        && (project.trim().is_empty() || project.contains('/'))
    {
        errors.push(ValidationError::InvalidProjectKey(project.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Converts a list of validation errors into a single anyhow error
pub fn validation_errors_to_anyhow(errors: Vec<ValidationError>) -> anyhow::Error {
    let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    anyhow!("Validation errors: {}", error_messages.join("; "))
}
