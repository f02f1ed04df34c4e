//! Command argument validation utilities
//!
//! Validation that goes beyond what clap checks while parsing.

use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

fn invalid(argument: &str, value: &str, reason: &str) -> anyhow::Error {
    validation_error_to_anyhow(CommandValidationError::InvalidValue {
        argument: argument.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    })
}

/// Validate a branch name against basic Git naming rules
pub fn validate_branch_name(argument: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid(
            argument,
            name,
            "branch name cannot be empty or whitespace only",
        ));
    }

    if name.starts_with('-') || name.ends_with('.') || name.contains("..") {
        return Err(invalid(argument, name, "invalid Git branch name format"));
    }

    Ok(())
}

/// Validate output directory path
pub fn validate_output_directory(output_dir: &str) -> Result<()> {
    if output_dir.trim().is_empty() {
        return Err(invalid(
            "output-dir",
            output_dir,
            "output directory cannot be empty or whitespace only",
        ));
    }
    Ok(())
}

/// Validate a project key given on the command line
pub fn validate_project_key(project: &Option<String>) -> Result<()> {
    if let Some(key) = project
        && (key.trim().is_empty() || key.contains('/'))
    {
        return Err(invalid(
            "project",
            key,
            "project key cannot be empty or contain '/'",
        ));
    }
    Ok(())
}
