//! Base types and traits for the command pattern

use crate::config::Settings;
use anyhow::Result;

/// Context passed to all commands containing shared configuration and options
#[derive(Clone, Debug)]
pub struct CommandContext {
    /// Settings after command line overrides were applied
    pub settings: Settings,
    /// Whether to execute operations in parallel
    pub parallel: bool,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}
