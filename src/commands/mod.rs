//! Command implementations for the CLI

pub mod base;
pub mod clone;
pub mod ls;
pub mod push;
pub mod validators;

pub use base::{Command, CommandContext};
pub use clone::CloneCommand;
pub use ls::ListCommand;
pub use push::PushCommand;
