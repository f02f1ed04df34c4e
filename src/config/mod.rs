//! Configuration management module

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::Config;
pub use settings::Settings;
pub use validation::ValidationError;
