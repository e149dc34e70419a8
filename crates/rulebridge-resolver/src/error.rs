//! Resolver error types

use thiserror::Error;

/// Errors raised while setting up a resolver
///
/// Lookups never fail; an unresolved name is `None`.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Failed to read a configuration file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}
