//! Registry error types
//!
//! Error types for configuration-interface operations. Run-time network
//! failures never show up here.

use crate::error::ConfigError;

use super::key::{ChannelKey, Group};

/// Error type for registry operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Group already holds its maximum number of channels
    CapacityExceeded { group: Group, max: usize },
    /// No channel with this key
    ChannelNotFound(ChannelKey),
    /// Rejected configuration value
    Config(ConfigError),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::CapacityExceeded { group, max } => {
                write!(f, "Maximum of {} channels allowed in group {}", max, group)
            }
            RegistryError::ChannelNotFound(key) => write!(f, "Channel not found: {}", key),
            RegistryError::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for RegistryError {}

impl From<ConfigError> for RegistryError {
    fn from(e: ConfigError) -> Self {
        RegistryError::Config(e)
    }
}
