//! Error types
//!
//! Configuration errors are returned to the caller. Connection and framing
//! errors only ever reach the receiver's retry loop.

use std::fmt;
use std::io;

use crate::protocol::constants::{MAX_WINDOW_SIZE, MIN_WINDOW_SIZE, SAMPLE_SIZE};
use crate::registry::RegistryError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug)]
pub enum Error {
    /// Connect refused, peer reset, read failure
    Connection(io::Error),
    /// A read ended part-way through a frame
    Framing(FramingError),
    /// Invalid configuration value
    Config(ConfigError),
    /// Registry operation failed
    Registry(RegistryError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Connection(e) => write!(f, "Connection error: {}", e),
            Error::Framing(e) => write!(f, "Framing error: {}", e),
            Error::Config(e) => write!(f, "Config error: {}", e),
            Error::Registry(e) => write!(f, "Registry error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Connection(e) => Some(e),
            Error::Framing(e) => Some(e),
            Error::Config(e) => Some(e),
            Error::Registry(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Connection(e)
    }
}

impl From<FramingError> for Error {
    fn from(e: FramingError) -> Self {
        Error::Framing(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RegistryError> for Error {
    fn from(e: RegistryError) -> Self {
        Error::Registry(e)
    }
}

/// A payload that is not exactly one sample long
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramingError {
    /// Number of bytes actually received
    pub len: usize,
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} bytes per frame, got {}",
            SAMPLE_SIZE, self.len
        )
    }
}

impl std::error::Error for FramingError {}

/// Invalid channel or view configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host is empty or contains whitespace
    InvalidHost(String),
    /// Port is zero or not a number
    InvalidPort(String),
    /// Endpoint string is not `host:port`
    InvalidEndpoint(String),
    /// Color is neither `#rrggbb` nor a known name
    InvalidColor(String),
    /// Window size outside the accepted range
    WindowSizeOutOfRange(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidHost(h) => write!(f, "invalid host: {:?}", h),
            ConfigError::InvalidPort(p) => write!(f, "invalid port: {:?}", p),
            ConfigError::InvalidEndpoint(s) => write!(f, "invalid endpoint: {:?}", s),
            ConfigError::InvalidColor(c) => write!(f, "invalid color: {:?}", c),
            ConfigError::WindowSizeOutOfRange(w) => write!(
                f,
                "window size {} outside {}..={}",
                w, MIN_WINDOW_SIZE, MAX_WINDOW_SIZE
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
