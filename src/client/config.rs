//! Receiver configuration

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::protocol::constants::DEFAULT_READ_BUFFER_SIZE;

use super::retry::RetryPolicy;

/// Validated network endpoint of a channel
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create an endpoint, rejecting an empty or malformed host and port 0
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ConfigError> {
        let host = host.into();
        let trimmed = host.trim();
        if !is_valid_host(trimmed) {
            return Err(ConfigError::InvalidHost(host));
        }
        if port == 0 {
            return Err(ConfigError::InvalidPort(port.to_string()));
        }
        Ok(Self {
            host: trimmed.to_string(),
            port,
        })
    }

    /// Create an endpoint from a host and a textual port, as typed by a user
    pub fn parse(host: &str, port: &str) -> Result<Self, ConfigError> {
        let port_num = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        Self::new(host, port_num)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    /// Parse `host:port` or `[v6addr]:port`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::InvalidEndpoint(s.to_string()))?;
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        Self::parse(host, port)
    }
}

fn is_valid_host(host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    host.parse::<IpAddr>().is_ok()
        || host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

/// Receiver options shared by every channel
#[derive(Debug, Clone)]
pub struct ReceiverConfig {
    /// Delay policy between connection attempts
    pub retry: RetryPolicy,

    /// Enable TCP_NODELAY on the data socket
    pub tcp_nodelay: bool,

    /// Application-level read buffer size
    pub read_buffer_size: usize,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            tcp_nodelay: true,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}

impl ReceiverConfig {
    /// Set the retry policy
    pub fn retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Enable or disable TCP_NODELAY
    pub fn tcp_nodelay(mut self, enabled: bool) -> Self {
        self.tcp_nodelay = enabled;
        self
    }

    /// Set the read buffer size
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }
}
