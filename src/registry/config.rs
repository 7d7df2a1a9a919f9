//! Registry configuration

use std::time::Duration;

use crate::client::{ReceiverConfig, RetryPolicy};
use crate::protocol::constants::*;

use super::color::Color;
use super::key::Group;

/// Configuration for the channel registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum channels per group
    pub max_channels_per_group: usize,

    /// Initial sliding-window size (W)
    pub window_size: usize,

    /// Host a new channel connects to until reconfigured
    pub default_host: String,

    /// First default port of the signal group
    pub signal_base_port: u16,

    /// First default port of the inference group
    pub inference_base_port: u16,

    /// Color a new channel is drawn in
    pub default_color: Color,

    /// Options passed to every receiver
    pub receiver: ReceiverConfig,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_channels_per_group: DEFAULT_MAX_CHANNELS,
            window_size: DEFAULT_WINDOW_SIZE,
            default_host: DEFAULT_HOST.to_string(),
            signal_base_port: SIGNAL_BASE_PORT,
            inference_base_port: INFERENCE_BASE_PORT,
            default_color: Color::default(),
            receiver: ReceiverConfig::default(),
        }
    }
}

impl RegistryConfig {
    /// Base of the default port numbering for `group`
    pub fn base_port(&self, group: Group) -> u16 {
        match group {
            Group::Signal => self.signal_base_port,
            Group::Inference => self.inference_base_port,
        }
    }

    /// Set the per-group channel limit
    pub fn max_channels_per_group(mut self, max: usize) -> Self {
        self.max_channels_per_group = max;
        self
    }

    /// Set the initial window size
    ///
    /// Checked against the accepted range by
    /// [`ChannelRegistry::with_config`](super::ChannelRegistry::with_config).
    pub fn window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the default host for new channels
    pub fn default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    /// Set the default port base of a group
    pub fn base_port_for(mut self, group: Group, port: u16) -> Self {
        match group {
            Group::Signal => self.signal_base_port = port,
            Group::Inference => self.inference_base_port = port,
        }
        self
    }

    /// Set the default color for new channels
    pub fn default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Set the delay between connection attempts
    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.receiver.retry = RetryPolicy::fixed(delay);
        self
    }

    /// Replace the receiver options
    pub fn receiver(mut self, receiver: ReceiverConfig) -> Self {
        self.receiver = receiver;
        self
    }
}
