//! Channel registry implementation
//!
//! The central registry that owns every channel, its buffer and its
//! receiver, and serves both the configuration and the snapshot interface.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};

use crate::buffer::ChannelBuffer;
use crate::client::{ChannelReceiver, Endpoint};
use crate::error::ConfigError;
use crate::view::{validate_window_size, RefreshFrame, Snapshot, ViewState};

use super::color::Color;
use super::config::RegistryConfig;
use super::entry::ChannelEntry;
use super::error::RegistryError;
use super::key::{ChannelKey, Group};

type ChannelMap = BTreeMap<ChannelKey, Arc<RwLock<ChannelEntry>>>;

/// Central registry for all channels
///
/// Locks are always taken in the order view → channel map → entry → buffer.
/// Receivers only ever take their own buffer lock.
pub struct ChannelRegistry {
    /// Window size and history cursor, shared by every channel
    view: RwLock<ViewState>,

    /// Every channel, ordered by group then index
    channels: RwLock<ChannelMap>,

    /// Configuration
    config: RegistryConfig,
}

impl ChannelRegistry {
    /// Create a new registry with default configuration
    pub fn new() -> Self {
        Self::build(RegistryConfig::default())
    }

    /// Create a new registry with custom configuration
    ///
    /// Fails with [`ConfigError::WindowSizeOutOfRange`] when the initial
    /// window size is outside the accepted range.
    pub fn with_config(config: RegistryConfig) -> Result<Self, RegistryError> {
        validate_window_size(config.window_size)?;
        Ok(Self::build(config))
    }

    fn build(config: RegistryConfig) -> Self {
        Self {
            view: RwLock::new(ViewState::new(config.window_size)),
            channels: RwLock::new(BTreeMap::new()),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Add a channel to `group` and start its receiver
    ///
    /// The channel connects to the default host on
    /// `base_port(group) + index`. Fails without touching existing channels
    /// when the group is full.
    pub async fn add_channel(&self, group: Group) -> Result<ChannelKey, RegistryError> {
        let view = self.view.read().await;
        let mut channels = self.channels.write().await;

        let index = channels.keys().filter(|k| k.group == group).count();
        let max = self.config.max_channels_per_group;
        if index >= max {
            tracing::warn!(group = %group, max = max, "Channel rejected: group is full");
            return Err(RegistryError::CapacityExceeded { group, max });
        }

        let base = self.config.base_port(group);
        let port = u16::try_from(index)
            .ok()
            .and_then(|i| base.checked_add(i))
            .ok_or_else(|| ConfigError::InvalidPort(format!("{}+{}", base, index)))?;
        let endpoint = Endpoint::new(self.config.default_host.clone(), port)?;

        let key = ChannelKey::new(group, index);
        let buffer = ChannelBuffer::shared(view.window_size());
        let mut entry = ChannelEntry::new(key, endpoint, self.config.default_color, buffer);
        entry.receiver = Some(self.spawn_receiver(&entry));

        tracing::info!(
            channel = %key,
            endpoint = %entry.endpoint,
            window_size = view.window_size(),
            "Channel added"
        );

        channels.insert(key, Arc::new(RwLock::new(entry)));
        Ok(key)
    }

    /// Point a channel at a new endpoint
    ///
    /// The current receiver is stopped, and its task has exited, before the
    /// replacement starts on the same buffer.
    pub async fn configure_channel(
        &self,
        key: ChannelKey,
        endpoint: Endpoint,
    ) -> Result<(), RegistryError> {
        let entry_arc = self.entry(key).await?;
        let mut entry = entry_arc.write().await;

        if let Some(receiver) = entry.receiver.take() {
            receiver.stop().await;
        }

        tracing::info!(
            channel = %key,
            from = %entry.endpoint,
            to = %endpoint,
            "Channel reconfigured"
        );

        entry.endpoint = endpoint;
        entry.receiver = Some(self.spawn_receiver(&entry));
        Ok(())
    }

    /// Force a fresh connection on the current endpoint
    pub async fn restart_channel(&self, key: ChannelKey) -> Result<(), RegistryError> {
        let entry_arc = self.entry(key).await?;
        let mut entry = entry_arc.write().await;

        if let Some(receiver) = entry.receiver.take() {
            receiver.stop().await;
        }
        entry.receiver = Some(self.spawn_receiver(&entry));

        tracing::info!(channel = %key, endpoint = %entry.endpoint, "Channel restarted");
        Ok(())
    }

    /// Stop a channel's receiver; its buffer and settings are kept
    pub async fn stop_channel(&self, key: ChannelKey) -> Result<(), RegistryError> {
        let entry_arc = self.entry(key).await?;
        let mut entry = entry_arc.write().await;

        if let Some(receiver) = entry.receiver.take() {
            receiver.stop().await;
            tracing::info!(channel = %key, "Channel stopped");
        }
        Ok(())
    }

    /// Change W for every channel at once
    pub async fn set_window_size(&self, window_size: usize) -> Result<(), RegistryError> {
        let window_size = validate_window_size(window_size)?;

        let mut view = self.view.write().await;
        let channels = self.channels.read().await;

        let mut max_history_len = 0;
        for entry_arc in channels.values() {
            let entry = entry_arc.read().await;
            let mut buffer = entry.buffer.write().await;
            buffer.resize(window_size);
            max_history_len = max_history_len.max(buffer.history_len());
        }
        view.set_window_size(window_size, max_history_len);

        tracing::debug!(
            window_size = window_size,
            channels = channels.len(),
            "Window resized"
        );
        Ok(())
    }

    /// Show or hide a channel
    pub async fn set_visibility(&self, key: ChannelKey, visible: bool) -> Result<(), RegistryError> {
        let entry_arc = self.entry(key).await?;
        entry_arc.write().await.visible = visible;
        Ok(())
    }

    /// Change a channel's line color
    pub async fn set_color(&self, key: ChannelKey, color: Color) -> Result<(), RegistryError> {
        let entry_arc = self.entry(key).await?;
        entry_arc.write().await.color = color;
        Ok(())
    }

    /// Current snapshot of one channel
    pub async fn snapshot(&self, key: ChannelKey) -> Result<Snapshot, RegistryError> {
        let view = self.view.read().await;
        let channels = self.channels.read().await;

        let entry_arc = channels
            .get(&key)
            .ok_or(RegistryError::ChannelNotFound(key))?;
        let entry = entry_arc.read().await;
        Ok(capture(&entry, &view).await)
    }

    /// Snapshot every channel under one consistent view
    pub async fn refresh(&self) -> RefreshFrame {
        let view = self.view.read().await;
        let channels = self.channels.read().await;

        let max_history_len = max_history_len(&channels).await;
        let mut snapshots = Vec::with_capacity(channels.len());
        for entry_arc in channels.values() {
            let entry = entry_arc.read().await;
            snapshots.push(capture(&entry, &view).await);
        }

        let cursor = view.cursor();
        RefreshFrame {
            mode: cursor.mode(),
            window_size: view.window_size(),
            offset: cursor.is_history().then(|| cursor.offset()),
            history_range: view.history_range(max_history_len),
            channels: snapshots,
        }
    }

    /// Valid scrub range `(0, max_offset)`, recomputed from current history
    pub async fn history_range(&self) -> (usize, usize) {
        let view = self.view.read().await;
        let channels = self.channels.read().await;
        view.history_range(max_history_len(&channels).await)
    }

    pub async fn is_history_mode(&self) -> bool {
        self.view.read().await.cursor().is_history()
    }

    /// Current cursor offset, if in history mode
    pub async fn history_offset(&self) -> Option<usize> {
        let view = self.view.read().await;
        let cursor = view.cursor();
        cursor.is_history().then(|| cursor.offset())
    }

    /// Resume the live view
    pub async fn enter_live(&self) {
        if self.view.write().await.enter_live() {
            tracing::debug!("Entered live mode");
        }
    }

    /// Freeze the view on the most recent window
    ///
    /// Returns the frozen offset.
    pub async fn enter_history(&self) -> usize {
        let mut view = self.view.write().await;
        let channels = self.channels.read().await;

        if view.enter_history(max_history_len(&channels).await) {
            tracing::debug!(offset = view.cursor().offset(), "Entered history mode");
        }
        view.cursor().offset()
    }

    /// Move the history cursor, clamped to the valid range
    ///
    /// Ignored in live mode (returns None).
    pub async fn scrub_to(&self, offset: usize) -> Option<usize> {
        let mut view = self.view.write().await;
        let channels = self.channels.read().await;
        view.scrub(offset, max_history_len(&channels).await)
    }

    /// Current window size (W)
    pub async fn window_size(&self) -> usize {
        self.view.read().await.window_size()
    }

    /// Keys of every channel, ordered by group then index
    pub async fn channel_keys(&self) -> Vec<ChannelKey> {
        self.channels.read().await.keys().copied().collect()
    }

    /// Number of channels in `group`
    pub async fn channel_count(&self, group: Group) -> usize {
        self.channels
            .read()
            .await
            .keys()
            .filter(|k| k.group == group)
            .count()
    }

    /// Whether the channel's receiver is running
    pub async fn is_running(&self, key: ChannelKey) -> Result<bool, RegistryError> {
        let entry_arc = self.entry(key).await?;
        let running = entry_arc.read().await.is_running();
        Ok(running)
    }

    /// Endpoint the channel connects to
    pub async fn endpoint(&self, key: ChannelKey) -> Result<Endpoint, RegistryError> {
        let entry_arc = self.entry(key).await?;
        let endpoint = entry_arc.read().await.endpoint.clone();
        Ok(endpoint)
    }

    /// Stop every receiver and wait for each to exit
    pub async fn shutdown(&self) {
        let channels = self.channels.read().await;

        for entry_arc in channels.values() {
            let mut entry = entry_arc.write().await;
            if let Some(receiver) = entry.receiver.take() {
                receiver.stop().await;
            }
        }

        tracing::info!(channels = channels.len(), "Registry shut down");
    }

    /// Spawn a task that calls [`refresh`](Self::refresh) every `period`
    ///
    /// Frames are delivered to the single consumer through the returned
    /// channel. The task ends when the receiver is dropped.
    pub fn spawn_refresh_task(
        self: &Arc<Self>,
        period: Duration,
    ) -> (tokio::task::JoinHandle<()>, mpsc::Receiver<RefreshFrame>) {
        let registry = Arc::clone(self);
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let frame = registry.refresh().await;
                if tx.send(frame).await.is_err() {
                    tracing::debug!("Refresh consumer gone, stopping refresh task");
                    break;
                }
            }
        });

        (handle, rx)
    }

    async fn entry(&self, key: ChannelKey) -> Result<Arc<RwLock<ChannelEntry>>, RegistryError> {
        self.channels
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or(RegistryError::ChannelNotFound(key))
    }

    fn spawn_receiver(&self, entry: &ChannelEntry) -> ChannelReceiver {
        ChannelReceiver::spawn(
            entry.key,
            entry.endpoint.clone(),
            Arc::clone(&entry.buffer),
            Arc::clone(&entry.stats),
            self.config.receiver.clone(),
        )
    }
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Longest history log across all channels
async fn max_history_len(channels: &ChannelMap) -> usize {
    let mut max = 0;
    for entry_arc in channels.values() {
        let entry = entry_arc.read().await;
        let len = entry.buffer.read().await.history_len();
        max = max.max(len);
    }
    max
}

async fn capture(entry: &ChannelEntry, view: &ViewState) -> Snapshot {
    let buffer = entry.buffer.read().await;
    let health = entry.stats.health(buffer.last_append_at());
    Snapshot::capture(entry.key, entry.visible, entry.color, &buffer, view, health)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use crate::view::ViewMode;

    /// Default endpoints point at closed loopback ports
    fn test_config() -> RegistryConfig {
        RegistryConfig::default()
            .default_host("127.0.0.1")
            .base_port_for(Group::Signal, 1)
            .base_port_for(Group::Inference, 3)
            .retry_delay(Duration::from_millis(20))
            .window_size(3)
    }

    async fn append(registry: &ChannelRegistry, key: ChannelKey, samples: &[f32]) {
        let entry_arc = registry.entry(key).await.unwrap();
        let entry = entry_arc.read().await;
        entry.buffer.write().await.extend(samples);
    }

    fn range(from: usize, to: usize) -> Vec<f32> {
        (from..to).map(|v| v as f32).collect()
    }

    #[tokio::test]
    async fn test_add_channel_assigns_index_and_port() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();

        let a = registry.add_channel(Group::Signal).await.unwrap();
        let b = registry.add_channel(Group::Signal).await.unwrap();
        let c = registry.add_channel(Group::Inference).await.unwrap();

        assert_eq!(a, ChannelKey::new(Group::Signal, 0));
        assert_eq!(b, ChannelKey::new(Group::Signal, 1));
        assert_eq!(c, ChannelKey::new(Group::Inference, 0));

        assert_eq!(registry.endpoint(a).await.unwrap().port(), 1);
        assert_eq!(registry.endpoint(b).await.unwrap().port(), 2);
        assert_eq!(registry.endpoint(c).await.unwrap().port(), 3);
        assert!(registry.is_running(a).await.unwrap());

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_capacity_exceeded_leaves_channels_untouched() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let a = registry.add_channel(Group::Signal).await.unwrap();
        let b = registry.add_channel(Group::Signal).await.unwrap();
        append(&registry, a, &[1.0, 2.0]).await;

        let result = registry.add_channel(Group::Signal).await;
        assert_eq!(
            result,
            Err(RegistryError::CapacityExceeded {
                group: Group::Signal,
                max: 2
            })
        );

        assert_eq!(registry.channel_count(Group::Signal).await, 2);
        assert_eq!(registry.channel_keys().await, vec![a, b]);
        assert_eq!(
            registry.snapshot(a).await.unwrap().points,
            vec![0.0, 1.0, 2.0]
        );
        assert!(registry.is_running(b).await.unwrap());

        // Other group still has room
        assert!(registry.add_channel(Group::Inference).await.is_ok());

        registry.shutdown().await;
    }

    #[test]
    fn test_with_config_rejects_out_of_range_window() {
        assert!(matches!(
            ChannelRegistry::with_config(test_config().window_size(0)),
            Err(RegistryError::Config(ConfigError::WindowSizeOutOfRange(0)))
        ));
        assert!(matches!(
            ChannelRegistry::with_config(test_config().window_size(100_000_001)),
            Err(RegistryError::Config(ConfigError::WindowSizeOutOfRange(
                100_000_001
            )))
        ));
        assert!(ChannelRegistry::with_config(test_config().window_size(1)).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_default_host_starts_nothing() {
        let registry =
            ChannelRegistry::with_config(test_config().default_host("not a host")).unwrap();

        let result = registry.add_channel(Group::Signal).await;
        assert!(matches!(
            result,
            Err(RegistryError::Config(ConfigError::InvalidHost(_)))
        ));
        assert_eq!(registry.channel_count(Group::Signal).await, 0);
    }

    #[tokio::test]
    async fn test_unknown_channel() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let key = ChannelKey::new(Group::Inference, 1);
        let endpoint = Endpoint::new("127.0.0.1", 9).unwrap();

        assert_eq!(
            registry.configure_channel(key, endpoint).await,
            Err(RegistryError::ChannelNotFound(key))
        );
        assert!(registry.snapshot(key).await.is_err());
        assert!(registry.set_visibility(key, false).await.is_err());
    }

    #[tokio::test]
    async fn test_window_size_bounds() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();

        assert_eq!(
            registry.set_window_size(0).await,
            Err(RegistryError::Config(ConfigError::WindowSizeOutOfRange(0)))
        );
        assert!(registry.set_window_size(100_000_001).await.is_err());
        assert_eq!(registry.window_size().await, 3);
    }

    #[tokio::test]
    async fn test_resize_applies_to_every_channel() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let a = registry.add_channel(Group::Signal).await.unwrap();
        let b = registry.add_channel(Group::Inference).await.unwrap();
        append(&registry, a, &[1.0, 2.0, 3.0]).await;
        append(&registry, b, &[1.0, 2.0, 3.0, 4.0, 5.0]).await;

        registry.set_window_size(5).await.unwrap();
        assert_eq!(
            registry.snapshot(a).await.unwrap().points,
            vec![0.0, 0.0, 1.0, 2.0, 3.0]
        );
        assert_eq!(
            registry.snapshot(b).await.unwrap().points,
            vec![0.0, 0.0, 3.0, 4.0, 5.0]
        );

        registry.set_window_size(2).await.unwrap();
        assert_eq!(registry.snapshot(b).await.unwrap().points, vec![4.0, 5.0]);

        // Channels added later start at the current size
        let c = registry.add_channel(Group::Signal).await.unwrap();
        assert_eq!(registry.snapshot(c).await.unwrap().points.len(), 2);

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_history_mode_freezes_view() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let a = registry.add_channel(Group::Signal).await.unwrap();
        let b = registry.add_channel(Group::Inference).await.unwrap();
        append(&registry, a, &range(0, 10)).await;
        append(&registry, b, &range(0, 5)).await;

        assert!(!registry.is_history_mode().await);
        assert_eq!(registry.history_range().await, (0, 7));

        let offset = registry.enter_history().await;
        assert_eq!(offset, 7);
        assert!(registry.is_history_mode().await);
        assert_eq!(
            registry.snapshot(a).await.unwrap().points,
            vec![7.0, 8.0, 9.0]
        );
        // Shorter channel is padded
        assert_eq!(registry.snapshot(b).await.unwrap().points, vec![0.0, 0.0, 0.0]);

        // Data keeps arriving while frozen
        append(&registry, a, &range(10, 15)).await;
        assert_eq!(registry.history_range().await, (0, 12));
        assert_eq!(registry.history_offset().await, Some(7));
        assert_eq!(
            registry.snapshot(a).await.unwrap().points,
            vec![7.0, 8.0, 9.0]
        );

        // Scrub past the end clamps to the range
        assert_eq!(registry.scrub_to(1_000).await, Some(12));
        assert_eq!(
            registry.snapshot(a).await.unwrap().points,
            vec![12.0, 13.0, 14.0]
        );
        assert_eq!(registry.scrub_to(2).await, Some(2));
        let snap = registry.snapshot(b).await.unwrap();
        assert_eq!(snap.points, vec![2.0, 3.0, 4.0]);
        assert_eq!(snap.stats.min, 2.0);
        assert_eq!(snap.stats.max, 4.0);
        assert_eq!(snap.stats.avg, 3.0);
        assert_eq!(snap.stats.last, 4.0);

        registry.enter_live().await;
        assert!(!registry.is_history_mode().await);
        assert_eq!(registry.scrub_to(0).await, None);
        assert_eq!(
            registry.snapshot(a).await.unwrap().points,
            vec![12.0, 13.0, 14.0]
        );

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_resize_in_history_mode_clamps_offset() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let a = registry.add_channel(Group::Signal).await.unwrap();
        append(&registry, a, &range(0, 10)).await;

        assert_eq!(registry.enter_history().await, 7);
        registry.set_window_size(8).await.unwrap();

        assert_eq!(registry.history_offset().await, Some(2));
        assert_eq!(registry.history_range().await, (0, 2));
        assert_eq!(registry.snapshot(a).await.unwrap().points, range(2, 10));

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_visibility_and_color() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let a = registry.add_channel(Group::Signal).await.unwrap();

        let snap = registry.snapshot(a).await.unwrap();
        assert!(snap.visible);
        assert_eq!(snap.color, Color::YELLOW);

        registry.set_visibility(a, false).await.unwrap();
        registry.set_color(a, Color::rgb(0, 0, 255)).await.unwrap();

        let snap = registry.snapshot(a).await.unwrap();
        assert!(!snap.visible);
        assert_eq!(snap.color, Color::rgb(0, 0, 255));

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_refresh_frame_is_consistent() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let a = registry.add_channel(Group::Inference).await.unwrap();
        let b = registry.add_channel(Group::Signal).await.unwrap();
        append(&registry, a, &range(0, 6)).await;
        append(&registry, b, &range(0, 4)).await;

        let frame = registry.refresh().await;
        assert_eq!(frame.mode, ViewMode::Live);
        assert_eq!(frame.window_size, 3);
        assert_eq!(frame.offset, None);
        assert_eq!(frame.history_range, (0, 3));
        // Ordered by group, then index
        assert_eq!(frame.channels[0].key, b);
        assert_eq!(frame.channels[1].key, a);
        assert!(frame.channels.iter().all(|s| s.points.len() == 3));

        registry.enter_history().await;
        let frame = registry.refresh().await;
        assert!(frame.is_history_mode());
        assert_eq!(frame.offset, Some(3));
        assert_eq!(frame.channel(a).unwrap().points, vec![3.0, 4.0, 5.0]);
        assert_eq!(frame.channel(b).unwrap().points, vec![0.0, 0.0, 3.0]);

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_refresh_task_delivers_frames() {
        let registry = Arc::new(ChannelRegistry::with_config(test_config()).unwrap());
        registry.add_channel(Group::Signal).await.unwrap();

        let (handle, mut frames) = registry.spawn_refresh_task(Duration::from_millis(10));
        for _ in 0..3 {
            let frame = tokio::time::timeout(Duration::from_secs(5), frames.recv())
                .await
                .expect("no refresh frame")
                .expect("refresh task ended");
            assert_eq!(frame.channels.len(), 1);
        }

        drop(frames);
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("refresh task did not stop")
            .unwrap();

        registry.shutdown().await;
    }

    #[tokio::test]
    async fn test_configure_channel_switches_source() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let key = registry.add_channel(Group::Signal).await.unwrap();

        let first = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let first_addr = first.local_addr().unwrap();
        let second = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let second_addr = second.local_addr().unwrap();

        let endpoint = Endpoint::new("127.0.0.1", first_addr.port()).unwrap();
        registry.configure_channel(key, endpoint).await.unwrap();

        let (mut old_socket, _) = first.accept().await.unwrap();
        old_socket
            .write_all(&1.0f32.to_le_bytes())
            .await
            .unwrap();

        tokio::time::timeout(Duration::from_secs(5), async {
            while registry.snapshot(key).await.unwrap().stats.last != 1.0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("first source never delivered");

        let endpoint = Endpoint::new("127.0.0.1", second_addr.port()).unwrap();
        registry.configure_channel(key, endpoint.clone()).await.unwrap();
        assert_eq!(registry.endpoint(key).await.unwrap(), endpoint);

        // The superseded receiver closed its socket
        let mut buf = [0u8; 1];
        let n = tokio::time::timeout(Duration::from_secs(5), old_socket.read(&mut buf))
            .await
            .expect("old connection still open")
            .unwrap_or(0);
        assert_eq!(n, 0);

        let (mut new_socket, _) = second.accept().await.unwrap();
        new_socket
            .write_all(&2.0f32.to_le_bytes())
            .await
            .unwrap();

        tokio::time::timeout(Duration::from_secs(5), async {
            while registry.snapshot(key).await.unwrap().stats.last != 2.0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("second source never delivered");

        // Same buffer across the restart
        let snap = registry.snapshot(key).await.unwrap();
        assert_eq!(snap.points, vec![0.0, 1.0, 2.0]);
        assert!(snap.health.connected);
        assert_eq!(snap.health.samples_received, 2);

        registry.shutdown().await;
        assert!(!registry.is_running(key).await.unwrap());
    }

    #[tokio::test]
    async fn test_stop_and_restart_channel() {
        let registry = ChannelRegistry::with_config(test_config()).unwrap();
        let key = registry.add_channel(Group::Inference).await.unwrap();

        registry.stop_channel(key).await.unwrap();
        assert!(!registry.is_running(key).await.unwrap());

        registry.restart_channel(key).await.unwrap();
        assert!(registry.is_running(key).await.unwrap());

        registry.shutdown().await;
    }
}
