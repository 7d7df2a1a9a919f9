//! Per-channel TCP receiver
//!
//! Each channel runs one receiver task:
//!
//! ```text
//!   ┌──────────► connect ──fail──────────────┐
//!   │               │                        │
//!   │               ▼                        ▼
//!   │        read frames ──close/error──► sleep(retry delay)
//!   │               │                        │
//!   │               ▼                        │
//!   │      buffer.extend(batch)              │
//!   └────────────────────────────────────────┘
//! ```
//!
//! The loop runs until [`ChannelReceiver::stop`] cancels it. Cancellation
//! interrupts connect, read and the retry sleep alike, and dropping the
//! in-flight session closes the socket. `stop` waits for the task to exit, so
//! once it returns no stale writer is left on the buffer.

use std::sync::Arc;

use tokio::net::TcpStream;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::buffer::SharedBuffer;
use crate::error::{Error, Result};
use crate::protocol::codec::{ReadOutcome, SampleReader};
use crate::registry::ChannelKey;
use crate::stats::ReceiverStats;

use super::config::{Endpoint, ReceiverConfig};
use super::retry::AttemptEnd;

/// How a connected session ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Peer closed the connection on a frame boundary
    Closed,
}

/// Handle to a running receiver task
pub struct ChannelReceiver {
    key: ChannelKey,
    endpoint: Endpoint,
    cancel: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ChannelReceiver {
    /// Spawn a receiver that feeds `buffer` from `endpoint`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        key: ChannelKey,
        endpoint: Endpoint,
        buffer: SharedBuffer,
        stats: Arc<ReceiverStats>,
        config: ReceiverConfig,
    ) -> Self {
        let cancel = CancellationToken::new();

        let task = ReceiverTask {
            key,
            endpoint: endpoint.clone(),
            buffer,
            stats,
            config,
            cancel: cancel.clone(),
        };
        let handle = tokio::spawn(task.run());

        Self {
            key,
            endpoint,
            cancel,
            handle: Some(handle),
        }
    }

    pub fn key(&self) -> ChannelKey {
        self.key
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Whether the task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stop the receiver and wait until its task has exited
    pub async fn stop(mut self) {
        self.cancel.cancel();

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                tracing::warn!(
                    channel = %self.key,
                    error = %e,
                    "Receiver task did not exit cleanly"
                );
            }
        }
    }
}

impl Drop for ChannelReceiver {
    fn drop(&mut self) {
        // A handle dropped without stop() must not leave a writer behind
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for ChannelReceiver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelReceiver")
            .field("key", &self.key)
            .field("endpoint", &self.endpoint)
            .field("finished", &self.is_finished())
            .finish()
    }
}

struct ReceiverTask {
    key: ChannelKey,
    endpoint: Endpoint,
    buffer: SharedBuffer,
    stats: Arc<ReceiverStats>,
    config: ReceiverConfig,
    cancel: CancellationToken,
}

impl ReceiverTask {
    async fn run(self) {
        tracing::info!(
            channel = %self.key,
            endpoint = %self.endpoint,
            "Receiver started"
        );

        loop {
            self.stats.record_attempt();

            let result = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                result = self.session() => result,
            };
            self.stats.record_disconnected();

            let end = match &result {
                Ok(SessionEnd::Closed) => {
                    tracing::debug!(channel = %self.key, "Peer closed connection");
                    AttemptEnd::Closed
                }
                Err(e @ Error::Framing(_)) => {
                    self.stats.record_framing_error();
                    tracing::warn!(channel = %self.key, error = %e, "Dropping connection");
                    AttemptEnd::Failed(e)
                }
                Err(e) => {
                    tracing::debug!(
                        channel = %self.key,
                        endpoint = %self.endpoint,
                        error = %e,
                        "Connection attempt failed"
                    );
                    AttemptEnd::Failed(e)
                }
            };

            let delay = self.config.retry.delay_after(end);
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        self.stats.record_disconnected();
        tracing::info!(channel = %self.key, "Receiver stopped");
    }

    /// One connection attempt, from connect until close or error
    async fn session(&self) -> Result<SessionEnd> {
        let socket = TcpStream::connect((self.endpoint.host(), self.endpoint.port())).await?;
        if self.config.tcp_nodelay {
            socket.set_nodelay(true)?;
        }

        self.stats.record_connected();
        tracing::debug!(
            channel = %self.key,
            endpoint = %self.endpoint,
            "Connected"
        );

        let mut reader = SampleReader::with_capacity(socket, self.config.read_buffer_size);
        let mut batch = Vec::new();

        loop {
            batch.clear();
            match reader.read_batch(&mut batch).await? {
                ReadOutcome::Closed => return Ok(SessionEnd::Closed),
                ReadOutcome::Samples(n) => {
                    self.buffer.write().await.extend(&batch);
                    self.stats.record_samples(n);
                }
            }
        }
    }
}
