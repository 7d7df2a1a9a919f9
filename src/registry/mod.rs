//! Channel registry
//!
//! The registry owns every channel and is the only entry point for the
//! configuration and snapshot interfaces.
//!
//! # Architecture
//!
//! ```text
//!                       Arc<ChannelRegistry>
//!              ┌──────────────────────────────────┐
//!              │ view: RwLock<ViewState {         │
//!              │   window_size, cursor }>         │
//!              │ channels: BTreeMap<ChannelKey,   │
//!              │   ChannelEntry {                 │
//!              │     buffer, receiver, stats,     │
//!              │     endpoint, color, visible,    │
//!              │   }                              │
//!              │ >                                │
//!              └────────────────┬─────────────────┘
//!                               │
//!        ┌──────────────────────┼──────────────────────┐
//!        │                      │                      │
//!        ▼                      ▼                      ▼
//!   [Receiver CH0-1]      [Receiver CH1-1]     [refresh task]
//!   TCP → extend()        TCP → extend()       refresh() → RefreshFrame
//!        │                      │                      │
//!        └──► buffer ◄──────────┴──► buffer ◄──────────┘
//! ```
//!
//! Each buffer has exactly one writer (its receiver) and one reader (the
//! refresh loop). Restarting a channel stops the old receiver and waits for
//! its task to exit before the new one is spawned on the same buffer.

pub mod color;
pub mod config;
pub mod entry;
pub mod error;
pub mod key;
pub mod store;

pub use color::Color;
pub use config::RegistryConfig;
pub use entry::ChannelEntry;
pub use error::RegistryError;
pub use key::{ChannelKey, Group};
pub use store::ChannelRegistry;
