//! Channel identity
//!
//! A channel is identified by its group and its index within the group.
//! Indices are handed out in order and never reused.

use std::fmt;

/// One of the two fixed channel groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    /// Raw sensor signal (e.g. voltage)
    Signal,
    /// Model inference output (e.g. speed)
    Inference,
}

impl Group {
    /// Both groups, in display order
    pub const ALL: [Group; 2] = [Group::Signal, Group::Inference];

    /// Position of the group in [`Group::ALL`]
    pub fn index(self) -> usize {
        match self {
            Group::Signal => 0,
            Group::Inference => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Group::Signal => "signal",
            Group::Inference => "inference",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable identifier for a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelKey {
    /// Group the channel belongs to
    pub group: Group,
    /// Index within the group, starting at 0
    pub index: usize,
}

impl ChannelKey {
    pub fn new(group: Group, index: usize) -> Self {
        Self { group, index }
    }

    /// Short label used in legends, e.g. `CH0-1`
    pub fn label(&self) -> String {
        format!("CH{}-{}", self.group.index(), self.index + 1)
    }
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.index)
    }
}
