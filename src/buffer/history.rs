//! Append-only history log

/// Every sample a channel has ever received, in arrival order
///
/// The index of a sample in the log is its sequence position. Entries are
/// never removed or rewritten.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    samples: Vec<f32>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: f32) {
        self.samples.push(sample);
    }

    pub fn extend_from_slice(&mut self, samples: &[f32]) {
        self.samples.extend_from_slice(samples);
    }

    /// Total number of samples ever appended
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    /// `length` consecutive samples starting at `offset`
    ///
    /// When the log ends before `offset + length`, the available samples are
    /// returned as the suffix and the front is zero-filled, so the result is
    /// always exactly `length` long.
    pub fn slice(&self, offset: usize, length: usize) -> Vec<f32> {
        let start = offset.min(self.samples.len());
        let end = offset.saturating_add(length).min(self.samples.len());
        let available = &self.samples[start..end];

        let mut out = Vec::with_capacity(length);
        out.resize(length - available.len(), 0.0);
        out.extend_from_slice(available);
        out
    }
}
