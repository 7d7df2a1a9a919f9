//! Window statistics
//!
//! Pure functions over a visible window. No locking, no timers.

/// Summary of one visible window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowStats {
    /// Smallest value
    pub min: f32,
    /// Largest value
    pub max: f32,
    /// Arithmetic mean
    pub avg: f32,
    /// Most recent (rightmost) value
    pub last: f32,
}

impl WindowStats {
    /// Compute stats over `window`
    ///
    /// Returns `None` for an empty window. The mean is accumulated in `f64`
    /// so large windows do not lose precision.
    pub fn from_window(window: &[f32]) -> Option<Self> {
        let (&last, _) = window.split_last()?;

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        for &v in window {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
        }

        Some(Self {
            min,
            max,
            avg: (sum / window.len() as f64) as f32,
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_stats() {
        let stats = WindowStats::from_window(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 3.0);
        assert_eq!(stats.avg, 2.0);
        assert_eq!(stats.last, 3.0);
    }

    #[test]
    fn test_last_is_rightmost_not_largest() {
        let stats = WindowStats::from_window(&[5.0, -1.0, 2.0]).unwrap();
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.last, 2.0);
    }

    #[test]
    fn test_zero_padding_counts() {
        // A freshly padded window averages the zeros in
        let stats = WindowStats::from_window(&[0.0, 0.0, 4.0, 8.0]).unwrap();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.avg, 3.0);
    }

    #[test]
    fn test_single_value() {
        let stats = WindowStats::from_window(&[-7.5]).unwrap();
        assert_eq!(stats.min, -7.5);
        assert_eq!(stats.max, -7.5);
        assert_eq!(stats.avg, -7.5);
        assert_eq!(stats.last, -7.5);
    }

    #[test]
    fn test_empty_window() {
        assert!(WindowStats::from_window(&[]).is_none());
    }
}
