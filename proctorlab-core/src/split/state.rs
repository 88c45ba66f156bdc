//! Per-divider split state

use serde::{Deserialize, Serialize};

use super::resizer::{MAX_SPLIT_FRACTION, MIN_SPLIT_FRACTION};

/// The persistent position of one divider.
///
/// Each divider owns exactly one `SplitState`; states are never shared
/// between panes. The fraction is the position of the divider as a
/// proportion of the container extent along the split axis and is kept
/// within [`MIN_SPLIT_FRACTION`, `MAX_SPLIT_FRACTION`] by every mutation,
/// so a pane can never fully collapse or fully dominate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitState {
    fraction: f64,
}

impl SplitState {
    /// Creates a state seeded from a caller-supplied initial fraction.
    ///
    /// Out-of-range seeds (for example from a hand-edited settings file)
    /// are clamped into the valid range.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        Self {
            fraction: fraction.clamp(MIN_SPLIT_FRACTION, MAX_SPLIT_FRACTION),
        }
    }

    /// The current divider fraction.
    #[must_use]
    pub const fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Replaces the fraction, clamping it into the valid range.
    pub fn set_fraction(&mut self, fraction: f64) {
        self.fraction = fraction.clamp(MIN_SPLIT_FRACTION, MAX_SPLIT_FRACTION);
    }
}

impl Default for SplitState {
    fn default() -> Self {
        Self::new(0.5)
    }
}
