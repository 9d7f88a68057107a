// ============================================================================
// History Configuration
// Capacity and retrieval defaults for the operation history
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of entries a history retains
pub const DEFAULT_MAX_SIZE: usize = 100;

/// Default number of entries returned by a "recent history" query
pub const DEFAULT_RECENT_COUNT: usize = 10;

/// Configuration for an operation history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistoryConfig {
    /// Maximum number of retained entries; the oldest is evicted first.
    /// Zero means nothing is ever retained.
    pub max_size: usize,

    /// Count used by recent-history queries when the caller gives none
    pub default_recent_count: usize,
}

impl HistoryConfig {
    /// Create a configuration with the given capacity
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    /// Builder method: Set maximum history size
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    /// Builder method: Set default recent-history count
    pub fn with_default_recent_count(mut self, count: usize) -> Self {
        self.default_recent_count = count;
        self
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            default_recent_count: DEFAULT_RECENT_COUNT,
        }
    }
}
