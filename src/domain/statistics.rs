// ============================================================================
// History Statistics
// Aggregate view over the retained history entries
// ============================================================================

use super::HistoryEntry;
use crate::numeric::Number;
use std::cmp::Ordering;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Aggregates over the retained entries of a history.
///
/// The numeric aggregates are `None` when no entries are retained, so an
/// empty history is distinguishable from one whose results average to zero.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryStatistics {
    /// Number of retained entries
    pub total_operations: usize,

    /// Occurrences of each operation label among retained entries
    pub operation_types: HashMap<String, usize>,

    /// Arithmetic mean of all results
    pub average_result: Option<f64>,

    /// Largest result
    pub max_result: Option<Number>,

    /// Smallest result
    pub min_result: Option<Number>,
}

impl HistoryStatistics {
    /// Compute statistics in a single pass over `entries`.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a HistoryEntry>,
    {
        let mut stats = Self::default();
        // Integer results are summed exactly, floats separately
        let mut int_sum: i128 = 0;
        let mut float_sum = 0.0_f64;

        for entry in entries {
            let result = entry.result();
            stats.total_operations += 1;
            match result {
                Number::Int(v) => int_sum += i128::from(v),
                Number::Float(v) => float_sum += v,
            }

            *stats
                .operation_types
                .entry(entry.operation().to_string())
                .or_insert(0) += 1;

            // Incomparable values (NaN) never replace the current extreme
            stats.max_result = match stats.max_result {
                Some(max) if result.partial_cmp(&max) != Some(Ordering::Greater) => Some(max),
                _ => Some(result),
            };
            stats.min_result = match stats.min_result {
                Some(min) if result.partial_cmp(&min) != Some(Ordering::Less) => Some(min),
                _ => Some(result),
            };
        }

        if stats.total_operations > 0 {
            let sum = int_sum as f64 + float_sum;
            stats.average_result = Some(sum / stats.total_operations as f64);
        }

        stats
    }

    /// Occurrences of `operation`, zero when absent
    pub fn operation_count(&self, operation: &str) -> usize {
        self.operation_types.get(operation).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total_operations == 0
    }
}
