// ============================================================================
// Operation History
// Bounded FIFO log of successful operations
// ============================================================================

use super::{HistoryConfig, HistoryEntry, HistoryStatistics};
use crate::numeric::Number;
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Upper bound on eager allocation, so huge capacities grow lazily
const MAX_PREALLOCATED: usize = 1024;

/// Capacity-bounded, insertion-ordered record of past operations.
///
/// Once `max_size` entries are retained, every append evicts the oldest
/// entry. Query methods return entries most-recent-first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_size: usize,
    next_sequence: u64,
    last_timestamp: Option<DateTime<Utc>>,
}

impl History {
    /// Create a history retaining at most `max_size` entries
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.min(MAX_PREALLOCATED)),
            max_size,
            next_sequence: 0,
            last_timestamp: None,
        }
    }

    pub fn with_config(config: &HistoryConfig) -> Self {
        Self::new(config.max_size)
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Append an entry, copying `operands`, and evict the oldest entries
    /// beyond `max_size`.
    pub fn add_operation(&mut self, operation: impl Into<String>, operands: &[Number], result: Number) {
        let timestamp = self.next_timestamp();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let entry = HistoryEntry::new(sequence, timestamp, operation.into(), operands, result);

        // Make room first so the deque never exceeds max_size
        while self.entries.len() >= self.max_size {
            match self.entries.pop_front() {
                Some(evicted) => {
                    tracing::trace!(sequence = evicted.sequence(), "history entry evicted");
                },
                None => break,
            }
        }

        if self.max_size > 0 {
            tracing::trace!(
                sequence,
                operation = entry.operation(),
                result = %result,
                "history entry appended"
            );
            self.entries.push_back(entry);
        }
    }

    /// Up to `count` most recent entries, most-recent-first
    pub fn get_last_operations(&self, count: usize) -> Vec<&HistoryEntry> {
        self.iter_recent().take(count).collect()
    }

    /// All retained entries, most-recent-first
    pub fn get_all_operations(&self) -> Vec<&HistoryEntry> {
        self.iter_recent().collect()
    }

    pub fn clear_history(&mut self) {
        tracing::debug!(removed = self.entries.len(), "history cleared");
        self.entries.clear();
    }

    pub fn get_operation_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose label equals `operation_type`, most-recent-first
    pub fn search_operations(&self, operation_type: &str) -> Vec<&HistoryEntry> {
        self.iter_recent()
            .filter(|entry| entry.operation() == operation_type)
            .collect()
    }

    pub fn get_statistics(&self) -> HistoryStatistics {
        HistoryStatistics::from_entries(&self.entries)
    }

    /// Most recently appended retained entry
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Oldest-first iteration
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter()
    }

    /// Most-recent-first iteration
    pub fn iter_recent(&self) -> impl Iterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// Wall-clock time, clamped so timestamps never go backwards
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let timestamp = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        timestamp
    }
}

impl Default for History {
    fn default() -> Self {
        Self::with_config(&HistoryConfig::default())
    }
}
