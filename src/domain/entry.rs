// ============================================================================
// History Entry Domain Model
// ============================================================================

use crate::numeric::Number;
use chrono::{DateTime, Utc};
use smallvec::SmallVec;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operand storage; binary operations fit inline without allocating.
pub type Operands = SmallVec<[Number; 2]>;

/// One recorded operation. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    id: Uuid,
    sequence: u64,
    timestamp: DateTime<Utc>,
    operation: String,
    operands: Operands,
    result: Number,
}

impl HistoryEntry {
    pub(crate) fn new(
        sequence: u64,
        timestamp: DateTime<Utc>,
        operation: String,
        operands: &[Number],
        result: Number,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sequence,
            timestamp,
            operation,
            operands: SmallVec::from_slice(operands),
            result,
        }
    }

    /// Unique entry identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Insertion counter within the owning history
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn operands(&self) -> &[Number] {
        &self.operands
    }

    pub fn result(&self) -> Number {
        self.result
    }
}
