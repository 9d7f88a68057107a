// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator session events
// ============================================================================

use crate::domain::{Operation, Operands};
use crate::numeric::{CalcError, Number};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Events emitted by a calculator session
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
    /// Operation succeeded and was appended to the history
    OperationRecorded {
        operation: Operation,
        operands: Operands,
        result: Number,
        timestamp: DateTime<Utc>,
    },

    /// Operation failed; history untouched
    OperationFailed {
        operation: Operation,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },

    /// History emptied on request
    HistoryCleared {
        removed: usize,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator session events
/// Implementations can handle logging, auditing, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a session event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculatorEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Buffers every event it receives, in arrival order
#[derive(Default)]
pub struct CollectingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl CollectingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the buffered events
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop all buffered events
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for CollectingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<CalculatorEvent>) {
        self.events.lock().extend(events);
    }
}
