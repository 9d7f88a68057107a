// ============================================================================
// Calculator Session
// Couples the arithmetic engine with the operation history
// ============================================================================

use crate::domain::{History, HistoryConfig, HistoryEntry, HistoryStatistics, Operation};
use crate::engine::Calculator;
use crate::interfaces::{CalculatorEvent, EventHandler};
use crate::numeric::{CalcResult, Number};
use chrono::Utc;
use smallvec::SmallVec;
use std::sync::Arc;

/// Calculator whose successful operations are recorded in a bounded history.
///
/// Failed operations propagate their error unchanged and leave both the
/// history and the last result untouched.
pub struct CalculatorSession {
    /// Arithmetic engine
    calculator: Calculator,

    /// Record of successful operations
    history: History,

    /// Capacity and query defaults
    config: HistoryConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorSession {
    /// Create a new session
    pub fn new(config: HistoryConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            calculator: Calculator::new(),
            history: History::with_config(&config),
            config,
            event_handler,
        }
    }

    pub fn add(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        self.apply(Operation::Add, &[a.into(), b.into()])
    }

    pub fn subtract(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        self.apply(Operation::Subtract, &[a.into(), b.into()])
    }

    pub fn multiply(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        self.apply(Operation::Multiply, &[a.into(), b.into()])
    }

    pub fn divide(&mut self, a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
        self.apply(Operation::Divide, &[a.into(), b.into()])
    }

    pub fn power(
        &mut self,
        base: impl Into<Number>,
        exponent: impl Into<Number>,
    ) -> CalcResult<Number> {
        self.apply(Operation::Power, &[base.into(), exponent.into()])
    }

    pub fn square_root(&mut self, value: impl Into<Number>) -> CalcResult<Number> {
        self.apply(Operation::SquareRoot, &[value.into()])
    }

    /// Run `operation` and record it on success
    pub fn apply(&mut self, operation: Operation, operands: &[Number]) -> CalcResult<Number> {
        match self.calculator.apply(operation, operands) {
            Ok(result) => {
                self.history
                    .add_operation(operation.as_str(), operands, result);
                tracing::debug!(%operation, %result, "operation recorded");

                // Share the stored entry's timestamp; zero-capacity histories keep none
                let timestamp = self
                    .history
                    .last()
                    .map_or_else(Utc::now, HistoryEntry::timestamp);
                self.event_handler.on_event(CalculatorEvent::OperationRecorded {
                    operation,
                    operands: SmallVec::from_slice(operands),
                    result,
                    timestamp,
                });
                Ok(result)
            },
            Err(error) => {
                tracing::debug!(%operation, %error, "operation failed");

                self.event_handler.on_event(CalculatorEvent::OperationFailed {
                    operation,
                    error: error.clone(),
                    timestamp: Utc::now(),
                });
                Err(error)
            },
        }
    }

    // ========================================================================
    // History accessors
    // ========================================================================

    /// Most recent entries, most-recent-first. `None` uses the configured
    /// default count.
    pub fn get_history(&self, count: Option<usize>) -> Vec<&HistoryEntry> {
        self.history
            .get_last_operations(count.unwrap_or(self.config.default_recent_count))
    }

    pub fn get_all_history(&self) -> Vec<&HistoryEntry> {
        self.history.get_all_operations()
    }

    pub fn search_history(&self, operation_type: &str) -> Vec<&HistoryEntry> {
        self.history.search_operations(operation_type)
    }

    pub fn get_statistics(&self) -> HistoryStatistics {
        self.history.get_statistics()
    }

    pub fn clear_history(&mut self) {
        let removed = self.history.get_operation_count();
        self.history.clear_history();
        self.event_handler.on_event(CalculatorEvent::HistoryCleared {
            removed,
            timestamp: Utc::now(),
        });
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ========================================================================
    // Engine accessors
    // ========================================================================

    pub fn get_last_result(&self) -> Number {
        self.calculator.get_last_result()
    }

    /// Reset the last result; history is kept
    pub fn clear(&mut self) {
        self.calculator.clear();
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new(
            HistoryConfig::default(),
            Arc::new(crate::interfaces::NoOpEventHandler),
        )
    }
}
