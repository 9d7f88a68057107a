// ============================================================================
// Calc Ledger Library
// Arithmetic engine with a bounded, queryable operation history
// ============================================================================

//! # Calc Ledger
//!
//! An arithmetic engine paired with a bounded operation history.
//!
//! ## Features
//!
//! - **Tagged numbers** that keep integer results exact and promote to float
//!   for division, square roots and overflow
//! - **Typed errors** for division by zero and invalid operations
//! - **Bounded FIFO history** of successful operations with most-recent-first
//!   retrieval, search and aggregate statistics
//! - **Event hooks** for logging or auditing every session operation
//!
//! ## Example
//!
//! ```rust
//! use calc_ledger::prelude::*;
//! use std::sync::Arc;
//!
//! let mut session = CalculatorSessionBuilder::new()
//!     .with_max_size(100)
//!     .build(Arc::new(NoOpEventHandler));
//!
//! let sum = session.add(10, 5).unwrap();                // Int(15)
//! let product = session.multiply(sum, 3).unwrap();      // Int(45)
//! let quotient = session.divide(product, 2).unwrap();   // Float(22.5)
//! session.subtract(quotient, 8).unwrap();               // Float(14.5)
//!
//! // Failed operations are not recorded
//! assert!(session.divide(10, 0).is_err());
//!
//! let stats = session.get_statistics();
//! assert_eq!(stats.total_operations, 4);
//! assert_eq!(session.get_history(Some(1))[0].operation(), "subtract");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        History, HistoryConfig, HistoryEntry, HistoryStatistics, Operation,
    };
    pub use crate::engine::{
        create_from_config, Calculator, CalculatorSession, CalculatorSessionBuilder,
    };
    pub use crate::interfaces::{
        CalculatorEvent, CollectingEventHandler, EventHandler, LoggingEventHandler,
        NoOpEventHandler,
    };
    pub use crate::numeric::{CalcError, CalcResult, ErrorKind, InvalidOperation, Number};
}
