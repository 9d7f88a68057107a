// ============================================================================
// Domain Models Module
// Operation history, its entries, statistics and configuration
// ============================================================================

pub mod config;
pub mod entry;
pub mod history;
pub mod operation;
pub mod statistics;

pub use config::{HistoryConfig, DEFAULT_MAX_SIZE, DEFAULT_RECENT_COUNT};
pub use entry::{HistoryEntry, Operands};
pub use history::History;
pub use operation::{Operation, UnknownOperation};
pub use statistics::HistoryStatistics;
