// ============================================================================
// Session Factory
// Creates calculator sessions with proper configuration
// ============================================================================

use crate::domain::HistoryConfig;
use crate::engine::CalculatorSession;
use crate::interfaces::EventHandler;
use std::sync::Arc;

/// Creates a calculator session from configuration
///
/// # Example
/// ```
/// use calc_ledger::prelude::*;
/// use std::sync::Arc;
///
/// let config = HistoryConfig::new(50);
/// let session = create_from_config(config, Arc::new(NoOpEventHandler));
/// assert_eq!(session.history().max_size(), 50);
/// ```
pub fn create_from_config(
    config: HistoryConfig,
    event_handler: Arc<dyn EventHandler>,
) -> CalculatorSession {
    tracing::debug!(
        max_size = config.max_size,
        default_recent_count = config.default_recent_count,
        "creating calculator session"
    );
    CalculatorSession::new(config, event_handler)
}

/// Builder for calculator sessions
///
/// # Example
/// ```
/// use calc_ledger::engine::CalculatorSessionBuilder;
/// use calc_ledger::interfaces::NoOpEventHandler;
/// use std::sync::Arc;
///
/// let mut session = CalculatorSessionBuilder::new()
///     .with_max_size(3)
///     .with_default_recent_count(2)
///     .build(Arc::new(NoOpEventHandler));
///
/// session.add(1, 2).unwrap();
/// assert_eq!(session.get_history(None).len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorSessionBuilder {
    config: HistoryConfig,
}

impl CalculatorSessionBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: HistoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set maximum history size
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.config.max_size = max_size;
        self
    }

    /// Set default count for recent-history queries
    pub fn with_default_recent_count(mut self, count: usize) -> Self {
        self.config.default_recent_count = count;
        self
    }

    /// Build the calculator session
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> CalculatorSession {
        create_from_config(self.config, event_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::Number;

    #[test]
    fn test_create_from_config() {
        let session = create_from_config(HistoryConfig::default(), Arc::new(NoOpEventHandler));
        assert_eq!(session.history().max_size(), 100);
        assert_eq!(session.config().default_recent_count, 10);
    }

    #[test]
    fn test_builder_bounded() {
        let mut session = CalculatorSessionBuilder::new()
            .with_max_size(2)
            .build(Arc::new(NoOpEventHandler));

        session.add(1, 1).unwrap();
        session.add(2, 2).unwrap();
        session.add(3, 3).unwrap();

        let results: Vec<Number> = session.get_all_history().iter().map(|e| e.result()).collect();
        assert_eq!(results, vec![Number::Int(6), Number::Int(4)]);
    }

    #[test]
    fn test_builder_zero_capacity() {
        let mut session = CalculatorSessionBuilder::new()
            .with_config(HistoryConfig::new(0))
            .build(Arc::new(NoOpEventHandler));

        assert_eq!(session.add(1, 1).unwrap(), Number::Int(2));
        assert_eq!(session.history().get_operation_count(), 0);
        assert_eq!(session.get_last_result(), Number::Int(2));
    }
}
