// ============================================================================
// Engine Module
// Contains the arithmetic engine and the session that records its history
// ============================================================================

mod calculator;
mod session;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorSessionBuilder};
pub use session::CalculatorSession;
