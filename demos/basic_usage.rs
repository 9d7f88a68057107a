// ============================================================================
// Basic Usage Example
// ============================================================================

use calc_ledger::prelude::*;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calc Ledger Example ===\n");

    let mut session = CalculatorSessionBuilder::new()
        .with_max_size(5)
        .build(Arc::new(LoggingEventHandler));

    println!("Created session with a 5-entry history\n");

    // ((10 + 5) * 3) / 2 - 8
    println!("Running a chained calculation...");
    let step1 = session.add(10, 5).unwrap();
    let step2 = session.multiply(step1, 3).unwrap();
    let step3 = session.divide(step2, 2).unwrap();
    let result = session.subtract(step3, 8).unwrap();
    println!("((10 + 5) * 3) / 2 - 8 = {}\n", result);

    // Failed operations are reported but never recorded
    println!("Attempting invalid operations...");
    for outcome in [
        session.divide(10, 0),
        session.square_root(-9),
        session.power(-8, 0.5),
    ] {
        if let Err(err) = outcome {
            println!("  rejected: {}", err);
        }
    }
    println!();

    // Push enough operations to evict the oldest entries
    for i in 1..=3 {
        session.power(i, 2).unwrap();
    }

    println!("History (most recent first):");
    for entry in session.get_all_history() {
        let operands: Vec<String> = entry.operands().iter().map(ToString::to_string).collect();
        println!(
            "  #{} {} {} = {}",
            entry.sequence(),
            entry.operation(),
            operands.join(", "),
            entry.result()
        );
    }

    let stats = session.get_statistics();
    println!("\n=== Statistics ===");
    println!("Total operations: {}", stats.total_operations);
    println!("Operation types: {:?}", stats.operation_types);
    println!("Average result: {:?}", stats.average_result);
    println!("Max result: {:?}", stats.max_result);
    println!("Min result: {:?}", stats.min_result);
    println!("Last result: {}", session.get_last_result());
}
