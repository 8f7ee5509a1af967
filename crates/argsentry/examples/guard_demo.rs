//! Guard clause demonstration example
//!
//! Run with `RUST_LOG=argsentry=trace` to see each rejection logged.
//!
//! Copyright (c) 2025 ArgSentry Contributors
//! Licensed under the Apache-2.0 license

use argsentry::{GuardErrorKind, GuardResult, Prevent};
use tracing_subscriber::EnvFilter;

struct Order {
    customer: String,
    quantities: Vec<u32>,
    discount: f64,
}

fn place_order(customer: Option<&str>, quantities: Option<Vec<u32>>, discount: f64) -> GuardResult<Order> {
    let customer = Prevent::null_or_white_space_string(customer, "customer")?;
    let quantities = Prevent::null_or_empty_collection(quantities, "quantities")?;
    Prevent::collection_with_any_values_less_than_or_equal_to(Some(&quantities), 0, "quantities")?;
    let discount = Prevent::value_outside_of_range(discount, 0.0, 0.5, "discount")?;

    Ok(Order {
        customer: customer.to_string(),
        quantities,
        discount,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== ArgSentry Guard Demo ===\n");

    let attempts = [
        (Some("ada"), Some(vec![1, 2, 3]), 0.1),
        (Some("   "), Some(vec![1]), 0.0),
        (Some("bob"), Some(vec![]), 0.0),
        (Some("carol"), Some(vec![4, 0, 2]), 0.0),
        (Some("dave"), Some(vec![1]), 0.75),
    ];

    for (customer, quantities, discount) in attempts {
        match place_order(customer, quantities, discount) {
            Ok(order) => println!(
                "✅ Accepted order for {}: {} lines, {:.0}% off",
                order.customer,
                order.quantities.len(),
                order.discount * 100.0
            ),
            Err(error) => {
                let hint = match error.kind() {
                    GuardErrorKind::Null => "missing",
                    GuardErrorKind::Argument => "invalid",
                    GuardErrorKind::OutOfRange => "out of range",
                };
                println!("❌ Rejected {} argument '{}': {}", hint, error.param_name(), error);
            }
        }
    }

    Ok(())
}
