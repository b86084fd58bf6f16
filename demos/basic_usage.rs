// ============================================================================
// Basic Usage Example
// ============================================================================

use pricing_engine::prelude::*;
use std::collections::HashMap;
use std::fs;

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Pricing Engine Example ===\n");

    // Scalar arithmetic
    println!("add(9, 3)          = {}", add(9, 3));
    println!("subtract(5, 3)     = {}", subtract(5, 3));
    println!("divide(8, 2)       = {:?}", divide(8, 2));
    println!("divide(10, 0)      = {:?}", divide(10, 0).map_err(|e| e.to_string()));
    println!("multiply(4, 5)     = {}", multiply(4, 5));

    // Checked multiplication
    println!("\nChecked multiplication...");
    println!(
        "checked_multiply(46_000, 46_000)   = {:?}",
        checked_multiply(46_000, 46_000)
    );
    println!(
        "checked_multiply(i32::MAX, 2)      = {:?}",
        checked_multiply(i32::MAX, 2).map_err(|e| e.to_string())
    );

    // Discount calculation
    println!("\nDiscount calculation...");
    let regular = calculate_discount(100.0, 10.0, false).unwrap();
    let member = calculate_discount(100.0, 10.0, true).unwrap();
    println!("price 100, 10% off             = {}", regular);
    println!("price 100, 10% off, member     = {}", member);

    // Config-driven scaling
    println!("\nConfig-driven scaling...");
    let dir = std::env::temp_dir().join("pricing-engine-demo");
    fs::create_dir_all(&dir).expect("create demo dir");
    let config = dir.join("multiplier.txt");
    fs::write(&config, "3").expect("write config");

    let scaled = multiply_slice(&[1, 2, 3], &config).expect("scale slice");
    println!("[1, 2, 3] scaled by 3          = {:?}", scaled);

    let mut values = HashMap::new();
    values.insert("widgets".to_string(), 4);
    values.insert("gadgets".to_string(), 7);
    let scaled = multiply_map(&values, &config).expect("scale map");
    println!("{{widgets: 4, gadgets: 7}} by 3  = {:?}", scaled);

    // Errors carry their kind and cause
    let missing = dir.join("missing.txt");
    if let Err(err) = multiply_with_config(5, &missing) {
        println!("\nmissing config: kind={:?}: {}", err.kind(), err);
    }

    fs::remove_dir_all(&dir).ok();
}
