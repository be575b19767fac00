//! Implementation variants for the pricing demo

pub mod branching;
pub mod table;

use crate::error::Result;
use crate::utils::VariantInfo;
use table::StrategyTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Function signature: applies the discount of a category to a price.
/// The table is the one the demo was configured with; branching ignores it.
pub type PriceFn = fn(&str, f64, &StrategyTable) -> Result<f64>;

/// Categories every variant knows about.
pub const CATEGORIES: [&str; 3] = ["Electronics", "Clothing", "Food"];

/// Returns all available variants
pub fn get_variants() -> Vec<VariantInfo<PriceFn>> {
    vec![
        VariantInfo {
            name: "branching",
            description: "match on the category label",
            function: branching_price,
        },
        VariantInfo {
            name: "table",
            description: "lookup in the configured strategy table",
            function: table::resolve_with,
        },
    ]
}

fn branching_price(category: &str, price: f64, _table: &StrategyTable) -> Result<f64> {
    branching::calculate_price(category, price)
}

/// Generate reproducible (category, price) pairs with prices in [1, 1000)
pub fn generate_orders(size: usize, seed: u64) -> Vec<(&'static str, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let category = CATEGORIES[rng.random_range(0..CATEGORIES.len())];
            let price = rng.random_range(1.0..1000.0);
            (category, price)
        })
        .collect()
}
