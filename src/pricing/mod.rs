//! # Pricing: Branching vs Strategy Table
//!
//! - **Branching**: `calculate_price` matches on the category; a new category
//!   means a new arm, and unknown categories fail with `UnknownCategory`.
//! - **Table**: `resolve` looks the category up in a `StrategyTable`; a new
//!   category is one more entry, and misses fail with `UnknownKey`. The table
//!   can be swapped per call.

pub mod code;
pub mod test;

use crate::error::Result;
use crate::registry::DemoRunner;
use crate::utils::timer::{measure, TimingConfig, Variant};
use code::branching::calculate_price;
use code::table::{resolve_with, StrategyTable};
use code::CATEGORIES;
use std::io::Write;
use std::sync::Arc;

/// Sample price every category is applied to in [`PricingDemo::run`].
pub const SAMPLE_PRICE: f64 = 100.0;

pub struct PricingDemo {
    table: StrategyTable,
}

impl PricingDemo {
    /// Run the table rendition against `table` instead of the stock discounts.
    pub fn with_table(table: StrategyTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &StrategyTable {
        &self.table
    }
}

impl Default for PricingDemo {
    fn default() -> Self {
        Self::with_table(StrategyTable::defaults())
    }
}

impl DemoRunner for PricingDemo {
    fn name(&self) -> &'static str {
        "pricing"
    }

    fn category(&self) -> &'static str {
        "strategy_table"
    }

    fn description(&self) -> &'static str {
        "Category discounts by match arms vs a key-to-function table"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_variants().iter().map(|v| v.name).collect()
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        // Compute everything first so a failure leaves the stream untouched.
        let branching = CATEGORIES
            .iter()
            .map(|category| calculate_price(category, SAMPLE_PRICE))
            .collect::<Result<Vec<_>>>()?;
        let table = CATEGORIES
            .iter()
            .map(|category| resolve_with(category, SAMPLE_PRICE, &self.table))
            .collect::<Result<Vec<_>>>()?;
        let extra = self
            .table
            .keys()
            .filter(|key| !CATEGORIES.contains(key))
            .map(|key| resolve_with(key, SAMPLE_PRICE, &self.table).map(|price| (key, price)))
            .collect::<Result<Vec<_>>>()?;

        writeln!(out, "Without OCP:")?;
        for price in branching {
            writeln!(out, "{}", price)?;
        }

        writeln!(out)?;
        writeln!(out, "With OCP:")?;
        for price in table {
            writeln!(out, "{}", price)?;
        }
        for (key, price) in extra {
            writeln!(out, "{}: {}", key, price)?;
        }
        Ok(())
    }

    fn get_variant_closures<'a>(&'a self, config: &TimingConfig) -> Vec<Variant<'a>> {
        let orders = Arc::new(code::generate_orders(config.input_size, config.seed));
        let table = self.table();

        code::get_variants()
            .into_iter()
            .map(|v| {
                let orders = Arc::clone(&orders);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        // A failed lookup leaves the sample empty instead of pricing at zero.
                        let (elapsed, total) = measure(|| {
                            orders
                                .iter()
                                .map(|&(category, price)| {
                                    std::hint::black_box(func(category, price, table))
                                })
                                .sum::<Result<f64>>()
                        });
                        (elapsed, total.ok())
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all(self.table())
    }
}
