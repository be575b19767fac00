//! Demo registry for dynamic demo discovery and execution.
//!
//! New demos are added by implementing [`DemoRunner`] and registering them in
//! [`build_registry`]; nothing else in the crate needs to change.

use crate::error::Result;
use crate::pricing::code::table::StrategyTable;
use crate::utils::timer::{TimingConfig, Variant};
use std::io::Write;

/// Trait that all demos must implement
pub trait DemoRunner: Send + Sync {
    /// Name of the demo (e.g., "pricing")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "polymorphism", "strategy_table")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Write the violating and compliant renditions side by side.
    fn run(&self, out: &mut dyn Write) -> Result<()>;

    /// Get closures for each variant, ready to be measured.
    /// Each closure does ONE pass over the generated inputs.
    fn get_variant_closures<'a>(&'a self, config: &TimingConfig) -> Vec<Variant<'a>>;

    /// Verify that every variant agrees with the reference
    fn verify(&self) -> Result<()>;
}

/// Registry of all demos
pub struct DemoRegistry {
    demos: Vec<Box<dyn DemoRunner>>,
}

impl DemoRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { demos: Vec::new() }
    }

    /// Register a demo
    pub fn register<D: DemoRunner + 'static>(&mut self, demo: D) {
        tracing::debug!(demo = demo.name(), "registering demo");
        self.demos.push(Box::new(demo));
    }

    /// Get all registered demos
    pub fn all(&self) -> &[Box<dyn DemoRunner>] {
        &self.demos
    }

    /// Find demo by name
    pub fn find(&self, name: &str) -> Option<&dyn DemoRunner> {
        self.demos
            .iter()
            .find(|d| d.name() == name)
            .map(|d| d.as_ref())
    }

    /// List demo names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.demos.iter().map(|d| d.name()).collect()
    }

    /// List demos by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn DemoRunner> {
        self.demos
            .iter()
            .filter(|d| d.category() == category)
            .map(|d| d.as_ref())
            .collect()
    }
}

impl Default for DemoRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all demos
pub fn build_registry() -> DemoRegistry {
    build_registry_with(StrategyTable::defaults())
}

/// Build the registry, running the pricing demo against `pricing_table`
pub fn build_registry_with(pricing_table: StrategyTable) -> DemoRegistry {
    let mut registry = DemoRegistry::new();

    // Register all demos here
    registry.register(crate::shapes::ShapesDemo);
    registry.register(crate::pricing::PricingDemo::with_table(pricing_table));

    registry
}
