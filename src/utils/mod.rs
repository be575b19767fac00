//! Utility modules for logging, timing and console output.

pub mod logging;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use runner::{Mode, RunConfig};
pub use timer::{calculate_median, measure, measure_variants, TimingConfig, Variant, VariantResult};

/// Information about one implementation variant of a demo.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "branching", "table")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
