//! # OCP Dispatch
//!
//! Side-by-side demos of the Open/Closed Principle: behavior selected by
//! branching on a type tag, by polymorphic variants, and by a strategy table.

pub mod error;
pub mod pricing;
pub mod registry;
pub mod shapes;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use error::{DispatchError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{DispatchError, Result};
    pub use crate::pricing::code::branching::calculate_price;
    pub use crate::pricing::code::table::{default_table, resolve, resolve_with, StrategyTable};
    pub use crate::registry::{build_registry, DemoRegistry, DemoRunner};
    pub use crate::shapes::code::polymorphic::{BaseShape, Circle, Rectangle, Shape, Square};
    pub use crate::shapes::code::tagged::TaggedShape;
}
