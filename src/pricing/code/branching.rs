//! Branching rendition: one function matching on the category label.
//!
//! A new category means another arm in [`calculate_price`].

use crate::error::{DispatchError, Result};

/// Apply the category discount to `price`.
///
/// Categories:
/// - Electronics: 10% off
/// - Clothing: 20% off
/// - Food: 5% off
/// - _: [`DispatchError::UnknownCategory`]
#[inline(never)]
pub fn calculate_price(category: &str, price: f64) -> Result<f64> {
    match category {
        "Electronics" => Ok(price * 0.9),
        "Clothing" => Ok(price * 0.8),
        "Food" => Ok(price * 0.95),
        other => Err(DispatchError::UnknownCategory(other.to_string())),
    }
}
