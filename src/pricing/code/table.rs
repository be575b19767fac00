//! Table rendition: a map from category key to pricing function.
//!
//! A new category is a new entry; [`resolve_with`] never changes. Callers can
//! pass their own table per call, which keeps tests away from the shared
//! default.

use crate::error::{DispatchError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A pure pricing function.
pub type Strategy = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Unique key to pricing function mapping.
#[derive(Clone, Default)]
pub struct StrategyTable {
    strategies: BTreeMap<String, Strategy>,
}

impl StrategyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh copy of the stock discounts.
    pub fn defaults() -> Self {
        Self::new()
            .with_rate("Electronics", 0.9) // 10% discount
            .with_rate("Clothing", 0.8) // 20% discount
            .with_rate("Food", 0.95) // 5% discount
    }

    /// Insert or replace the function for `key`.
    pub fn insert<F>(&mut self, key: impl Into<String>, strategy: F) -> Option<Strategy>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.strategies.insert(key.into(), Arc::new(strategy))
    }

    /// Builder form of [`StrategyTable::insert`] for a plain multiplier.
    pub fn with_rate(mut self, key: impl Into<String>, multiplier: f64) -> Self {
        self.insert(key, move |price| price * multiplier);
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strategies.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Look up `key` and apply its function to `input`.
    pub fn resolve(&self, key: &str, input: f64) -> Result<f64> {
        let strategy = self
            .strategies
            .get(key)
            .ok_or_else(|| DispatchError::UnknownKey(key.to_string()))?;
        Ok(strategy(input))
    }
}

impl fmt::Debug for StrategyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.keys()).finish()
    }
}

/// The process-wide default table, built on first use and never mutated.
pub fn default_table() -> &'static StrategyTable {
    static DEFAULT: OnceLock<StrategyTable> = OnceLock::new();
    DEFAULT.get_or_init(StrategyTable::defaults)
}

/// Resolve against the default table.
#[inline(never)]
pub fn resolve(key: &str, input: f64) -> Result<f64> {
    resolve_with(key, input, default_table())
}

/// Resolve against a caller-supplied table.
pub fn resolve_with(key: &str, input: f64, table: &StrategyTable) -> Result<f64> {
    let output = table.resolve(key, input)?;
    tracing::debug!(key, input, output, "resolved pricing strategy");
    Ok(output)
}

/// Parse a `KEY=MULTIPLIER` override such as `Toys=0.7`.
pub fn parse_rate(text: &str) -> Result<(String, f64)> {
    let invalid = || DispatchError::InvalidRate(text.to_string());

    let (key, multiplier) = text.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(invalid());
    }
    let multiplier: f64 = multiplier.trim().parse().map_err(|_| invalid())?;
    if !multiplier.is_finite() {
        return Err(invalid());
    }
    Ok((key.to_string(), multiplier))
}
