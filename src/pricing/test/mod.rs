//! Tests for branching vs table pricing

use super::code::table::StrategyTable;
use super::code::{get_variants, CATEGORIES};
use crate::error::{DispatchError, Result};

/// Category no variant is expected to price.
const UNKNOWN_CATEGORY: &str = "Uncategorized";

/// Verify every variant prices like the first one against `table`, and rejects
/// unknown categories.
///
/// Only the categories the branching variant knows are compared. An override
/// that changes one of them is reported as a `Verification` error; extra keys
/// added to the table are not checked.
pub fn verify_all(table: &StrategyTable) -> Result<()> {
    let prices = [0.0, 1.0, 9.99, 100.0, 250.5, 1_000_000.0];

    let variants = get_variants();
    let Some((reference, others)) = variants.split_first() else {
        return Ok(());
    };

    if !table.contains(UNKNOWN_CATEGORY) {
        for variant in &variants {
            if (variant.function)(UNKNOWN_CATEGORY, 100.0, table).is_ok() {
                return Err(DispatchError::Verification {
                    variant: variant.name.to_string(),
                    reason: format!("accepted unknown category '{}'", UNKNOWN_CATEGORY),
                });
            }
        }
    }

    for category in CATEGORIES {
        for &price in &prices {
            let expected = (reference.function)(category, price, table)?;

            for variant in others {
                let actual = (variant.function)(category, price, table)?;
                if (actual - expected).abs() > 1e-9 {
                    return Err(DispatchError::Verification {
                        variant: variant.name.to_string(),
                        reason: format!(
                            "category={}, price={}: expected {}, got {}",
                            category, price, expected, actual
                        ),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::code::generate_orders;

    #[test]
    fn test_all_variants() {
        verify_all(&StrategyTable::defaults()).expect("All variants should produce the same prices");
    }

    #[test]
    fn test_extra_keys_still_verify() {
        let table = StrategyTable::defaults().with_rate("Toys", 0.7);
        verify_all(&table).expect("Extra keys leave the shared categories alone");
    }

    #[test]
    fn test_overridden_category_fails_verification() {
        let table = StrategyTable::defaults().with_rate("Electronics", 0.5);
        let err = verify_all(&table).unwrap_err();
        match err {
            DispatchError::Verification { variant, reason } => {
                assert_eq!(variant, "table");
                assert!(reason.contains("Electronics"), "{reason}");
            }
            other => panic!("expected Verification, got {other:?}"),
        }
    }

    #[test]
    fn test_table_missing_category_fails_verification() {
        let table = StrategyTable::new().with_rate("Food", 0.95);
        assert!(matches!(verify_all(&table), Err(DispatchError::UnknownKey(_))));
    }

    #[test]
    fn test_documented_discounts() {
        let table = StrategyTable::defaults();
        for variant in get_variants() {
            let f = variant.function;
            assert_eq!(f("Electronics", 100.0, &table).unwrap(), 90.0, "{}", variant.name);
            assert_eq!(f("Clothing", 100.0, &table).unwrap(), 80.0, "{}", variant.name);
            assert_eq!(f("Food", 100.0, &table).unwrap(), 95.0, "{}", variant.name);
        }
    }

    #[test]
    fn test_unknown_category_errors_differ_by_variant() {
        let table = StrategyTable::defaults();
        let variants = get_variants();
        let branching = variants.iter().find(|v| v.name == "branching").unwrap();
        let table_variant = variants.iter().find(|v| v.name == "table").unwrap();

        assert!(matches!(
            (branching.function)("Toys", 1.0, &table),
            Err(DispatchError::UnknownCategory(_))
        ));
        assert!(matches!(
            (table_variant.function)("Toys", 1.0, &table),
            Err(DispatchError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_random_orders_agree() {
        let table = StrategyTable::defaults();
        let variants = get_variants();
        for (category, price) in generate_orders(500, 0xC0FFEE) {
            let expected = (variants[0].function)(category, price, &table).unwrap();
            for variant in &variants[1..] {
                let actual = (variant.function)(category, price, &table).unwrap();
                assert!((actual - expected).abs() < 1e-9, "{}", variant.name);
            }
        }
    }
}
