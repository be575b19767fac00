//! Run configuration and the loops that drive the registered demos.

use crate::error::Result;
use crate::pricing::code::table::StrategyTable;
use crate::registry::{build_registry_with, DemoRegistry, DemoRunner};
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};
use crate::utils::tui;
use std::io::Write;

/// What the binary was asked to do
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Print the violating and compliant output of each demo
    #[default]
    Run,
    List,
    Help,
    Verify,
    Bench,
}

/// Everything the command line can configure
#[derive(Clone, Debug, Default)]
pub struct RunConfig {
    pub mode: Mode,
    /// Only this demo, when set
    pub demo: Option<String>,
    pub timing: TimingConfig,
    /// `--rate` overrides layered over the stock pricing table
    pub rates: Vec<(String, f64)>,
    pub verbose: bool,
}

impl RunConfig {
    /// Stock pricing table plus the configured overrides.
    pub fn pricing_table(&self) -> StrategyTable {
        self.rates
            .iter()
            .fold(StrategyTable::defaults(), |table, (key, multiplier)| {
                table.with_rate(key.clone(), *multiplier)
            })
    }

    pub fn registry(&self) -> DemoRegistry {
        build_registry_with(self.pricing_table())
    }
}

/// Pick the demos named by `filter`, or all of them. `None` if the name is unknown.
pub fn select<'r>(registry: &'r DemoRegistry, filter: Option<&str>) -> Option<Vec<&'r dyn DemoRunner>> {
    match filter {
        Some(name) => registry.find(name).map(|demo| vec![demo]),
        None => Some(registry.all().iter().map(|d| d.as_ref()).collect()),
    }
}

/// Write every demo's output, separated by a blank line.
pub fn run_demos(demos: &[&dyn DemoRunner], out: &mut dyn Write) -> Result<()> {
    for (idx, demo) in demos.iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        tracing::debug!(demo = demo.name(), "running demo");
        demo.run(out)?;
    }
    Ok(())
}

/// Verify every demo, stopping at the first failure. Returns how many passed.
pub fn verify_demos(demos: &[&dyn DemoRunner]) -> Result<usize> {
    for demo in demos {
        demo.verify()?;
        tracing::info!(demo = demo.name(), "all variants agree");
    }
    Ok(demos.len())
}

/// Time the variants of every demo, print one table per demo and return the results.
pub fn bench_demos(demos: &[&dyn DemoRunner], timing: &TimingConfig) -> Vec<Vec<VariantResult>> {
    tracing::info!(seed = timing.seed, runs = timing.runs_per_variant, "benchmarking");
    demos
        .iter()
        .map(|demo| {
            tui::print_demo_info_box(*demo);
            let results = measure_variants(demo.get_variant_closures(timing), timing);
            tui::print_results_table(&results, timing.input_size);
            results
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;

    #[test]
    fn test_select() {
        let registry = RunConfig::default().registry();
        assert_eq!(select(&registry, None).unwrap().len(), 2);
        let only = select(&registry, Some("pricing")).unwrap();
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name(), "pricing");
        assert!(select(&registry, Some("payroll")).is_none());
    }

    #[test]
    fn test_run_demos_separates_output() {
        let registry = RunConfig::default().registry();
        let demos = select(&registry, None).unwrap();
        let mut out = Vec::new();
        run_demos(&demos, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Without OCP:\nDrawing a Circle\n"));
        assert!(text.contains("Drawing a Rectangle\n\nWithout OCP:\n90\n"));
        assert!(text.ends_with("With OCP:\n90\n80\n95\n"));
    }

    #[test]
    fn test_rates_extend_pricing_table() {
        let config = RunConfig {
            rates: vec![("Toys".to_string(), 0.7), ("Food".to_string(), 1.0)],
            ..RunConfig::default()
        };
        let table = config.pricing_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.resolve("Food", 100.0).unwrap(), 100.0);
        assert_eq!(table.resolve("Electronics", 100.0).unwrap(), 90.0);
    }

    #[test]
    fn test_overridden_rate_reaches_verify_and_bench() {
        let config = RunConfig {
            rates: vec![("Electronics".to_string(), 0.5)],
            timing: TimingConfig {
                runs_per_variant: 1,
                warmup_iterations: 0,
                input_size: 64,
                seed: 5,
            },
            ..RunConfig::default()
        };
        let registry = config.registry();

        let pricing = select(&registry, Some("pricing")).unwrap();
        let err = verify_demos(&pricing).unwrap_err();
        assert!(matches!(err, DispatchError::Verification { ref variant, .. } if variant == "table"));

        let results = bench_demos(&pricing, &config.timing);
        assert_eq!(results.len(), 1);
        let by_name = |name: &str| {
            results[0]
                .iter()
                .find(|r| r.name == name)
                .and_then(|r| r.result_sample)
                .unwrap()
        };
        assert!(by_name("table") < by_name("branching"));

        // shapes are unaffected by pricing overrides
        let shapes = select(&registry, Some("shapes")).unwrap();
        assert_eq!(verify_demos(&shapes).unwrap(), 1);
    }

    #[test]
    fn test_verify_demos() {
        let registry = RunConfig::default().registry();
        let demos = select(&registry, None).unwrap();
        assert_eq!(verify_demos(&demos).unwrap(), 2);
    }
}
