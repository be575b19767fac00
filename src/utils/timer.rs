//! Timing harness for comparing the dispatch variants of a demo.
//!
//! - Warms up every variant before sampling
//! - Interleaves samples in a seeded random order to avoid ordering bias
//! - Reports average, median, min, max and standard deviation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
    /// Number of generated inputs each sample walks through (default: 1024)
    pub input_size: usize,
    /// Seed for input generation and sample ordering (default: time-based)
    pub seed: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            input_size: 1024,
            seed: time_seed(),
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Runs one sample and returns (elapsed, optional result value).
    /// Timing happens inside the closure so setup is not counted.
    pub run: Box<dyn FnMut() -> (Duration, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples collected
    pub runs: usize,
    /// Last result value, used to eyeball that variants agree
    pub result_sample: Option<f64>,
}

/// Time a single closure call.
#[inline(always)]
pub fn measure<T>(f: impl FnOnce() -> T) -> (Duration, T) {
    let start = Instant::now();
    let value = black_box(f());
    (start.elapsed(), value)
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Measure multiple variants with randomized execution order.
pub fn measure_variants(mut variants: Vec<Variant>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // Randomized task schedule: one entry per (variant, sample)
    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    tasks.shuffle(&mut rng);

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for variant_idx in tasks {
        let (elapsed, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            compute_variant_result(variant.name, variant.description, times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    times: Vec<Duration>,
    result_sample: Option<f64>,
) -> VariantResult {
    let runs = times.len();
    if times.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            runs,
            result_sample: None,
        };
    }

    let nanos: Vec<u64> = times.iter().map(|t| t.as_nanos() as u64).collect();
    let min_ns = nanos.iter().copied().min().unwrap_or(0);
    let max_ns = nanos.iter().copied().max().unwrap_or(0);

    let avg_ns = nanos.iter().sum::<u64>() as f64 / runs as f64;
    let variance: f64 = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_ns;
            diff * diff
        })
        .sum::<f64>()
        / (runs - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_ns as u64),
        median_time: calculate_median(&times),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        runs,
        result_sample,
    }
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}

/// Format a duration for the results table
pub fn format_duration(d: Duration) -> String {
    let ns = d.as_nanos();
    if ns >= 1_000_000 {
        format!("{:.2} ms", ns as f64 / 1_000_000.0)
    } else if ns >= 1_000 {
        format!("{:.2} µs", ns as f64 / 1_000.0)
    } else {
        format!("{} ns", ns)
    }
}
