//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{DemoRegistry, DemoRunner};
use crate::utils::timer::{format_duration, VariantResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Print demo info box
pub fn print_demo_info_box(demo: &dyn DemoRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let name_line = format!("Demo:     {}", demo.name());
    let cat_line = format!("Category: {}", demo.category());
    let desc_line = demo.description();
    let var_line = format!("Variants: {}", demo.available_variants().join(", "));

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for line in [name_line.as_str(), cat_line.as_str(), desc_line] {
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("├{}┤", border);
    println!("│ {:<width$} │", truncate(&var_line, content_width), width = content_width);
    println!("└{}┘", border);
    println!();
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print the timing table; speedup is relative to the first variant
pub fn print_results_table(results: &[VariantResult], input_size: usize) {
    if results.is_empty() {
        return;
    }

    let variant_col_width = get_term_width().saturating_sub(72).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = results
        .first()
        .map(|r| r.avg_time.as_nanos() as f64)
        .unwrap_or(1.0);

    println!("  Inputs: {} ({} runs)", input_size, results[0].runs);
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Median",
        "Min",
        "Speedup",
        "CV",
        "Result",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_time.as_nanos() as f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };
        let cv = if avg_ns > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };
        let sample = result
            .result_sample
            .map(|v| format!("{:.2e}", v))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10}",
            truncate(&result.name, variant_col_width),
            format_duration(result.avg_time),
            format_duration(result.median_time),
            format_duration(result.min_time),
            speedup,
            cv * 100.0,
            sample,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Open/Closed Principle Demos ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the help message
pub fn print_help() {
    println!("Usage: ocp-demo [OPTIONS] [DEMO]");
    println!();
    println!("Options:");
    println!("  --list, -l       List all available demos");
    println!("  --help, -h       Show this help message");
    println!("  --verify         Check that every variant of each demo agrees");
    println!("  --bench          Time the variants of each demo");
    println!("  --runs N         Measurement runs per variant (default: 30)");
    println!("  --size N         Generated inputs per run (default: 1024)");
    println!("  --seed N         Random seed for reproducible benchmarks (default: time-based)");
    println!("  --rate KEY=MULT  Add or replace a pricing strategy (repeatable)");
    println!("  --verbose, -v    Enable debug logging on stderr");
    println!();
    println!("Arguments:");
    println!("  DEMO             Name of a specific demo to run (omit for all)");
    println!();
    println!("Examples:");
    println!("  ocp-demo                      # Run all demos");
    println!("  ocp-demo pricing              # Run only the pricing demo");
    println!("  ocp-demo pricing --rate Toys=0.7");
    println!("  ocp-demo --bench --seed 12345 # Reproducible timings");
}

/// Print the list of available demos
pub fn print_available_demos(registry: &DemoRegistry) {
    println!("Available demos:");
    println!();
    for demo in registry.all() {
        println!(
            "  {:<12} [{}] - {}",
            demo.name(),
            demo.category(),
            demo.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("much longer text", 10), "much lo...");
        assert_eq!(truncate("──────", 5), "──...");
    }
}
