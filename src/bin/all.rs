//! Command line entry point for the demos.
//!
//! Usage:
//!   ocp-demo                  # Run all demos
//!   ocp-demo --list           # List available demos
//!   ocp-demo pricing          # Run a specific demo
//!   ocp-demo --bench          # Time each demo's variants
//!   ocp-demo --help           # Show help

use anyhow::{bail, Context};
use ocp_dispatch::pricing::code::table::parse_rate;
use ocp_dispatch::utils::logging::init_logging;
use ocp_dispatch::utils::runner::{self, Mode, RunConfig};
use std::env;

fn parse_args(args: &[String]) -> anyhow::Result<RunConfig> {
    let mut config = RunConfig::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .with_context(|| format!("{} expects a value", flag))
        };

        match arg.as_str() {
            "--list" | "-l" => config.mode = Mode::List,
            "--help" | "-h" => config.mode = Mode::Help,
            "--verify" => config.mode = Mode::Verify,
            "--bench" => config.mode = Mode::Bench,
            "--verbose" | "-v" => config.verbose = true,
            "--runs" => {
                config.timing.runs_per_variant = value("--runs")?
                    .parse()
                    .context("--runs expects a positive integer")?;
            }
            "--size" => {
                config.timing.input_size = value("--size")?
                    .parse()
                    .context("--size expects a positive integer")?;
            }
            "--seed" => {
                config.timing.seed = value("--seed")?
                    .parse()
                    .context("--seed expects an unsigned integer")?;
            }
            "--rate" => {
                let rate = parse_rate(value("--rate")?)?;
                config.rates.push(rate);
            }
            name if !name.starts_with('-') => config.demo = Some(name.to_string()),
            other => bail!("Unknown option: {}", other),
        }
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            eprintln!("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    init_logging(config.verbose);

    let registry = config.registry();

    match config.mode {
        Mode::Help => {
            ocp_dispatch::tui::print_help();
            return Ok(());
        }
        Mode::List => {
            ocp_dispatch::tui::print_available_demos(&registry);
            return Ok(());
        }
        _ => {}
    }

    let Some(demos) = runner::select(&registry, config.demo.as_deref()) else {
        eprintln!("Demo '{}' not found.", config.demo.as_deref().unwrap_or_default());
        eprintln!("Available: {:?}", registry.list_names());
        std::process::exit(1);
    };

    match config.mode {
        Mode::Verify => {
            let passed = runner::verify_demos(&demos).context("verification failed")?;
            println!("{} demo(s) verified.", passed);
        }
        Mode::Bench => {
            ocp_dispatch::tui::print_header();
            runner::bench_demos(&demos, &config.timing);
            println!("Note: Speedup is relative to the first variant.");
        }
        _ => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            runner::run_demos(&demos, &mut out).context("failed to run demos")?;
        }
    }

    Ok(())
}
