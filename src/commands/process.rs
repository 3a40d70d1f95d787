//! Handlers for the `simplify` and `split` commands.

use crate::cli_types::ProcessArgs;
use colored::*;
use mdsimplify_lib::config::{Config, ConfigError, DirectoryPair};
use mdsimplify_lib::exit_codes::{self, exit};
use mdsimplify_lib::file_processor::{BatchReport, FileFailure, ProcessError, simplify_directory, split_directory};
use mdsimplify_lib::parallel::{FileParallelProcessor, ParallelConfig};
use mdsimplify_lib::pipeline::Pipeline;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Simplify,
    Split,
}

impl Mode {
    fn verb(&self) -> &'static str {
        match self {
            Mode::Simplify => "Simplified",
            Mode::Split => "Split",
        }
    }

    fn pair_keys(&self) -> &'static str {
        match self {
            Mode::Simplify => "<name>_simplify_source / <name>_simplify_target",
            Mode::Split => "<name>_source / <name>_target",
        }
    }
}

/// Run `simplify` or `split` over every directory pair and return the exit code
pub fn handle_process(mode: Mode, args: &ProcessArgs, config_path: Option<&Path>, quiet: bool) -> i32 {
    let explicit_pair = args.explicit_pair();
    let config = load_config(config_path, explicit_pair.is_some());

    let pairs = match explicit_pair {
        Some((source, target)) => vec![DirectoryPair::new("command line", source, target)],
        None => match mode {
            Mode::Simplify => config.simplify_pairs(),
            Mode::Split => config.split_pairs(),
        },
    };

    if pairs.is_empty() {
        eprintln!("{}: No directory pairs configured", "Error".red().bold());
        eprintln!("Add {} keys under [directories], or pass SOURCE and TARGET", mode.pair_keys());
        exit::tool_error();
    }

    let processor = FileParallelProcessor::new(ParallelConfig {
        enabled: !args.no_parallel,
        thread_count: args.threads,
        ..ParallelConfig::default()
    });
    let pipeline = Pipeline::new(&config);
    let encoding = config.settings.encoding.as_str();

    let start_time = Instant::now();
    let mut total = BatchReport::default();

    for pair in &pairs {
        log::info!(
            "[mdsimplify-cli] Processing '{}': {} -> {}",
            pair.name,
            pair.source.display(),
            pair.target.display()
        );

        let result = match mode {
            Mode::Simplify => simplify_directory(pair, &pipeline, encoding, &processor),
            Mode::Split => split_directory(pair, encoding, &processor),
        };

        match result {
            Ok(report) => {
                if !quiet {
                    print_pair_report(pair, &report);
                }
                total.merge(report);
            }
            Err(ProcessError::Discovery { path, message }) => {
                eprintln!("{}: Skipping {path}: {message}", "Warning".yellow().bold());
            }
            Err(e) => {
                eprintln!("{}: {e}", "Error".red().bold());
                total.failures.push(FileFailure {
                    path: pair.source.clone(),
                    error: e,
                });
            }
        }
    }

    if !quiet {
        print_summary(mode, &total, start_time.elapsed().as_millis());
    }

    if total.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FILES_FAILED
    }
}

/// Load configuration, treating a missing file as fatal only when it is the
/// sole source of directory pairs.
fn load_config(config_path: Option<&Path>, has_explicit_pair: bool) -> Config {
    match Config::load(config_path) {
        Ok(config) => config,
        Err(ConfigError::Missing { .. }) if has_explicit_pair => Config::default(),
        Err(ConfigError::Missing { searched }) => {
            eprintln!(
                "{}: No configuration file found (looked for {})",
                "Error".red().bold(),
                searched.join(", ")
            );
            eprintln!("Run `mdsimplify init` to create one, or pass SOURCE and TARGET directories");
            exit::tool_error();
        }
        Err(e) => {
            eprintln!("{}: {e}", "Error".red().bold());
            exit::tool_error();
        }
    }
}

fn print_pair_report(pair: &DirectoryPair, report: &BatchReport) {
    for path in &report.written {
        println!("  {} {}", "wrote".green(), path.display());
    }
    for path in &report.skipped {
        println!("  {} {} (no sections)", "skipped".dimmed(), path.display());
    }
    for failure in &report.failures {
        println!("  {} {}: {}", "failed".red(), failure.path.display(), failure.error);
    }
    if report.images_adjusted > 0 {
        println!(
            "  {} {} image path(s) for {}",
            "adjusted".cyan(),
            report.images_adjusted,
            pair.target.display()
        );
    }

    if report.processed == 0 {
        println!("  No Markdown files in {}", pair.source.display());
    }
}

fn print_summary(mode: Mode, total: &BatchReport, duration_ms: u128) {
    let file_text = if total.processed == 1 { "file" } else { "files" };

    if total.is_success() {
        println!(
            "\n{} {} {} {file_text} into {} output files in {duration_ms}ms",
            "Success:".green().bold(),
            mode.verb(),
            total.processed,
            total.written.len()
        );
    } else {
        println!(
            "\n{} {} of {} {file_text} failed ({} output files written) in {duration_ms}ms",
            "Failed:".red().bold(),
            total.failures.len(),
            total.processed,
            total.written.len()
        );
    }
}
