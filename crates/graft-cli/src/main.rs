//! graft CLI
//!
//! Thin file I/O shim around the graft-core merge engine: read the source
//! and destination files, merge, rewrite the destination in place, save the
//! extractions, and stream any structural warnings to stderr.

mod cli;
mod error;
mod replacements;

use std::fs;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use graft_core::{MergeOptions, merge};

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let mut token_values = match &cli.replacements {
        Some(path) => replacements::load_replacements_file(path)?,
        None => Default::default(),
    };
    for entry in &cli.set {
        let (name, value) = replacements::parse_set_flag(entry)?;
        token_values.insert(name, value);
    }

    let source = fs::read_to_string(&cli.source)?;
    let destination = fs::read_to_string(&cli.destination)?;

    let source_name = cli
        .source_name
        .clone()
        .unwrap_or_else(|| cli.source.display().to_string());

    let options = MergeOptions {
        no_warn: cli.no_warn,
        source_name: Some(source_name),
        replacements: token_values,
    };

    let result = merge(&source, &destination, &options);

    // Warnings are diagnostics, not failures; the merge still completes
    // and well-formed regions are still replaced.
    let warnings = result.warnings_text();
    if !warnings.is_empty() {
        eprint!("{warnings}");
    }

    if cli.dry_run {
        print!("{}", result.destination);
        return Ok(());
    }

    fs::write(&cli.destination, &result.destination)?;
    if let Some(path) = &cli.extractions {
        fs::write(path, &result.extractions)?;
    }

    Ok(())
}
