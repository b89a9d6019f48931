//! qwerty-walk - list dictionary words typeable along adjacent keys

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};

use qwerty_walk::{
    config::Config,
    output::{self, OutputFormat, Palette},
    report::ScanReport,
    scan::Scanner,
    QWERTY,
};

use crate::cli::Cli;

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    cli.apply_to(&mut config);
    Ok(config)
}

/// Logger honoring `RUST_LOG`, with scan diagnostics raised for `--explain`
fn log_builder(explain: bool) -> env_logger::Builder {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if explain {
        builder.filter_module("qwerty_walk::scan", log::LevelFilter::Debug);
    }
    builder
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    log_builder(cli.explain).init();

    let config = load_config(&cli)?;
    log::info!("Using word list {}", config.scan.dictionary.display());

    let violations = QWERTY.symmetry_violations();
    if !violations.is_empty() {
        log::warn!("Adjacency table is not symmetric: {:?}", violations);
    }

    let options = cli.scan_options(&config);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let list_matches = config.output.format == OutputFormat::Text && config.output.list_matches;

    let mut write_error = None;
    let summary = Scanner::new(&QWERTY, options)
        .scan_path(&config.scan.dictionary, |word| {
            if list_matches && write_error.is_none() {
                if let Err(e) = writeln!(out, "{}", word) {
                    write_error = Some(e);
                }
            }
        })
        .context("Word list scan failed")?;
    if let Some(e) = write_error {
        return Err(e).context("Failed to write matching words");
    }

    let report = ScanReport::new(&config.scan.dictionary, &summary);
    match config.output.format {
        OutputFormat::Text => {
            output::write_summary(&mut out, &summary, Palette::new(config.output.color))?
        }
        OutputFormat::Json => output::write_json(&mut out, &report)?,
    }
    out.flush()?;

    if let Some(path) = &cli.report {
        report
            .export_json(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        log::info!("Report written to {}", path.display());
    }

    Ok(())
}
