//! Command-line front end: turns a taxonomy file into an accordion
//! fragment, a JSON outline or a text outline.

use anyhow::{Context, Result};
use clap::Parser;
use labeltree::cli::{self, Args};
use std::fs;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "labeltree=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let output = cli::run(&args).with_context(|| format!("Failed to process {}", args.file.display()))?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{output}").context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
