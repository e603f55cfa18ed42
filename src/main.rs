mod analysis;
mod cli;
mod report;
mod svg;

use analysis::run_check;
use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use report::render_summary;
use secantx::save_snapshot_file;
use std::fs;
use svg::{render_cross_section, render_shafts};
use tracing::info;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // Defaults, then the snapshot, then the flags. Anything out of range stops
    // here before the geometry is touched.
    let parameters = cli.resolve_parameters()?;

    // Overlap at top and base, rigidity where the piles still touch, and the
    // pile positions for the plots.
    let summary = run_check(&parameters, cli.seed).context("secant pile wall check failed")?;
    println!("{}", render_summary(&summary));

    if let Some(path) = &cli.svg {
        fs::write(path, render_cross_section(&summary.scene, &parameters.wall_name))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "cross-section written");
    }
    if let Some(path) = &cli.svg_3d {
        fs::write(path, render_shafts(&summary.scene, &parameters.wall_name))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "shaft view written");
    }
    if let Some(path) = &cli.save {
        save_snapshot_file(path, &parameters)
            .with_context(|| format!("failed to save snapshot {}", path.display()))?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
