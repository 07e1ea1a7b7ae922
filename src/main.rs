use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;

use team_logos_cache::{pipeline, CacheConfig};

/// Regenerate src/cache/teamLogos.json from public/assets/icons/team-logos
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = CacheConfig::default();
    let report = pipeline::run(&config)
        .wrap_err("Failed to populate team logo cache")?;

    info!(
        "Cached {} team names ({} of {} directory entries skipped)",
        report.teams.len(),
        report.entries_skipped,
        report.entries_read
    );
    Ok(())
}
