//! End-to-end cache population: list the logo directory, derive team names,
//! write the cache file.

use crate::cache_writer::write_cache;
use crate::config::CacheConfig;
use crate::error::CacheError;
use crate::lister::list_logo_files;
use crate::names::{derive_team_names, TeamName};

/// Summary of a completed cache run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheReport {
    /// Entries found in the logo directory
    pub entries_read: usize,
    /// Entries dropped as empty or as the no-logo sentinel
    pub entries_skipped: usize,
    /// Team names written, in cache order
    pub teams: Vec<TeamName>,
}

/// Regenerate the cache described by `config`.
///
/// Nothing is written if the logo directory cannot be read.
pub fn run(config: &CacheConfig) -> Result<CacheReport, CacheError> {
    log::info!("Reading team logos from {}", config.logo_dir.display());
    let filenames = list_logo_files(&config.logo_dir)?;

    let teams = derive_team_names(&filenames, &config.suffix, &config.sentinel);

    log::info!("Writing {} team names to {}", teams.len(), config.cache_file.display());
    write_cache(&config.cache_file, &teams)?;

    Ok(CacheReport {
        entries_read: filenames.len(),
        entries_skipped: filenames.len() - teams.len(),
        teams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_counts() {
        let dir = TempDir::new().unwrap();
        let logos = dir.path().join("team-logos");
        fs::create_dir(&logos).unwrap();
        for name in ["lakers.png", "_noLogo.png", "celtics.png", ".png"] {
            fs::write(logos.join(name), b"").unwrap();
        }
        let config = CacheConfig::with_paths(&logos, dir.path().join("teamLogos.json"));

        let report = run(&config).unwrap();

        assert_eq!(report.entries_read, 4);
        assert_eq!(report.entries_skipped, 2);
        assert_eq!(report.teams, vec![TeamName::from("celtics"), TeamName::from("lakers")]);
    }
}
