//! Fixed locations and naming rules for the team logo cache.
//!
//! Nothing here is read from disk or the command line. The binary always runs
//! with [`CacheConfig::default`]; the struct exists so the pipeline can be
//! pointed at other directories from tests.

use std::path::PathBuf;

/// Directory holding one `<team>.png` per team
pub const LOGO_DIR: &str = "./public/assets/icons/team-logos";

/// JSON array consumed by the front end
pub const CACHE_FILE: &str = "./src/cache/teamLogos.json";

/// Suffix removed from every logo filename
pub const LOGO_SUFFIX: &str = ".png";

/// Placeholder logo shown when a team has none; never listed as a team
pub const NO_LOGO_SENTINEL: &str = "_noLogo";

/// Paths and naming rules used by a single cache run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    pub logo_dir: PathBuf,
    pub cache_file: PathBuf,
    pub suffix: String,
    pub sentinel: String,
}

impl CacheConfig {
    /// Same naming rules as the default, reading from and writing to other paths
    pub fn with_paths(logo_dir: impl Into<PathBuf>, cache_file: impl Into<PathBuf>) -> Self {
        Self {
            logo_dir: logo_dir.into(),
            cache_file: cache_file.into(),
            ..Self::default()
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            logo_dir: PathBuf::from(LOGO_DIR),
            cache_file: PathBuf::from(CACHE_FILE),
            suffix: LOGO_SUFFIX.to_string(),
            sentinel: NO_LOGO_SENTINEL.to_string(),
        }
    }
}
