//! # team-logos-cache - build-time generator for the team logo lookup list
//!
//! The front end only builds a logo URL for teams whose name appears in
//! `src/cache/teamLogos.json`, falling back to `_noLogo.png` otherwise. This
//! crate regenerates that list from the logo folder.
//!
//! ## Pipeline
//!
//! 1. `lister`: read the entry names of `public/assets/icons/team-logos`
//! 2. `names`: cut each name at the first `.png`, drop `_noLogo` and empty
//!    names, sort by code point
//! 3. `cache_writer`: write the compact JSON array over the cache file
//!
//! `pipeline::run` ties the three together and is what the
//! `populate-team-logos-cache` binary calls.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use team_logos_cache::{config::CacheConfig, pipeline};
//!
//! let report = pipeline::run(&CacheConfig::default())?;
//! println!("{} teams cached", report.teams.len());
//! # Ok::<(), team_logos_cache::error::CacheError>(())
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`error::CacheError`], which names the path that
//! could not be read or written. The binary reports it through `color_eyre`.

pub mod cache_writer;
pub mod config;
pub mod error;
pub mod lister;
pub mod names;
pub mod pipeline;

pub use config::CacheConfig;
pub use error::CacheError;
pub use names::TeamName;
pub use pipeline::{run, CacheReport};
