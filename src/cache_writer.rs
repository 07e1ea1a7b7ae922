//! Serialization of team names to the JSON cache file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::CacheError;
use crate::names::TeamName;

/// Mode requested for a cache file that does not exist yet; the umask applies
#[cfg(unix)]
const NEW_CACHE_MODE: u32 = 0o644;

/// Encode team names as a compact JSON array, e.g. `["celtics","lakers"]`
pub fn to_cache_json(teams: &[TeamName]) -> Result<String, CacheError> {
    Ok(serde_json::to_string(teams)?)
}

/// Replace `cache_file` with the JSON array of `teams`.
///
/// The array is written to a temporary file next to `cache_file` and renamed
/// over it, so the destination either holds the complete new array or is
/// left untouched. An existing cache keeps its permissions; a new one gets
/// `0644` minus the umask. The parent directory must already exist.
pub fn write_cache(cache_file: &Path, teams: &[TeamName]) -> Result<(), CacheError> {
    let json = to_cache_json(teams)?;

    let write_err = |source| CacheError::WriteCache {
        path: cache_file.to_path_buf(),
        source,
    };

    let parent = match cache_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = create_temp_cache(parent, cache_file).map_err(write_err)?;
    tmp.write_all(json.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(cache_file).map_err(|e| write_err(e.error))?;

    log::debug!("Wrote {} bytes to {}", json.len(), cache_file.display());
    Ok(())
}

/// Temporary file in `parent` carrying the permissions `cache_file` should end up with
fn create_temp_cache(parent: &Path, cache_file: &Path) -> io::Result<NamedTempFile> {
    let existing = fs::metadata(cache_file).ok().map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_CACHE_MODE));
    }
    let tmp = builder.tempfile_in(parent)?;

    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions)?;
    }
    Ok(tmp)
}
