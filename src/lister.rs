//! Directory listing for the logo folder.

use std::fs;
use std::path::Path;

use crate::error::CacheError;

/// List the entry names of `dir`, in whatever order the filesystem returns them.
///
/// Entries are not filtered by kind: a subdirectory shows up by name and is
/// not descended into. Names that are not valid UTF-8 are converted lossily.
pub fn list_logo_files(dir: &Path) -> Result<Vec<String>, CacheError> {
    let read_err = |source| CacheError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                let lossy = raw.to_string_lossy().into_owned();
                log::warn!("Logo filename is not valid UTF-8, using '{}'", lossy);
                lossy
            }
        };
        names.push(name);
    }

    log::debug!("Read {} entries from {}", names.len(), dir.display());
    Ok(names)
}
