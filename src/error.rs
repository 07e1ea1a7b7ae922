//! Error types for cache generation.

use std::path::PathBuf;

/// Errors that can occur while populating the team logo cache
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Failed to read logo directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write cache file '{}'", path.display())]
    WriteCache {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize team names to JSON")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_messages_name_the_path() {
        let err = CacheError::ReadDir {
            path: PathBuf::from("./public/assets/icons/team-logos"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read logo directory './public/assets/icons/team-logos'"
        );

        let err = CacheError::WriteCache {
            path: PathBuf::from("./src/cache/teamLogos.json"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("./src/cache/teamLogos.json"));
    }
}
