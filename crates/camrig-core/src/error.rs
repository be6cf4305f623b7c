use std::path::PathBuf;

/// Errors that can occur while persisting a camera configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("i/o failure on '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize camera configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConfigError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
