use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while resolving editions and pages from the mushaf tree.
///
/// The variants split into expected absences (`RootNotFound`,
/// `EditionNotFound`, `PageNotFound`), which map to HTTP 404, and unexpected
/// storage failures (`Io`), which map to HTTP 500.
#[derive(Debug, Clone, Error)]
pub enum MushafError {
    /// The configured root directory does not exist
    #[error("No mushaf directory found")]
    RootNotFound(PathBuf),

    /// No subdirectory of the root has this name
    #[error("Mushaf type '{edition}' not found")]
    EditionNotFound { edition: String },

    /// No candidate file exists for the page in this edition
    #[error("Page {page} not found in {edition}")]
    PageNotFound { edition: String, page: String },

    /// Any other filesystem failure (permission denied, disk error, ...)
    #[error("{message}: '{}'", .path.display())]
    Io { path: PathBuf, message: String },
}

impl MushafError {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        MushafError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Whether this error describes an expected absence rather than a failure.
    pub fn is_not_found(&self) -> bool {
        !matches!(self, MushafError::Io { .. })
    }
}
