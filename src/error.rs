use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the resolver and directory helpers.
#[derive(Debug, Error)]
pub enum PathGuardError {
    /// The resolved candidate landed outside the base directory.
    #[error("path traversal detected: {} escapes {}", .candidate.display(), .base.display())]
    PathTraversal { base: PathBuf, candidate: PathBuf },

    /// The base or candidate could not be resolved against the filesystem
    /// (missing entries are handled leniently and never reach this variant).
    #[error("failed to resolve {}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory creation failed for a reason other than already existing.
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
