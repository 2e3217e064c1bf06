//! Traversal-safe path resolution toolkit.
//!
//! Resolves untrusted path segments against a trusted base directory,
//! rejecting any result that would escape it, checks filenames against an
//! extension allowlist, and idempotently creates runtime directories.

pub mod allowlist;
pub mod cli;
pub mod engine;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod model;
pub mod reporter;
pub mod resolve;
pub mod runtime_dirs;

pub use allowlist::{DEFAULT_ALLOWED_EXTENSIONS, is_extension_allowed};
pub use error::PathGuardError;
pub use resolve::safe_join;
pub use runtime_dirs::{EXPORTS_DIR, UPLOADS_DIR, ensure_dirs, ensure_runtime_dirs};
