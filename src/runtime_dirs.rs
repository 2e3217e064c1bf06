use std::io;
use std::path::{Path, PathBuf};

use crate::error::PathGuardError;
use crate::resolve::safe_join;

/// Default runtime directory names.
pub const UPLOADS_DIR: &str = "uploads";
pub const EXPORTS_DIR: &str = "exports";

/// Idempotently create subdirectories under a base path.
///
/// Each name is joined traversal-safely onto the base, then created along
/// with any missing parents. A directory that already exists, including one
/// created concurrently by another process, is treated as success.
pub fn ensure_dirs<S: AsRef<str>>(
    base: &Path,
    names: &[S],
) -> Result<Vec<PathBuf>, PathGuardError> {
    let mut created = Vec::with_capacity(names.len());
    for name in names {
        let dir = safe_join(base, &[name.as_ref()])?;
        create_dir_idempotent(&dir).map_err(|source| PathGuardError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        created.push(dir);
    }
    Ok(created)
}

/// Create the default `uploads` and `exports` directories under a base.
pub fn ensure_runtime_dirs(base: &Path) -> Result<(PathBuf, PathBuf), PathGuardError> {
    let mut dirs = ensure_dirs(base, &[UPLOADS_DIR, EXPORTS_DIR])?;
    let exports = dirs.pop().expect("two dirs requested");
    let uploads = dirs.pop().expect("two dirs requested");
    Ok((uploads, exports))
}

fn create_dir_idempotent(dir: &Path) -> io::Result<()> {
    match std::fs::create_dir_all(dir) {
        Ok(()) => Ok(()),
        // create_dir_all already tolerates existing directories; this covers
        // a lost race against concurrent creation of the final component.
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let first = ensure_dirs(dir.path(), &["uploads", "exports"]).unwrap();
        let second = ensure_dirs(dir.path(), &["uploads", "exports"]).unwrap();
        assert_eq!(first, second);
        for path in &first {
            assert!(path.is_dir());
        }
    }

    #[test]
    fn intermediate_parents_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let created = ensure_dirs(dir.path(), &["a/b/c"]).unwrap();
        assert!(created[0].ends_with("a/b/c"));
        assert!(created[0].is_dir());
    }

    #[test]
    fn traversal_in_name_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_dirs(dir.path(), &["../outside"]).unwrap_err();
        assert!(matches!(err, PathGuardError::PathTraversal { .. }));
        assert!(!dir.path().parent().unwrap().join("outside").exists());
    }

    #[test]
    fn runtime_dirs_use_default_names() {
        let dir = tempfile::tempdir().unwrap();
        let (uploads, exports) = ensure_runtime_dirs(dir.path()).unwrap();
        assert!(uploads.ends_with(UPLOADS_DIR));
        assert!(exports.ends_with(EXPORTS_DIR));
        assert!(uploads.is_dir() && exports.is_dir());

        // Second call must not fail.
        ensure_runtime_dirs(dir.path()).unwrap();
    }
}
