use path_absolutize::Absolutize;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PathGuardError;

/// Join untrusted segments onto a base directory, ensuring the result stays
/// within the base.
///
/// Segments with leading path separators are treated as base-relative, so an
/// absolute-looking segment cannot discard the base during joining. The base
/// and the joined candidate are canonicalized identically before the
/// containment check; neither is required to exist. The function never
/// creates, reads, or modifies any filesystem entry.
pub fn safe_join<S: AsRef<str>>(base: &Path, segments: &[S]) -> Result<PathBuf, PathGuardError> {
    let base = canonicalize_lenient(base).map_err(|source| PathGuardError::Resolve {
        path: base.to_path_buf(),
        source,
    })?;

    let mut joined = base.clone();
    for segment in segments {
        joined.push(strip_leading_separators(segment.as_ref()));
    }

    let candidate = canonicalize_lenient(&joined).map_err(|source| PathGuardError::Resolve {
        path: joined.clone(),
        source,
    })?;

    // starts_with compares whole components, so it accepts equality (the
    // empty-segments case) and never matches a sibling like /base2 for /base.
    if !candidate.starts_with(&base) {
        tracing::warn!(base = %base.display(), candidate = %candidate.display(), "path escapes base");
        return Err(PathGuardError::PathTraversal { base, candidate });
    }
    tracing::debug!(resolved = %candidate.display(), "candidate resolved within base");
    Ok(candidate)
}

fn strip_leading_separators(segment: &str) -> &str {
    segment.trim_start_matches(['/', '\\'])
}

/// Canonicalize a path that may not fully exist.
///
/// The path is first made absolute lexically (resolving `.` and `..`), then
/// the deepest existing ancestor is resolved through the filesystem so
/// symlinks cannot smuggle the result elsewhere; the non-existing tail is
/// re-appended unchanged.
fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute = path.absolutize()?.into_owned();
    let mut existing = absolute.as_path();
    let mut tail: Vec<OsString> = Vec::new();
    loop {
        match existing.canonicalize() {
            Ok(resolved) => {
                let mut out = resolved;
                for component in tail.iter().rev() {
                    out.push(component);
                }
                return Ok(out);
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                match (existing.parent(), existing.file_name()) {
                    (Some(parent), Some(name)) => {
                        tail.push(name.to_os_string());
                        existing = parent;
                    }
                    // Ran out of ancestors; keep the lexical form.
                    _ => return Ok(absolute),
                }
            }
            Err(err) => return Err(err),
        }
    }
}
