use std::path::Path;

/// Default document/image extension set.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] =
    &[".txt", ".md", ".pdf", ".json", ".png", ".jpg", ".jpeg"];

/// Check a filename's extension against an allowlist (case-insensitive).
///
/// The extension is the final `.`-delimited suffix; filenames without one are
/// always rejected. Allowlist entries may be given with or without a leading
/// dot and in any case.
pub fn is_extension_allowed<S: AsRef<str>>(filename: &str, allowlist: &[S]) -> bool {
    let Some(ext) = Path::new(filename).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_lowercase());
    allowlist
        .iter()
        .any(|entry| normalize_extension(entry.as_ref()) == ext)
}

/// Lowercase an allowlist entry and ensure a leading dot.
pub fn normalize_extension(entry: &str) -> String {
    let lower = entry.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
