// src/updater.rs
use crate::error::{AppError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// Historical release target; overridable via `--module`.
pub const DEFAULT_MODULE_PATH: &str = "lib/Google/GeoCoder/Smart.pm";

/// Single-quoted assignment only; other quoting styles are left alone.
const VERSION_PATTERN: &str = r"our \$VERSION = '([^']+)';";

/// Rewrite the first `our $VERSION = '...';` declaration in `source`.
///
/// Returns `None` when the declaration is absent so the caller can attach
/// the file path to the error. Everything outside the matched declaration
/// is preserved byte-for-byte.
pub fn substitute(source: &str, next_version: &str) -> Result<Option<String>> {
    let pattern = Regex::new(VERSION_PATTERN)?;
    if !pattern.is_match(source) {
        return Ok(None);
    }
    // NoExpand keeps the `$` in the replacement literal.
    let replacement = format!("our $VERSION = '{next_version}';");
    Ok(Some(
        pattern.replace(source, NoExpand(&replacement)).into_owned(),
    ))
}

/// Read `module`, rewrite its version declaration, and write it back.
///
/// No write happens on any failure path.
pub fn run(module: &Path, next_version: &str) -> Result<()> {
    if next_version.trim().is_empty() {
        return Err(AppError::MissingVersion);
    }

    let source = fs::read_to_string(module)?;
    let updated = substitute(&source, next_version)?
        .ok_or_else(|| AppError::PatternNotFound(module.to_path_buf()))?;
    fs::write(module, updated)?;
    Ok(())
}
