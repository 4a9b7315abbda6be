use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::IntoAppError;
use std::fs;

const LOG_TARGET: &str = "   reports";

/// Path of the single backup generation kept for `path`: `<stem>_old.<ext>`.
#[must_use]
pub fn backup_path(path: &Utf8Path) -> Utf8PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{stem}_old.{ext}"),
        None => format!("{stem}_old"),
    };
    path.with_file_name(file_name)
}

/// Move an existing file at `path` aside so a fresh report can take its place.
///
/// A previous backup is replaced. Returns the backup path when a file was moved.
pub fn backup_existing(path: &Utf8Path) -> Result<Option<Utf8PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }

    let backup = backup_path(path);
    if backup.exists() {
        fs::remove_file(&backup).into_app_err_with(|| format!("removing old backup '{backup}'"))?;
    }

    fs::rename(path, &backup).into_app_err_with(|| format!("moving '{path}' to '{backup}'"))?;
    log::info!(target: LOG_TARGET, "Moved existing report '{path}' to '{backup}'");

    Ok(Some(backup))
}
