//! Shared helpers for the integration tests.

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;
use tempfile::TempDir;

/// The temporary directory's path as a UTF-8 path.
pub fn utf8_path(dir: &TempDir) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
        .map_err(|path| anyhow!("temporary directory is not utf-8: {}", path.display()))
}
