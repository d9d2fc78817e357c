//! I/O utility functions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling temp path: `prices.json` -> `prices.json.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace `path` with `content` without ever leaving a half-written file.
///
/// Writes `{name}.tmp` beside the target, then renames it over the target.
/// Used for price files, scenario lists and `--output` reports.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let staging = temp_path(path);
    fs::write(&staging, content)?;
    fs::rename(&staging, path)
}
