// src/export/json.rs
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{ConvertError, Result};
use crate::keeper::ImportFile;

/// Write the Keeper import file as pretty JSON (2-space indent, UTF-8 kept literal).
///
/// The document goes to a temp file next to `path` and is renamed into place,
/// so a failed run never leaves a half-written import file behind.
pub fn write_import_file<P: AsRef<Path>>(path: P, import: &ImportFile) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: io::Error| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    write_pretty(tmp.as_file_mut(), import, path)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    info!(
        "Wrote {} record(s) → {}",
        import.records.len(),
        path.display()
    );
    Ok(())
}

/// Encode in memory first, so only real encoding problems are `Serialize`
/// and every failure of `writer` is reported as a `Write` on `path`.
fn write_pretty<W: Write>(mut writer: W, import: &ImportFile, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(import)?;
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|source| ConvertError::Write {
            path: path.to_path_buf(),
            source,
        })
}
