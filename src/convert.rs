// src/convert.rs
//! File-level conversion: read export → map → write import file

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::info;

use crate::bitwarden::ExportDocument;
use crate::error::{ConvertError, Result};
use crate::export::write_import_file;
use crate::mapping::convert_document;
use crate::source::require_source_json;

/// Read and parse a Bitwarden export; the top level must be a JSON object
pub fn parse_source<P: AsRef<Path>>(path: P) -> Result<ExportDocument> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_err = |source: serde_json::Error| ConvertError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: Value = serde_json::from_str(&content).map_err(parse_err)?;
    if !value.is_object() {
        return Err(parse_err(<serde_json::Error as serde::de::Error>::custom(
            "top level must be a JSON object",
        )));
    }
    serde_json::from_value(value).map_err(parse_err)
}

/// Convert one export file; returns the number of records written
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(src: P, out: Q) -> Result<usize> {
    let src = src.as_ref();
    let doc = parse_source(src)?;
    info!("Loaded {} item(s) from {}", doc.items.len(), src.display());

    let import = convert_document(&doc);
    let skipped = doc.items.len() - import.records.len();
    if skipped > 0 {
        info!("Skipped {skipped} deleted item(s)");
    }

    write_import_file(out, &import)?;
    Ok(import.records.len())
}

/// Pick the newest export in `dir` and convert it
pub fn convert_dir<P: AsRef<Path>, Q: AsRef<Path>>(dir: P, out: Q) -> Result<(PathBuf, usize)> {
    let src = require_source_json(dir)?;
    info!("Using source {}", src.display());
    let count = convert_file(&src, out)?;
    Ok((src, count))
}
