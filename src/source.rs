// src/source.rs
//! Locating the Bitwarden export to convert
//!
//! Users drop the export next to the tool without renaming it, so the newest
//! `*.json` that parses as an export wins. Our own output files are ignored
//! so re-running the tool never converts its previous result.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde_json::Value;
use tracing::debug;
use walkdir::WalkDir;

use crate::consts::KNOWN_OUTPUT_NAMES;
use crate::error::{ConvertError, Result};

/// True when the file is a JSON object with an `items` key
pub fn looks_like_bitwarden_json<P: AsRef<Path>>(path: P) -> bool {
    let Ok(content) = fs::read_to_string(path.as_ref()) else {
        return false;
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map.contains_key("items"),
        _ => false,
    }
}

/// Newest Bitwarden export directly inside `dir`, if any
pub fn pick_source_json<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    let mut candidates: Vec<(SystemTime, PathBuf)> = WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_candidate_name(e.path()))
        .map(|e| {
            let modified = e
                .metadata()
                .ok()
                .and_then(|m| m.modified().ok())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, e.into_path())
        })
        .collect();

    candidates.sort_by_key(|(modified, _)| Reverse(*modified));

    candidates.into_iter().map(|(_, path)| path).find(|path| {
        let ok = looks_like_bitwarden_json(path);
        if !ok {
            debug!("{} is not a Bitwarden export, skipping", path.display());
        }
        ok
    })
}

/// Like [`pick_source_json`], but a missing export is an error
pub fn require_source_json<P: AsRef<Path>>(dir: P) -> Result<PathBuf> {
    let dir = dir.as_ref();
    pick_source_json(dir).ok_or_else(|| ConvertError::NoSource {
        dir: dir.to_path_buf(),
    })
}

fn is_candidate_name(path: &Path) -> bool {
    let is_json = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        return false;
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    !KNOWN_OUTPUT_NAMES.contains(&name.as_str())
}
