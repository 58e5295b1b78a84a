// tests/support.rs
//! Test utilities: export fixtures on disk

use serde_json::{json, Value};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temp directory that holds export files for one test
#[allow(dead_code)]
pub struct ExportDir {
    dir: TempDir,
}

#[allow(dead_code)]
impl ExportDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `value` as `name`, with its mtime set `age_secs` into the past
    pub fn write_json(&self, name: &str, value: &Value, age_secs: u64) -> PathBuf {
        self.write_raw(name, &serde_json::to_string(value).unwrap(), age_secs)
    }

    pub fn write_raw(&self, name: &str, content: &str, age_secs: u64) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        let mtime = SystemTime::now() - Duration::from_secs(age_secs);
        File::options()
            .write(true)
            .open(&path)
            .and_then(|f| f.set_modified(mtime))
            .expect("set mtime");
        path
    }
}

impl Default for ExportDir {
    fn default() -> Self {
        Self::new()
    }
}

/// A small but complete personal + organization export
#[allow(dead_code)]
pub fn sample_export() -> Value {
    json!({
        "encrypted": false,
        "collections": [
            {"id": "col-shared", "organizationId": "org", "name": "Shared/Infra"},
            {"id": "dup", "name": "From Collection"}
        ],
        "folders": [
            {"id": "fold-work", "name": "Work/Finance"},
            {"id": "dup", "name": "From Folder"}
        ],
        "items": [
            {
                "id": "1",
                "type": 1,
                "name": "Site",
                "notes": "main account",
                "folderId": "fold-work",
                "login": {
                    "username": "user",
                    "password": "p@ss",
                    "uris": [{"match": null, "uri": "example.com"}],
                    "totp": "ABC123"
                },
                "fields": [
                    {"name": "PIN", "value": "1234", "type": 1},
                    {"name": "Hint", "value": "café", "type": 0}
                ],
                "collectionIds": null
            },
            {
                "id": "2",
                "type": 2,
                "name": "Wifi",
                "notes": "password on the router",
                "secureNote": {"type": 0},
                "collectionIds": ["col-shared"]
            },
            {
                "id": "3",
                "type": 3,
                "name": "Visa",
                "card": {"number": "4111111111111111"},
                "folderId": "dup"
            },
            {
                "id": "4",
                "type": 1,
                "name": "Old login",
                "login": {"username": "gone"},
                "deletedDate": "2024-03-01T10:00:00.000Z"
            },
            {
                "id": "5",
                "type": 4,
                "name": "Passport",
                "identity": {"firstName": "Ana"}
            }
        ]
    })
}
