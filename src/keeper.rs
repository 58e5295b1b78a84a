// src/keeper.rs
//! Keeper JSON import model
//!
//! Field order of these structs is the key order of the written file.

use serde::Serialize;
use serde_json::{Map, Value};

/// The whole import file
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportFile {
    /// Shared folders are never created by the converter
    pub shared_folders: Vec<Value>,
    pub records: Vec<Record>,
}

impl ImportFile {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            shared_folders: Vec::new(),
            records,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Login,
    Note,
}

/// One Keeper record
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    pub title: String,
    pub notes: String,
    #[serde(rename = "$type")]
    pub record_type: RecordType,
    /// `$text:…:1` / `$secret:…:1` / `$oneTimeCode::1`, in insertion order
    pub custom_fields: Map<String, Value>,
    /// Present exactly when `record_type` is `Login`
    #[serde(flatten)]
    pub login: Option<LoginFields>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<FolderRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFields {
    pub login: String,
    pub password: String,
    pub login_url: String,
}

/// Single-entry folder hint, e.g. `{"folder": "Work\\Finance"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderRef {
    pub folder: String,
}
