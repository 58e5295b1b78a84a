// src/bitwarden/mod.rs
//! Bitwarden / Vaultwarden JSON export model
//!
//! Only the parts the Keeper mapping reads are modelled. All fields are
//! optional and shape-tolerant; see [`lenient`].

use serde::Deserialize;
use serde_json::Value;

use crate::consts::BW_TYPE_LOGIN;

pub mod lenient;

/// Top level of an unencrypted `bw export --format json` file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportDocument {
    #[serde(default, deserialize_with = "lenient::seq_default")]
    pub items: Vec<Item>,
    #[serde(default, deserialize_with = "lenient::seq_skip")]
    pub collections: Vec<Collection>,
    #[serde(default, deserialize_with = "lenient::seq_skip")]
    pub folders: Vec<Folder>,
}

/// A personal folder; organization exports use the same `{id, name}` shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Folder {
    /// Numeric ids from hand-built files are keyed by their decimal form
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

pub type Collection = Folder;

/// One vault entry: login, secure note, card or identity
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub notes: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::integer")]
    pub item_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub login: Option<Login>,
    #[serde(default, deserialize_with = "lenient::seq_skip")]
    pub fields: Vec<CustomField>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub folder_id: Option<String>,
    /// Raw ids; only strings and non-zero numbers can resolve
    #[serde(default, deserialize_with = "lenient::values")]
    pub collection_ids: Vec<Value>,
    #[serde(default)]
    pub deleted_date: Value,
}

impl Item {
    /// Soft-deleted items sit in the trash and are not converted
    pub fn is_deleted(&self) -> bool {
        lenient::is_truthy(&self.deleted_date)
    }

    pub fn is_login(&self) -> bool {
        self.item_type == Some(BW_TYPE_LOGIN)
    }

    /// Trimmed TOTP secret, if any
    pub fn totp_secret(&self) -> Option<&str> {
        self.login
            .as_ref()
            .and_then(|login| login.totp.as_deref())
            .map(str::trim)
            .filter(|secret| !secret.is_empty())
    }

    /// First entry of `collectionIds`, in the same textual form as folder ids
    pub fn first_collection_id(&self) -> Option<String> {
        self.collection_ids.first().and_then(lenient::value_text)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Login {
    #[serde(default, deserialize_with = "lenient::string")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub password: Option<String>,
    /// `{"match": null, "uri": "..."}` objects, or bare strings in hand-edited files
    #[serde(default, deserialize_with = "lenient::values")]
    pub uris: Vec<Value>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub totp: Option<String>,
}

/// User-defined field; `value` is kept as raw JSON and copied verbatim
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomField {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Value,
    /// 0 = text, 1 = hidden, 2 = boolean, 3 = linked
    #[serde(rename = "type", default, deserialize_with = "lenient::integer")]
    pub field_type: Option<i64>,
}
