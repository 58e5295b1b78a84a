// src/mapping/mod.rs
//! Bitwarden → Keeper record mapping
//!
//! Pure functions only: no I/O, no logging above `debug`.

pub mod fields;
pub mod folder;
pub mod lookup;
pub mod record;
pub mod totp;
pub mod url;

pub use fields::map_custom_fields;
pub use folder::to_keeper_folder_path;
pub use lookup::build_id_to_name;
pub use record::item_to_record;
pub use totp::otpauth_uri;
pub use url::{first_uri, hostname, normalize_url};

use tracing::debug;

use crate::bitwarden::ExportDocument;
use crate::keeper::ImportFile;

/// Convert a parsed export into a Keeper import document, skipping trashed items
pub fn convert_document(doc: &ExportDocument) -> ImportFile {
    let id_to_name = build_id_to_name(doc);

    let records = doc
        .items
        .iter()
        .filter(|item| {
            if item.is_deleted() {
                debug!(
                    "skipping deleted item {:?}",
                    item.name.as_deref().unwrap_or_default()
                );
                return false;
            }
            true
        })
        .map(|item| item_to_record(item, &id_to_name))
        .collect();

    ImportFile::new(records)
}
