//! One Bitwarden item → one Keeper record

use std::collections::HashMap;

use serde_json::Value;

use crate::bitwarden::Item;
use crate::consts::ONE_TIME_CODE_KEY;
use crate::keeper::{FolderRef, LoginFields, Record, RecordType};

use super::fields::map_custom_fields;
use super::folder::to_keeper_folder_path;
use super::totp::otpauth_uri;
use super::url::first_uri;

/// Map a single (non-deleted) item
///
/// Cards and identities have no Keeper counterpart in the import format and
/// become notes; their custom fields and TOTP still carry over.
pub fn item_to_record(item: &Item, id_to_name: &HashMap<String, String>) -> Record {
    let title = item.name.clone().unwrap_or_default();
    let notes = item.notes.clone().unwrap_or_default();
    let record_type = if item.is_login() {
        RecordType::Login
    } else {
        RecordType::Note
    };

    let login = item
        .login
        .as_ref()
        .map(|login| LoginFields {
            login: login.username.clone().unwrap_or_default(),
            password: login.password.clone().unwrap_or_default(),
            login_url: first_uri(&login.uris),
        })
        .unwrap_or_default();

    let mut custom_fields = map_custom_fields(&item.fields);
    if let Some(secret) = item.totp_secret() {
        custom_fields.insert(
            ONE_TIME_CODE_KEY.to_owned(),
            Value::String(otpauth_uri(secret, &title, &login.login, &login.login_url)),
        );
    }

    let folders = resolve_folder_name(item, id_to_name)
        .map(|name| {
            vec![FolderRef {
                folder: to_keeper_folder_path(name),
            }]
        })
        .unwrap_or_default();

    Record {
        title,
        notes,
        record_type,
        custom_fields,
        login: (record_type == RecordType::Login).then_some(login),
        folders,
    }
}

/// `folderId` first; only the first collection is consulted as a fallback
fn resolve_folder_name<'a>(
    item: &Item,
    id_to_name: &'a HashMap<String, String>,
) -> Option<&'a str> {
    let lookup = move |id: &str| {
        id_to_name
            .get(id)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    };

    item.folder_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .and_then(lookup)
        .or_else(|| item.first_collection_id().and_then(|id| lookup(id.as_str())))
}
