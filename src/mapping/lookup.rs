//! Folder / collection id → display name

use std::collections::HashMap;

use crate::bitwarden::ExportDocument;

/// Build the id → name lookup; collections win over folders with the same id
pub fn build_id_to_name(doc: &ExportDocument) -> HashMap<String, String> {
    let mut id_to_name = HashMap::new();

    for collection in &doc.collections {
        if let Some(id) = collection.id.as_deref().filter(|id| !id.is_empty()) {
            id_to_name.insert(
                id.to_owned(),
                collection.name.clone().unwrap_or_default(),
            );
        }
    }

    for folder in &doc.folders {
        if let Some(id) = folder.id.as_deref().filter(|id| !id.is_empty()) {
            id_to_name
                .entry(id.to_owned())
                .or_insert_with(|| folder.name.clone().unwrap_or_default());
        }
    }

    id_to_name
}
