//! Bitwarden custom fields → Keeper `custom_fields`

use serde_json::{Map, Value};

use crate::bitwarden::CustomField;
use crate::consts::{BW_FIELD_HIDDEN, CUSTOM_FIELD_SUFFIX};

/// Map custom fields to `$text:{name}:1` / `$secret:{name}:1` keys
///
/// Fields without a value are skipped. Values are copied as-is, so boolean
/// fields stay JSON strings exactly as Bitwarden exported them.
pub fn map_custom_fields(fields: &[CustomField]) -> Map<String, Value> {
    let mut result = Map::new();

    for field in fields {
        if field.value.is_null() {
            continue;
        }
        let kind = if field.field_type == Some(BW_FIELD_HIDDEN) {
            "secret"
        } else {
            "text"
        };
        let key = format!("${kind}:{}{CUSTOM_FIELD_SUFFIX}", field_name(field));
        result.insert(key, field.value.clone());
    }

    result
}

// Unnamed fields fall back to their type number, then to "field"
fn field_name(field: &CustomField) -> String {
    match (field.name.as_deref(), field.field_type) {
        (Some(name), _) if !name.is_empty() => name.to_owned(),
        (_, Some(kind)) if kind != 0 => kind.to_string(),
        _ => "field".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Vec<CustomField> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn hidden_fields_become_secrets() {
        let map = map_custom_fields(&fields(json!([
            {"name": "PIN", "value": "1234", "type": 1},
            {"name": "Recovery", "value": "abc", "type": 0},
            {"name": "Hint", "value": "blue"}
        ])));
        assert_eq!(map["$secret:PIN:1"], "1234");
        assert_eq!(map["$text:Recovery:1"], "abc");
        assert_eq!(map["$text:Hint:1"], "blue");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn null_values_are_skipped_but_empty_strings_kept() {
        let map = map_custom_fields(&fields(json!([
            {"name": "a", "value": null},
            {"name": "b"},
            {"name": "c", "value": ""}
        ])));
        assert_eq!(map.len(), 1);
        assert_eq!(map["$text:c:1"], "");
    }

    #[test]
    fn unnamed_fields_use_type_then_literal() {
        let map = map_custom_fields(&fields(json!([
            {"value": "x", "type": 1},
            {"name": "", "value": "y", "type": 0},
            {"value": "z", "type": 2}
        ])));
        assert_eq!(map["$secret:1:1"], "x");
        assert_eq!(map["$text:field:1"], "y");
        assert_eq!(map["$text:2:1"], "z");
    }

    #[test]
    fn numeric_names_and_float_markers_keep_their_meaning() {
        let map = map_custom_fields(&fields(json!([
            {"name": 42, "value": "a", "type": 0},
            {"name": "pin", "value": "b", "type": 1.0},
            {"name": 0, "value": "c", "type": 0}
        ])));
        assert_eq!(map["$text:42:1"], "a");
        assert_eq!(map["$secret:pin:1"], "b");
        assert_eq!(map["$text:field:1"], "c");
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn keys_keep_source_order_and_later_duplicates_win() {
        let map = map_custom_fields(&fields(json!([
            {"name": "b", "value": "1"},
            {"name": "a", "value": "2"},
            {"name": "b", "value": "3"}
        ])));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["$text:b:1", "$text:a:1"]);
        assert_eq!(map["$text:b:1"], "3");
    }

    #[test]
    fn no_fields_no_entries() {
        assert!(map_custom_fields(&[]).is_empty());
    }
}
