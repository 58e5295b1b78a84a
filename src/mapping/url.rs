//! Login URL helpers

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::bitwarden::lenient::is_truthy;

// RFC 3986 scheme followed by "://"
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").expect("valid scheme regex"));

static AUTHORITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://([^/]+)").expect("valid authority regex")
});

/// Prefix `https://` unless the string already carries a scheme
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() || SCHEME_PREFIX.is_match(url) {
        return url.to_owned();
    }
    format!("https://{url}")
}

/// First usable entry of a login's `uris`, normalized; empty if none
pub fn first_uri(uris: &[Value]) -> String {
    uris.iter()
        .find_map(uri_text)
        .map(|uri| normalize_url(&uri))
        .unwrap_or_default()
}

// Falsy `uri` values (null, "", 0, false) are skipped
fn uri_text(entry: &Value) -> Option<String> {
    match entry {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(map) => match map.get("uri")? {
            uri if !is_truthy(uri) => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(_) => Some("True".to_owned()),
            _ => None,
        },
        _ => None,
    }
}

/// Authority between `scheme://` and the next `/`
pub fn hostname(url: &str) -> Option<&str> {
    AUTHORITY
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("example.com/login?x=1"), "https://example.com/login?x=1");
    }

    #[test]
    fn existing_scheme_is_untouched_and_idempotent() {
        for url in ["http://a.b", "ftp://files.example", "android://com.app", "git+ssh://h/r"] {
            assert_eq!(normalize_url(url), url);
        }
        let once = normalize_url("example.com");
        assert_eq!(normalize_url(&once), once);
    }

    #[test]
    fn empty_url_stays_empty() {
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn scheme_must_start_with_a_letter() {
        assert_eq!(normalize_url("1http://x"), "https://1http://x");
    }

    #[test]
    fn first_uri_skips_empty_and_odd_entries() {
        let uris = vec![
            json!({"match": null, "uri": null}),
            json!({"uri": ""}),
            json!(42),
            json!("   "),
            json!({"uri": "later.example"}),
        ];
        // whitespace is not trimmed, so the bare "   " entry wins
        assert_eq!(first_uri(&uris), "https://   ");

        let uris = vec![json!({"uri": ""}), json!("vault.example/login")];
        assert_eq!(first_uri(&uris), "https://vault.example/login");
    }

    #[test]
    fn zero_and_false_uris_are_skipped() {
        let uris = vec![
            json!({"uri": 0}),
            json!({"uri": 0.0}),
            json!({"uri": false}),
            json!({"uri": 8080}),
        ];
        assert_eq!(first_uri(&uris), "https://8080");
        assert_eq!(first_uri(&[json!({"uri": 0})]), "");
    }

    #[test]
    fn first_uri_of_nothing_is_empty() {
        assert_eq!(first_uri(&[]), "");
        assert_eq!(first_uri(&[json!(null), json!({"match": 0})]), "");
    }

    #[test]
    fn hostname_includes_port_and_userinfo() {
        assert_eq!(hostname("https://example.com/login"), Some("example.com"));
        assert_eq!(hostname("https://example.com:8443"), Some("example.com:8443"));
        assert_eq!(hostname("https://u@h.example/x"), Some("u@h.example"));
    }

    #[test]
    fn hostname_needs_scheme_and_authority() {
        assert_eq!(hostname(""), None);
        assert_eq!(hostname("example.com"), None);
        assert_eq!(hostname("file:///etc/hosts"), None);
    }
}
