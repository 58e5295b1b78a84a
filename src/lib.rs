// src/lib.rs
//! bitwarden-to-keeper: Bitwarden / Vaultwarden JSON export → Keeper JSON import
//!
//! Features:
//! - Logins, secure notes, cards and identities (non-logins become notes)
//! - Custom fields with `$text` / `$secret` keys
//! - TOTP secrets as `otpauth://` one-time-code fields
//! - Folder and collection hints with Keeper `\` nesting
//! - Atomic output, newest-export source selection
//!
//! Attachments are not converted and must be imported by hand.

pub mod bitwarden;
pub mod config;
pub mod consts;
pub mod convert;
pub mod error;
pub mod export;
pub mod keeper;
pub mod mapping;
pub mod source;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use convert::{convert_dir, convert_file, parse_source};
pub use error::{ConvertError, Result as ConvertResult};
pub use export::write_import_file;
pub use mapping::convert_document;
pub use source::{looks_like_bitwarden_json, pick_source_json, require_source_json};
