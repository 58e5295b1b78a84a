//! Shared constants: Keeper import format details and default paths

/// File names the converter writes; never picked up as a source
pub const KNOWN_OUTPUT_NAMES: &[&str] = &["keeperimportfile.json", "keeper_import.json"];

/// Directory scanned for exports when nothing else is configured
pub const DEFAULT_SOURCE_DIR: &str = "source";

/// Output path used when nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "target/keeper_import.json";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "btok.toml";

/// Bitwarden item type for logins (2 = note, 3 = card, 4 = identity)
pub const BW_TYPE_LOGIN: i64 = 1;

/// Bitwarden custom field type for hidden values (0 = text, 2 = boolean)
pub const BW_FIELD_HIDDEN: i64 = 1;

/// Ordinal suffix Keeper puts on every custom field key
pub const CUSTOM_FIELD_SUFFIX: &str = ":1";

/// Reserved custom field key holding the TOTP otpauth URI
pub const ONE_TIME_CODE_KEY: &str = "$oneTimeCode::1";

// Keeper only accepts these exact TOTP parameters on import
pub const TOTP_ALGORITHM: &str = "SHA1";
pub const TOTP_DIGITS: u32 = 6;
pub const TOTP_PERIOD: u32 = 30;

/// Issuer used when the login URL has no usable host
pub const FALLBACK_ISSUER: &str = "Imported";

/// Keeper folder hierarchy separator
pub const KEEPER_FOLDER_SEPARATOR: char = '\\';
