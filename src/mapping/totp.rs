//! TOTP secret → `otpauth://` URI for Keeper's `$oneTimeCode` field

use crate::consts::{FALLBACK_ISSUER, TOTP_ALGORITHM, TOTP_DIGITS, TOTP_PERIOD};

use super::url::hostname;

/// Build the otpauth URI Keeper imports
///
/// Issuer is the login URL's host (`Imported` without one); the account is the
/// username, else the title, else the issuer. The label is not percent-encoded.
pub fn otpauth_uri(secret: &str, title: &str, username: &str, login_url: &str) -> String {
    let issuer = hostname(login_url).unwrap_or(FALLBACK_ISSUER);
    let account = [username, title]
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or(issuer);

    format!(
        "otpauth://totp/{issuer}:{account}?secret={secret}&issuer={issuer}\
         &algorithm={TOTP_ALGORITHM}&digits={TOTP_DIGITS}&period={TOTP_PERIOD}"
    )
}
