//! Signed session marker: `<value>.<hex hmac-sha256(value)>` stored in the `auth` cookie.

use axum::http::{
    header::{InvalidHeaderValue, COOKIE, SET_COOKIE},
    HeaderMap, HeaderValue,
};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub const MARKER_COOKIE_NAME: &str = "auth";
pub const MARKER_VALUE: &str = "1";
/// Insecure fallback key, only for local development.
pub const DEFAULT_COOKIE_SECRET: &str = "dev-secret-change-me";
const SEPARATOR: char = '.';

/// Signs and verifies the session marker under a single process-wide key.
#[derive(Clone)]
pub struct MarkerCodec {
    mac: HmacSha256,
}

impl MarkerCodec {
    /// Key the codec once at startup.
    ///
    /// # Errors
    /// Returns an error if the HMAC cannot be keyed with the given secret.
    pub fn new(secret: &SecretString) -> Result<Self, hmac::digest::InvalidLength> {
        let mac = HmacSha256::new_from_slice(secret.expose_secret().as_bytes())?;
        Ok(Self { mac })
    }

    fn signature(&self, value: &str) -> String {
        let digest = self.mac.clone().chain_update(value.as_bytes()).finalize();
        hex::encode(digest.into_bytes())
    }

    /// Returns `value.signature`.
    #[must_use]
    pub fn sign(&self, value: &str) -> String {
        format!("{value}{SEPARATOR}{}", self.signature(value))
    }

    /// True only for a well-formed marker whose signature matches under this key.
    #[must_use]
    pub fn verify(&self, signed: Option<&str>) -> bool {
        let Some(signed) = signed else {
            return false;
        };
        let Some((value, signature)) = signed.rsplit_once(SEPARATOR) else {
            return false;
        };

        let expected = self.signature(value);
        // ct_eq wants equal lengths; a length mismatch is a plain mismatch.
        if signature.len() != expected.len() {
            return false;
        }
        bool::from(signature.as_bytes().ct_eq(expected.as_bytes()))
    }

    /// Append a session cookie carrying the signed marker.
    ///
    /// # Errors
    /// Returns an error if the cookie is not a valid header value.
    pub fn set_marker(&self, headers: &mut HeaderMap) -> Result<(), InvalidHeaderValue> {
        let signed = self.sign(MARKER_VALUE);
        let cookie = HeaderValue::from_str(&format!(
            "{MARKER_COOKIE_NAME}={signed}; Path=/; HttpOnly; SameSite=Lax"
        ))?;
        headers.append(SET_COOKIE, cookie);
        Ok(())
    }

    /// Append a cookie that overwrites the marker and expires it immediately.
    pub fn clear_marker(headers: &mut HeaderMap) {
        headers.append(
            SET_COOKIE,
            HeaderValue::from_static("auth=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0"),
        );
    }

    /// Verify whatever `auth` cookie the request carries.
    #[must_use]
    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        self.verify(extract_marker(headers).as_deref())
    }
}

impl std::fmt::Debug for MarkerCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkerCodec").field("key", &"***").finish()
    }
}

/// Find the `auth` cookie across all `Cookie` headers.
pub(crate) fn extract_marker(headers: &HeaderMap) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(value) = header.to_str() else {
            continue;
        };
        for pair in value.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next().map(str::trim);
            let val = parts.next().map(str::trim);
            if let (Some(MARKER_COOKIE_NAME), Some(val)) = (key, val) {
                return Some(val.to_string());
            }
        }
    }
    None
}
