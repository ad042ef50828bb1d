//! # Signet (Phone Login Demo)
//!
//! `signet` is a small HTTP service that demonstrates a phone-number login flow.
//! A login request is proxied to a third-party mock-user API, and on success the
//! response carries an HMAC-signed session marker cookie.
//!
//! ## Session Marker
//!
//! The `auth` cookie holds `1.<hex hmac-sha256 of "1">`. It carries no identity;
//! it is a signed boolean. Verification splits at the last `.`, recomputes the
//! signature and compares in constant time. Anything malformed is simply
//! "not authenticated".
//!
//! ## Route Gate
//!
//! Server-rendered pages (`/`, `/auth`, `/dashboard`) check the marker before
//! responding and redirect between `/auth` and `/dashboard` accordingly. The
//! profile returned at login lives only in the browser; the cookie is the only
//! input to access decisions.

pub mod cli;
pub mod provider;
pub mod signet;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
