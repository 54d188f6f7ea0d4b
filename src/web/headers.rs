//! Header extraction for the web-service protocol.
//!
//! # Design Decisions
//! - The `Authorization` scheme is the protocol constant `ApplePass`;
//!   anything else (or an empty token) is treated as absent
//! - `If-Modified-Since` is advisory: unparseable values are treated as
//!   absent, never rejected

use axum::http::{header, HeaderMap};
use chrono::{DateTime, FixedOffset};

/// Authorization scheme devices use on authenticated endpoints.
pub const AUTH_SCHEME: &str = "ApplePass";

/// Extract the opaque token from `Authorization: ApplePass <token>`.
pub fn authentication_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if scheme != AUTH_SCHEME || token.is_empty() {
        return None;
    }
    Some(token)
}

/// Parse the optional `If-Modified-Since` HTTP-date.
pub fn if_modified_since(headers: &HeaderMap) -> Option<DateTime<FixedOffset>> {
    let value = headers.get(header::IF_MODIFIED_SINCE)?.to_str().ok()?;
    DateTime::parse_from_rfc2822(value).ok()
}
