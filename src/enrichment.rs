//! Request metadata enrichment for quote submissions.
//!
//! Builds the read-only context attached to every notification:
//! 1. Resolve and normalize the client IP (proxy headers first)
//! 2. Classify the user-agent
//! 3. Capture referrer and accept-language
//! 4. Resolve geolocation (local database, then remote fallback)
//!
//! Everything here degrades instead of failing; a submission never bounces
//! because its metadata could not be derived.

use crate::geo::GeoInfo;
use crate::user_agent::ClientInfo;
use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use std::net::SocketAddr;

/// Placeholder when no referrer header was sent.
pub const DIRECT_VISIT: &str = "Direct visit";

/// Placeholder for any metadata field that could not be derived.
pub const UNKNOWN: &str = "Unknown";

/// Contextual metadata for one submission. Computed once, attached to the
/// outgoing notification, then discarded.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Normalized client IP, or "Unknown".
    pub ip: String,
    /// Raw user-agent header value.
    pub user_agent: String,
    /// Parsed browser/engine/OS/device descriptor.
    pub client: ClientInfo,
    /// Referrer header, or "Direct visit".
    pub referrer: String,
    /// Accept-language header, or "Unknown".
    pub accept_language: String,
    /// Geolocation record; stays `None` whenever lookups miss or fail.
    pub geo: Option<GeoInfo>,
    /// When the submission arrived.
    pub submitted_at: DateTime<Utc>,
}

impl RequestContext {
    /// Derives the context from transport-level request data.
    ///
    /// Geolocation is not resolved here; the pipeline attaches it afterwards
    /// so the only network call stays visible at the orchestration level.
    pub fn from_request(headers: &HeaderMap, peer: Option<SocketAddr>) -> Self {
        let user_agent = header_value(headers, "user-agent").unwrap_or_default();

        Self {
            ip: resolve_client_ip(headers, peer),
            client: ClientInfo::parse(&user_agent),
            user_agent: if user_agent.is_empty() {
                UNKNOWN.to_string()
            } else {
                user_agent
            },
            referrer: header_value(headers, "referer").unwrap_or_else(|| DIRECT_VISIT.to_string()),
            accept_language: header_value(headers, "accept-language")
                .unwrap_or_else(|| UNKNOWN.to_string()),
            geo: None,
            submitted_at: Utc::now(),
        }
    }
}

/// Resolves the client IP with proxy-aware precedence:
/// `x-forwarded-for` (first entry) → `x-real-ip` → peer address → "Unknown".
/// The chosen value is normalized before being returned.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = header_value(headers, "x-forwarded-for")
        .and_then(|chain| chain.split(',').next().map(|s| s.trim().to_string()))
        .filter(|s| !s.is_empty());

    let raw = forwarded
        .or_else(|| header_value(headers, "x-real-ip"))
        .or_else(|| peer.map(|addr| addr.ip().to_string()));

    match raw {
        Some(value) => normalize_ip(&value),
        None => UNKNOWN.to_string(),
    }
}

/// Normalizes a raw client address string.
///
/// Strips the `::ffff:` IPv6-mapped prefix, then strips a trailing `:port`
/// when the value contains exactly one colon (a raw IPv6 address contains
/// several and is left untouched). Empty input becomes "Unknown".
pub fn normalize_ip(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return UNKNOWN.to_string();
    }

    let unmapped = trimmed.strip_prefix("::ffff:").unwrap_or(trimmed);

    if unmapped.chars().filter(|&c| c == ':').count() == 1 {
        if let Some((host, _port)) = unmapped.rsplit_once(':') {
            if !host.is_empty() {
                return host.to_string();
            }
        }
    }

    unmapped.to_string()
}

/// A header as an owned string, when present, valid UTF-8, and non-empty.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
