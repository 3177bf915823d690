//! Caller identity forwarded by the hosting layer.
//!
//! Authentication happens upstream; by the time a request reaches this
//! service the verified uid sits in a trusted header whose name comes from
//! `AUTH_USER_HEADER`. A missing or blank header means "not authenticated".

use axum::http::HeaderMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    uid: String,
}

impl CallerIdentity {
    pub fn new(uid: impl Into<String>) -> Option<Self> {
        let uid = uid.into();
        let trimmed = uid.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            uid: trimmed.to_string(),
        })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn from_headers(headers: &HeaderMap, header_name: &str) -> Option<Self> {
        headers
            .get(header_name)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_uid_from_configured_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-verified-user-id", HeaderValue::from_static("user-42"));

        let caller = CallerIdentity::from_headers(&headers, "x-verified-user-id");
        assert_eq!(caller.map(|c| c.uid().to_string()), Some("user-42".to_string()));
    }

    #[test]
    fn blank_or_missing_header_is_unauthenticated() {
        let mut headers = HeaderMap::new();
        assert!(CallerIdentity::from_headers(&headers, "x-verified-user-id").is_none());

        headers.insert("x-verified-user-id", HeaderValue::from_static("   "));
        assert!(CallerIdentity::from_headers(&headers, "x-verified-user-id").is_none());
    }
}
