//! Endpoint paths of the records API.
//!
//! All paths are relative and end with a slash; they are joined onto the
//! configured base URL.

use reqwest::Url;

use crate::model::{RecordId, RecordKind};

use super::error::GatewayError;

pub const LOGIN: &str = "auth/";
pub const REGISTER: &str = "create/";
pub const PROFILE: &str = "profile/";

/// `segments/`, `brands/` or `vehicles/`.
pub fn collection(kind: RecordKind) -> String {
    format!("{}/", kind.collection())
}

/// `segments/{id}/` and friends.
pub fn record(kind: RecordKind, id: RecordId) -> String {
    format!("{}/{}/", kind.collection(), id)
}

/// Parse a base URL, making sure relative joins append instead of replace.
pub fn parse_base(base_url: &str) -> Result<Url, GatewayError> {
    let mut normalized = base_url.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|e| GatewayError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })
}

pub fn join(base: &Url, path: &str) -> Result<Url, GatewayError> {
    base.join(path).map_err(|e| GatewayError::InvalidUrl {
        url: format!("{}{}", base, path),
        reason: e.to_string(),
    })
}
