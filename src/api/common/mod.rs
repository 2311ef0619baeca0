//
//  bitbucket-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for Bitbucket v1 and v2
//!
//! This module provides shared types used by both API generations: the error
//! type every operation returns, the query parameter bag, hypermedia links,
//! and the pagination envelope (re-exported from [`pagination`]).
//!
//! # Example
//!
//! ```rust
//! use bitbucket_rest::api::common::{ApiError, QueryParams};
//!
//! let query = QueryParams::new().with("status", "open");
//! assert_eq!(query.get("status"), Some("open"));
//!
//! fn describe(err: &ApiError) -> String {
//!     match err {
//!         ApiError::Status { status, .. } => format!("server said {}", status),
//!         other => other.to_string(),
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod pagination;

pub use pagination::*;

/// Unified error type for all Bitbucket API operations.
///
/// Failures are surfaced as they happened; nothing here is retried or
/// reinterpreted.
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Status` | The server answered with a non-2xx status |
/// | `Network` | The request never got a response |
/// | `Decode` | The response body did not match the expected shape |
/// | `Encode` | The request body could not be serialized |
/// | `InvalidUrl` | A base URL or `next` link could not be parsed or joined |
/// | `MissingIdentifier` | A record without a server-assigned id was passed where one is required |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server returned a non-success status code.
    ///
    /// `message` is the human readable part of the Bitbucket error body when
    /// one could be extracted, otherwise the raw body.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status returned by the server
        status: StatusCode,
        /// Error message extracted from the response body
        message: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        /// URL the body was fetched from
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The record has no identifier yet, so no resource path can be built.
    #[error("{0} has no identifier; it must be fetched or created first")]
    MissingIdentifier(&'static str),
}

impl ApiError {
    /// Create a decode error with the URL the body came from
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Returns the HTTP status for [`ApiError::Status`] errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Query string parameters attached to a request.
///
/// An explicit name → value mapping. Ordering is stable (sorted by name) so
/// the generated query string is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) {
        self.0.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// HATEOAS-style link for API resource navigation.
///
/// Bitbucket v2 resources carry a `links` object whose values are either a
/// single link or, for `clone`, a list of named links.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Link {
    /// The URL of the linked resource.
    pub href: String,

    /// Optional descriptive name for the link (`https`, `ssh`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One entry of a `links` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkValue {
    Single(Link),
    Many(Vec<Link>),
}

/// The `links` object attached to v2 resources, keyed by relation name
/// (`self`, `html`, `avatar`, `clone`, ...).
pub type Links = BTreeMap<String, LinkValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_sorted_and_overwritten() {
        let query = QueryParams::new()
            .with("status", "open")
            .with("limit", 50)
            .with("status", "resolved");

        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("limit", "50"), ("status", "resolved")]);
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_query_params_from_iter() {
        let query: QueryParams = [("role", "member")].into_iter().collect();
        assert_eq!(query.get("role"), Some("member"));
        assert!(!query.is_empty());
    }

    #[test]
    fn test_status_error_helpers() {
        let err = ApiError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Repository not found".to_string(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error (404 Not Found): Repository not found");

        let missing = ApiError::MissingIdentifier("issue");
        assert_eq!(missing.status(), None);
        assert!(!missing.is_not_found());
    }

    #[test]
    fn test_links_single_and_many() {
        let json = r#"{
            "self": {"href": "https://api.bitbucket.org/2.0/repositories/acme/widget"},
            "clone": [
                {"href": "https://bitbucket.org/acme/widget.git", "name": "https"},
                {"href": "git@bitbucket.org:acme/widget.git", "name": "ssh"}
            ]
        }"#;

        let links: Links = serde_json::from_str(json).unwrap();
        match links.get("clone") {
            Some(LinkValue::Many(clones)) => {
                assert_eq!(clones.len(), 2);
                assert_eq!(clones[1].name.as_deref(), Some("ssh"));
            }
            other => panic!("unexpected clone links: {:?}", other),
        }
        assert!(matches!(links.get("self"), Some(LinkValue::Single(_))));
    }
}
