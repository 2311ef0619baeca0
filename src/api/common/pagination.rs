//
//  bitbucket-rest
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination for Bitbucket v2 collections
//!
//! v2 list endpoints return one page at a time inside an envelope:
//!
//! ```json
//! {"values": [...], "page": 1, "pagelen": 10, "size": 25, "next": "https://..."}
//! ```
//!
//! [`paginate`] walks the `next` links and assembles up to `max` items into
//! one ordered `Vec`. Only `values` and `next` drive the loop; the other
//! fields are informational.
//!
//! The last page is always fetched in full and truncated client-side; no
//! attempt is made to request a smaller final page.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{QueryParams, Result};
use crate::api::client::Requester;

/// One page of a Bitbucket v2 collection.
///
/// # Example
///
/// ```rust
/// use bitbucket_rest::api::common::PaginatedResponse;
///
/// let json = r#"{
///     "values": ["a", "b"],
///     "pagelen": 2,
///     "next": "https://api.bitbucket.org/2.0/teams/acme/members/?page=2"
/// }"#;
///
/// let page: PaginatedResponse<String> = serde_json::from_str(json).unwrap();
/// assert!(page.has_next());
/// assert_eq!(page.values.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Items in the current page, in server order. May be empty.
    #[serde(default = "Vec::new")]
    pub values: Vec<T>,

    /// Current page number (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Requested page length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagelen: Option<u32>,

    /// Total number of items across all pages, when the server reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Self-contained URL of the next page. `None` on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    /// URL of the previous page. `None` on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// Checks if there are more pages of results available.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the URL for the next page of results.
    pub fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

/// Fetches a paginated collection, following `next` links.
///
/// - `query` is sent with the first request only; `next` URLs already carry
///   everything the server needs.
/// - `max == 0` returns every item. Otherwise at most `max` items are
///   returned and no page is requested once `max` has been reached.
/// - Any failure aborts the walk and is returned as-is; items gathered so
///   far are dropped.
/// - A `next` link to a page already fetched ends the walk with the items
///   gathered so far.
pub async fn paginate<T: DeserializeOwned>(
    requester: &Requester,
    url: Url,
    query: &QueryParams,
    max: usize,
) -> Result<Vec<T>> {
    let mut items: Vec<T> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(url.as_str().to_string());

    let mut page: PaginatedResponse<T> = requester.get_with(url, query).await?;
    let mut fetched = 1usize;

    loop {
        items.extend(page.values);
        requester.trace_page(fetched, items.len());

        if max > 0 && items.len() >= max {
            items.truncate(max);
            break;
        }

        match page.next {
            Some(next) => {
                let next = Url::parse(&next)?;
                if !visited.insert(next.as_str().to_string()) {
                    requester.trace_repeated_page(&next);
                    break;
                }
                page = requester.get_with(next, &QueryParams::new()).await?;
                fetched += 1;
            }
            None => break,
        }
    }

    Ok(items)
}
