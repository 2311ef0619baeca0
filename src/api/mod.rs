//
//  bitbucket-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to both generations of the Bitbucket REST API.
//!
//! ## Architecture
//!
//! - [`client`]: The root [`BitbucketClient`] and the shared request layer
//! - [`transport`]: The HTTP seam ([`Transport`](transport::Transport)) and its reqwest implementation
//! - [`v1`]: API 1.0 issue tracker endpoints
//! - [`v2`]: API 2.0 teams and repositories endpoints
//! - [`common`]: Errors, query parameters, links and pagination
//!
//! ## Error Handling
//!
//! Every call returns [`Result`]. Non-2xx answers surface as
//! [`ApiError::Status`] carrying the server's status and message, unchanged;
//! nothing is retried.

/// Root client and request layer.
pub mod client;

/// Errors, query parameters, links and pagination.
pub mod common;

/// HTTP transport abstraction.
pub mod transport;

/// Bitbucket REST API v1.
pub mod v1;

/// Bitbucket REST API v2.
pub mod v2;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{BitbucketClient, V1_BASE_URL, V2_BASE_URL};
pub use common::{ApiError, QueryParams, Result};
