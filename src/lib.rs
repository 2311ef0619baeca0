//
//  bitbucket-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitbucket REST Client
//!
//! An async client for the Bitbucket REST API, covering both the legacy 1.0
//! issue tracker and the 2.0 teams and repositories endpoints.
//!
//! ## Module Structure
//!
//! - [`api`]: The root client, endpoint façades, models and pagination
//! - [`auth`]: Credentials attached to outgoing requests
//! - [`config`]: Optional TOML configuration and environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bitbucket_rest::BitbucketClient;
//!
//! # async fn example() -> bitbucket_rest::api::Result<()> {
//! let client = BitbucketClient::new()?;
//!
//! // At most 10 members, following `next` links as needed
//! let members = client.v2().teams("atlassian").list_members(10).await?;
//! for member in &members {
//!     println!("{}", member.display_name.as_deref().unwrap_or("?"));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## API Differences
//!
//! | Feature | v1 | v2 |
//! |---------|----|----|
//! | Issue tracker | Yes | No |
//! | Teams & projects | No | Yes |
//! | `next`-link pagination | No | Yes |

/// Endpoint façades for the Bitbucket REST API.
pub mod api;

/// Request credentials.
pub mod auth;

/// Client configuration.
pub mod config;

pub use api::BitbucketClient;
pub use auth::Credentials;
pub use config::ClientConfig;

/// Library version, derived from Cargo.toml at compile time.
///
/// ```rust
/// use bitbucket_rest::VERSION;
///
/// assert!(!VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
