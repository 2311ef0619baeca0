//
//  bitbucket-rest
//  api/v2/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket REST API v2 (`https://api.bitbucket.org/2.0/`).
//!
//! - [`teams`] - Team profile, members, followers, repositories, projects
//! - [`repositories`] - Repository listings and single repositories
//! - [`models`] - Accounts, teams, repositories, projects
//!
//! Collections are paginated: `{ "values": [...], "next": "<url>" }`.

use url::Url;

use crate::api::client::Requester;

pub mod models;
pub mod repositories;
pub mod teams;

pub use models::*;
pub use repositories::{RepositoriesEndPoint, RepositoryResource};
pub use teams::TeamsEndPoint;

/// Entry point to the v2 API, handed out by
/// [`BitbucketClient::v2`](crate::BitbucketClient::v2).
#[derive(Debug, Clone)]
pub struct BitbucketV2 {
    requester: Requester,
    base: Url,
}

impl BitbucketV2 {
    pub(crate) fn new(requester: Requester, base: Url) -> Self {
        Self { requester, base }
    }

    /// Endpoint for `teams/{team}/`.
    pub fn teams(&self, team: &str) -> TeamsEndPoint {
        TeamsEndPoint::new(self.requester.clone(), self.base.clone(), team)
    }

    pub fn repositories(&self) -> RepositoriesEndPoint {
        RepositoriesEndPoint::new(self.requester.clone(), self.base.clone())
    }
}
