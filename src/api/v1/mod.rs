//
//  bitbucket-rest
//  api/v1/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Bitbucket REST API v1 (`https://bitbucket.org/api/1.0/`).
//!
//! - [`repositories`] - Repository-scoped issue tracker operations
//! - [`issues`] - Issue tracker façade and the single-issue endpoint
//! - [`users`] - The authenticated account and public account profiles
//! - [`models`] - Issues, comments, components, milestones, versions, accounts
//!
//! v1 list calls return plain arrays or count-prefixed objects; they are not
//! paginated with `next` links.

use url::Url;

use crate::api::client::Requester;

pub mod issues;
pub mod models;
pub mod repositories;
pub mod users;

pub use issues::{IssueEndPointV1, IssuesEndPointV1};
pub use models::*;
pub use repositories::RepositoriesEndPointV1;
pub use users::{UserEndPointV1, UsersEndPointV1};

/// Entry point to the v1 API, handed out by
/// [`BitbucketClient::v1`](crate::BitbucketClient::v1).
#[derive(Debug, Clone)]
pub struct BitbucketV1 {
    requester: Requester,
    base: Url,
}

impl BitbucketV1 {
    pub(crate) fn new(requester: Requester, base: Url) -> Self {
        Self { requester, base }
    }

    /// Endpoint for `user/`, the account the credentials belong to.
    pub fn user(&self) -> UserEndPointV1 {
        UserEndPointV1::new(self.requester.clone(), self.base.clone())
    }

    /// Endpoint for `users/{account}/`.
    pub fn users(&self, account: &str) -> UsersEndPointV1 {
        UsersEndPointV1::new(self.requester.clone(), self.base.clone(), account)
    }

    /// Endpoint for `repositories/{account}/{repo_slug}/`.
    pub fn repositories(&self, account: &str, repo_slug: &str) -> RepositoriesEndPointV1 {
        RepositoriesEndPointV1::new(self.requester.clone(), self.base.clone(), account, repo_slug)
    }

    /// Shortcut for `repositories(account, repo_slug).issues()`.
    pub fn issues(&self, account: &str, repo_slug: &str) -> IssuesEndPointV1 {
        self.repositories(account, repo_slug).issues()
    }
}
