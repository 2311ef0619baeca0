//
//  bitbucket-rest
//  api/v1/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v1 account endpoints.
//!
//! [`UserEndPointV1`] covers the authenticated account under `user/`;
//! [`UsersEndPointV1`] covers any account under `users/{account}/`.

use url::Url;

use super::models::{AccountFollowers, UserInfo, UserRepository};
use crate::api::client::{join, Requester};
use crate::api::common::Result;

/// The authenticated account. Every call needs credentials.
#[derive(Debug, Clone)]
pub struct UserEndPointV1 {
    requester: Requester,
    api_base: Url,
}

impl UserEndPointV1 {
    pub(crate) fn new(requester: Requester, api_base: Url) -> Self {
        Self {
            requester,
            api_base,
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        join(&self.api_base, std::iter::once("user").chain(path.split('/')))
    }

    /// Profile and repositories of the caller.
    pub async fn get_info(&self) -> Result<UserInfo> {
        self.requester.get(self.url("")?).await
    }

    /// Every repository the caller can see, including other accounts'.
    pub async fn list_repositories(&self) -> Result<Vec<UserRepository>> {
        self.requester.get(self.url("repositories/")?).await
    }
}

/// Public view of one account.
#[derive(Debug, Clone)]
pub struct UsersEndPointV1 {
    requester: Requester,
    api_base: Url,
    account: String,
}

impl UsersEndPointV1 {
    pub(crate) fn new(requester: Requester, api_base: Url, account: &str) -> Self {
        Self {
            requester,
            api_base,
            account: account.to_string(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    fn url(&self, path: &str) -> Result<Url> {
        let segments = ["users", self.account.as_str()].into_iter().chain(path.split('/'));
        join(&self.api_base, segments)
    }

    /// Profile and public repositories of the account.
    pub async fn get_profile(&self) -> Result<UserInfo> {
        self.requester.get(self.url("")?).await
    }

    pub async fn list_followers(&self) -> Result<AccountFollowers> {
        self.requester.get(self.url("followers/")?).await
    }
}
