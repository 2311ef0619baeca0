//
//  bitbucket-rest
//  api/v2/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v2 repositories endpoint.
//!
//! [`RepositoriesEndPoint`] lists repositories, either all public ones or
//! those owned by an account. [`RepositoryResource`] addresses a single
//! repository under `repositories/{account}/{repo_slug}/`.

use url::Url;

use super::models::{Account, Repository};
use crate::api::client::{join, Requester};
use crate::api::common::{paginate, QueryParams, Result};

/// Repository listings.
#[derive(Debug, Clone)]
pub struct RepositoriesEndPoint {
    requester: Requester,
    api_base: Url,
}

impl RepositoriesEndPoint {
    pub(crate) fn new(requester: Requester, api_base: Url) -> Self {
        Self {
            requester,
            api_base,
        }
    }

    /// Repositories owned by `account` that the caller can see.
    pub async fn list_repositories(&self, account: &str, max: usize) -> Result<Vec<Repository>> {
        let url = join(&self.api_base, ["repositories", account, ""])?;
        paginate(&self.requester, url, &QueryParams::new(), max).await
    }

    /// All public repositories, oldest first. Pass a small `max`: the
    /// collection is very large.
    pub async fn list_public_repositories(&self, max: usize) -> Result<Vec<Repository>> {
        let url = join(&self.api_base, ["repositories", ""])?;
        paginate(&self.requester, url, &QueryParams::new(), max).await
    }

    pub fn repository(&self, account: &str, repo_slug: &str) -> RepositoryResource {
        RepositoryResource::new(self.requester.clone(), self.api_base.clone(), account, repo_slug)
    }
}

/// One repository.
#[derive(Debug, Clone)]
pub struct RepositoryResource {
    requester: Requester,
    api_base: Url,
    /// `repositories`, `{account}`, `{repo_slug}`
    prefix: [String; 3],
}

impl RepositoryResource {
    pub(crate) fn new(requester: Requester, api_base: Url, account: &str, repo_slug: &str) -> Self {
        Self {
            requester,
            api_base,
            prefix: [
                "repositories".to_string(),
                account.to_string(),
                repo_slug.to_string(),
            ],
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        let segments = self.prefix.iter().map(String::as_str).chain(path.split('/'));
        join(&self.api_base, segments)
    }

    pub async fn get_repository(&self) -> Result<Repository> {
        self.requester.get(self.url("")?).await
    }

    /// Deletes the repository. This cannot be undone.
    pub async fn delete_repository(&self) -> Result<()> {
        self.requester.delete(self.url("")?).await
    }

    pub async fn list_watchers(&self, max: usize) -> Result<Vec<Account>> {
        paginate(&self.requester, self.url("watchers/")?, &QueryParams::new(), max).await
    }

    pub async fn list_forks(&self, max: usize) -> Result<Vec<Repository>> {
        paginate(&self.requester, self.url("forks/")?, &QueryParams::new(), max).await
    }
}
