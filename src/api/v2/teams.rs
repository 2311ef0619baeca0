//
//  bitbucket-rest
//  api/v2/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v2 teams endpoint.
//!
//! Scoped to one team, under `teams/{team}/`. Every `list_*` call follows
//! `next` links and stops once `max` items are collected; `max == 0` walks
//! the whole collection.
//!
//! # Example
//!
//! ```rust,no_run
//! use bitbucket_rest::BitbucketClient;
//!
//! # async fn example() -> bitbucket_rest::api::Result<()> {
//! let client = BitbucketClient::new()?;
//! let team = client.v2().teams("atlassian");
//!
//! let profile = team.get_profile().await?;
//! let members = team.list_members(5).await?;
//! println!("{:?} has at least {} members", profile.display_name, members.len());
//! # Ok(())
//! # }
//! ```

use url::Url;

use super::models::{Account, Project, ProjectPostParams, Repository, Team};
use crate::api::client::{join, Requester};
use crate::api::common::{paginate, QueryParams, Result};

/// Operations on one team.
#[derive(Debug, Clone)]
pub struct TeamsEndPoint {
    requester: Requester,
    api_base: Url,
    team: String,
}

impl TeamsEndPoint {
    pub(crate) fn new(requester: Requester, api_base: Url, team: &str) -> Self {
        Self {
            requester,
            api_base,
            team: team.to_string(),
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    /// `teams/{team}/` followed by the fixed suffix `path`.
    fn url(&self, path: &str) -> Result<Url> {
        let segments = ["teams", self.team.as_str()].into_iter().chain(path.split('/'));
        join(&self.api_base, segments)
    }

    async fn list<T: serde::de::DeserializeOwned>(&self, path: &str, max: usize) -> Result<Vec<T>> {
        paginate(&self.requester, self.url(path)?, &QueryParams::new(), max).await
    }

    /// Teams the authenticated user is a member of.
    ///
    /// Not scoped to this endpoint's team; it only needs credentials.
    pub async fn get_user_teams(&self, max: usize) -> Result<Vec<Team>> {
        let query = QueryParams::new().with("role", "member");
        paginate(&self.requester, join(&self.api_base, ["teams", ""])?, &query, max).await
    }

    pub async fn get_profile(&self) -> Result<Team> {
        self.requester.get(self.url("")?).await
    }

    pub async fn list_members(&self, max: usize) -> Result<Vec<Account>> {
        self.list("members/", max).await
    }

    pub async fn list_followers(&self, max: usize) -> Result<Vec<Account>> {
        self.list("followers/", max).await
    }

    /// Accounts this team follows.
    pub async fn list_following(&self, max: usize) -> Result<Vec<Account>> {
        self.list("following/", max).await
    }

    pub async fn list_repositories(&self, max: usize) -> Result<Vec<Repository>> {
        self.list("repositories/", max).await
    }

    pub async fn list_projects(&self, max: usize) -> Result<Vec<Project>> {
        self.list("projects/", max).await
    }

    /// Creates a project owned by the team.
    pub async fn post_project(&self, project: &ProjectPostParams) -> Result<Project> {
        self.requester.post(self.url("projects/")?, project).await
    }

    /// Fetches a project by key. The server does not accept a trailing slash
    /// here.
    pub async fn get_project(&self, project_key: &str) -> Result<Project> {
        let url = join(
            &self.api_base,
            ["teams", self.team.as_str(), "projects", project_key],
        )?;
        self.requester.get(url).await
    }
}
