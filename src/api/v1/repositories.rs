//
//  bitbucket-rest
//  api/v1/repositories.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v1 repository endpoint: the issue tracker of one repository.
//!
//! All paths hang off `repositories/{account}/{repo_slug}/`. Every method
//! is one request; nothing is cached between calls.
//!
//! | Resource | Path |
//! |----------|------|
//! | Issues | `issues/`, `issues/{id}/` |
//! | Followers | `issues/{id}/followers/` |
//! | Comments | `issues/{id}/comments/`, `issues/{id}/comments/{comment_id}/` |
//! | Components | `issues/components/`, `issues/components/{id}/` |
//! | Milestones | `issues/milestones/`, `issues/milestones/{id}/` |
//! | Versions | `issues/versions/`, `issues/versions/{id}/` |

use url::Url;

use super::issues::IssuesEndPointV1;
use super::models::{
    Comment, Component, Issue, IssueFollowers, IssuesInfo, Milestone, Version,
};
use crate::api::client::{join, Requester};
use crate::api::common::{ApiError, QueryParams, Result};

/// Operations on one repository's issue tracker.
#[derive(Debug, Clone)]
pub struct RepositoriesEndPointV1 {
    requester: Requester,
    api_base: Url,
    /// `repositories`, `{account}`, `{repo_slug}`
    prefix: [String; 3],
}

impl RepositoriesEndPointV1 {
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

    /// `https://bitbucket.org/api/1.0/repositories/{account}/{repo_slug}/`
    pub fn base_url(&self) -> Result<Url> {
        self.url("")
    }

    /// The issue tracker façade for this repository.
    pub fn issues(&self) -> IssuesEndPointV1 {
        IssuesEndPointV1::new(self.clone())
    }

    /// `path` is a fixed `/`-separated suffix; only the prefix carries
    /// caller-supplied names.
    fn url(&self, path: &str) -> Result<Url> {
        let segments = self.prefix.iter().map(String::as_str).chain(path.split('/'));
        join(&self.api_base, segments)
    }

    // Issues

    /// Lists the issues in the repository.
    ///
    /// Without filters, `count` is the total number of issues in the tracker.
    pub async fn list_issues(&self) -> Result<IssuesInfo> {
        self.list_issues_with(&QueryParams::new()).await
    }

    /// Lists issues matching the given filter parameters
    /// (`status`, `kind`, `responsible`, `search`, `start`, `limit`, ...).
    pub async fn list_issues_with(&self, query: &QueryParams) -> Result<IssuesInfo> {
        self.requester.get_with(self.url("issues/")?, query).await
    }

    /// Creates a new issue. The authenticated user becomes `reported_by`.
    pub async fn post_issue(&self, issue: &Issue) -> Result<Issue> {
        self.requester.post(self.url("issues/")?, issue).await
    }

    pub async fn get_issue(&self, issue_id: u64) -> Result<Issue> {
        self.requester.get(self.issue_url(issue_id, "")?).await
    }

    /// Updates an existing issue, addressed by its `local_id`.
    pub async fn put_issue(&self, issue: &Issue) -> Result<Issue> {
        let id = issue.local_id.ok_or(ApiError::MissingIdentifier("issue"))?;
        self.requester.put(self.issue_url(id, "")?, issue).await
    }

    pub async fn delete_issue(&self, issue_id: u64) -> Result<()> {
        self.requester.delete(self.issue_url(issue_id, "")?).await
    }

    pub async fn list_issue_followers(&self, issue_id: u64) -> Result<IssueFollowers> {
        self.requester.get(self.issue_url(issue_id, "followers/")?).await
    }

    // Comments

    pub async fn list_issue_comments(&self, issue_id: u64) -> Result<Vec<Comment>> {
        self.requester.get(self.issue_url(issue_id, "comments/")?).await
    }

    pub async fn post_issue_comment(&self, issue_id: u64, comment: &Comment) -> Result<Comment> {
        self.requester
            .post(self.issue_url(issue_id, "comments/")?, comment)
            .await
    }

    pub async fn get_issue_comment(&self, issue_id: u64, comment_id: u64) -> Result<Comment> {
        self.requester
            .get(self.comment_url(issue_id, comment_id)?)
            .await
    }

    /// Updates a comment, addressed by its `comment_id`.
    pub async fn put_issue_comment(&self, issue_id: u64, comment: &Comment) -> Result<Comment> {
        let comment_id = comment
            .comment_id
            .ok_or(ApiError::MissingIdentifier("comment"))?;
        self.requester
            .put(self.comment_url(issue_id, comment_id)?, comment)
            .await
    }

    pub async fn delete_issue_comment(&self, issue_id: u64, comment_id: u64) -> Result<()> {
        self.requester
            .delete(self.comment_url(issue_id, comment_id)?)
            .await
    }

    fn issue_url(&self, issue_id: u64, rest: &str) -> Result<Url> {
        self.url(&format!("issues/{}/{}", issue_id, rest))
    }

    fn comment_url(&self, issue_id: u64, comment_id: u64) -> Result<Url> {
        self.issue_url(issue_id, &format!("comments/{}/", comment_id))
    }

    // Components

    pub async fn list_components(&self) -> Result<Vec<Component>> {
        self.requester.get(self.url("issues/components/")?).await
    }

    pub async fn post_component(&self, component: &Component) -> Result<Component> {
        self.requester
            .post(self.url("issues/components/")?, component)
            .await
    }

    pub async fn get_component(&self, component_id: u64) -> Result<Component> {
        self.requester
            .get(self.tracker_url("components", component_id)?)
            .await
    }

    pub async fn put_component(&self, component: &Component) -> Result<Component> {
        let id = component.id.ok_or(ApiError::MissingIdentifier("component"))?;
        self.requester
            .put(self.tracker_url("components", id)?, component)
            .await
    }

    pub async fn delete_component(&self, component_id: u64) -> Result<()> {
        self.requester
            .delete(self.tracker_url("components", component_id)?)
            .await
    }

    // Milestones

    pub async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        self.requester.get(self.url("issues/milestones/")?).await
    }

    pub async fn post_milestone(&self, milestone: &Milestone) -> Result<Milestone> {
        self.requester
            .post(self.url("issues/milestones/")?, milestone)
            .await
    }

    pub async fn get_milestone(&self, milestone_id: u64) -> Result<Milestone> {
        self.requester
            .get(self.tracker_url("milestones", milestone_id)?)
            .await
    }

    pub async fn put_milestone(&self, milestone: &Milestone) -> Result<Milestone> {
        let id = milestone.id.ok_or(ApiError::MissingIdentifier("milestone"))?;
        self.requester
            .put(self.tracker_url("milestones", id)?, milestone)
            .await
    }

    pub async fn delete_milestone(&self, milestone_id: u64) -> Result<()> {
        self.requester
            .delete(self.tracker_url("milestones", milestone_id)?)
            .await
    }

    // Versions

    pub async fn list_versions(&self) -> Result<Vec<Version>> {
        self.requester.get(self.url("issues/versions/")?).await
    }

    pub async fn post_version(&self, version: &Version) -> Result<Version> {
        self.requester
            .post(self.url("issues/versions/")?, version)
            .await
    }

    pub async fn get_version(&self, version_id: u64) -> Result<Version> {
        self.requester
            .get(self.tracker_url("versions", version_id)?)
            .await
    }

    pub async fn put_version(&self, version: &Version) -> Result<Version> {
        let id = version.id.ok_or(ApiError::MissingIdentifier("version"))?;
        self.requester
            .put(self.tracker_url("versions", id)?, version)
            .await
    }

    pub async fn delete_version(&self, version_id: u64) -> Result<()> {
        self.requester
            .delete(self.tracker_url("versions", version_id)?)
            .await
    }

    /// `issues/{kind}/{id}/`
    fn tracker_url(&self, kind: &str, id: u64) -> Result<Url> {
        self.url(&format!("issues/{}/{}/", kind, id))
    }
}
