//
//  bitbucket-rest
//  api/v1/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v1 issue tracker façades.
//!
//! [`IssuesEndPointV1`] groups the issue tracker operations of a repository
//! and forwards each of them to [`RepositoriesEndPointV1`]. Public trackers
//! can be read anonymously (with a reduced set of fields); creating,
//! updating and deleting requires credentials with access to the tracker.
//!
//! [`IssueEndPointV1`] has no counterpart on the server: it binds one issue
//! number so its comments and followers can be reached without repeating it.
//!
//! # Example
//!
//! ```rust,no_run
//! use bitbucket_rest::BitbucketClient;
//! use bitbucket_rest::api::v1::Comment;
//!
//! # async fn example() -> bitbucket_rest::api::Result<()> {
//! let client = BitbucketClient::new()?;
//! let issues = client.v1().repositories("acme", "widget").issues();
//!
//! let issue = issues.issue(12);
//! issue.post_comment(&Comment::new("Reproduced on 1.4")).await?;
//! for comment in issue.list_comments().await? {
//!     println!("{:?}", comment.content);
//! }
//! # Ok(())
//! # }
//! ```

use super::models::{
    Comment, Component, Issue, IssueFollowers, IssuesInfo, Milestone, Version,
};
use super::repositories::RepositoriesEndPointV1;
use crate::api::common::{QueryParams, Result};

/// The issue tracker of one repository.
///
/// Obtained from [`RepositoriesEndPointV1::issues`] or
/// [`BitbucketV1::issues`](super::BitbucketV1::issues); it cannot be built
/// directly.
///
/// ```rust,compile_fail
/// use bitbucket_rest::api::v1::{IssuesEndPointV1, RepositoriesEndPointV1};
///
/// fn build(repository: RepositoriesEndPointV1) -> IssuesEndPointV1 {
///     IssuesEndPointV1::new(repository)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IssuesEndPointV1 {
    repository: RepositoriesEndPointV1,
}

impl IssuesEndPointV1 {
    pub(crate) fn new(repository: RepositoriesEndPointV1) -> Self {
        Self { repository }
    }

    /// A virtual endpoint bound to issue `issue_id`.
    pub fn issue(&self, issue_id: u64) -> IssueEndPointV1 {
        IssueEndPointV1::new(self.repository.clone(), issue_id)
    }

    pub async fn list_issues(&self) -> Result<IssuesInfo> {
        self.repository.list_issues().await
    }

    pub async fn list_issues_with(&self, query: &QueryParams) -> Result<IssuesInfo> {
        self.repository.list_issues_with(query).await
    }

    pub async fn post_issue(&self, issue: &Issue) -> Result<Issue> {
        self.repository.post_issue(issue).await
    }

    pub async fn get_issue(&self, issue_id: u64) -> Result<Issue> {
        self.repository.get_issue(issue_id).await
    }

    pub async fn put_issue(&self, issue: &Issue) -> Result<Issue> {
        self.repository.put_issue(issue).await
    }

    pub async fn delete_issue(&self, issue_id: u64) -> Result<()> {
        self.repository.delete_issue(issue_id).await
    }

    pub async fn list_issue_followers(&self, issue_id: u64) -> Result<IssueFollowers> {
        self.repository.list_issue_followers(issue_id).await
    }

    pub async fn list_issue_comments(&self, issue_id: u64) -> Result<Vec<Comment>> {
        self.repository.list_issue_comments(issue_id).await
    }

    pub async fn post_issue_comment(&self, issue_id: u64, comment: &Comment) -> Result<Comment> {
        self.repository.post_issue_comment(issue_id, comment).await
    }

    pub async fn get_issue_comment(&self, issue_id: u64, comment_id: u64) -> Result<Comment> {
        self.repository.get_issue_comment(issue_id, comment_id).await
    }

    pub async fn put_issue_comment(&self, issue_id: u64, comment: &Comment) -> Result<Comment> {
        self.repository.put_issue_comment(issue_id, comment).await
    }

    pub async fn delete_issue_comment(&self, issue_id: u64, comment_id: u64) -> Result<()> {
        self.repository
            .delete_issue_comment(issue_id, comment_id)
            .await
    }

    pub async fn list_components(&self) -> Result<Vec<Component>> {
        self.repository.list_components().await
    }

    pub async fn post_component(&self, component: &Component) -> Result<Component> {
        self.repository.post_component(component).await
    }

    pub async fn get_component(&self, component_id: u64) -> Result<Component> {
        self.repository.get_component(component_id).await
    }

    pub async fn put_component(&self, component: &Component) -> Result<Component> {
        self.repository.put_component(component).await
    }

    pub async fn delete_component(&self, component_id: u64) -> Result<()> {
        self.repository.delete_component(component_id).await
    }

    pub async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        self.repository.list_milestones().await
    }

    pub async fn post_milestone(&self, milestone: &Milestone) -> Result<Milestone> {
        self.repository.post_milestone(milestone).await
    }

    pub async fn get_milestone(&self, milestone_id: u64) -> Result<Milestone> {
        self.repository.get_milestone(milestone_id).await
    }

    pub async fn put_milestone(&self, milestone: &Milestone) -> Result<Milestone> {
        self.repository.put_milestone(milestone).await
    }

    pub async fn delete_milestone(&self, milestone_id: u64) -> Result<()> {
        self.repository.delete_milestone(milestone_id).await
    }

    pub async fn list_versions(&self) -> Result<Vec<Version>> {
        self.repository.list_versions().await
    }

    pub async fn post_version(&self, version: &Version) -> Result<Version> {
        self.repository.post_version(version).await
    }

    pub async fn get_version(&self, version_id: u64) -> Result<Version> {
        self.repository.get_version(version_id).await
    }

    pub async fn put_version(&self, version: &Version) -> Result<Version> {
        self.repository.put_version(version).await
    }

    pub async fn delete_version(&self, version_id: u64) -> Result<()> {
        self.repository.delete_version(version_id).await
    }
}

/// One issue of a repository's tracker, from [`IssuesEndPointV1::issue`].
///
/// ```rust,compile_fail
/// use bitbucket_rest::api::v1::{IssueEndPointV1, RepositoriesEndPointV1};
///
/// fn build(repository: RepositoriesEndPointV1) -> IssueEndPointV1 {
///     IssueEndPointV1::new(repository, 1)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IssueEndPointV1 {
    repository: RepositoriesEndPointV1,
    issue_id: u64,
}

impl IssueEndPointV1 {
    pub(crate) fn new(repository: RepositoriesEndPointV1, issue_id: u64) -> Self {
        Self {
            repository,
            issue_id,
        }
    }

    pub fn issue_id(&self) -> u64 {
        self.issue_id
    }

    pub async fn get(&self) -> Result<Issue> {
        self.repository.get_issue(self.issue_id).await
    }

    /// Updates the bound issue. `local_id` on `issue` is overridden with the
    /// bound issue number.
    pub async fn put(&self, issue: &Issue) -> Result<Issue> {
        let mut issue = issue.clone();
        issue.local_id = Some(self.issue_id);
        self.repository.put_issue(&issue).await
    }

    pub async fn delete(&self) -> Result<()> {
        self.repository.delete_issue(self.issue_id).await
    }

    pub async fn list_followers(&self) -> Result<IssueFollowers> {
        self.repository.list_issue_followers(self.issue_id).await
    }

    pub async fn list_comments(&self) -> Result<Vec<Comment>> {
        self.repository.list_issue_comments(self.issue_id).await
    }

    pub async fn post_comment(&self, comment: &Comment) -> Result<Comment> {
        self.repository
            .post_issue_comment(self.issue_id, comment)
            .await
    }

    pub async fn get_comment(&self, comment_id: u64) -> Result<Comment> {
        self.repository
            .get_issue_comment(self.issue_id, comment_id)
            .await
    }

    pub async fn put_comment(&self, comment: &Comment) -> Result<Comment> {
        self.repository
            .put_issue_comment(self.issue_id, comment)
            .await
    }

    pub async fn delete_comment(&self, comment_id: u64) -> Result<()> {
        self.repository
            .delete_issue_comment(self.issue_id, comment_id)
            .await
    }
}
