//
//  bitbucket-rest
//  api/v1/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! v1 issue tracker resources.
//!
//! Flat mirrors of the Bitbucket 1.0 JSON. Every field is optional: the
//! server fills in what it knows, callers fill in what they want to send,
//! and absent fields are left out of request bodies.
//!
//! # Issue Statuses
//!
//! * `new`, `open`, `resolved`, `on hold`, `invalid`, `duplicate`, `wontfix`
//!
//! # Issue Priorities
//!
//! * `trivial`, `minor`, `major`, `critical`, `blocker`
//!
//! # Issue Kinds
//!
//! * `bug`, `enhancement`, `proposal`, `task`
//!
//! # Example
//!
//! ```rust
//! use bitbucket_rest::api::v1::{Issue, IssueMetadata};
//!
//! let issue = Issue {
//!     title: Some("Login button not responding".to_string()),
//!     content: Some("Nothing happens on click.".to_string()),
//!     priority: Some("major".to_string()),
//!     metadata: Some(IssueMetadata {
//!         kind: Some("bug".to_string()),
//!         ..Default::default()
//!     }),
//!     ..Default::default()
//! };
//! assert!(issue.local_id.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// A v1 user or team account as embedded in issues and comments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_team: Option<bool>,
}

/// An issue in a repository's tracker.
///
/// `local_id` is the issue number within the repository and is assigned by
/// the server on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Issue body, in the tracker's markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    /// Kind, component, milestone and version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IssueMetadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<User>,

    /// Assignee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_created_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_last_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_spam: Option<bool>,
}

/// Classification attached to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<String>,
}

/// Response of the issue list call.
///
/// `count` is the total number of issues in the tracker, or the number
/// matching the filter when one was given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssuesInfo {
    #[serde(default)]
    pub count: u64,

    /// Echo of the filter parameters the server applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Followers of a single issue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueFollowers {
    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub followers: Vec<User>,
}

/// Followers of an account, from `users/{account}/followers/`. Same shape as
/// [`IssueFollowers`].
pub type AccountFollowers = IssueFollowers;

/// A repository as listed in a v1 account profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserRepository {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// `git` or `hg`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scm: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fork: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_uri: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_created_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_last_updated: Option<String>,
}

/// An account profile together with its repositories, as returned by
/// `user/` and `users/{account}/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default)]
    pub repositories: Vec<UserRepository>,
}

/// A comment on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_info: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_created_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_updated_on: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_spam: Option<bool>,
}

impl Comment {
    /// A new comment with only its body set.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

/// An issue tracker component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Component {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An issue tracker milestone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Milestone {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An issue tracker version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Version {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

macro_rules! named {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                /// A new, not yet created record with only its name set.
                pub fn named(name: impl Into<String>) -> Self {
                    Self {
                        id: None,
                        name: Some(name.into()),
                    }
                }
            }
        )*
    };
}

named!(Component, Milestone, Version);
