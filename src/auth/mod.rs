//
//  bitbucket-rest
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials are passed through opaquely: the transport attaches them to
//! every request and nothing else in the crate inspects them. No OAuth flow
//! or token refresh is implemented here; obtain tokens elsewhere and hand
//! them in.
//!
//! ## Supported Credentials
//!
//! - **Basic**: Bitbucket username and account password.
//! - **App Password**: Bitbucket username and an app password (also Basic auth on the wire).
//! - **OAuth**: An OAuth 2.0 access token sent as a Bearer token.
//!
//! ## Example
//!
//! ```rust
//! use bitbucket_rest::auth::Credentials;
//!
//! let credentials = Credentials::oauth("access-token");
//! assert!(!credentials.is_expired());
//! ```

use chrono::{DateTime, Utc};
use reqwest::RequestBuilder;

/// Authentication credentials attached to every request.
#[derive(Debug, Clone, PartialEq)]
pub enum Credentials {
    /// Username and password over HTTP Basic authentication.
    Basic {
        username: String,
        password: String,
    },
    /// Username and app password over HTTP Basic authentication.
    AppPassword {
        /// The Bitbucket username (not the Atlassian account email).
        username: String,
        /// The app password generated from Bitbucket settings.
        password: String,
    },
    /// OAuth 2.0 access token sent as `Authorization: Bearer`.
    OAuth {
        access_token: String,
        /// Expiry reported when the token was issued, if known.
        expires_at: Option<DateTime<Utc>>,
    },
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn app_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::AppPassword {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn oauth(access_token: impl Into<String>) -> Self {
        Self::OAuth {
            access_token: access_token.into(),
            expires_at: None,
        }
    }

    /// Applies the credential to an HTTP request.
    ///
    /// - `OAuth` uses Bearer token authentication
    /// - `Basic` and `AppPassword` use HTTP Basic authentication
    ///
    /// Expiry is not checked here; see [`is_expired`](Self::is_expired).
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } | Self::AppPassword { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Self::OAuth { access_token, .. } => request.bearer_auth(access_token),
        }
    }

    /// Checks whether an OAuth token is past its known expiry.
    ///
    /// Only OAuth credentials with an explicit `expires_at` can expire;
    /// everything else returns `false`.
    pub fn is_expired(&self) -> bool {
        match self {
            Self::OAuth {
                expires_at: Some(exp),
                ..
            } => *exp < Utc::now(),
            _ => false,
        }
    }

    /// The username, when the credential carries one.
    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Basic { username, .. } | Self::AppPassword { username, .. } => Some(username),
            Self::OAuth { .. } => None,
        }
    }
}
