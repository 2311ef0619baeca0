//
//  bitbucket-rest
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for Bitbucket API
//!
//! The transport performs exactly one HTTP exchange per call and hands back
//! the raw response body. Everything above it (path building, decoding,
//! pagination) lives in [`Requester`](super::client::Requester).
//!
//! [`Transport`] is the seam: [`HttpTransport`] talks to the network with
//! `reqwest`, tests plug in stubs that record requests and replay canned
//! bodies.
//!
//! ## Features
//!
//! - Authentication header injection from [`Credentials`]
//! - Query parameters and JSON bodies
//! - Bitbucket error body parsing for non-2xx responses
//! - Custom User-Agent header

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use url::Url;

use crate::api::common::{ApiError, QueryParams, Result};
use crate::auth::Credentials;

/// Extracts a human readable message from a Bitbucket error body.
///
/// Bitbucket v2 returns errors in the format:
/// ```json
/// {"type": "error", "error": {"message": "Human readable message"}}
/// ```
///
/// Some endpoints use `{"errors": [{"message": "..."}]}`,
/// `{"error": {"detail": "..."}}` or a bare `{"message": "..."}`. v1 often
/// answers with plain text. If no known shape matches, the raw body is used.
pub fn format_api_error(status: StatusCode, body: &str) -> ApiError {
    let message = extract_error_message(body).unwrap_or_else(|| {
        if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no response body")
                .to_string()
        } else {
            body.trim().to_string()
        }
    });

    ApiError::Status { status, message }
}

fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;

    // {"type": "error", "error": {"message": "..."}}
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    // {"errors": [{"message": "..."}]}
    if let Some(message) = json
        .get("errors")
        .and_then(|e| e.as_array())
        .and_then(|arr| arr.first())
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
    {
        return Some(message.to_string());
    }

    // {"error": {"detail": "..."}}
    if let Some(detail) = json
        .get("error")
        .and_then(|e| e.get("detail"))
        .and_then(|m| m.as_str())
    {
        return Some(detail.to_string());
    }

    json.get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

/// A single HTTP exchange to perform.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// Appended to the URL's query string. Empty for follow-up pages.
    pub query: QueryParams,
    /// JSON body for POST/PUT.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The HTTP transport shim.
///
/// Implementations perform one request and return the response body, or an
/// error when the exchange failed or the status was not a success. They hold
/// whatever credentials apply; callers never see them.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<String>;
}

/// `reqwest`-backed [`Transport`].
///
/// # Example
///
/// ```rust,no_run
/// use bitbucket_rest::api::transport::HttpTransport;
/// use bitbucket_rest::auth::Credentials;
///
/// let transport = HttpTransport::new()?
///     .with_credentials(Credentials::basic("me", "app-password"));
/// # Ok::<(), bitbucket_rest::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    credentials: Option<Credentials>,
}

impl HttpTransport {
    /// Creates a transport with the default user agent and no timeout.
    pub fn new() -> Result<Self> {
        Self::builder(&default_user_agent(), None)
    }

    /// Creates a transport with an explicit user agent and optional request timeout.
    pub fn builder(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            credentials: None,
        })
    }

    /// Sets the credentials applied to every request.
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<String> {
        let ApiRequest {
            method,
            url,
            query,
            body,
        } = request;

        let mut builder = self.http.request(method, url);

        if !query.is_empty() {
            let pairs: Vec<(&str, &str)> = query.iter().collect();
            builder = builder.query(&pairs);
        }

        if let Some(body) = &body {
            builder = builder.json(body);
        }

        if let Some(credentials) = &self.credentials {
            if credentials.is_expired() {
                tracing::warn!("OAuth access token has expired; the request will likely be rejected");
            }
            builder = credentials.apply_to_request(builder);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "error response body: {}", text);
            return Err(format_api_error(status, &text));
        }

        Ok(text)
    }
}

/// `bitbucket-rest/<version>`
pub fn default_user_agent() -> String {
    format!("bitbucket-rest/{}", crate::VERSION)
}
