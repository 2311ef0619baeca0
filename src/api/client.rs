//
//  bitbucket-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitbucket Client
//!
//! [`BitbucketClient`] is the root object. It owns the transport, the base
//! URLs for both API generations and the tracing dispatcher, and hands out
//! endpoint façades scoped to an account, repository or team.
//!
//! [`Requester`] is the typed layer the façades call into: it builds
//! [`ApiRequest`]s, decodes response bodies and runs every exchange under the
//! client's dispatcher.
//!
//! ## Logging
//!
//! Nothing is logged to the global subscriber. The client carries its own
//! [`Dispatch`], a no-op by default; pass one in with
//! [`BitbucketClient::with_dispatch`] to see request and pagination events.
//!
//! ```rust,no_run
//! use bitbucket_rest::BitbucketClient;
//! use bitbucket_rest::auth::Credentials;
//!
//! # async fn example() -> bitbucket_rest::api::Result<()> {
//! let client = BitbucketClient::with_credentials(Credentials::app_password("me", "app-pw"))?;
//!
//! let members = client.v2().teams("atlassian").list_members(5).await?;
//! let issue = client.v1().repositories("me", "widget").get_issue(3).await?;
//! # let _ = (members, issue);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument::WithSubscriber;
use tracing::subscriber::NoSubscriber;
use tracing::Dispatch;
use url::{ParseError, Url};

use crate::api::common::{ApiError, QueryParams, Result};
use crate::api::transport::{default_user_agent, ApiRequest, HttpTransport, Transport};
use crate::api::v1::BitbucketV1;
use crate::api::v2::BitbucketV2;
use crate::auth::Credentials;
use crate::config::ClientConfig;

/// Base URL of the Bitbucket REST API v1.
pub const V1_BASE_URL: &str = "https://bitbucket.org/api/1.0/";

/// Base URL of the Bitbucket REST API v2.
pub const V2_BASE_URL: &str = "https://api.bitbucket.org/2.0/";

/// Parses a base URL, making sure it ends in `/` and can carry a path.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let base = if raw.ends_with('/') {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{}/", raw))?
    };
    if base.cannot_be_a_base() {
        return Err(ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }
    Ok(base)
}

/// Typed request layer shared by every façade.
///
/// Cheap to clone: the transport is reference counted and the dispatcher is
/// a handle.
#[derive(Clone)]
pub struct Requester {
    transport: Arc<dyn Transport>,
    dispatch: Dispatch,
}

impl std::fmt::Debug for Requester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requester").finish_non_exhaustive()
    }
}

impl Requester {
    pub fn new(transport: Arc<dyn Transport>, dispatch: Dispatch) -> Self {
        Self {
            transport,
            dispatch,
        }
    }

    /// Sends a request under the client's dispatcher and returns the raw body.
    async fn send(&self, request: ApiRequest) -> Result<String> {
        let transport = Arc::clone(&self.transport);

        async move {
            let method = request.method.clone();
            let url = request.url.clone();
            tracing::debug!(%method, %url, query = request.query.len(), "sending request");

            match transport.execute(request).await {
                Ok(body) => {
                    tracing::debug!(%method, %url, bytes = body.len(), "request succeeded");
                    Ok(body)
                }
                Err(e) => {
                    tracing::warn!(%method, %url, error = %e, "request failed");
                    Err(e)
                }
            }
        }
        .with_subscriber(self.dispatch.clone())
        .await
    }

    fn decode<T: DeserializeOwned>(&self, url: &Url, body: &str) -> Result<T> {
        serde_json::from_str(body).map_err(|e| {
            tracing::dispatcher::with_default(&self.dispatch, || {
                tracing::warn!(%url, error = %e, "response did not match the expected shape");
            });
            ApiError::decode(url.as_str(), e)
        })
    }

    fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
        serde_json::to_value(body).map_err(ApiError::Encode)
    }

    /// GET `url` and decode the body.
    pub async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        self.get_with(url, &QueryParams::new()).await
    }

    /// GET `url` with query parameters and decode the body.
    pub async fn get_with<T: DeserializeOwned>(&self, url: Url, query: &QueryParams) -> Result<T> {
        let request = ApiRequest::new(Method::GET, url.clone()).with_query(query.clone());
        let body = self.send(request).await?;
        self.decode(&url, &body)
    }

    /// POST a JSON body to `url` and decode the response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::POST, url.clone()).with_body(Self::encode(body)?);
        let body = self.send(request).await?;
        self.decode(&url, &body)
    }

    /// PUT a JSON body to `url` and decode the response.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let request = ApiRequest::new(Method::PUT, url.clone()).with_body(Self::encode(body)?);
        let body = self.send(request).await?;
        self.decode(&url, &body)
    }

    /// DELETE `url`. Any response body is discarded.
    pub async fn delete(&self, url: Url) -> Result<()> {
        self.send(ApiRequest::new(Method::DELETE, url)).await?;
        Ok(())
    }

    pub(crate) fn trace_page(&self, page: usize, total: usize) {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::debug!(page, total, "fetched page");
        });
    }

    pub(crate) fn trace_repeated_page(&self, url: &Url) {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::warn!(%url, "next link points to a page already fetched; stopping");
        });
    }
}

/// Appends path segments to `base`.
///
/// Each segment is percent-encoded on its own, so account names, slugs and
/// keys cannot add segments or a query string. An empty last segment leaves
/// a trailing slash.
pub(crate) fn join<I, S>(base: &Url, segments: I) -> Result<Url>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = base.clone();
    joined
        .path_segments_mut()
        .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(joined)
}

/// The root Bitbucket client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use bitbucket_rest::BitbucketClient;
/// use bitbucket_rest::auth::Credentials;
///
/// // Anonymous access to public resources
/// let anonymous = BitbucketClient::new()?;
///
/// // Authenticated
/// let client = BitbucketClient::with_credentials(Credentials::oauth("token"))?;
/// # Ok::<(), bitbucket_rest::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BitbucketClient {
    requester: Requester,
    v1_base: Url,
    v2_base: Url,
}

impl BitbucketClient {
    /// Creates an unauthenticated client against the public Bitbucket API.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new()?)))
    }

    /// Creates a client that authenticates every request with `credentials`.
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        let transport = HttpTransport::new()?.with_credentials(credentials);
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Creates a client over any [`Transport`], using the public base URLs
    /// and a no-op dispatcher.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            requester: Requester::new(transport, Dispatch::new(NoSubscriber::default())),
            v1_base: Url::parse(V1_BASE_URL).expect("v1 base URL is valid"),
            v2_base: Url::parse(V2_BASE_URL).expect("v2 base URL is valid"),
        }
    }

    /// Builds a client from a loaded [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);
        let timeout = config.timeout_secs.map(Duration::from_secs);

        let mut transport = HttpTransport::builder(&user_agent, timeout)?;
        if let Some(credentials) = config.credentials() {
            transport = transport.with_credentials(credentials);
        }

        Self::with_transport(Arc::new(transport))
            .with_base_urls(&config.v1_base_url, &config.v2_base_url)
    }

    /// Points the client at different API roots (mirrors, test servers).
    pub fn with_base_urls(mut self, v1: &str, v2: &str) -> Result<Self> {
        self.v1_base = parse_base_url(v1)?;
        self.v2_base = parse_base_url(v2)?;
        Ok(self)
    }

    /// Routes this client's tracing events to `dispatch`.
    pub fn with_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.requester.dispatch = dispatch;
        self
    }

    pub fn v1_base_url(&self) -> &Url {
        &self.v1_base
    }

    pub fn v2_base_url(&self) -> &Url {
        &self.v2_base
    }

    /// Bitbucket REST API v1.
    pub fn v1(&self) -> BitbucketV1 {
        BitbucketV1::new(self.requester.clone(), self.v1_base.clone())
    }

    /// Bitbucket REST API v2.
    pub fn v2(&self) -> BitbucketV2 {
        BitbucketV2::new(self.requester.clone(), self.v2_base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::StubTransport;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_base_urls() {
        let client = BitbucketClient::with_transport(Arc::new(StubTransport::new()));
        assert_eq!(client.v1_base_url().as_str(), "https://bitbucket.org/api/1.0/");
        assert_eq!(client.v2_base_url().as_str(), "https://api.bitbucket.org/2.0/");
    }

    #[test]
    fn test_base_urls_get_trailing_slash() {
        let client = BitbucketClient::with_transport(Arc::new(StubTransport::new()))
            .with_base_urls("http://127.0.0.1:9000/1.0", "http://127.0.0.1:9000/2.0/")
            .unwrap();
        assert_eq!(client.v1_base_url().as_str(), "http://127.0.0.1:9000/1.0/");
        assert_eq!(client.v2_base_url().as_str(), "http://127.0.0.1:9000/2.0/");

        let err = BitbucketClient::with_transport(Arc::new(StubTransport::new()))
            .with_base_urls("not a url", V2_BASE_URL)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_join_keeps_base_path() {
        let base = parse_base_url("https://bitbucket.org/api/1.0").unwrap();
        let url = join(&base, ["repositories", "acme", "widget", "issues", ""]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://bitbucket.org/api/1.0/repositories/acme/widget/issues/"
        );

        let url = join(&base, ["repositories", "acme", "widget"]).unwrap();
        assert_eq!(url.as_str(), "https://bitbucket.org/api/1.0/repositories/acme/widget");
    }

    #[test]
    fn test_join_encodes_each_segment() {
        let base = parse_base_url(V2_BASE_URL).unwrap();

        let url = join(&base, ["teams", "acme", "projects", "WID?role=admin"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.bitbucket.org/2.0/teams/acme/projects/WID%3Frole=admin"
        );
        assert!(url.query().is_none());

        let url = join(&base, ["teams", "a/b", ""]).unwrap();
        assert_eq!(url.as_str(), "https://api.bitbucket.org/2.0/teams/a%2Fb/");
    }

    #[test]
    fn test_base_url_must_carry_a_path() {
        let err = parse_base_url("mailto:someone@example.com").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_injected_dispatch_receives_events() {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();

        let stub = StubTransport::new();
        stub.respond(
            "https://api.bitbucket.org/2.0/teams/acme/",
            json!({ "username": "acme" }),
        );
        let client = BitbucketClient::with_transport(Arc::new(stub))
            .with_dispatch(Dispatch::new(subscriber));

        let team = tokio_test::block_on(client.v2().teams("acme").get_profile()).unwrap();
        assert_eq!(team.username.as_deref(), Some("acme"));

        let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("sending request"), "output: {}", output);
        assert!(output.contains("https://api.bitbucket.org/2.0/teams/acme/"));
    }

    #[test]
    fn test_decode_failure_reports_url() {
        let stub = StubTransport::new();
        stub.respond("https://api.bitbucket.org/2.0/teams/acme/", json!({"username": 5}));
        let client = BitbucketClient::with_transport(Arc::new(stub));

        let err = tokio_test::block_on(client.v2().teams("acme").get_profile()).unwrap_err();
        match err {
            ApiError::Decode { url, .. } => {
                assert_eq!(url, "https://api.bitbucket.org/2.0/teams/acme/")
            }
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_body_for_record_is_a_decode_error() {
        let stub = StubTransport::new();
        stub.respond_raw(Method::GET, "https://api.bitbucket.org/2.0/teams/acme/", "\"text\"");
        stub.respond_raw(Method::GET, "https://api.bitbucket.org/2.0/teams/globex/", "not json");
        let client = BitbucketClient::with_transport(Arc::new(stub));

        let err = tokio_test::block_on(client.v2().teams("acme").get_profile()).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "got {:?}", err);

        let err = tokio_test::block_on(client.v2().teams("globex").get_profile()).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "got {:?}", err);
    }
}
