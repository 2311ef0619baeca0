//
//  bitbucket-rest
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! In-memory [`Transport`] for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tracing::subscriber::NoSubscriber;
use tracing::Dispatch;

use crate::api::client::{BitbucketClient, Requester};
use crate::api::common::{ApiError, Result};
use crate::api::transport::{ApiRequest, Transport};

enum Reply {
    Body(String),
    Fail(StatusCode, String),
    Error(Box<dyn Fn() -> ApiError + Send>),
}

#[derive(Default)]
struct State {
    replies: HashMap<(Method, String), Reply>,
    requests: Vec<ApiRequest>,
}

/// Replays canned bodies keyed by method and URL and records every request.
///
/// Unknown routes answer 404 so a wrong path shows up as a failed call.
#[derive(Clone, Default)]
pub(crate) struct StubTransport {
    state: Arc<Mutex<State>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// GET `url` answers with `body`.
    pub fn respond(&self, url: &str, body: serde_json::Value) {
        self.respond_to(Method::GET, url, body);
    }

    pub fn respond_to(&self, method: Method, url: &str, body: serde_json::Value) {
        self.respond_raw(method, url, &body.to_string());
    }

    pub fn respond_raw(&self, method: Method, url: &str, body: &str) {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert((method, url.to_string()), Reply::Body(body.to_string()));
    }

    /// GET `url` fails with `status`.
    pub fn fail(&self, url: &str, status: StatusCode, message: &str) {
        self.state.lock().unwrap().replies.insert(
            (Method::GET, url.to_string()),
            Reply::Fail(status, message.to_string()),
        );
    }

    /// GET `url` fails with whatever `error` builds.
    pub fn fail_with<F>(&self, url: &str, error: F)
    where
        F: Fn() -> ApiError + Send + 'static,
    {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert((Method::GET, url.to_string()), Reply::Error(Box::new(error)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().pop().expect("no request was made")
    }

    pub fn requester(&self) -> Requester {
        Requester::new(Arc::new(self.clone()), Dispatch::new(NoSubscriber::default()))
    }

    pub fn client(&self) -> BitbucketClient {
        BitbucketClient::with_transport(Arc::new(self.clone()))
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: ApiRequest) -> Result<String> {
        let mut state = self.state.lock().unwrap();
        let key = (request.method.clone(), request.url.as_str().to_string());
        state.requests.push(request);

        match state.replies.get(&key) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::Fail(status, message)) => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            Some(Reply::Error(error)) => Err(error()),
            None => Err(ApiError::Status {
                status: StatusCode::NOT_FOUND,
                message: format!("no stub for {} {}", key.0, key.1),
            }),
        }
    }
}
