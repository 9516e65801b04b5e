//! # HTTP Collaborators
//!
//! Handles passed to every gateway at construction time: an outbound
//! [`HttpClient`] and the inbound [`HttpRequestContext`] the application is
//! currently serving. Both are optional and the core never uses them itself.

use crate::error::OmnipayResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Outbound request built by a gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequest {
    pub method: String,
    pub uri: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Builder: add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Builder: set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Response returned by an [`HttpClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by gateways to talk to their provider.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Send a request and wait for the response
    async fn send(&self, request: HttpRequest) -> OmnipayResult<HttpResponse>;
}

/// The request the application received, e.g. a provider redirect or
/// notification that a gateway needs to inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpRequestContext {
    pub method: String,
    pub uri: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub query: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl HttpRequestContext {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Builder: add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Builder: set the body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// Shared handle to an HTTP client
pub type SharedHttpClient = Arc<dyn HttpClient>;

/// Shared handle to the inbound request
pub type SharedRequestContext = Arc<HttpRequestContext>;

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoClient;

    #[async_trait]
    impl HttpClient for EchoClient {
        async fn send(&self, request: HttpRequest) -> OmnipayResult<HttpResponse> {
            Ok(HttpResponse {
                status: 200,
                headers: request.headers,
                body: request.body.unwrap_or_default(),
            })
        }
    }

    #[tokio::test]
    async fn test_shared_client_dispatch() {
        let client: SharedHttpClient = Arc::new(EchoClient);
        let request = HttpRequest::new("POST", "https://example.com/charge")
            .with_header("Content-Type", "application/json")
            .with_body("{}");

        let response = client.send(request).await.unwrap();
        assert!(response.is_success());
        assert_eq!(response.body, "{}");
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_request_context_query() {
        let ctx = HttpRequestContext::new("GET", "/return?token=abc").with_query("token", "abc");

        assert_eq!(ctx.query_param("token"), Some("abc"));
        assert_eq!(ctx.query_param("missing"), None);
    }
}
