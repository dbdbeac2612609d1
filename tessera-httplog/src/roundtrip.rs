//! Request and response descriptions captured for logging.

use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method, StatusCode};
use url::Url;

/// Description of an outgoing HTTP request.
#[derive(Debug, Clone)]
pub struct RequestInfo {
    /// Request method.
    pub method: Method,
    /// Request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body, if one was sent.
    pub body: Option<String>,
}

impl RequestInfo {
    /// Describe a request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the request body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Description of a received HTTP response.
///
/// Carries a back-reference to its originating request, so a single value is
/// enough to describe the whole roundtrip.
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    /// Response status code.
    pub status: StatusCode,
    /// Final response URL.
    pub url: Url,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body text.
    pub text: String,
    /// The request that produced this response.
    pub request: RequestInfo,
}

impl ResponseInfo {
    /// Describe a response with no headers and an empty body.
    pub fn new(status: StatusCode, url: Url, request: RequestInfo) -> Self {
        Self {
            status,
            url,
            headers: HeaderMap::new(),
            text: String::new(),
            request,
        }
    }

    /// Add a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set the response body text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The status reason phrase, e.g. `OK` for 200.
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }
}
