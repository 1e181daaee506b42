//! HTTP request builder.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ClientError;
use crate::response::Response;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

/// A builder for constructing outbound HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) method: Method,
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) url: String,
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) headers: HashMap<String, String>,
    #[allow(dead_code)] // Used in wasm32 target
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Set the Content-Type header.
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, ClientError> {
        let json = serde_json::to_vec(value)
            .map_err(|e| ClientError::Transport(format!("failed to encode body: {e}")))?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Send the request and return the buffered response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, ClientError> {
        use spin_sdk::http::Method as SpinMethod;

        let method = match self.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Patch => SpinMethod::Patch,
            Method::Delete => SpinMethod::Delete,
            Method::Head => SpinMethod::Head,
            Method::Options => SpinMethod::Options,
        };

        let mut builder = spin_sdk::http::Request::builder();
        builder.method(method).uri(&self.url);
        for (key, value) in &self.headers {
            builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.body {
            builder.body(body);
        }

        let response: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = *response.status();
        Ok(Response::new(status, response.into_body()))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, ClientError> {
        // Empty response for non-WASM builds (testing/development)
        Ok(Response::new(200, Vec::new()))
    }
}
