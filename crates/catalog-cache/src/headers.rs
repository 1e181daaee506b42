//! Response header assembly.

use crate::policy::CachePolicy;

/// Header names used in workload responses.
pub mod header_names {
    /// Content type.
    pub const CONTENT_TYPE: &str = "content-type";
    /// Cache directives.
    pub const CACHE_CONTROL: &str = "cache-control";
    /// Request ID for tracing.
    pub const X_REQUEST_ID: &str = "x-request-id";
}

/// JSON content type value.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Builder for response header pairs.
///
/// Only headers that were set are emitted, so error responses can carry a
/// request id without advertising any cache policy.
#[derive(Debug, Default)]
pub struct ResponseHeaders {
    content_type: Option<String>,
    cache_control: Option<String>,
    request_id: Option<String>,
}

impl ResponseHeaders {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder preset for JSON responses.
    pub fn json() -> Self {
        Self::new().content_type(CONTENT_TYPE_JSON)
    }

    /// Set the Content-Type header.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Set Cache-Control from a policy.
    pub fn cache_control_from_policy(mut self, policy: &CachePolicy) -> Self {
        self.cache_control = Some(policy.cache_control_header());
        self
    }

    /// Set the request ID header.
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = Some(id.into());
        self
    }

    /// Build the header pairs.
    pub fn build(self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(content_type) = self.content_type {
            headers.push((header_names::CONTENT_TYPE.to_string(), content_type));
        }
        if let Some(cache_control) = self.cache_control {
            headers.push((header_names::CACHE_CONTROL.to_string(), cache_control));
        }
        if let Some(request_id) = self.request_id {
            headers.push((header_names::X_REQUEST_ID.to_string(), request_id));
        }

        headers
    }
}
