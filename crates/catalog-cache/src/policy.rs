//! Route-level cache policies.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cache scope determining who may cache a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheScope {
    /// Cacheable by CDN and browser (shared cache).
    Public,
    /// Cacheable by browser only.
    Private,
    /// No caching.
    #[default]
    None,
}

impl CacheScope {
    /// Get the Cache-Control directive for this scope.
    pub fn cache_control_directive(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::None => "no-store",
        }
    }

    /// Check if this scope allows any caching.
    pub fn allows_caching(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Cache policy for a route.
///
/// Freshness windows are optional so a policy renders only the directives
/// it actually carries. Responses this gateway serves are cached at the
/// CDN via `s-maxage`; `max-age` is there for routes that want browser
/// caching too.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CachePolicy {
    /// Cache scope.
    pub scope: CacheScope,
    /// Browser freshness window (max-age).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<Duration>,
    /// Shared-cache freshness window (s-maxage).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_max_age: Option<Duration>,
    /// Stale-while-revalidate window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stale_while_revalidate: Option<Duration>,
}

impl CachePolicy {
    /// No caching at all.
    pub fn none() -> Self {
        Self::default()
    }

    /// Public policy with a shared-cache (CDN) freshness window.
    pub fn shared(ttl: Duration) -> Self {
        Self {
            scope: CacheScope::Public,
            shared_max_age: Some(ttl),
            ..Default::default()
        }
    }

    /// Private policy with a browser freshness window.
    pub fn private(ttl: Duration) -> Self {
        Self {
            scope: CacheScope::Private,
            max_age: Some(ttl),
            ..Default::default()
        }
    }

    /// Set the stale-while-revalidate window.
    pub fn with_swr(mut self, duration: Duration) -> Self {
        self.stale_while_revalidate = Some(duration);
        self
    }

    /// Set the browser freshness window.
    pub fn with_max_age(mut self, duration: Duration) -> Self {
        self.max_age = Some(duration);
        self
    }

    /// Render the Cache-Control header value.
    pub fn cache_control_header(&self) -> String {
        if self.scope == CacheScope::None {
            return "no-store".to_string();
        }

        let mut parts = vec![self.scope.cache_control_directive().to_string()];

        if let Some(max_age) = self.max_age {
            parts.push(format!("max-age={}", max_age.as_secs()));
        }
        if let Some(shared) = self.shared_max_age {
            parts.push(format!("s-maxage={}", shared.as_secs()));
        }
        if let Some(swr) = self.stale_while_revalidate {
            parts.push(format!("stale-while-revalidate={}", swr.as_secs()));
        }

        parts.join(", ")
    }
}
