//! Cache policies and response header assembly for catalog routes.
//!
//! This crate provides:
//! - `CachePolicy` - route-level cache configuration (scope, freshness,
//!   stale-while-revalidate)
//! - `ResponseHeaders` - header-pair assembly for workload responses
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use catalog_cache::{CachePolicy, ResponseHeaders};
//!
//! let policy = CachePolicy::shared(Duration::from_secs(60))
//!     .with_swr(Duration::from_secs(300));
//!
//! let headers = ResponseHeaders::json()
//!     .cache_control_from_policy(&policy)
//!     .request_id("abc-123")
//!     .build();
//! ```

mod headers;
mod policy;

pub use headers::{header_names, ResponseHeaders, CONTENT_TYPE_JSON};
pub use policy::{CachePolicy, CacheScope};
