//! HTTP client for the upstream product catalog.
//!
//! A thin wrapper over Spin's outbound HTTP for a dummyjson-style product
//! API: list, detail, and create. Responses are buffered and decoded with
//! typed errors; on non-WASM targets the transport is a stub so the crate
//! stays testable on the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_client::CatalogClient;
//!
//! let client = CatalogClient::new();
//! let products = client.fetch_products().await?;
//! let first = client.fetch_product(products[0].id).await?;
//! ```

mod error;
mod request;
mod response;

pub use error::ClientError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use catalog_core::Product;
use serde::{Deserialize, Serialize};

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Upper bound on products pulled per listing fetch.
const FETCH_LIMIT: u32 = 100;

/// The upstream listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBatch {
    pub products: Vec<Product>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}

/// Client for the upstream product catalog.
///
/// Holds nothing but its configuration; every call is an independent
/// request, so repeated fetches with no upstream mutation return the same
/// values.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    /// Create a client against the default upstream.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Fetch the upstream product set, unwrapped from its envelope.
    ///
    /// A single bounded request; upstream ordering is preserved.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let batch: ProductBatch = self
            .get(&format!("/products?limit={}", FETCH_LIMIT))
            .send()
            .await?
            .error_for_status()?
            .json()?;
        Ok(batch.products)
    }

    /// Fetch one product by id. Upstream 404 becomes `ClientError::NotFound`.
    pub async fn fetch_product(&self, id: u64) -> Result<Product, ClientError> {
        let response = self.get(&format!("/products/{}", id)).send().await?;
        if response.status == 404 {
            return Err(ClientError::NotFound(id));
        }
        response.error_for_status()?.json()
    }

    /// Forward a new-product payload upstream verbatim.
    ///
    /// The created resource comes back as opaque JSON: upstream decides the
    /// shape, this side does not validate it.
    pub async fn create_product(
        &self,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        self.request(Method::Post, "/products/add")
            .json(payload)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::Get, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new(method, format!("{}{}", self.base_url, path))
            .accept("application/json")
    }
}
