//! Products API gateway workload.
//!
//! Proxies the upstream catalog behind `/api/products`, serving filtered,
//! sorted and paginated listings with CDN cache headers. Each request makes
//! at most one upstream call; the listing pipeline runs on the fetched
//! batch in the component.

mod error;
mod handlers;
mod logging;
mod respond;

use std::time::Duration;

use anyhow::Result;
use catalog_cache::{CachePolicy, ResponseHeaders};
use catalog_client::CatalogClient;
use catalog_core::ListingQuery;
use spin_sdk::http::{Method, Request, Response};
use spin_sdk::http_component;

use error::ApiError;
use logging::{LogFormat, LogLevel, RequestId, RequestLogger};

const WORKLOAD: &str = "products-api";

/// Upstream catalog service.
const API_BASE: &str = "https://dummyjson.com";

/// CDN policy for listings: fresh for a minute, then served stale for up
/// to five minutes while revalidating.
fn listing_cache_policy() -> CachePolicy {
    CachePolicy::shared(Duration::from_secs(60)).with_swr(Duration::from_secs(300))
}

/// CDN policy for product detail, which churns less than listings.
fn detail_cache_policy() -> CachePolicy {
    CachePolicy::shared(Duration::from_secs(120)).with_swr(Duration::from_secs(600))
}

fn log_format() -> LogFormat {
    match std::env::var("LOG_FORMAT") {
        Ok(value) if value.eq_ignore_ascii_case("human") => LogFormat::Human,
        _ => LogFormat::Json,
    }
}

fn method_name(method: &Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Delete => "DELETE",
        Method::Patch => "PATCH",
        Method::Head => "HEAD",
        Method::Options => "OPTIONS",
        _ => "OTHER",
    }
}

#[http_component]
async fn handle_products(req: Request) -> Result<Response> {
    let request_id = RequestId::generate();
    let logger = RequestLogger::new(request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(req.path())
        .with_min_level(LogLevel::Debug)
        .with_format(log_format());

    logger
        .info_builder("Request received")
        .field("method", method_name(req.method()))
        .emit();

    let response = match route(&req, &request_id, &logger).await {
        Ok(response) => response,
        Err(err) => {
            let status = err.status_code();
            let failure = if status >= 500 {
                logger.error_builder("Request failed")
            } else {
                logger.warn_builder("Request failed")
            };
            failure
                .field("error", err.to_string())
                .field_i64("status", i64::from(status))
                .emit();
            respond::error(&err, &request_id)
        }
    };

    logger
        .info_builder("Request complete")
        .field_i64("status", i64::from(*response.status()))
        .emit();

    Ok(response)
}

async fn route(
    req: &Request,
    request_id: &RequestId,
    logger: &RequestLogger,
) -> Result<Response, ApiError> {
    let client = CatalogClient::with_base_url(API_BASE);
    let path = req.path();

    if let Some(raw_id) = path.strip_prefix("/api/products/") {
        // Only the single id segment is routable below the collection.
        if raw_id.is_empty() || raw_id.contains('/') {
            return Err(ApiError::NotFound(format!("no route for {}", path)));
        }
        return match req.method() {
            Method::Get => {
                let id = handlers::parse_product_id(raw_id)?;
                logger
                    .debug_builder("Fetching product")
                    .field("id", id.to_string())
                    .emit();
                let product = handlers::get_product(&client, id).await?;
                respond::json(
                    200,
                    &product,
                    ResponseHeaders::json()
                        .cache_control_from_policy(&detail_cache_policy())
                        .request_id(request_id.to_string()),
                )
            }
            _ => Err(ApiError::MethodNotAllowed),
        };
    }

    if path == "/api/products" {
        return match req.method() {
            Method::Get => {
                let query = ListingQuery::from_query_string(req.query());
                logger
                    .debug_builder("Listing products")
                    .field("search", query.search.clone())
                    .field_i64("page", i64::from(query.page))
                    .field_i64("page_size", i64::from(query.page_size))
                    .emit();
                let page = handlers::list_products(&client, &query).await?;
                logger
                    .info_builder("Listing assembled")
                    .field_i64("total", page.total as i64)
                    .field_i64("returned", page.items.len() as i64)
                    .emit();
                respond::json(
                    200,
                    &page,
                    ResponseHeaders::json()
                        .cache_control_from_policy(&listing_cache_policy())
                        .request_id(request_id.to_string()),
                )
            }
            Method::Post => {
                let created = handlers::create_product(&client, req.body()).await?;
                logger.info_builder("Product created upstream").emit();
                respond::json(
                    201,
                    &created,
                    ResponseHeaders::json().request_id(request_id.to_string()),
                )
            }
            _ => Err(ApiError::MethodNotAllowed),
        };
    }

    Err(ApiError::NotFound(format!("no route for {}", path)))
}
