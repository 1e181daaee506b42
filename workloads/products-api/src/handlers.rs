//! Route handlers: request parsing plus the upstream round trip.
//!
//! Each handler makes at most one upstream call; filtering, sorting and
//! pagination all happen here on the fetched batch.

use catalog_client::CatalogClient;
use catalog_core::{paginate, ListingQuery, Product, ProductPage};
use serde_json::Value;

use crate::error::ApiError;

/// Serve a product listing for `query`.
pub async fn list_products(
    client: &CatalogClient,
    query: &ListingQuery,
) -> Result<ProductPage, ApiError> {
    let products = client.fetch_products().await?;
    Ok(paginate(products, query))
}

/// Serve a single product by id.
pub async fn get_product(client: &CatalogClient, id: u64) -> Result<Product, ApiError> {
    Ok(client.fetch_product(id).await?)
}

/// Forward a creation payload upstream and return its echo.
pub async fn create_product(client: &CatalogClient, body: &[u8]) -> Result<Value, ApiError> {
    let payload = normalize_payload(body)?;
    Ok(client.create_product(&payload).await?)
}

/// Parse the id segment of a detail path.
pub fn parse_product_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation("invalid product id".to_string()))
}

/// Normalize a creation request body to the JSON value sent upstream.
///
/// Empty and `null` bodies become `{}` so a bare POST still creates a
/// stub product. Clients that stringify twice send a JSON string whose
/// content is the real payload; that inner document is parsed and
/// forwarded instead.
pub fn normalize_payload(body: &[u8]) -> Result<Value, ApiError> {
    if body.is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ApiError::Validation("invalid request body".to_string()))?;

    match value {
        Value::Null => Ok(Value::Object(Default::default())),
        Value::String(inner) => {
            if inner.trim().is_empty() {
                Ok(Value::Object(Default::default()))
            } else {
                serde_json::from_str(&inner)
                    .map_err(|_| ApiError::Validation("invalid request body".to_string()))
            }
        }
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_product_id_accepts_integers() {
        assert_eq!(parse_product_id("1").unwrap(), 1);
        assert_eq!(parse_product_id("42").unwrap(), 42);
        assert_eq!(
            parse_product_id("18446744073709551615").unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn test_parse_product_id_rejects_non_integers() {
        for raw in ["abc", "", "-1", "1.5", "1e3", " 7"] {
            let err = parse_product_id(raw).unwrap_err();
            assert_eq!(err.status_code(), 400, "expected 400 for {:?}", raw);
        }
    }

    #[test]
    fn test_empty_body_becomes_empty_object() {
        assert_eq!(normalize_payload(b"").unwrap(), json!({}));
    }

    #[test]
    fn test_null_body_becomes_empty_object() {
        assert_eq!(normalize_payload(b"null").unwrap(), json!({}));
    }

    #[test]
    fn test_object_body_passes_through() {
        let body = br#"{"title": "Gel Pen", "price": 2.5}"#;
        let value = normalize_payload(body).unwrap();
        assert_eq!(value["title"], "Gel Pen");
        assert_eq!(value["price"], 2.5);
    }

    #[test]
    fn test_array_body_passes_through() {
        let value = normalize_payload(b"[1, 2]").unwrap();
        assert_eq!(value, json!([1, 2]));
    }

    #[test]
    fn test_double_encoded_body_is_unwrapped() {
        // The outer document is a JSON string containing the payload.
        let body = br#""{\"title\": \"Gel Pen\"}""#;
        let value = normalize_payload(body).unwrap();
        assert_eq!(value, json!({"title": "Gel Pen"}));
    }

    #[test]
    fn test_blank_string_body_becomes_empty_object() {
        assert_eq!(normalize_payload(br#""""#).unwrap(), json!({}));
        assert_eq!(normalize_payload(br#""  ""#).unwrap(), json!({}));
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let err = normalize_payload(b"{not json").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_malformed_inner_document_is_rejected() {
        let err = normalize_payload(br#""{broken""#).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
