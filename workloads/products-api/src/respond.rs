//! Response assembly for the products API.

use catalog_cache::ResponseHeaders;
use serde::Serialize;
use spin_sdk::http::Response;

use crate::error::ApiError;
use crate::logging::RequestId;

/// Wire shape for error responses.
#[derive(Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
}

/// Serialize `value` as the JSON body of a response carrying `headers`.
pub fn json<T: Serialize>(
    status: u16,
    value: &T,
    headers: ResponseHeaders,
) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(build(status, headers.build(), body))
}

/// Render an error as a JSON response.
///
/// Errors never advertise a cache policy; only the content type and the
/// request id go out. The body is fixed-shape, so assembly cannot fail.
pub fn error(err: &ApiError, request_id: &RequestId) -> Response {
    let status = err.status_code();
    let body = ErrorBody {
        status,
        message: err.to_string(),
    };
    let encoded = serde_json::to_vec(&body).unwrap_or_else(|_| b"{}".to_vec());
    build(
        status,
        ResponseHeaders::json()
            .request_id(request_id.to_string())
            .build(),
        encoded,
    )
}

fn build(status: u16, headers: Vec<(String, String)>, body: Vec<u8>) -> Response {
    let mut builder = Response::builder();
    builder.status(status);
    for (name, value) in headers {
        builder.header(name, value);
    }
    builder.body(body).build()
}
