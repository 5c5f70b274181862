//! Classification of completed HTTP responses.
//!
//! A 2xx response yields its JSON body. Everything else becomes exactly one
//! [`ApiError`] whose kind follows [`ApiErrorKind::from_status`]. The message
//! is the body's `message` field when there is one, otherwise a fixed string
//! naming the status. Extracting the message never fails.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiErrorKind};
use crate::http::HttpResponse;

/// Parse a response into its JSON payload or the matching [`ApiError`].
///
/// An empty success body (e.g. `204 No Content`) yields an empty JSON
/// object. A body of only whitespace is not empty and fails to parse.
pub fn parse_response(response: HttpResponse) -> Result<Value, ApiError> {
    if !response.is_success() {
        return Err(error_for_status(response));
    }

    if response.body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    match serde_json::from_slice(&response.body) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::warn!("unparseable {} response body: {e}", response.status);
            let message = format!("Invalid JSON in response: {e}");
            Err(ApiError::from_response(ApiErrorKind::Generic, message, response))
        }
    }
}

/// Like [`parse_response`], then deserializes the payload into `T`. A
/// payload of the wrong shape is a `Generic` error that keeps the response.
pub fn parse_response_as<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let raw = response.clone();
    let value = parse_response(response)?;
    serde_json::from_value(value).map_err(|e| {
        let message = format!("Unexpected response shape: {e}");
        ApiError::from_response(ApiErrorKind::Generic, message, raw)
    })
}

/// Build the error for a non-2xx response.
pub fn error_for_status(response: HttpResponse) -> ApiError {
    let kind = ApiErrorKind::from_status(response.status);
    let message = extract_message(&response);
    log::debug!("{} response classified as {kind:?}: {message}", response.status);
    ApiError::from_response(kind, message, response)
}

fn extract_message(response: &HttpResponse) -> String {
    serde_json::from_slice::<Value>(&response.body)
        .ok()
        .and_then(|body| match body.get("message") {
            Some(Value::String(message)) => Some(message.clone()),
            _ => None,
        })
        .unwrap_or_else(|| format!("Request failed with status {}", response.status))
}
