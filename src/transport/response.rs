//! Response normalization: one uniform shape for JSON and text answers.

use reqwest::Method;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Result;
use crate::error::Error;

/// Uniform result of a platform call: the HTTP status plus the decoded
/// payload. Produced immediately after the network response completes and
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    status: StatusCode,
    payload: Payload,
}

/// The classified response body.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The content type contained `json`; the body parsed as JSON.
    Json(Value),
    /// Anything else, read as text.
    Text(String),
}

impl NormalizedResponse {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The parsed JSON payload, when the response was classified as JSON.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }

    /// The raw text payload, when the response was not classified as JSON.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Json(_) => None,
            Payload::Text(body) => Some(body),
        }
    }

    /// Decodes the JSON payload into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a validation error for text payloads and a parse error when
    /// the JSON does not match `T`.
    pub fn json<T: DeserializeOwned>(self) -> Result<T> {
        match self.payload {
            Payload::Json(value) => Ok(serde_json::from_value(value)?),
            Payload::Text(_) => Err(Error::validation(
                "expected a JSON payload but the response was classified as text",
            )),
        }
    }
}

/// Classifies and decodes a raw response.
///
/// Non-2xx statuses become status errors carrying the raw body. The body
/// read is asynchronous; the future resolves only once the body has been
/// fully consumed.
pub(crate) async fn normalize(
    method: &Method,
    response: reqwest::Response,
) -> Result<NormalizedResponse> {
    let status = response.status();
    let path = response.url().path().to_owned();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();

        tracing::warn!(
            status = %status,
            method = %method,
            path = %path,
            body = %body,
            "API request failed"
        );

        return Err(Error::status(status, method.clone(), path, body));
    }

    let payload = if is_json(response.headers()) {
        let body = response.text().await?;
        let value = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(method = %method, path = %path, "failed to parse JSON response: {e}");
            Error::from(e)
        })?;
        Payload::Json(value)
    } else {
        Payload::Text(response.text().await?)
    };

    Ok(NormalizedResponse { status, payload })
}

/// Any `content-type` value containing the substring `json`, compared
/// case-insensitively, marks the body as JSON.
fn is_json(headers: &HeaderMap) -> bool {
    headers.get_all(CONTENT_TYPE).iter().any(|value| {
        value
            .to_str()
            .is_ok_and(|value| value.to_ascii_lowercase().contains("json"))
    })
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue};
    use serde_json::json;

    use super::*;

    #[test]
    fn plain_content_type_is_json() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        assert!(is_json(&headers), "application/json should classify as JSON");
    }

    #[test]
    fn charset_suffix_is_still_json() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json;charset=UTF-8"),
        );

        assert!(is_json(&headers), "charset parameter should not matter");
    }

    #[test]
    fn classification_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("Application/JSON"));

        assert!(is_json(&headers), "case should not matter");
    }

    #[test]
    fn vendored_json_subtype_is_json() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/vnd.quorum+json"),
        );

        assert!(is_json(&headers), "substring match should catch +json");
    }

    #[test]
    fn text_content_type_is_not_json() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        assert!(!is_json(&headers), "text/plain should classify as text");
    }

    #[test]
    fn missing_content_type_is_not_json() {
        let headers = HeaderMap::new();

        assert!(!is_json(&headers), "no content type means text");
    }

    #[test]
    fn json_accessor_decodes_payload() -> crate::Result<()> {
        let response = NormalizedResponse {
            status: StatusCode::OK,
            payload: Payload::Json(json!({"id": "abc", "quantity": 3})),
        };

        #[derive(serde::Deserialize)]
        struct Grant {
            id: String,
            quantity: i64,
        }

        let grant: Grant = response.json()?;

        assert_eq!(grant.id, "abc");
        assert_eq!(grant.quantity, 3);
        Ok(())
    }

    #[test]
    fn json_accessor_rejects_text_payload() {
        let response = NormalizedResponse {
            status: StatusCode::OK,
            payload: Payload::Text("pong".to_owned()),
        };

        let result: Result<Value> = response.json();

        assert!(result.is_err(), "text payload cannot decode as JSON");
    }
}
