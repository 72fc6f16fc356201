//! JSON responses that report encode failures through `AppError`.

use anyhow::Context;
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// Encode `value` as a `200 OK` JSON response.
///
/// A value the serializer rejects becomes `AppError::Internal`, rendered as a
/// `500` in the standard error format.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Response, AppError> {
    let bytes = serde_json::to_vec(value).context("failed to encode response body")?;

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::collections::BTreeMap;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn serializable_value_is_sent_as_json() {
        let response = json(&serde_json::json!({ "title": "Book One" })).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_json(response).await["title"], "Book One");
    }

    #[tokio::test]
    async fn unencodable_value_is_an_internal_error() {
        // JSON object keys must be strings.
        let mut shelf = BTreeMap::new();
        shelf.insert((1u8, 2u8), "tuple key");

        let error = json(&shelf).unwrap_err();
        assert!(matches!(error, AppError::Internal(_)));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"]["code"], "internal_error");
    }
}
