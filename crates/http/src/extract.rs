//! Request extractors that report failures through `AppError`.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body.
///
/// The body is decoded as JSON whatever `Content-Type` the client sent, and
/// every failure (unreadable, empty, malformed or mistyped body) becomes a
/// `400 Bad Request` in the standard error format.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            let status = rejection.status();
            tracing::debug!(status = %status, "request body could not be read");
            AppError::bad_request(rejection.body_text())
        })?;

        decode(&bytes).map(JsonBody)
    }
}

/// Decode a JSON payload, mapping serde errors to `AppError::BadRequest`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes)
        .map_err(|err| AppError::bad_request(format!("invalid JSON body: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
    }

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let JsonBody(payload) = JsonBody::<Payload>::from_request(request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload, Payload { name: "x".into() });
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let err = JsonBody::<Payload>::from_request(request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_body_is_bad_request() {
        let err = JsonBody::<Payload>::from_request(request(""), &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn wrong_field_type_is_bad_request() {
        let err = decode::<Payload>(br#"{"name": 7}"#).unwrap_err();
        assert!(err.to_string().starts_with("bad request: invalid JSON body"));
    }
}
