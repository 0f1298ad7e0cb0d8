//! Response helpers shared by handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 200 with the JSON value, or 200 with an empty body when absent ("not found" is not an error).
pub fn found_or_empty<T: Serialize>(value: Option<T>) -> Response {
    match value {
        Some(v) => (StatusCode::OK, Json(v)).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn absent_value_is_empty_ok() {
        let resp = found_or_empty::<u8>(None);
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn present_value_is_json() {
        let resp = found_or_empty(Some(serde_json::json!({"id": 1})));
        assert_eq!(
            resp.headers().get(axum::http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"id":1}"#);
    }
}
