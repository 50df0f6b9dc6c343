use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Rewrites body-limit rejections into the JSON error body.
///
/// Must sit outside `RequestBodyLimitLayer`, which answers oversized
/// requests with plain text before any handler runs.
pub async fn json_payload_too_large(req: Request<Body>, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::debug!("Request body over limit");
        return AppError::PayloadTooLarge.into_response();
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::middleware::from_fn;
    use axum::routing::post;
    use axum::Router;
    use tower::ServiceExt;
    use tower_http::limit::RequestBodyLimitLayer;

    async fn echo_len(body: Bytes) -> String {
        body.len().to_string()
    }

    fn app() -> Router {
        Router::new()
            .route("/", post(echo_len))
            .layer(RequestBodyLimitLayer::new(16))
            .layer(from_fn(json_payload_too_large))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn declared_oversized_body_gets_json_413() {
        let body = "x".repeat(64);
        let request = Request::post("/")
            .header("content-length", body.len())
            .body(Body::from(body))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Request body too large");
    }

    #[tokio::test]
    async fn streamed_oversized_body_gets_json_413() {
        let request = Request::post("/").body(Body::from("x".repeat(64))).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await["error"], "Request body too large");
    }

    #[tokio::test]
    async fn small_body_passes_through() {
        let request = Request::post("/").body(Body::from("hello")).unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"5");
    }
}
