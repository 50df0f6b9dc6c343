pub mod contact;
pub mod content;

use axum::routing::{get, post};
use axum::Json;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/contact",
            post(contact::submit).fallback(contact::method_not_allowed),
        )
        .route("/projects", get(content::list_projects))
        .route("/projects/tags", get(content::list_tags))
        .route("/experience", get(content::list_experience))
        .route("/skills", get(content::list_skills))
        .route("/open-source", get(content::open_source))
        .route("/talks-writing", get(content::talks_writing))
        .route("/services", get(content::list_services))
        .route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Response;
    use axum::Router;
    use folio_core::Catalog;

    use crate::config::ContactConfig;
    use crate::notify::Notifier;
    use crate::state::AppState;

    pub fn app(catalog: Catalog, notifier: Option<Arc<dyn Notifier>>) -> Router {
        let state = AppState::new(&ContactConfig::default(), catalog, notifier);
        Router::new().nest("/api", super::router()).with_state(state)
    }

    pub async fn body_json(response: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
