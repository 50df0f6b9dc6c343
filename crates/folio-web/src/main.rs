mod api;
mod client_ip;
mod config;
mod dto;
mod error;
mod middleware;
mod notify;
mod rate_limit;
mod state;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::middleware::from_fn;
use folio_core::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::notify::discord::DiscordWebhookNotifier;
use crate::notify::Notifier;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load()?;
    let bind_addr = config.bind_addr;
    let tls_config = config.tls.clone();

    let catalog = match &config.content.path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    tracing::info!(
        "Serving {} projects, {} positions, {} skill categories, {} talks, {} posts, {} services",
        catalog.projects.len(),
        catalog.experience.len(),
        catalog.skills.len(),
        catalog.talks.len(),
        catalog.posts.len(),
        catalog.services.len()
    );

    let notifier: Option<Arc<dyn Notifier>> = match &config.contact.discord_webhook_url {
        Some(url) => {
            tracing::info!("Contact submissions will be forwarded to Discord");
            Some(Arc::new(DiscordWebhookNotifier::new(url.clone())) as Arc<dyn Notifier>)
        }
        None => None,
    };

    let state = AppState::new(&config.contact, catalog, notifier);

    // Rate limiter cleanup task
    let cleanup_limiter = state.contact_limiter.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(60));
        loop {
            interval.tick().await;
            cleanup_limiter.cleanup_expired();
        }
    });

    // CORS: same-origin only by default (no cross-origin requests allowed)
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let base_router = axum::Router::new().nest("/api", api::router());
    let body_limit = RequestBodyLimitLayer::new(config.max_body_kb * 1024);

    let app = if tls_config.is_enabled() {
        base_router
            .layer(from_fn(middleware::security_headers::security_headers_with_hsts))
            .layer(body_limit)
            .layer(from_fn(middleware::payload_limit::json_payload_too_large))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    } else {
        base_router
            .layer(from_fn(middleware::security_headers::security_headers))
            .layer(body_limit)
            .layer(from_fn(middleware::payload_limit::json_payload_too_large))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    };

    if let (Some(cert), Some(key)) = (&tls_config.cert_path, &tls_config.key_path) {
        use axum_server::tls_rustls::RustlsConfig;
        let rustls_config = RustlsConfig::from_pem_file(cert, key).await?;
        tracing::info!("folio-web listening on https://{}", bind_addr);
        axum_server::bind_rustls(bind_addr, rustls_config)
            .serve(app.into_make_service_with_connect_info::<std::net::SocketAddr>())
            .await?;
    } else {
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        tracing::info!("folio-web listening on http://{}", bind_addr);
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
        )
        .await?;
    }

    Ok(())
}
