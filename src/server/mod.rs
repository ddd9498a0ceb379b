//! HTTP layer: routes, CORS and static files around [`QuoteService`].

pub mod handlers;

use crate::config::Config;
use crate::errors::{Result, SnapshotError};
use crate::services::quote_service::QuoteService;
use axum::{http::HeaderValue, routing::get, Router};
use handlers::AppState;
use log::{error, info, warn};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router from `config`.
pub fn build_router(config: &Config, service: QuoteService) -> Result<Router> {
    let state = Arc::new(AppState::new(service));

    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/stock/:ticker", get(handlers::get_stock))
        .with_state(state);

    if let Some(dir) = &config.static_dir {
        if !dir.is_dir() {
            warn!("Static directory {} does not exist", dir.display());
        }
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    if let Some(cors) = cors_layer(&config.allowed_origins)? {
        app = app.layer(cors);
    }

    Ok(app)
}

/// 仅允许配置的来源；带凭据时方法和请求头使用镜像而不是通配符
fn cors_layer(origins: &[String]) -> Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|e| SnapshotError::ConfigError(format!("Invalid CORS origin {}: {}", origin, e)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    ))
}

/// Bind to `config.bind_addr` and serve until Ctrl-C.
pub async fn serve(config: &Config, service: QuoteService) -> Result<()> {
    let addr = config.socket_addr()?;
    let source = service.source_name();
    let app = build_router(config, service)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Stock snapshot server listening on {} (source: {})", listener.local_addr()?, source);
    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {} at /static", dir.display());
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
