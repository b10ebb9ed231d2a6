//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the custom logo handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Publish reloaded catalogs to in-flight and future requests
//! - Stop on OS signal or shutdown broadcast

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{HttpConfig, MissingLogoPolicy, ServerConfig};
use crate::http::handler::custom_logo_handler;
use crate::lifecycle::signals::shutdown_signal;
use crate::logos::LogoCatalog;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ArcSwap<LogoCatalog>>,
    pub on_missing: MissingLogoPolicy,
}

impl AppState {
    pub fn new(catalog: LogoCatalog, on_missing: MissingLogoPolicy) -> Self {
        Self {
            catalog: Arc::new(ArcSwap::from_pointee(catalog)),
            on_missing,
        }
    }

    /// Publish a new catalog. Requests already holding a snapshot keep it.
    pub fn replace_catalog(&self, catalog: LogoCatalog) {
        self.catalog.store(Arc::new(catalog));
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<LogoCatalog> {
        self.catalog.load_full()
    }
}

/// HTTP server for custom logos.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server serving `catalog`.
    pub fn new(config: ServerConfig, catalog: LogoCatalog) -> Self {
        let state = AppState::new(catalog, config.logos.on_missing);
        let router = build_router(&config.server, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Catalogs received on `catalog_updates` replace the served catalog.
    /// The server stops on Ctrl+C, SIGTERM or a message on `shutdown`.
    pub async fn run(
        self,
        listener: TcpListener,
        mut catalog_updates: mpsc::UnboundedReceiver<LogoCatalog>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            logo_path = %self.config.server.logo_path,
            logos = self.state.catalog().len(),
            "HTTP server starting"
        );

        let state = self.state.clone();
        tokio::spawn(async move {
            while let Some(catalog) = catalog_updates.recv().await {
                tracing::info!(logos = catalog.len(), "Custom logo catalog reloaded");
                state.replace_catalog(catalog);
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the shared state, e.g. to publish catalogs directly.
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

/// Build the Axum router with all middleware layers.
///
/// The handler is mounted for every method so it can answer non-GET
/// requests with its own error body.
#[allow(deprecated)]
pub fn build_router(config: &HttpConfig, state: AppState) -> Router {
    Router::new()
        .route(&config.logo_path, any(custom_logo_handler))
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_router_mounts_configured_path() {
        let mut config = HttpConfig::default();
        config.logo_path = "/branding/logo".to_string();
        let state = AppState::new(LogoCatalog::default(), MissingLogoPolicy::Empty);
        let router = build_router(&config, state);

        let response = router
            .clone()
            .oneshot(Request::builder().uri("/branding/logo").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = router
            .oneshot(Request::builder().uri("/custom-logo").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_router_sets_request_id() {
        let router = build_router(
            &HttpConfig::default(),
            AppState::new(LogoCatalog::default(), MissingLogoPolicy::Empty),
        );

        let response = router
            .oneshot(Request::builder().uri("/custom-logo").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[test]
    fn test_replace_catalog_keeps_old_snapshot() {
        let state = AppState::new(LogoCatalog::default(), MissingLogoPolicy::Empty);
        let before = state.catalog();

        let replacement = LogoCatalog::from_json(
            r#"[{"type": "favicon", "logos": [{"theme": "light-theme", "path": "/f.png"}]}]"#,
        )
        .unwrap();
        state.replace_catalog(replacement);

        assert!(before.is_empty());
        assert_eq!(state.catalog().len(), 1);
    }
}
