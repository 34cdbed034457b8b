use analytics::AnalyticsEngine;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use configuration::error::ConfigError;
use configuration::{CorsSettings, Settings};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;
pub mod wire;

/// The shared application state that all handlers can access.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub engine: AnalyticsEngine,
}

/// Builds the application router with CORS, request tracing and the body limit applied.
pub fn build_router(settings: &Settings) -> Result<Router, ConfigError> {
    let app_state = Arc::new(AppState::default());
    let cors = cors_layer(&settings.cors)?;

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/analysis/complete", post(handlers::analyze_complete))
        .route("/api/analisis/completo", post(handlers::analyze_complete))
        .route("/api/analysis/:kind", post(handlers::analyze_one))
        .with_state(app_state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(settings.server.body_limit_bytes));

    Ok(app)
}

fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, ConfigError> {
    let origins = if settings.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let origins = settings
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| {
                    ConfigError::ValidationError(format!("invalid CORS origin '{}': {}", origin, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any()))
}

/// The main function to configure and run the web server.
///
/// Tracing must already be initialised by the caller.
pub async fn run_server(settings: Settings) -> anyhow::Result<()> {
    let addr = settings.server.socket_addr()?;
    let app = build_router(&settings)?;

    tracing::info!(
        origins = ?settings.cors.allowed_origins,
        "Web server started and listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
