//! # claimdesk: call-center workspace for insurance follow-up calls
//!
//! `claimdesk` backs the form a revenue-cycle agent keeps open while on the phone with a payer.
//! During a call the agent records one or more patient accounts, looks up guidance for the denial
//! code the representative quotes, and copies a generated summary comment into the billing system.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for the HTTP layer.
//! Records are kept in memory behind the [`db::handlers::AccountStore`] trait, which is injected
//! into [`AppState`] so handlers never touch a global.
//!
//! ### Core Components
//!
//! The **API layer** ([`api`]) exposes a JSON API under `/api/v1/*`: account CRUD, denial code
//! lookup, comment generation and per-call session helpers.
//!
//! The **store** ([`db`]) follows the repository pattern. Accounts get sequential ids starting at
//! 1 that are never reused, and can be filtered by the session they were recorded under.
//!
//! **Denial guidance** ([`denials`]) is a static table of common claim adjustment reason codes
//! with the questions to ask, the fields to capture and the next steps to take.
//!
//! The **comment generator** ([`comments`]) turns an account record into a one-paragraph call
//! summary, with wording specific to the denial code where one exists.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use claimdesk::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = claimdesk::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     claimdesk::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config)?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.
pub mod api;
pub mod comments;
pub mod config;
pub mod db;
pub mod denials;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use crate::config::CorsOrigin;
use crate::db::handlers::{AccountStore, InMemoryAccounts};
use crate::openapi::ApiDoc;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::{
    Router, http,
    routing::{get, post},
};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{AccountId, SessionId};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder()
///     .accounts(Arc::new(InMemoryAccounts::new()))
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub config: Config,
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    // tower-http refuses `*` inside an explicit list, so a wildcard anywhere means any origin
    let allow_origin = if config.cors.allowed_origins.contains(&CorsOrigin::Wildcard) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                // Url serializes with a trailing slash that browsers never send in Origin
                origins.push(url.as_str().trim_end_matches('/').parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PATCH,
            http::Method::DELETE,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_credentials(config.cors.allow_credentials)
        .expose_headers(vec![http::header::LOCATION]);

    if let Some(max_age) = config.cors.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(cors)
}

/// Build the main application router with all endpoints and middleware.
///
/// Routes under `/api/v1` are the workspace API; `/healthz`, `/docs` and (when enabled)
/// `/internal/metrics` sit at the root.
///
/// # Errors
///
/// Returns an error if the CORS configuration cannot be turned into header values.
#[instrument(skip_all)]
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        // Account records
        .route(
            "/accounts",
            get(api::handlers::accounts::list_accounts).post(api::handlers::accounts::create_account),
        )
        .route(
            "/accounts/{id}",
            get(api::handlers::accounts::get_account)
                .patch(api::handlers::accounts::update_account)
                .delete(api::handlers::accounts::delete_account),
        )
        .route("/accounts/{id}/comment", get(api::handlers::accounts::get_account_comment))
        // Denial guidance
        .route("/denial-codes", get(api::handlers::denial_codes::list_denial_codes))
        .route("/denial-codes/{code}", get(api::handlers::denial_codes::get_denial_guidance))
        // Free-standing comment generation
        .route("/comments", post(api::handlers::comments::generate))
        // Call sessions
        .route("/sessions", post(api::handlers::sessions::create_session))
        .route("/sessions/{session_id}", axum::routing::delete(api::handlers::sessions::delete_session))
        .route("/sessions/{session_id}/summary", get(api::handlers::sessions::get_session_summary))
        .layer(DefaultBodyLimit::max(state.config.limits.max_body_bytes))
        .with_state(state.clone());

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;
    let mut router = router.layer(cors_layer);

    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application struct that owns the router and configuration.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] builds the store, state and router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: When the shutdown future resolves, in-flight requests drain and telemetry is
///    flushed
pub struct Application {
    router: Router,
    config: Config,
}

impl Application {
    /// Create a new application instance backed by an empty in-memory store
    pub fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting claimdesk with configuration: {:#?}", config);

        let accounts = InMemoryAccounts::new().with_session_limit(config.limits.max_accounts_per_session);
        let app_state = AppState::builder().accounts(Arc::new(accounts)).config(config.clone()).build();

        let router = build_router(&app_state)?;

        Ok(Self { router, config })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "claimdesk listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
