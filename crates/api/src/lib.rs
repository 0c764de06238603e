//! # Rollcall API
//!
//! HTTP surface of the Rollcall availability voting service: viewing a
//! schedule's availability matrix, toggling a vote and setting a comment.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Resolve the request, call into `rollcall-core`, shape the response
//! - **Middleware**: Viewer identity extraction and error mapping
//! - **Config**: Environment configuration
//!
//! Handlers only see the storage traits from `rollcall-core`, so the same
//! router runs against Postgres in production and an in-memory store in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Viewer extraction and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use eyre::Result;
use rollcall_core::store::{CommentStore, ScheduleStore, UserStore, VoteStore};
use rollcall_db::PgStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use middleware::auth::{USERNAME_HEADER, USER_ID_HEADER};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    pub schedules: Arc<dyn ScheduleStore>,
    pub users: Arc<dyn UserStore>,
    pub votes: Arc<dyn VoteStore>,
    pub comments: Arc<dyn CommentStore>,
}

impl ApiState {
    /// Uses one store for every concern.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: ScheduleStore + UserStore + VoteStore + CommentStore + 'static,
    {
        Self {
            schedules: store.clone(),
            users: store.clone(),
            votes: store.clone(),
            comments: store,
        }
    }
}

/// Builds the application router with all routes attached to `state`.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Schedule page
        .merge(routes::schedule::routes())
        // Vote toggling
        .merge(routes::availability::routes())
        // Comments
        .merge(routes::comment::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(USERNAME_HEADER),
        ])
        .allow_origin(origins)
        .allow_credentials(true)
}

/// Starts the API server with the provided configuration and database connection
///
/// Sets up logging, wires the Postgres store into the router, applies the
/// CORS, tracing and timeout layers and serves until the listener fails.
pub async fn start_server(config: config::ApiConfig, db_pool: rollcall_db::DbPool) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::from_store(Arc::new(PgStore::new(db_pool))));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
