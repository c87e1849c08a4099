//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /greetings
//!   POST   /greetings
//!   DELETE /greetings/{id}
//!
//! Handlers are stateless; every request is a single round trip through the
//! greeting store held in [`AppState`].

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{delete, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::repository::GreetingRepository;
use db::DbPool;

pub use error::ApiError;
pub use handlers::AppState;


/// Build the router with all routes, the single-origin CORS policy, and
/// per-request tracing.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/greetings",
            get(handlers::greetings::list).post(handlers::greetings::create),
        )
        .route("/greetings/:id", delete(handlers::greetings::delete))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind` and serve requests until the process is stopped.
///
/// `allowed_origin` is the one origin the CORS layer will accept.
pub async fn serve(bind: &str, pool: DbPool, allowed_origin: &str) -> Result<(), ApiError> {
    let origin: HeaderValue = allowed_origin
        .parse()
        .map_err(|_| ApiError::InvalidOrigin(allowed_origin.to_string()))?;

    let state = AppState {
        store: Arc::new(GreetingRepository::new(pool)),
    };
    let router = app(state, origin);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("API server listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
