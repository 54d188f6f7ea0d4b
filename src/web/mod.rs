//! PassKit web-service router.
//!
//! # Responsibilities
//! - Assemble the axum router for the protocol surface
//! - Hold the injected backend service

pub mod error;
mod handlers;
mod headers;

use std::sync::Arc;

use axum::routing::any;
use axum::Router;

use crate::service::PassKitService;

pub use headers::AUTH_SCHEME;

/// State injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn PassKitService>,
}

/// Build the web-service router around an injected backend.
///
/// Mount it wherever the host application serves its `webServiceURL`.
/// Dispatch works on the captured path tail, so routing is identical
/// whether the router is served at the root or nested.
pub fn router(service: Arc<dyn PassKitService>) -> Router {
    Router::new()
        .route("/{*path}", any(handlers::dispatch))
        .with_state(AppState { service })
}
