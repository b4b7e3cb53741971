//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST routes over the financial ledger
//! - Session middleware with role gating
//! - The session lookup seam and its in-memory implementation
//! - JSON error responses

pub mod error;
pub mod middleware;
pub mod routes;
pub mod sessions;

use std::sync::Arc;

use axum::Router;
use rxerp_core::ledger::LedgerService;
use rxerp_shared::AccessPolicy;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::sessions::SessionStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ledger business operations.
    pub ledger: LedgerService,
    /// Resolves session tokens to identities.
    pub sessions: Arc<dyn SessionStore>,
    /// Roles allowed into the ledger.
    pub access: Arc<AccessPolicy>,
    /// Cookie carrying the session token.
    pub session_cookie: Arc<str>,
}

impl AppState {
    /// Creates the state.
    pub fn new(
        ledger: LedgerService,
        sessions: Arc<dyn SessionStore>,
        access: AccessPolicy,
        session_cookie: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            ledger,
            sessions,
            access: Arc::new(access),
            session_cookie: session_cookie.into(),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
