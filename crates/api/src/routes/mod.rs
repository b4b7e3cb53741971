//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session_middleware};

pub mod health;
pub mod ledger;

/// Creates the public API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(health::routes())
}

/// Creates the API router with the session-gated ledger routes.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .merge(ledger::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    Router::new().merge(api_routes()).merge(protected_routes)
}
