use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// The control-plane routes (§6). Mounted by the CLI alongside the DNS
/// listener on a separate bind address.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/blockcache/exists/{name}", get(handlers::blockcache_exists))
        .route("/blockcache/length", get(handlers::blockcache_length))
        .route("/blockcache/reload", post(handlers::blockcache_reload))
        .route("/questioncache", get(handlers::questioncache_get))
        .route("/questioncache", delete(handlers::questioncache_clear))
        .route("/application/active", post(handlers::activation_set))
        .route("/application/active", get(handlers::activation_get))
        .route("/healthz", get(handlers::healthz))
        .with_state(state)
}
