use axum::extract::{Path, State};
use axum::Json;
use tracing::{debug, instrument};

use crate::dto::{
    ActiveResponse, ExistsResponse, HealthResponse, LengthResponse, ReloadAcceptedResponse,
    SetActiveRequest,
};
use crate::state::AppState;

#[instrument(skip(state), name = "api_blockcache_exists")]
pub async fn blockcache_exists(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<ExistsResponse> {
    let exists = state.block_cache_inspect.exists(&name);
    Json(ExistsResponse { exists })
}

#[instrument(skip(state), name = "api_blockcache_length")]
pub async fn blockcache_length(State(state): State<AppState>) -> Json<LengthResponse> {
    Json(LengthResponse {
        length: state.block_cache_inspect.length(),
    })
}

#[instrument(skip(state), name = "api_blockcache_reload")]
pub async fn blockcache_reload(State(state): State<AppState>) -> Json<ReloadAcceptedResponse> {
    debug!("blockcache reload requested");
    state.reload_blocklist.trigger();
    Json(ReloadAcceptedResponse { accepted: true })
}

#[instrument(skip(state), name = "api_questioncache_get")]
pub async fn questioncache_get(
    State(state): State<AppState>,
) -> Json<Vec<holedns_domain::QuestionCacheEntry>> {
    Json(state.question_cache_control.enumerate())
}

#[instrument(skip(state), name = "api_questioncache_clear")]
pub async fn questioncache_clear(State(state): State<AppState>) -> axum::http::StatusCode {
    state.question_cache_control.clear();
    axum::http::StatusCode::NO_CONTENT
}

#[instrument(skip(state), name = "api_activation_set")]
pub async fn activation_set(
    State(state): State<AppState>,
    Json(body): Json<SetActiveRequest>,
) -> Json<ActiveResponse> {
    state
        .activation_control
        .set_active(body.active, body.duration_seconds);
    Json(ActiveResponse {
        active: state.activation_control.is_active(),
    })
}

#[instrument(skip(state), name = "api_activation_get")]
pub async fn activation_get(State(state): State<AppState>) -> Json<ActiveResponse> {
    Json(ActiveResponse {
        active: state.activation_control.is_active(),
    })
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
