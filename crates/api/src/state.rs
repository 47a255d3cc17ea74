use std::sync::Arc;

use holedns_application::use_cases::{
    ActivationControlUseCase, BlockCacheInspectUseCase, QuestionCacheControlUseCase,
    ReloadBlocklistUseCase,
};

/// Everything the control API's handlers need (§6). Cloned per request by
/// axum; every field is an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub block_cache_inspect: Arc<BlockCacheInspectUseCase>,
    pub reload_blocklist: Arc<ReloadBlocklistUseCase>,
    pub question_cache_control: Arc<QuestionCacheControlUseCase>,
    pub activation_control: Arc<ActivationControlUseCase>,
}
