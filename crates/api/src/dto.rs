use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct LengthResponse {
    pub length: usize,
}

#[derive(Debug, Serialize)]
pub struct ReloadAcceptedResponse {
    pub accepted: bool,
}

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub active: bool,
    pub duration_seconds: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct ActiveResponse {
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
