//! Service Handlers - 欢迎页与健康检查

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetStatus;
use crate::infrastructure::http::dto::{HealthResponse, WelcomeResponse};
use crate::infrastructure::http::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 欢迎信息
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the sonus TTS service",
        version: VERSION,
    })
}

/// 健康检查，包含语言加载报告
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = state.get_status_handler.handle(GetStatus);

    Json(HealthResponse {
        status: status.status,
        loaded_languages: status.loaded_languages,
        failed_languages: status.failed_languages,
        version: VERSION,
        stored_audio: status.stored_audio,
    })
}
