//! Audio Handlers - 音频下载与清理

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::application::{CleanupAudio, GetAudioQuery};
use crate::infrastructure::http::dto::MessageResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 下载音频（流式返回）
///
/// 路径参数按字符串接收，非法 UUID 也返回 404
pub async fn get_audio(
    State(state): State<Arc<AppState>>,
    Path(audio_id): Path<String>,
) -> Result<Response, ApiError> {
    let result = state
        .get_audio_handler
        .handle(GetAudioQuery { audio_id })
        .await?;

    let body = Body::from_stream(ReaderStream::new(result.file));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, result.content_type)
        .header(header::CONTENT_LENGTH, result.file_size)
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", result.download_name),
        )
        .body(body)
        .map_err(|e| ApiError::Internal(format!("Failed to build response: {}", e)))
}

/// 清理音频
pub async fn cleanup_audio(
    State(state): State<Arc<AppState>>,
    Path(audio_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .cleanup_audio_handler
        .handle(CleanupAudio { audio_id })
        .await?;

    Ok(Json(MessageResponse::new("Audio file cleaned up")))
}
