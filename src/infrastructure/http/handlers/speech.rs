//! Speech Handlers - 语音合成

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::GenerateSpeech;
use crate::infrastructure::http::dto::{GenerateRequest, GenerateResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 合成语音
pub async fn generate_speech(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload?;
    let command = GenerateSpeech {
        text: req.text,
        language: req.language,
        speaker: req.speaker,
        speed: req.speed,
    };

    let result = state.generate_speech_handler.handle(command).await?;

    Ok(Json(GenerateResponse {
        audio_id: result.audio_id.to_string(),
        message: result.message,
    }))
}
