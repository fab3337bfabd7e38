//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{EngineLoadFailure, ServiceStatus};

// ============================================================================
// Service DTOs
// ============================================================================

/// `GET /` 响应
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub version: &'static str,
}

/// `GET /health` 响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub loaded_languages: Vec<String>,
    pub failed_languages: Vec<EngineLoadFailure>,
    pub version: &'static str,
    pub stored_audio: usize,
}

// ============================================================================
// Speech DTOs
// ============================================================================

/// `POST /generate` 请求体
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub speed: Option<f32>,
}

/// `POST /generate` 响应
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub audio_id: String,
    pub message: String,
}

/// 简单消息响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
