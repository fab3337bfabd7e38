//! TTS Engine Port - TTS 推理引擎抽象
//!
//! 定义语音合成的抽象接口，具体实现在 infrastructure/adapters 层
//!
//! 一个引擎绑定一种语言，并暴露该语言可用的说话人集合

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Speaker not found: {0}")]
    SpeakerNotFound(String),

    #[error("Model load failed: {0}")]
    LoadFailed(String),
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 说话人标识（如 "EN-US"）
    pub speaker: String,
    /// 语速倍率
    pub speed: f32,
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    /// WAV 音频数据
    pub audio_data: Vec<u8>,
    /// 音频时长（毫秒）
    pub duration_ms: Option<u64>,
    /// 采样率
    pub sample_rate: Option<u32>,
}

/// TTS Engine Port
///
/// 单语言合成引擎
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 引擎绑定的语言标识
    fn language(&self) -> &str;

    /// 可用说话人列表（有序）
    fn speakers(&self) -> Vec<String>;

    /// 检查说话人是否可用
    fn has_speaker(&self, speaker: &str) -> bool {
        self.speakers().iter().any(|s| s == speaker)
    }

    /// 执行合成
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisOutput, TtsError>;
}

/// Engine Loader Port
///
/// 启动时按语言实例化引擎
#[async_trait]
pub trait EngineLoaderPort: Send + Sync {
    async fn load(&self, language: &str) -> Result<Arc<dyn TtsEnginePort>, TtsError>;
}
