//! Speech Commands - 合成与清理

use crate::domain::AudioId;

/// 合成语音命令
///
/// 未提供的字段使用 `GenerateDefaults` 补齐
#[derive(Debug, Clone)]
pub struct GenerateSpeech {
    pub text: String,
    pub language: Option<String>,
    pub speaker: Option<String>,
    pub speed: Option<f32>,
}

/// 合成语音响应
#[derive(Debug, Clone)]
pub struct GenerateSpeechResponse {
    pub audio_id: AudioId,
    pub message: String,
}

/// 合成请求的默认参数
#[derive(Debug, Clone)]
pub struct GenerateDefaults {
    pub language: String,
    pub speaker: String,
    pub speed: f32,
    /// 响应消息中回显的文本字符数
    pub preview_chars: usize,
}

impl Default for GenerateDefaults {
    fn default() -> Self {
        Self {
            language: "EN".to_string(),
            speaker: "EN-US".to_string(),
            speed: 1.1,
            preview_chars: 50,
        }
    }
}

/// 清理音频命令
#[derive(Debug, Clone)]
pub struct CleanupAudio {
    /// 客户端传入的原始标识
    pub audio_id: String,
}
