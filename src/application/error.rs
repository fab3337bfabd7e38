//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::{AudioId, SpeechError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 语言未加载
    #[error("Language {language} not supported. Available: {available:?}")]
    UnsupportedLanguage {
        language: String,
        available: Vec<String>,
    },

    /// 说话人不在引擎的说话人集合中
    #[error("Speaker {speaker} not found. Available: {available:?}")]
    UnknownSpeaker {
        speaker: String,
        available: Vec<String>,
    },

    /// 请求参数无效
    #[error("{0}")]
    InvalidParameter(String),

    /// 合成失败
    #[error("Generation failed: {0}")]
    SynthesisError(String),

    /// 句柄不存在
    #[error("Audio file not found.")]
    NotFound(String),

    /// 句柄存在但文件已被外部删除
    #[error("Audio file no longer exists.")]
    Gone(AudioId),

    /// 文件删除失败
    #[error("Failed to delete audio file {id}: {reason}")]
    CleanupFailed { id: AudioId, reason: String },

    /// 存储错误
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// 创建存储错误
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError(message.into())
    }
}

impl From<SpeechError> for ApplicationError {
    fn from(err: SpeechError) -> Self {
        Self::InvalidParameter(err.to_string())
    }
}
