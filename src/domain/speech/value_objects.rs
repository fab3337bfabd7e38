//! Speech Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SpeechError;

/// 音频句柄唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AudioId(Uuid);

impl AudioId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// 解析客户端传入的标识，非 UUID 返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(Self)
    }

    /// 磁盘上的文件名
    pub fn file_name(&self) -> String {
        format!("tts_{}.wav", self.0)
    }

    /// 下载时的文件名
    pub fn download_name(&self) -> String {
        format!("speech_{}.wav", self.0)
    }
}

impl Default for AudioId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AudioId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 待合成文本
///
/// 原样交给引擎，空白文本是否可合成由引擎决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechText(String);

impl SpeechText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// 前 `max_chars` 个字符，按 char 截断
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.0.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 语速倍率
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(f32);

impl Speed {
    pub fn new(value: f32) -> Result<Self, SpeechError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SpeechError::InvalidSpeed(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}
