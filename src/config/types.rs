//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub engine: EngineConfig,

    /// 合成请求默认参数
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8888
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 引擎后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineBackend {
    /// 外部 HTTP 推理服务
    #[default]
    Http,
    /// 进程内假引擎（生成正弦波）
    Fake,
}

impl std::fmt::Display for EngineBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineBackend::Http => write!(f, "http"),
            EngineBackend::Fake => write!(f, "fake"),
        }
    }
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// 后端类型
    #[serde(default)]
    pub backend: EngineBackend,

    /// 推理服务基础 URL（仅 http 后端）
    #[serde(default = "default_engine_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_engine_timeout")]
    pub timeout_secs: u64,

    /// 启动时尝试加载的语言
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,

    /// Fake 后端的说话人列表
    #[serde(default = "default_fake_speakers")]
    pub fake_speakers: Vec<String>,

    /// Fake 后端的采样率
    #[serde(default = "default_fake_sample_rate")]
    pub fake_sample_rate: u32,
}

fn default_engine_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_engine_timeout() -> u64 {
    120
}

fn default_languages() -> Vec<String> {
    vec!["EN".to_string(), "EN_NEWEST".to_string(), "EN_V2".to_string()]
}

fn default_fake_speakers() -> Vec<String> {
    ["EN-US", "EN-BR", "EN-AU", "EN-India", "EN-Default"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_fake_sample_rate() -> u32 {
    24000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            backend: EngineBackend::default(),
            url: default_engine_url(),
            timeout_secs: default_engine_timeout(),
            languages: default_languages(),
            fake_speakers: default_fake_speakers(),
            fake_sample_rate: default_fake_sample_rate(),
        }
    }
}

/// 合成请求默认参数
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisConfig {
    /// 默认语言
    #[serde(default = "default_language")]
    pub default_language: String,

    /// 默认说话人
    #[serde(default = "default_speaker")]
    pub default_speaker: String,

    /// 默认语速
    #[serde(default = "default_speed")]
    pub default_speed: f32,

    /// 响应消息中回显的文本字符数
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

fn default_language() -> String {
    "EN".to_string()
}

fn default_speaker() -> String {
    "EN-US".to_string()
}

fn default_speed() -> f32 {
    1.1
}

fn default_preview_chars() -> usize {
    50
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_speaker: default_speaker(),
            default_speed: default_speed(),
            preview_chars: default_preview_chars(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 临时音频目录
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("tmp")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
