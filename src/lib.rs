//! Sonus - 文本转语音 HTTP 网关
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Speech Context: AudioId、SpeechText、Speed
//!
//! 应用层 (application/):
//! - Ports: TtsEngine、EngineLoader、ModelRegistry、AudioStore
//! - Commands: 合成、清理
//! - Queries: 音频读取、服务状态
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: 模型注册表
//! - Adapters: HTTP/Fake TTS 引擎、文件音频存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
