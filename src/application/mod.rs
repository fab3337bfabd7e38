//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、EngineLoader、ModelRegistry、AudioStore）
//! - commands: CQRS 命令及处理器（合成、清理）
//! - queries: CQRS 查询及处理器（音频读取、状态）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{CleanupAudioHandler, GenerateSpeechHandler},
    CleanupAudio, GenerateDefaults, GenerateSpeech, GenerateSpeechResponse,
};

pub use error::ApplicationError;

pub use ports::{
    AudioStoreError, AudioStorePort, EngineLoadFailure, EngineLoaderPort, ModelRegistryPort,
    SynthesisOutput, SynthesisRequest, TtsEnginePort, TtsError,
};

pub use queries::{
    handlers::{GetAudioHandler, GetStatusHandler},
    GetAudioQuery, GetAudioResponse, GetStatus, ServiceStatus, StatusResponse,
};
