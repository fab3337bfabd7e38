//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_store;
mod model_registry;
mod tts_engine;

pub use audio_store::{AudioStoreError, AudioStorePort};
pub use model_registry::{EngineLoadFailure, ModelRegistryPort};
pub use tts_engine::{
    EngineLoaderPort, SynthesisOutput, SynthesisRequest, TtsEnginePort, TtsError,
};
