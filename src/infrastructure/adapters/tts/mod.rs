//! TTS Adapter - 引擎加载器与引擎实现
//!
//! - http: 外部推理服务
//! - fake: 进程内正弦波引擎

mod fake_tts_client;
mod http_tts_client;

pub use fake_tts_client::{FakeTtsClient, FakeTtsClientConfig, FakeTtsEngine};
pub use http_tts_client::{HttpTtsClient, HttpTtsClientConfig, HttpTtsEngine};
