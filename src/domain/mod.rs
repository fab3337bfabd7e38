//! Domain Layer - 领域层
//!
//! - Speech Context: 合成请求参数与音频句柄

pub mod speech;

pub use speech::{AudioId, SpeechError, SpeechText, Speed};
