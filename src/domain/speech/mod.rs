//! Speech Context - 语音合成上下文
//!
//! 包含：
//! - AudioId: 音频句柄标识
//! - SpeechText: 待合成文本
//! - Speed: 已校验的语速

mod errors;
mod value_objects;

pub use errors::SpeechError;
pub use value_objects::{AudioId, SpeechText, Speed};
