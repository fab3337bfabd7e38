//! Storage Adapter - 文件系统音频存储

mod file_audio_store;

pub use file_audio_store::FileAudioStore;
