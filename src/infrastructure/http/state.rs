//! Application State
//!
//! 持有所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CleanupAudioHandler, GenerateDefaults, GenerateSpeechHandler,
    // Query handlers
    GetAudioHandler, GetStatusHandler,
    // Ports
    AudioStorePort, ModelRegistryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub generate_speech_handler: GenerateSpeechHandler,
    pub cleanup_audio_handler: CleanupAudioHandler,

    // ========== Query Handlers ==========
    pub get_audio_handler: GetAudioHandler,
    pub get_status_handler: GetStatusHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        registry: Arc<dyn ModelRegistryPort>,
        audio_store: Arc<dyn AudioStorePort>,
        defaults: GenerateDefaults,
    ) -> Self {
        Self {
            generate_speech_handler: GenerateSpeechHandler::new(
                registry.clone(),
                audio_store.clone(),
                defaults,
            ),
            cleanup_audio_handler: CleanupAudioHandler::new(audio_store.clone()),

            get_audio_handler: GetAudioHandler::new(audio_store.clone()),
            get_status_handler: GetStatusHandler::new(registry, audio_store),
        }
    }
}
