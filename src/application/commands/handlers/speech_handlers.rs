//! Speech Command Handlers

use std::sync::Arc;

use crate::application::commands::{
    CleanupAudio, GenerateDefaults, GenerateSpeech, GenerateSpeechResponse,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStoreError, AudioStorePort, ModelRegistryPort, SynthesisRequest,
};
use crate::domain::{AudioId, SpeechText, Speed};

// ============================================================================
// GenerateSpeech
// ============================================================================

/// GenerateSpeech Handler
///
/// 校验参数 → 查找引擎与说话人 → 合成 → 写文件并登记句柄
pub struct GenerateSpeechHandler {
    registry: Arc<dyn ModelRegistryPort>,
    audio_store: Arc<dyn AudioStorePort>,
    defaults: GenerateDefaults,
}

impl GenerateSpeechHandler {
    pub fn new(
        registry: Arc<dyn ModelRegistryPort>,
        audio_store: Arc<dyn AudioStorePort>,
        defaults: GenerateDefaults,
    ) -> Self {
        Self {
            registry,
            audio_store,
            defaults,
        }
    }

    pub async fn handle(
        &self,
        command: GenerateSpeech,
    ) -> Result<GenerateSpeechResponse, ApplicationError> {
        let text = SpeechText::new(command.text);
        let speed = Speed::new(command.speed.unwrap_or(self.defaults.speed))?;
        let language = command
            .language
            .unwrap_or_else(|| self.defaults.language.clone());
        let speaker = command
            .speaker
            .unwrap_or_else(|| self.defaults.speaker.clone());

        let engine = self.registry.get(&language).ok_or_else(|| {
            ApplicationError::UnsupportedLanguage {
                language: language.clone(),
                available: self.registry.loaded_languages(),
            }
        })?;

        if !engine.has_speaker(&speaker) {
            return Err(ApplicationError::UnknownSpeaker {
                speaker,
                available: engine.speakers(),
            });
        }

        let audio_id = AudioId::new();
        let preview = text.preview(self.defaults.preview_chars).to_string();

        let output = engine
            .synthesize(SynthesisRequest {
                text: text.into_inner(),
                speaker: speaker.clone(),
                speed: speed.value(),
            })
            .await
            .map_err(|e| ApplicationError::SynthesisError(e.to_string()))?;

        let path = self
            .audio_store
            .save(audio_id, &output.audio_data)
            .await
            .map_err(|e| ApplicationError::storage(e.to_string()))?;

        tracing::info!(
            audio_id = %audio_id,
            language = %language,
            speaker = %speaker,
            speed = speed.value(),
            duration_ms = ?output.duration_ms,
            path = %path.display(),
            "Speech generated"
        );

        Ok(GenerateSpeechResponse {
            audio_id,
            message: format!("Speech generated successfully for text: '{}...'", preview),
        })
    }
}

// ============================================================================
// CleanupAudio
// ============================================================================

/// CleanupAudio Handler
pub struct CleanupAudioHandler {
    audio_store: Arc<dyn AudioStorePort>,
}

impl CleanupAudioHandler {
    pub fn new(audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self { audio_store }
    }

    pub async fn handle(&self, command: CleanupAudio) -> Result<(), ApplicationError> {
        let audio_id = AudioId::parse(&command.audio_id)
            .ok_or_else(|| ApplicationError::not_found(command.audio_id.clone()))?;

        match self.audio_store.remove(audio_id).await {
            Ok(()) => {
                tracing::info!(audio_id = %audio_id, "Audio cleaned up");
                Ok(())
            }
            Err(AudioStoreError::NotFound(_)) => {
                Err(ApplicationError::not_found(audio_id.to_string()))
            }
            Err(AudioStoreError::IoError(reason)) => {
                tracing::error!(audio_id = %audio_id, error = %reason, "Failed to delete audio file");
                Err(ApplicationError::CleanupFailed {
                    id: audio_id,
                    reason,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tempfile::tempdir;

    use crate::application::ports::{
        EngineLoaderPort, SynthesisOutput, TtsEnginePort, TtsError,
    };
    use crate::infrastructure::adapters::{FakeTtsClient, FakeTtsClientConfig, FileAudioStore};
    use crate::infrastructure::memory::InMemoryModelRegistry;

    struct FailingEngine;

    #[async_trait]
    impl TtsEnginePort for FailingEngine {
        fn language(&self) -> &str {
            "EN"
        }

        fn speakers(&self) -> Vec<String> {
            vec!["EN-US".to_string()]
        }

        async fn synthesize(&self, _request: SynthesisRequest) -> Result<SynthesisOutput, TtsError> {
            Err(TtsError::ServiceError("model crashed".to_string()))
        }
    }

    struct FailingLoader;

    #[async_trait]
    impl EngineLoaderPort for FailingLoader {
        async fn load(&self, _language: &str) -> Result<Arc<dyn TtsEnginePort>, TtsError> {
            Ok(Arc::new(FailingEngine))
        }
    }

    async fn setup(
        dir: &std::path::Path,
        loader: &dyn EngineLoaderPort,
    ) -> (GenerateSpeechHandler, CleanupAudioHandler, Arc<FileAudioStore>) {
        let registry = Arc::new(InMemoryModelRegistry::load(&["EN".to_string()], loader).await);
        let store = Arc::new(FileAudioStore::new(dir).await.unwrap());
        let generate = GenerateSpeechHandler::new(
            registry,
            store.clone(),
            GenerateDefaults::default(),
        );
        let cleanup = CleanupAudioHandler::new(store.clone());
        (generate, cleanup, store)
    }

    fn command(text: &str) -> GenerateSpeech {
        GenerateSpeech {
            text: text.to_string(),
            language: None,
            speaker: None,
            speed: None,
        }
    }

    #[tokio::test]
    async fn test_generate_with_defaults() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, _, store) = setup(temp_dir.path(), &loader).await;

        let response = generate.handle(command("Hello there")).await.unwrap();

        assert_eq!(
            response.message,
            "Speech generated successfully for text: 'Hello there...'"
        );
        let path = store.lookup(response.audio_id).unwrap();
        assert!(path.exists());
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("tts_{}.wav", response.audio_id)
        );
    }

    #[tokio::test]
    async fn test_generate_truncates_message_to_preview() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, _, _) = setup(temp_dir.path(), &loader).await;

        let text = "x".repeat(120);
        let response = generate.handle(command(&text)).await.unwrap();

        let expected = format!(
            "Speech generated successfully for text: '{}...'",
            "x".repeat(50)
        );
        assert_eq!(response.message, expected);
    }

    #[tokio::test]
    async fn test_unsupported_language_records_nothing() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, _, store) = setup(temp_dir.path(), &loader).await;

        let mut cmd = command("Bonjour");
        cmd.language = Some("FR".to_string());
        let err = generate.handle(cmd).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::UnsupportedLanguage { ref language, ref available }
                if language == "FR" && available == &vec!["EN".to_string()]
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_speaker_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, _, store) = setup(temp_dir.path(), &loader).await;

        let mut cmd = command("Hello");
        cmd.speaker = Some("ZH".to_string());
        let err = generate.handle(cmd).await.unwrap_err();

        assert!(matches!(err, ApplicationError::UnknownSpeaker { .. }));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_parameters_are_rejected() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, _, _) = setup(temp_dir.path(), &loader).await;

        let mut cmd = command("Hello");
        cmd.speed = Some(-2.0);
        let err = generate.handle(cmd).await.unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_engine_failure_is_synthesis_error() {
        let temp_dir = tempdir().unwrap();
        let (generate, _, store) = setup(temp_dir.path(), &FailingLoader).await;

        let err = generate.handle(command("Hello")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::SynthesisError(ref msg) if msg.contains("model crashed")));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_blank_text_reaches_engine() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, _, store) = setup(temp_dir.path(), &loader).await;

        let err = generate.handle(command("  \n ")).await.unwrap_err();

        assert!(matches!(err, ApplicationError::SynthesisError(_)));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_lifecycle() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (generate, cleanup, store) = setup(temp_dir.path(), &loader).await;

        let response = generate.handle(command("Hello")).await.unwrap();
        let path = store.lookup(response.audio_id).unwrap();

        cleanup
            .handle(CleanupAudio {
                audio_id: response.audio_id.to_string(),
            })
            .await
            .unwrap();
        assert!(!path.exists());
        assert!(store.lookup(response.audio_id).is_none());

        // 第二次删除返回 NotFound
        let err = cleanup
            .handle(CleanupAudio {
                audio_id: response.audio_id.to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_cleanup_unknown_or_malformed_id() {
        let temp_dir = tempdir().unwrap();
        let loader = FakeTtsClient::new(FakeTtsClientConfig::default());
        let (_, cleanup, _) = setup(temp_dir.path(), &loader).await;

        for raw in ["not-a-uuid".to_string(), AudioId::new().to_string()] {
            let err = cleanup.handle(CleanupAudio { audio_id: raw }).await.unwrap_err();
            assert!(matches!(err, ApplicationError::NotFound(_)));
        }
    }
}
