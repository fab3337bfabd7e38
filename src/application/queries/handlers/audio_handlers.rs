//! Audio Query Handlers

use std::io::ErrorKind;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::AudioStorePort;
use crate::application::queries::{GetAudioQuery, GetAudioResponse};
use crate::domain::AudioId;

/// GetAudio Handler - 打开句柄对应的音频文件
pub struct GetAudioHandler {
    audio_store: Arc<dyn AudioStorePort>,
}

impl GetAudioHandler {
    pub fn new(audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self { audio_store }
    }

    pub async fn handle(&self, query: GetAudioQuery) -> Result<GetAudioResponse, ApplicationError> {
        let audio_id = AudioId::parse(&query.audio_id)
            .ok_or_else(|| ApplicationError::not_found(query.audio_id.clone()))?;

        let path = self
            .audio_store
            .lookup(audio_id)
            .ok_or_else(|| ApplicationError::not_found(audio_id.to_string()))?;

        // 文件可能已被外部删除，或正与清理请求竞争
        let file = match tokio::fs::File::open(&path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ApplicationError::Gone(audio_id));
            }
            Err(e) => {
                return Err(ApplicationError::storage(format!(
                    "Failed to open audio file: {}",
                    e
                )));
            }
        };

        let file_size = file
            .metadata()
            .await
            .map_err(|e| ApplicationError::storage(format!("Failed to get file metadata: {}", e)))?
            .len();

        Ok(GetAudioResponse {
            file,
            file_size,
            content_type: "audio/wav",
            download_name: audio_id.download_name(),
        })
    }
}
