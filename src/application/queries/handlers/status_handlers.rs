//! Status Query Handlers

use std::sync::Arc;

use crate::application::ports::{AudioStorePort, ModelRegistryPort};
use crate::application::queries::{GetStatus, ServiceStatus, StatusResponse};

/// GetStatus Handler - 汇总已加载语言与加载失败报告
pub struct GetStatusHandler {
    registry: Arc<dyn ModelRegistryPort>,
    audio_store: Arc<dyn AudioStorePort>,
}

impl GetStatusHandler {
    pub fn new(registry: Arc<dyn ModelRegistryPort>, audio_store: Arc<dyn AudioStorePort>) -> Self {
        Self {
            registry,
            audio_store,
        }
    }

    pub fn handle(&self, _query: GetStatus) -> StatusResponse {
        let loaded_languages = self.registry.loaded_languages();
        let failed_languages = self.registry.load_failures();

        let status = if loaded_languages.is_empty() {
            ServiceStatus::Unavailable
        } else if failed_languages.is_empty() {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        };

        StatusResponse {
            status,
            loaded_languages,
            failed_languages,
            stored_audio: self.audio_store.len(),
        }
    }
}
