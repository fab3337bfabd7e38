//! HTTP TTS Client - 调用外部 TTS 推理服务
//!
//! 实现 EngineLoaderPort / TtsEnginePort，通过 HTTP 调用外部推理服务
//!
//! 外部推理 API:
//! GET  {base_url}/languages/{language}/speakers
//!      Response: {"speakers": {"EN-US": 0, "EN-BR": 1}}
//! POST {base_url}/synthesize
//!      Request: {"language": "EN", "text": "...", "speaker_id": 0, "speed": 1.1}  (JSON)
//!      Response: audio/wav binary, metadata in headers

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    EngineLoaderPort, SynthesisOutput, SynthesisRequest, TtsEnginePort, TtsError,
};

/// 说话人列表响应
#[derive(Debug, Deserialize)]
struct SpeakersResponse {
    speakers: BTreeMap<String, i64>,
}

/// 合成请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesizeHttpRequest<'a> {
    language: &'a str,
    text: &'a str,
    speaker_id: i64,
    speed: f32,
}

/// HTTP TTS 客户端配置
#[derive(Debug, Clone)]
pub struct HttpTtsClientConfig {
    /// 推理服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpTtsClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpTtsClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

fn map_send_error(e: reqwest::Error) -> TtsError {
    if e.is_timeout() {
        TtsError::Timeout
    } else if e.is_connect() {
        TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
    } else {
        TtsError::NetworkError(e.to_string())
    }
}

/// HTTP TTS 客户端
///
/// 作为引擎加载器：每种语言加载时拉取一次说话人表
pub struct HttpTtsClient {
    client: Client,
    config: HttpTtsClientConfig,
}

impl HttpTtsClient {
    /// 创建新的 HTTP TTS 客户端
    pub fn new(config: HttpTtsClientConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    /// 获取说话人列表 URL
    fn speakers_url(&self, language: &str) -> String {
        format!("{}/languages/{}/speakers", self.base_url(), language)
    }
}

#[async_trait]
impl EngineLoaderPort for HttpTtsClient {
    async fn load(&self, language: &str) -> Result<Arc<dyn TtsEnginePort>, TtsError> {
        let url = self.speakers_url(language);
        tracing::debug!(url = %url, language = %language, "Fetching speakers");

        let response = self.client.get(&url).send().await.map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::LoadFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SpeakersResponse = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to parse speakers: {}", e)))?;

        if body.speakers.is_empty() {
            return Err(TtsError::LoadFailed(format!(
                "No speakers available for language {}",
                language
            )));
        }

        Ok(Arc::new(HttpTtsEngine {
            client: self.client.clone(),
            synthesize_url: format!("{}/synthesize", self.base_url()),
            language: language.to_string(),
            speakers: body.speakers,
        }))
    }
}

/// 单语言 HTTP 引擎
pub struct HttpTtsEngine {
    client: Client,
    synthesize_url: String,
    language: String,
    /// 说话人名称 → 模型内部 ID
    speakers: BTreeMap<String, i64>,
}

#[async_trait]
impl TtsEnginePort for HttpTtsEngine {
    fn language(&self) -> &str {
        &self.language
    }

    fn speakers(&self) -> Vec<String> {
        self.speakers.keys().cloned().collect()
    }

    fn has_speaker(&self, speaker: &str) -> bool {
        self.speakers.contains_key(speaker)
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisOutput, TtsError> {
        let speaker_id = *self
            .speakers
            .get(&request.speaker)
            .ok_or_else(|| TtsError::SpeakerNotFound(request.speaker.clone()))?;

        let body = SynthesizeHttpRequest {
            language: &self.language,
            text: &request.text,
            speaker_id,
            speed: request.speed,
        };

        tracing::debug!(
            url = %self.synthesize_url,
            language = %self.language,
            text_len = request.text.len(),
            speaker_id = speaker_id,
            "Sending synthesize request"
        );

        let response = self
            .client
            .post(&self.synthesize_url)
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let headers = response.headers();
        let duration_ms = headers
            .get("X-TTS-Duration-Ms")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let sample_rate = headers
            .get("X-TTS-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Err(TtsError::InvalidResponse("Empty audio body".to_string()));
        }

        tracing::info!(
            language = %self.language,
            duration_ms = ?duration_ms,
            sample_rate = ?sample_rate,
            audio_size = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesisOutput {
            audio_data,
            duration_ms,
            sample_rate,
        })
    }
}
