//! Fake TTS Client - 进程内假引擎
//!
//! 不调用任何模型，按文本长度生成一段正弦波 WAV。
//! 用于本地联调和测试。

use async_trait::async_trait;
use std::io::Cursor;
use std::sync::Arc;

use crate::application::ports::{
    EngineLoaderPort, SynthesisOutput, SynthesisRequest, TtsEnginePort, TtsError,
};

const TONE_HZ: f32 = 220.0;
const AMPLITUDE: f32 = 0.2;
const MIN_DURATION_MS: u64 = 200;
const MAX_DURATION_MS: u64 = 30_000;

/// Fake TTS Client 配置
#[derive(Debug, Clone)]
pub struct FakeTtsClientConfig {
    /// 每种语言的说话人
    pub speakers: Vec<String>,
    /// 采样率
    pub sample_rate: u32,
    /// 每个字符对应的时长（毫秒，speed = 1.0 时）
    pub ms_per_char: u64,
    /// 加载时模拟失败的语言
    pub unavailable_languages: Vec<String>,
}

impl Default for FakeTtsClientConfig {
    fn default() -> Self {
        Self {
            speakers: ["EN-US", "EN-BR", "EN-AU", "EN-India", "EN-Default"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            sample_rate: 24000,
            ms_per_char: 60,
            unavailable_languages: Vec::new(),
        }
    }
}

/// Fake TTS Client
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        tracing::info!(
            speakers = ?config.speakers,
            sample_rate = config.sample_rate,
            "FakeTtsClient initialized"
        );
        Self { config }
    }
}

#[async_trait]
impl EngineLoaderPort for FakeTtsClient {
    async fn load(&self, language: &str) -> Result<Arc<dyn TtsEnginePort>, TtsError> {
        if self.config.unavailable_languages.iter().any(|l| l == language) {
            return Err(TtsError::LoadFailed(format!(
                "Model for language {} is unavailable",
                language
            )));
        }
        if self.config.speakers.is_empty() {
            return Err(TtsError::LoadFailed("No speakers configured".to_string()));
        }

        Ok(Arc::new(FakeTtsEngine {
            language: language.to_string(),
            speakers: self.config.speakers.clone(),
            sample_rate: self.config.sample_rate,
            ms_per_char: self.config.ms_per_char,
        }))
    }
}

/// 单语言假引擎
pub struct FakeTtsEngine {
    language: String,
    speakers: Vec<String>,
    sample_rate: u32,
    ms_per_char: u64,
}

impl FakeTtsEngine {
    fn duration_ms(&self, text: &str, speed: f32) -> u64 {
        let base = text.chars().count() as u64 * self.ms_per_char;
        let scaled = (base as f64 / speed as f64) as u64;
        scaled.clamp(MIN_DURATION_MS, MAX_DURATION_MS)
    }

    fn render(&self, duration_ms: u64) -> Result<Vec<u8>, hound::Error> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let num_samples = self.sample_rate as u64 * duration_ms / 1000;

        let mut cursor = Cursor::new(Vec::with_capacity(44 + num_samples as usize * 2));
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
            let step = 2.0 * std::f32::consts::PI * TONE_HZ / self.sample_rate as f32;
            for n in 0..num_samples {
                let sample = (n as f32 * step).sin() * AMPLITUDE;
                writer.write_sample((sample * i16::MAX as f32) as i16)?;
            }
            writer.finalize()?;
        }
        Ok(cursor.into_inner())
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsEngine {
    fn language(&self) -> &str {
        &self.language
    }

    fn speakers(&self) -> Vec<String> {
        self.speakers.clone()
    }

    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisOutput, TtsError> {
        if !self.has_speaker(&request.speaker) {
            return Err(TtsError::SpeakerNotFound(request.speaker));
        }
        if request.text.trim().is_empty() {
            return Err(TtsError::ServiceError("No text to synthesize".to_string()));
        }

        let duration_ms = self.duration_ms(&request.text, request.speed);
        let audio_data = self
            .render(duration_ms)
            .map_err(|e| TtsError::ServiceError(format!("Failed to encode WAV: {}", e)))?;

        tracing::debug!(
            language = %self.language,
            speaker = %request.speaker,
            duration_ms = duration_ms,
            "FakeTtsEngine: rendered tone"
        );

        Ok(SynthesisOutput {
            audio_data,
            duration_ms: Some(duration_ms),
            sample_rate: Some(self.sample_rate),
        })
    }
}
