//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::{AppConfig, EngineBackend};

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `SONUS_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `SONUS_SERVER__PORT=8888`
/// - `SONUS_ENGINE__BACKEND=fake`
/// - `SONUS_ENGINE__URL=http://melo:8000`
/// - `SONUS_STORAGE__AUDIO_DIR=/var/tmp/sonus`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 默认值（最低优先级）
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8888)?
        .set_default("engine.backend", "http")?
        .set_default("engine.url", "http://localhost:8000")?
        .set_default("engine.timeout_secs", 120)?
        .set_default("engine.languages", vec!["EN", "EN_NEWEST", "EN_V2"])?
        .set_default(
            "engine.fake_speakers",
            vec!["EN-US", "EN-BR", "EN-AU", "EN-India", "EN-Default"],
        )?
        .set_default("engine.fake_sample_rate", 24000)?
        .set_default("synthesis.default_language", "EN")?
        .set_default("synthesis.default_speaker", "EN-US")?
        .set_default("synthesis.default_speed", 1.1)?
        .set_default("synthesis.preview_chars", 50)?
        .set_default("storage.audio_dir", "tmp")?
        .set_default("log.level", "info")?;

    // 2. 配置文件
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 环境变量（最高优先级）
    // 例如: SONUS_ENGINE__URL=http://melo:8000
    // 列表使用逗号分隔: SONUS_ENGINE__LANGUAGES=EN,EN_V2
    builder = builder.add_source(
        Environment::with_prefix("SONUS")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("engine.languages")
            .with_list_parse_key("engine.fake_speakers")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Fake 引擎允许的最高采样率
const MAX_FAKE_SAMPLE_RATE: u32 = 192_000;

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.engine.languages.is_empty() {
        return Err(ConfigError::ValidationError(
            "At least one engine language must be configured".to_string(),
        ));
    }

    if config.engine.backend == EngineBackend::Http && config.engine.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Engine URL cannot be empty for the http backend".to_string(),
        ));
    }

    let sample_rate = config.engine.fake_sample_rate;
    if sample_rate == 0 || sample_rate > MAX_FAKE_SAMPLE_RATE {
        return Err(ConfigError::ValidationError(format!(
            "Fake sample rate must be between 1 and {}, got {}",
            MAX_FAKE_SAMPLE_RATE, sample_rate
        )));
    }

    let speed = config.synthesis.default_speed;
    if !speed.is_finite() || speed <= 0.0 {
        return Err(ConfigError::ValidationError(format!(
            "Default speed must be a positive number, got {}",
            speed
        )));
    }

    if config.storage.audio_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Audio directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}:{}", config.server.host, config.server.port);
    tracing::info!("Engine Backend: {}", config.engine.backend);
    if config.engine.backend == EngineBackend::Http {
        tracing::info!("Engine URL: {}", config.engine.url);
        tracing::info!("Engine Timeout: {}s", config.engine.timeout_secs);
    }
    tracing::info!("Languages: {:?}", config.engine.languages);
    tracing::info!(
        "Defaults: language={}, speaker={}, speed={}",
        config.synthesis.default_language,
        config.synthesis.default_speaker,
        config.synthesis.default_speed
    );
    tracing::info!("Audio Directory: {:?}", config.storage.audio_dir);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
