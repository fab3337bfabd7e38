//! Sonus - 文本转语音 HTTP 网关
//!
//! 启动流程：加载配置 → 加载各语言模型 → 启动 HTTP 服务

use std::sync::Arc;

use sonus::application::{EngineLoaderPort, GenerateDefaults, ModelRegistryPort};
use sonus::config::{load_config, print_config, EngineBackend};
use sonus::infrastructure::adapters::{
    FakeTtsClient, FakeTtsClientConfig, FileAudioStore, HttpTtsClient, HttpTtsClientConfig,
};
use sonus::infrastructure::http::{AppState, HttpServer, ServerConfig};
use sonus::infrastructure::memory::InMemoryModelRegistry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},sonus={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Sonus - TTS gateway v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 创建引擎加载器
    let loader: Box<dyn EngineLoaderPort> = match config.engine.backend {
        EngineBackend::Http => {
            let tts_config = HttpTtsClientConfig::new(config.engine.url.clone())
                .with_timeout(config.engine.timeout_secs);
            Box::new(HttpTtsClient::new(tts_config)?)
        }
        EngineBackend::Fake => Box::new(FakeTtsClient::new(FakeTtsClientConfig {
            speakers: config.engine.fake_speakers.clone(),
            sample_rate: config.engine.fake_sample_rate,
            ..Default::default()
        })),
    };

    // 加载模型，失败的语言记录在加载报告中
    let registry = InMemoryModelRegistry::load(&config.engine.languages, loader.as_ref()).await;
    let failures = registry.load_failures();
    if !failures.is_empty() {
        tracing::warn!(
            loaded = ?registry.loaded_languages(),
            failed = ?failures.iter().map(|f| f.language.as_str()).collect::<Vec<_>>(),
            "Some languages failed to load, see /health for details"
        );
    }

    // 创建音频存储
    let audio_store = FileAudioStore::new(&config.storage.audio_dir).await?;

    let defaults = GenerateDefaults {
        language: config.synthesis.default_language.clone(),
        speaker: config.synthesis.default_speaker.clone(),
        speed: config.synthesis.default_speed,
        preview_chars: config.synthesis.preview_chars,
    };
    let state = AppState::new(registry.arc(), Arc::new(audio_store), defaults);

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
