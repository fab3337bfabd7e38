//! In-Memory Model Registry Implementation

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::{
    EngineLoadFailure, EngineLoaderPort, ModelRegistryPort, TtsEnginePort,
};

/// 内存模型注册表
///
/// 启动时逐个语言加载引擎，之后只读，不需要加锁
pub struct InMemoryModelRegistry {
    engines: HashMap<String, Arc<dyn TtsEnginePort>>,
    /// 已加载语言，保持配置顺序
    order: Vec<String>,
    failures: Vec<EngineLoadFailure>,
}

impl InMemoryModelRegistry {
    /// 加载所有语言
    ///
    /// 单个语言失败只记录到加载报告，不会中断启动
    pub async fn load(languages: &[String], loader: &dyn EngineLoaderPort) -> Self {
        let mut engines: HashMap<String, Arc<dyn TtsEnginePort>> = HashMap::new();
        let mut order = Vec::new();
        let mut failures: Vec<EngineLoadFailure> = Vec::new();

        tracing::info!(languages = ?languages, "Loading models");

        for language in languages {
            if engines.contains_key(language)
                || failures.iter().any(|f| &f.language == language)
            {
                tracing::warn!(language = %language, "Duplicate language in config, skipped");
                continue;
            }

            match loader.load(language).await {
                Ok(engine) => {
                    tracing::info!(
                        language = %language,
                        speakers = ?engine.speakers(),
                        "Model loaded successfully"
                    );
                    order.push(language.clone());
                    engines.insert(language.clone(), engine);
                }
                Err(e) => {
                    tracing::error!(language = %language, error = %e, "Failed to load model");
                    failures.push(EngineLoadFailure {
                        language: language.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Self {
            engines,
            order,
            failures,
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl ModelRegistryPort for InMemoryModelRegistry {
    fn get(&self, language: &str) -> Option<Arc<dyn TtsEnginePort>> {
        self.engines.get(language).cloned()
    }

    fn loaded_languages(&self) -> Vec<String> {
        self.order.clone()
    }

    fn load_failures(&self) -> Vec<EngineLoadFailure> {
        self.failures.clone()
    }
}
