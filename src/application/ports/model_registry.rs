//! Model Registry Port - 语言到引擎的只读映射

use serde::Serialize;
use std::sync::Arc;

use super::TtsEnginePort;

/// 单个语言加载失败的记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineLoadFailure {
    pub language: String,
    pub error: String,
}

/// Model Registry Port
///
/// 启动时构建，之后只读
pub trait ModelRegistryPort: Send + Sync {
    /// 按语言查找引擎
    fn get(&self, language: &str) -> Option<Arc<dyn TtsEnginePort>>;

    /// 已加载的语言（按配置顺序）
    fn loaded_languages(&self) -> Vec<String>;

    /// 启动时加载失败的语言
    fn load_failures(&self) -> Vec<EngineLoadFailure>;
}
