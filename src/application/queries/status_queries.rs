//! Status Queries - 服务状态查询

use serde::Serialize;

use crate::application::ports::EngineLoadFailure;

/// 服务健康状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// 所有语言加载成功
    Healthy,
    /// 部分语言加载失败
    Degraded,
    /// 没有可用语言
    Unavailable,
}

/// 获取状态查询
#[derive(Debug, Clone, Copy)]
pub struct GetStatus;

/// 状态查询响应
#[derive(Debug, Clone)]
pub struct StatusResponse {
    pub status: ServiceStatus,
    pub loaded_languages: Vec<String>,
    pub failed_languages: Vec<EngineLoadFailure>,
    pub stored_audio: usize,
}
