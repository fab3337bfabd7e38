//! Audio Queries - 音频查询

use tokio::fs::File;

/// 获取音频查询
#[derive(Debug, Clone)]
pub struct GetAudioQuery {
    /// 客户端传入的原始标识
    pub audio_id: String,
}

/// 获取音频响应
///
/// 文件已打开，由 HTTP 层流式返回
#[derive(Debug)]
pub struct GetAudioResponse {
    pub file: File,
    pub file_size: u64,
    pub content_type: &'static str,
    pub download_name: String,
}
