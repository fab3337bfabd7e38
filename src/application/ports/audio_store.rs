//! Audio Store Port - 音频句柄存储
//!
//! AudioId → 临时 WAV 文件路径的映射，文件落在本地临时目录

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::AudioId;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStoreError {
    #[error("Audio not found: {0}")]
    NotFound(AudioId),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Store Port
///
/// 生命周期：启动时为空；每次合成成功后写入一条；显式清理时移除。
/// 没有过期策略，也不跨重启保留。
#[async_trait]
pub trait AudioStorePort: Send + Sync {
    /// 音频文件应写入的路径
    fn audio_path(&self, id: AudioId) -> PathBuf;

    /// 写入音频文件并登记句柄（文件写完后才登记）
    async fn save(&self, id: AudioId, data: &[u8]) -> Result<PathBuf, AudioStoreError>;

    /// 查找句柄对应的路径
    fn lookup(&self, id: AudioId) -> Option<PathBuf>;

    /// 删除文件并移除句柄
    ///
    /// 文件已不在磁盘上视为成功；其它 IO 错误时句柄保留
    async fn remove(&self, id: AudioId) -> Result<(), AudioStoreError>;

    /// 当前句柄数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
