//! File Audio Store - 文件系统音频句柄存储
//!
//! 实现 AudioStorePort trait

use async_trait::async_trait;
use dashmap::DashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStoreError, AudioStorePort};
use crate::domain::AudioId;

/// 文件系统音频存储
///
/// 句柄表为 DashMap，删除时先原子地取出条目，
/// 同一标识的并发删除只有一个成功
pub struct FileAudioStore {
    /// 存储根目录
    base_dir: PathBuf,
    /// AudioId → 文件路径
    entries: DashMap<AudioId, PathBuf>,
}

impl FileAudioStore {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStoreError::IoError(e.to_string()))?;

        Ok(Self {
            base_dir,
            entries: DashMap::new(),
        })
    }

    /// 写入中的临时文件，rename 成功后才成为 `tts_{id}.wav`
    fn partial_path(&self, id: AudioId) -> PathBuf {
        self.base_dir.join(format!("{}.part", id.file_name()))
    }

    async fn write_atomic(&self, partial: &Path, target: &Path, data: &[u8]) -> std::io::Result<()> {
        fs::write(partial, data).await?;
        fs::rename(partial, target).await
    }
}

#[async_trait]
impl AudioStorePort for FileAudioStore {
    fn audio_path(&self, id: AudioId) -> PathBuf {
        self.base_dir.join(id.file_name())
    }

    async fn save(&self, id: AudioId, data: &[u8]) -> Result<PathBuf, AudioStoreError> {
        let audio_path = self.audio_path(id);
        let partial = self.partial_path(id);

        if let Err(e) = self.write_atomic(&partial, &audio_path, data).await {
            if let Err(cleanup) = fs::remove_file(&partial).await {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!(
                        audio_id = %id,
                        path = %partial.display(),
                        error = %cleanup,
                        "Failed to remove partial audio file"
                    );
                }
            }
            return Err(AudioStoreError::IoError(e.to_string()));
        }

        self.entries.insert(id, audio_path.clone());

        tracing::debug!(
            audio_id = %id,
            size = data.len(),
            path = %audio_path.display(),
            "Saved audio"
        );

        Ok(audio_path)
    }

    fn lookup(&self, id: AudioId) -> Option<PathBuf> {
        self.entries.get(&id).map(|entry| entry.value().clone())
    }

    async fn remove(&self, id: AudioId) -> Result<(), AudioStoreError> {
        let (_, audio_path) = self
            .entries
            .remove(&id)
            .ok_or(AudioStoreError::NotFound(id))?;

        match fs::remove_file(&audio_path).await {
            Ok(()) => {
                tracing::debug!(audio_id = %id, "Deleted audio");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    audio_id = %id,
                    path = %audio_path.display(),
                    "Audio file already missing, dropping handle"
                );
                Ok(())
            }
            Err(e) => {
                // 删除失败则恢复句柄，允许重试
                self.entries.insert(id, audio_path);
                Err(AudioStoreError::IoError(e.to_string()))
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
