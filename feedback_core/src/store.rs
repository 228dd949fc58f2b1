//! Append-only file store for feedback records

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::{self as async_fs, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::error;

use crate::error::{AppError, Result};
use crate::models::feedback::RECORD_HEADER;

// Appends hold the write lock across open/write/sync so concurrent
// submissions never interleave mid-record. Reads take no lock.
#[derive(Clone)]
pub struct FeedbackStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FeedbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn ensure_exists(&self) -> Result<()> {
        self.touch().await.map_err(|e| {
            error!("failed to create feedback file {}: {}", self.path.display(), e);
            AppError::Storage("保存失败: 无法创建反馈文件".to_string())
        })
    }

    pub async fn append(&self, block: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                async_fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.open_error(e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.open_error(e))?;

        file.write_all(block.as_bytes()).await.map_err(|e| {
            error!("failed to write feedback file {}: {}", self.path.display(), e);
            AppError::Storage("保存失败: 写入反馈文件失败".to_string())
        })?;

        file.sync_all().await.map_err(|e| {
            error!("failed to sync feedback file {}: {}", self.path.display(), e);
            AppError::Storage("保存失败: 写入反馈文件失败".to_string())
        })?;

        Ok(())
    }

    pub async fn read_all(&self) -> Result<String> {
        let read_error = |e: std::io::Error| {
            error!("failed to read feedback file {}: {}", self.path.display(), e);
            AppError::Storage("读取反馈失败".to_string())
        };

        self.touch().await.map_err(read_error)?;

        async_fs::read_to_string(&self.path).await.map_err(read_error)
    }

    pub async fn stats(&self) -> Result<serde_json::Value> {
        let contents = match async_fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => {
                error!("failed to read feedback file {}: {}", self.path.display(), e);
                return Err(AppError::Storage("读取反馈失败".to_string()));
            }
        };

        Ok(serde_json::json!({
            "record_count": contents.matches(RECORD_HEADER).count(),
            "size_bytes": contents.len(),
        }))
    }

    async fn touch(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                async_fs::create_dir_all(parent).await?;
            }
        }

        if !self.path.exists() {
            async_fs::write(&self.path, "").await?;
        }

        Ok(())
    }

    fn open_error(&self, e: std::io::Error) -> AppError {
        error!("failed to open feedback file {}: {}", self.path.display(), e);
        if e.kind() == ErrorKind::PermissionDenied {
            AppError::Storage("保存失败: 反馈文件不可写，请检查文件权限".to_string())
        } else {
            AppError::Storage("保存失败: 无法创建反馈文件".to_string())
        }
    }
}
