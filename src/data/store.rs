use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{Mutex, RwLock};

use crate::error::StoreError;
use crate::models::QuizData;

/// Persistence for the question store.
///
/// Every request loads the whole document and, if it mutates anything,
/// saves the whole document back. Implementations hold no cached state
/// between those calls that the caller relies on.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn load(&self) -> Result<QuizData, StoreError>;

    async fn save(&self, data: &QuizData) -> Result<(), StoreError>;
}

/// The store as a pretty-printed JSON file on disk.
///
/// Saves go to a sibling temp file that is then renamed over the target, so
/// readers only ever see a complete document.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    tmp_path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp_path = path.with_file_name(format!(".{}.tmp", file_name));

        Self {
            path,
            tmp_path,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl QuestionStore for JsonFileStore {
    async fn load(&self) -> Result<QuizData, StoreError> {
        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, data: &QuizData) -> Result<(), StoreError> {
        let mut content = serde_json::to_string_pretty(data)?;
        content.push('\n');

        // Last writer wins, but two saves never share the temp file.
        let _guard = self.write_lock.lock().await;

        fs::write(&self.tmp_path, content)
            .await
            .map_err(|source| StoreError::Write {
                path: self.tmp_path.clone(),
                source,
            })?;

        fs::rename(&self.tmp_path, &self.path)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}

/// In-process store, handy for tests and for embedding the router.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<QuizData>,
}

impl MemoryStore {
    pub fn new(data: QuizData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn load(&self) -> Result<QuizData, StoreError> {
        Ok(self.data.read().await.clone())
    }

    async fn save(&self, data: &QuizData) -> Result<(), StoreError> {
        *self.data.write().await = data.clone();
        Ok(())
    }
}
