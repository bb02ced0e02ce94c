use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, io::AsyncWriteExt, sync::Mutex};
use tracing::{debug, warn};

use crate::errors::StoreError;

/// JSON file holding exactly one document.
///
/// Reads go straight to disk. Writes are serialized through an in-process
/// mutex and land via write-to-temp + rename, so a reader sees either the old
/// or the new file and a failed write leaves the old file in place.
pub struct JsonDocStore {
    file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonDocStore {
    /// Bind the store to a path, creating the parent directory if missing.
    /// The file itself is only created by the first save.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, StoreError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| StoreError::io(parent, e))?;
        }
        Ok(Arc::new(Self { file_path, write_lock: Mutex::new(()) }))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Raw stored bytes.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, StoreError> {
        fs::read(&self.file_path).await.map_err(|e| StoreError::io(&self.file_path, e))
    }

    /// Read and parse the stored document.
    pub async fn load<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        let bytes = self.read_bytes().await?;
        serde_json::from_slice(&bytes).map_err(StoreError::Malformed)
    }

    /// Replace the stored document unconditionally; returns the bytes written.
    pub async fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, StoreError> {
        self.save_if(value, |_| true).await
    }

    /// Replace the stored document if `precondition` accepts the current bytes
    /// (`None` when nothing is stored yet). The check and the write happen under
    /// the writer lock.
    pub async fn save_if<T, F>(&self, value: &T, precondition: F) -> Result<Vec<u8>, StoreError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(Option<&[u8]>) -> bool,
    {
        // serialize before touching the disk
        let data = serde_json::to_vec_pretty(value).map_err(StoreError::Serialize)?;

        let _guard = self.write_lock.lock().await;
        let current = match self.read_bytes().await {
            Ok(bytes) => Some(bytes),
            Err(StoreError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };
        if !precondition(current.as_deref()) {
            return Err(StoreError::PreconditionFailed);
        }

        self.replace_file(&data).await?;
        debug!(path = %self.file_path.display(), bytes = data.len(), "document replaced");
        Ok(data)
    }

    async fn replace_file(&self, data: &[u8]) -> Result<(), StoreError> {
        let tmp = self.temp_path();
        if let Err(e) = write_synced(&tmp, data).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, &self.file_path).await {
            warn!(tmp = %tmp.display(), error = %e, "rename over document failed");
            let _ = fs::remove_file(&tmp).await;
            return Err(StoreError::io(&self.file_path, e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        self.file_path.with_file_name(format!(".{name}.{}.tmp", uuid::Uuid::new_v4()))
    }
}

async fn write_synced(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let mut file = fs::File::create(path).await.map_err(|e| StoreError::io(path, e))?;
    file.write_all(data).await.map_err(|e| StoreError::io(path, e))?;
    file.sync_all().await.map_err(|e| StoreError::io(path, e))?;
    Ok(())
}
