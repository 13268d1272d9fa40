use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::encoding::format::QrFormat;
use crate::error_handling::types::StoreError;
use crate::storage::artifact::Artifact;
use crate::storage::store_trait::ArtifactStore;

pub struct FileStore {
    base_dir: PathBuf,
    catalog: Mutex<HashMap<String, Artifact>>, // id to metadata, content lives in base_dir
}

impl FileStore {
    /// Opens a store rooted at `base_dir`. The directory itself is created
    /// lazily on first write; when it already exists its contents seed the
    /// catalog, so retention keeps working across restarts.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StoreError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let catalog = Self::scan_existing(&base_dir)?;
        if !catalog.is_empty() {
            info!(
                "Recovered {} artifact(s) from {}",
                catalog.len(),
                base_dir.display()
            );
        }
        Ok(Self {
            base_dir,
            catalog: Mutex::new(catalog),
        })
    }

    fn scan_existing(base_dir: &Path) -> Result<HashMap<String, Artifact>, StoreError> {
        let mut catalog = HashMap::new();
        if !base_dir.is_dir() {
            return Ok(catalog);
        }
        let entries = fs::read_dir(base_dir).map_err(|e| {
            error!("Failed to read store dir {}: {}", base_dir.display(), e);
            StoreError::ReadFailed(e)
        })?;
        for entry in entries {
            let entry = entry.map_err(|e| {
                error!("Dir entry error: {}", e);
                StoreError::ReadFailed(e)
            })?;
            let path = entry.path();
            let format = match path
                .extension()
                .and_then(|s| s.to_str())
                .and_then(QrFormat::from_extension)
            {
                Some(f) => f,
                None => continue,
            };
            let id = match path.file_name().and_then(|s| s.to_str()) {
                Some(n) => n.to_string(),
                None => continue,
            };
            let metadata = entry.metadata().map_err(|e| {
                error!("Failed to stat {}: {}", path.display(), e);
                StoreError::ReadFailed(e)
            })?;
            if !metadata.is_file() {
                continue;
            }
            // mtime stands in for the original creation time after a restart
            let created_at: DateTime<Utc> = metadata
                .modified()
                .map(DateTime::from)
                .unwrap_or_else(|_| Utc::now());
            catalog.insert(
                id.clone(),
                Artifact {
                    id,
                    format,
                    created_at,
                    size_bytes: metadata.len(),
                },
            );
        }
        Ok(catalog)
    }

    /// Rejects ids that could escape the store directory.
    fn checked_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(self.base_dir.join(id))
    }
}

impl ArtifactStore for FileStore {
    fn put(&self, format: QrFormat, bytes: &[u8]) -> Result<Artifact, StoreError> {
        fs::create_dir_all(&self.base_dir).map_err(|e| {
            error!(
                "Failed to create store dir {}: {}",
                self.base_dir.display(),
                e
            );
            StoreError::WriteFailed(e)
        })?;

        let id = format!("qr_{}.{}", Uuid::new_v4(), format.extension());
        let target = self.base_dir.join(&id);

        // write into a sibling tempfile first so `get` never sees partial bytes
        let mut tmp = NamedTempFile::new_in(&self.base_dir).map_err(|e| {
            error!(
                "Failed to create tempfile in {}: {}",
                self.base_dir.display(),
                e
            );
            StoreError::WriteFailed(e)
        })?;
        tmp.write_all(bytes).map_err(|e| {
            error!("Failed to write artifact {}: {}", id, e);
            StoreError::WriteFailed(e)
        })?;
        tmp.as_file_mut().sync_all().map_err(|e| {
            error!("Failed to sync artifact {}: {}", id, e);
            StoreError::WriteFailed(e)
        })?;
        tmp.persist(&target).map_err(|e| {
            error!("Failed to persist artifact {}: {}", id, e.error);
            StoreError::WriteFailed(e.error)
        })?;

        let artifact = Artifact {
            id: id.clone(),
            format,
            created_at: Utc::now(),
            size_bytes: bytes.len() as u64,
        };
        if let Ok(mut catalog) = self.catalog.lock() {
            catalog.insert(id.clone(), artifact.clone());
        }
        debug!("Stored artifact {} ({} byte(s))", id, bytes.len());
        Ok(artifact)
    }

    fn get(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.checked_path(id)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => {
                error!("Failed to read artifact {}: {}", path.display(), e);
                Err(StoreError::ReadFailed(e))
            }
        }
    }

    fn list_all(&self) -> Result<Vec<Artifact>, StoreError> {
        let catalog = match self.catalog.lock() {
            Ok(c) => c,
            Err(_) => {
                warn!("Artifact catalog lock poisoned, reporting empty store");
                return Ok(Vec::new());
            }
        };
        Ok(catalog.values().cloned().collect())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.checked_path(id)?;
        let known = match self.catalog.lock() {
            Ok(mut catalog) => catalog.remove(id).is_some(),
            Err(_) => false,
        };
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!("Deleted artifact {}", id);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if known {
                    debug!("Artifact file {} was already gone", id);
                    Ok(())
                } else {
                    Err(StoreError::NotFound(id.to_string()))
                }
            }
            Err(e) => {
                error!("Failed to delete artifact {}: {}", path.display(), e);
                Err(StoreError::WriteFailed(e))
            }
        }
    }
}
