use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::encoding::format::QrFormat;
use crate::error_handling::types::StoreError;
use crate::storage::artifact::Artifact;
use crate::storage::store_trait::ArtifactStore;

/// In-process store used by tests and embedded setups. Same contract as
/// `FileStore`: fresh unique ids, whole-artifact visibility, `NotFound` on
/// unknown ids.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, (Artifact, Vec<u8>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_error() -> StoreError {
        StoreError::WriteFailed(std::io::Error::new(
            std::io::ErrorKind::Other,
            "store lock poisoned",
        ))
    }
}

impl ArtifactStore for MemoryStore {
    fn put(&self, format: QrFormat, bytes: &[u8]) -> Result<Artifact, StoreError> {
        let id = format!("qr_{}.{}", Uuid::new_v4(), format.extension());
        let artifact = Artifact {
            id: id.clone(),
            format,
            created_at: Utc::now(),
            size_bytes: bytes.len() as u64,
        };
        let mut entries = self.entries.lock().map_err(|_| Self::lock_error())?;
        entries.insert(id, (artifact.clone(), bytes.to_vec()));
        Ok(artifact)
    }

    fn get(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let entries = self.entries.lock().map_err(|_| Self::lock_error())?;
        match entries.get(id) {
            Some((_, bytes)) => Ok(bytes.clone()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    fn list_all(&self) -> Result<Vec<Artifact>, StoreError> {
        let entries = self.entries.lock().map_err(|_| Self::lock_error())?;
        Ok(entries.values().map(|(artifact, _)| artifact.clone()).collect())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| Self::lock_error())?;
        match entries.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
