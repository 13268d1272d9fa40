use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, info, warn};

use crate::error_handling::types::StoreError;
use crate::storage::store_trait::ArtifactStore;

/// Margin added to the configured retention age at assembly time so a sweep
/// cannot race a download that started just before the threshold.
pub const DOWNLOAD_GRACE_SECS: i64 = 30;

/// Periodically removes artifacts older than a fixed age.
///
/// Every failure during a sweep is local: an artifact that cannot be
/// deleted is logged and skipped, and the next tick retries naturally.
pub struct RetentionSweeper {
    store: Arc<dyn ArtifactStore>,
    max_age: Duration,
}

impl RetentionSweeper {
    pub fn new(store: Arc<dyn ArtifactStore>, max_age: Duration) -> Self {
        Self { store, max_age }
    }

    /// One full scan-and-delete pass. Returns how many artifacts were
    /// removed. Artifacts aged exactly `max_age` are retained; only
    /// strictly older ones go.
    pub fn sweep_once(&self) -> usize {
        let artifacts = match self.store.list_all() {
            Ok(artifacts) => artifacts,
            Err(e) => {
                warn!("Retention sweep could not list artifacts: {}", e);
                return 0;
            }
        };
        let now = Utc::now();
        let mut removed = 0;
        for artifact in artifacts {
            let age = now.signed_duration_since(artifact.created_at);
            if age <= self.max_age {
                continue;
            }
            match self.store.delete(&artifact.id) {
                Ok(()) => {
                    info!(
                        "Removed expired artifact {} (age {}s)",
                        artifact.id,
                        age.num_seconds()
                    );
                    removed += 1;
                }
                Err(StoreError::NotFound(_)) => {
                    // a concurrent delete beat this pass, nothing to do
                    debug!("Expired artifact {} was already gone", artifact.id);
                }
                Err(e) => {
                    warn!("Failed to remove expired artifact {}: {}", artifact.id, e);
                }
            }
        }
        removed
    }

    /// Runs sweeps forever, one per `every` interval. The first sweep
    /// happens one full interval after startup.
    pub async fn run(self, every: std::time::Duration) {
        let mut ticker = tokio::time::interval(every);
        // consume the immediate first tick so the loop waits a full period
        ticker.tick().await;
        info!(
            "Retention sweeper running every {}s, max age {}s",
            every.as_secs(),
            self.max_age.num_seconds()
        );
        loop {
            ticker.tick().await;
            let removed = self.sweep_once();
            debug!("Retention sweep finished, removed {} artifact(s)", removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::encoding::format::QrFormat;
    use crate::storage::file_store::FileStore;
    use crate::storage::memory_store::MemoryStore;

    #[test]
    fn test_fresh_artifacts_survive() {
        let store = Arc::new(MemoryStore::new());
        store.put(QrFormat::Png, b"x").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::hours(1));
        assert_eq!(sweeper.sweep_once(), 0);
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_expired_artifacts_are_removed() {
        let store = Arc::new(MemoryStore::new());
        store.put(QrFormat::Png, b"x").unwrap();
        store.put(QrFormat::Svg, b"y").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::milliseconds(10));
        std::thread::sleep(std::time::Duration::from_millis(30));
        assert_eq!(sweeper.sweep_once(), 2);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        store.put(QrFormat::Png, b"x").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::zero());
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(sweeper.sweep_once(), 1);
        assert_eq!(sweeper.sweep_once(), 0);
        assert_eq!(sweeper.sweep_once(), 0);
    }

    #[test]
    fn test_mixed_ages_only_old_removed() {
        let store = Arc::new(MemoryStore::new());
        store.put(QrFormat::Png, b"old").unwrap();
        std::thread::sleep(std::time::Duration::from_millis(60));
        let fresh = store.put(QrFormat::Svg, b"fresh").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::milliseconds(40));
        assert_eq!(sweeper.sweep_once(), 1);
        let remaining = store.list_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, fresh.id);
    }

    #[test]
    fn test_artifact_outlives_threshold_then_expires() {
        let store = Arc::new(MemoryStore::new());
        store.put(QrFormat::Png, b"x").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::milliseconds(200));
        // well inside the retention window
        assert_eq!(sweeper.sweep_once(), 0);
        assert_eq!(store.list_all().unwrap().len(), 1);
        std::thread::sleep(std::time::Duration::from_millis(300));
        // well past it
        assert_eq!(sweeper.sweep_once(), 1);
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_sweeper_tolerates_missing_store_dir() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileStore::new(dir.path().join("missing")).unwrap());
        let sweeper = RetentionSweeper::new(store, Duration::hours(1));
        assert_eq!(sweeper.sweep_once(), 0);
    }

    #[test]
    fn test_sweep_on_file_store_removes_files() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileStore::new(dir.path()).unwrap());
        let artifact = store.put(QrFormat::Pdf, b"%PDF").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::zero());
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert_eq!(sweeper.sweep_once(), 1);
        assert!(!dir.path().join(&artifact.id).exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_sweeps_on_interval() {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = Arc::new(MemoryStore::new());
        store.put(QrFormat::Png, b"x").unwrap();
        let sweeper = RetentionSweeper::new(store.clone(), Duration::zero());
        let handle = tokio::spawn(sweeper.run(std::time::Duration::from_secs(60)));
        // paused clock; sleeping past the first tick runs exactly one sweep
        tokio::time::sleep(std::time::Duration::from_secs(61)).await;
        handle.abort();
        assert!(store.list_all().unwrap().is_empty());
    }
}
