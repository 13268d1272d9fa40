//! Artifact Store Trait
//!
//! This module defines the `ArtifactStore` trait, which provides an interface
//! for artifact persistence backends.
//!
//! Implementors of this trait are responsible for:
//! - Persisting rendered artifact bytes under fresh collision-free ids
//! - Serving artifact content for downloads
//! - Enumerating stored artifacts for the retention sweeper
//! - Removing expired artifacts
//!
//! All methods return a `Result` to handle potential storage errors.

use crate::encoding::format::QrFormat;
use crate::error_handling::types::StoreError;
use crate::storage::artifact::Artifact;

/// The `ArtifactStore` trait defines the interface for artifact persistence
/// backends shared by the generation orchestrator, the download routes and
/// the retention sweeper.
pub trait ArtifactStore: Send + Sync {
    /// Persists one rendered artifact and returns its metadata.
    ///
    /// The store picks the id, unique per call, so concurrent writers never
    /// contend on a name. An artifact must not become observable through
    /// `get` or `list_all` with partial content.
    fn put(&self, format: QrFormat, bytes: &[u8]) -> Result<Artifact, StoreError>;

    /// Returns the full content of an artifact.
    fn get(&self, id: &str) -> Result<Vec<u8>, StoreError>;

    /// Returns metadata for every stored artifact. An empty store yields an
    /// empty list, not an error.
    fn list_all(&self) -> Result<Vec<Artifact>, StoreError>;

    /// Removes an artifact. Fails with `StoreError::NotFound` when the id is
    /// unknown; callers racing each other treat that as already done.
    fn delete(&self, id: &str) -> Result<(), StoreError>;
}
