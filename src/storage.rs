//! Storage subsystem
//!
//! This module provides abstractions and implementations for persisting
//! rendered QR artifacts between generation and download or cleanup.
//!
//! Components:
//! - `store_trait`: the ArtifactStore trait defining a uniform API.
//! - `artifact`: metadata describing one stored artifact.
//! - `file_store`: filesystem-backed implementation with atomic writes.
//! - `memory_store`: in-process implementation for tests and embedding.

pub mod artifact;
pub mod file_store;
pub mod memory_store;
pub mod store_trait;
