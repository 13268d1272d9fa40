//! Encoder Trait
//!
//! This module defines the `Encoder` trait, the seam between the generation
//! orchestrator and the rendering machinery.
//!
//! Implementors must be stateless with respect to individual calls: the
//! orchestrator invokes `encode` from several tasks at once for the same
//! request, one call per output format plus one for the preview.

use crate::encoding::format::QrFormat;
use crate::error_handling::types::EncodeError;

/// The `Encoder` trait renders request text into artifact bytes.
///
/// All methods return a `Result` so callers can isolate per-format failures.
pub trait Encoder: Send + Sync {
    /// Renders `text` as a QR symbol in the requested output format.
    fn encode(&self, text: &str, format: QrFormat) -> Result<Vec<u8>, EncodeError>;
}
