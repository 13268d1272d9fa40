//! Multi-format generation orchestration for a single request.
//!
//! This module provides `Generator`, the component that fans one validated
//! URL out into an independent encode-and-store task per output format plus
//! one preview render, then joins everything into a `GenerationResponse`.
//!
//! Highlights
//! - One blocking task per format; a failing format never cancels its siblings
//! - Per-format failures land inside the response, not in the return error
//! - The preview is rendered separately, base64-inlined and never stored
//! - Exactly one downloads entry per format, success or failure

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{error, info, warn};

use crate::encoding::encoder_trait::Encoder;
use crate::encoding::format::{QrFormat, PREVIEW_FORMAT};
use crate::error_handling::types::{EncodeError, GenerateError};
use crate::generation::types::{DownloadEntry, FormatResult, GenerationResponse};
use crate::storage::store_trait::ArtifactStore;

/// Route prefix download links point at; must match the web interface.
pub const DOWNLOAD_PATH: &str = "/downloads";

pub struct Generator {
    encoder: Arc<dyn Encoder>,
    store: Arc<dyn ArtifactStore>,
}

impl Generator {
    pub fn new(encoder: Arc<dyn Encoder>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { encoder, store }
    }

    /// Renders and stores `url` in every supported format and builds the
    /// response, including the inline preview.
    ///
    /// Per-format errors are contained: each format always gets its entry.
    /// The only failure that aborts the whole request is a failed preview.
    pub async fn generate(&self, url: &str) -> Result<GenerationResponse, GenerateError> {
        let mut jobs = Vec::with_capacity(QrFormat::ALL.len());
        for format in QrFormat::ALL {
            let encoder = Arc::clone(&self.encoder);
            let store = Arc::clone(&self.store);
            let text = url.to_owned();
            let job = tokio::task::spawn_blocking(move || {
                encode_and_store(encoder.as_ref(), store.as_ref(), &text, format)
            });
            jobs.push((format, job));
        }

        let preview_job = {
            let encoder = Arc::clone(&self.encoder);
            let text = url.to_owned();
            tokio::task::spawn_blocking(move || encoder.encode(&text, PREVIEW_FORMAT))
        };

        let mut downloads = BTreeMap::new();
        for (format, job) in jobs {
            let outcome = match job.await {
                Ok(result) => result,
                Err(e) => {
                    error!("Worker for format {} did not finish: {}", format, e);
                    FormatResult::failure(format)
                }
            };
            downloads.insert(format.to_string(), outcome);
        }

        let preview_bytes = match preview_job.await {
            Ok(Ok(bytes)) => bytes,
            Ok(Err(e)) => return Err(GenerateError::PreviewFailed(e)),
            Err(e) => {
                return Err(GenerateError::PreviewFailed(EncodeError::RenderFailed(
                    e.to_string(),
                )))
            }
        };
        let preview = format!(
            "data:{};base64,{}",
            PREVIEW_FORMAT.content_type(),
            STANDARD.encode(&preview_bytes)
        );

        let stored = downloads.values().filter(|r| r.is_success()).count();
        info!(
            "Generated {} of {} format(s) for request",
            stored,
            QrFormat::ALL.len()
        );

        Ok(GenerationResponse {
            success: true,
            url: url.to_owned(),
            preview,
            downloads,
        })
    }
}

fn encode_and_store(
    encoder: &dyn Encoder,
    store: &dyn ArtifactStore,
    text: &str,
    format: QrFormat,
) -> FormatResult {
    let bytes = match encoder.encode(text, format) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Encoding as {} failed: {}", format, e);
            return FormatResult::failure(format);
        }
    };
    match store.put(format, &bytes) {
        Ok(artifact) => FormatResult::Success(DownloadEntry {
            download_url: format!("{}/{}", DOWNLOAD_PATH, artifact.id),
            filename: artifact.id,
            size_bytes: artifact.size_bytes,
        }),
        Err(e) => {
            error!("Storing {} artifact failed: {}", format, e);
            FormatResult::failure(format)
        }
    }
}
