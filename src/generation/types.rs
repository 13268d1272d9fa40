use std::collections::BTreeMap;

use serde::Serialize;

use crate::encoding::format::QrFormat;

/// One downloadable artifact in the response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadEntry {
    pub filename: String,
    pub download_url: String,
    pub size_bytes: u64,
}

/// Outcome for one format. Serialized untagged: a success renders its
/// download entry fields, a failure renders only the error message.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FormatResult {
    Success(DownloadEntry),
    Failure { error: String },
}

impl FormatResult {
    /// Failure entry with the client-facing message for `format`.
    pub fn failure(format: QrFormat) -> Self {
        FormatResult::Failure {
            error: format!("Failed to generate {} format", format),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormatResult::Success(_))
    }
}

/// Full response for one generation request. `downloads` holds exactly one
/// entry per supported format regardless of individual outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub url: String,
    pub preview: String,
    pub downloads: BTreeMap<String, FormatResult>,
}
