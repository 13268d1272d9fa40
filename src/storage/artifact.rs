use chrono::{DateTime, Utc};

use crate::encoding::format::QrFormat;

/// Metadata for one stored artifact. The id doubles as the file name and
/// the download path segment, so it never contains path separators.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub id: String,
    pub format: QrFormat,
    pub created_at: DateTime<Utc>,
    pub size_bytes: u64,
}
