use std::fmt;

/// Rejection of a client-supplied URL.
///
/// The `Display` strings are the exact payload messages returned to clients,
/// so they must stay stable.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingUrl,
    InvalidUrl,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingUrl => write!(f, "URL is required"),
            ValidationError::InvalidUrl => write!(f, "Invalid URL format"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum EncodeError {
    DataTooLong(String),
    RenderFailed(String),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DataTooLong(e) => write!(f, "Data too long for a QR symbol: {}", e),
            EncodeError::RenderFailed(e) => write!(f, "Render failed: {}", e),
        }
    }
}

impl std::error::Error for EncodeError {}

#[derive(Debug)]
pub enum StoreError {
    WriteFailed(std::io::Error),
    ReadFailed(std::io::Error),
    NotFound(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::WriteFailed(e) => write!(f, "Store write failed: {}", e),
            StoreError::ReadFailed(e) => write!(f, "Store read failed: {}", e),
            StoreError::NotFound(id) => write!(f, "Artifact not found: {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Failure of a whole generation request. Per-format encode and store
/// failures are reported inside the response instead and never end up here.
#[derive(Debug)]
pub enum GenerateError {
    PreviewFailed(EncodeError),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::PreviewFailed(e) => write!(f, "Preview encoding failed: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}

#[derive(Debug)]
pub enum CliError {
    Validation(ValidationError),
    Encode(EncodeError),
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Validation(e) => write!(f, "{}", e),
            CliError::Encode(e) => write!(f, "Encoding error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

#[derive(Debug)]
pub enum WebError {
    BindFailed(std::io::Error),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BindFailed(e) => write!(f, "Web server bind failed: {}", e),
        }
    }
}

impl std::error::Error for WebError {}

#[derive(Debug)]
pub enum ControllerError {
    StorageError(StoreError),
    WebError(WebError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::StorageError(e) => write!(f, "Storage error: {}", e),
            ControllerError::WebError(e) => write!(f, "Web server error: {}", e),
        }
    }
}

impl std::error::Error for ControllerError {}
