// Web Interface module root
pub mod assets;
pub mod routes;
pub mod web_server;

// Re-export commonly used items
pub use routes::*;
pub use web_server::*;

/// API error payload
#[derive(serde::Serialize)]
pub struct ApiError {
    pub error: String,
}
