pub mod generator;
pub mod types;

pub use generator::Generator;
pub use types::{DownloadEntry, FormatResult, GenerationResponse};
