pub mod sweeper;

pub use sweeper::{RetentionSweeper, DOWNLOAD_GRACE_SECS};
