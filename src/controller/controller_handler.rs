use std::sync::Arc;

use log::info;

use crate::configuration::config::Config;
use crate::encoding::qr_encoder::QrEncoder;
use crate::error_handling::types::ControllerError;
use crate::generation::generator::Generator;
use crate::retention::sweeper::{RetentionSweeper, DOWNLOAD_GRACE_SECS};
use crate::storage::file_store::FileStore;
use crate::storage::store_trait::ArtifactStore;
use crate::web_interface::web_server::WebServer;

/// Wires storage, generation, retention and the web server together.
pub struct Controller {
    config: Config,
}

impl Controller {
    /// Create a new Controller instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Bring up every component and serve until the process is stopped.
    ///
    /// The retention sweeper runs on its own task; the web server runs on
    /// this one, so the future only resolves on startup failure.
    pub async fn run(&self) -> Result<(), ControllerError> {
        let store: Arc<dyn ArtifactStore> = Arc::new(
            FileStore::new(&self.config.downloads_dir).map_err(ControllerError::StorageError)?,
        );
        info!(
            "Serving artifacts from {}",
            self.config.downloads_dir.display()
        );

        let generator = Arc::new(Generator::new(
            Arc::new(QrEncoder::new()),
            Arc::clone(&store),
        ));

        // Keep artifacts a little past the configured age so a download link
        // handed out just before the deadline still resolves.
        let max_age = self.config.retention_age() + chrono::Duration::seconds(DOWNLOAD_GRACE_SECS);
        let sweeper = RetentionSweeper::new(Arc::clone(&store), max_age);
        tokio::spawn(sweeper.run(self.config.sweep_interval()));

        WebServer::new(generator, store)
            .start(self.config.port)
            .await
            .map_err(ControllerError::WebError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_surfaces_bind_failure() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Occupy a port so the controller's own bind fails.
        let holder = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
        let port = holder.local_addr().unwrap().port();
        let dir = TempDir::new().unwrap();

        let config = Config::try_parse_from([
            "qrforge",
            "--port",
            &port.to_string(),
            "--downloads-dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();

        let result = Controller::new(config).run().await;
        assert!(matches!(result, Err(ControllerError::WebError(_))));
    }
}
