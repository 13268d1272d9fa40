use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;
use warp::Filter;

use crate::error_handling::types::WebError;
use crate::generation::generator::Generator;
use crate::storage::store_trait::ArtifactStore;

use super::routes;

/// Web server for the generation API, artifact downloads and the embedded UI.
pub struct WebServer {
    generator: Arc<Generator>,
    store: Arc<dyn ArtifactStore>,
}

impl WebServer {
    /// Create a new WebServer instance
    pub fn new(generator: Arc<Generator>, store: Arc<dyn ArtifactStore>) -> Self {
        Self { generator, store }
    }

    /// Start the web server on the given port
    pub async fn start(&self, port: u16) -> Result<(), WebError> {
        // Compose routes; the asset catch-all goes last
        let routes = routes::generate_route(self.generator.clone())
            .or(routes::download_route(self.store.clone()))
            .or(routes::index_route())
            .or(routes::static_route());

        let addr: SocketAddr = ([0, 0, 0, 0], port).into();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(WebError::BindFailed)?;
        if let Ok(local) = listener.local_addr() {
            info!("Server running at http://{}", local);
        }

        warp::serve(routes).incoming(listener).run().await;

        Ok(())
    }
}
