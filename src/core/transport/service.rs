//! Transport service - starts the portal on the configured transport.

use tracing::info;

use super::http::HttpTransport;
use super::{HttpConfig, TransportResult};
use crate::core::PortalServer;

/// Transport service - manages the transport layer for the portal.
pub struct TransportService {
    config: HttpConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(HttpConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Start the transport with the given portal server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: PortalServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());
        HttpTransport::new(self.config).run(server).await
    }
}
