use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use super::provider::{FolderGateway, GatewayError};
use crate::folder::Folder;

/// Simulated round trip of a fetch
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(250);

/// In-memory folder gateway backed by a seed forest.
///
/// Stands in for a real backend: every fetch waits out a fixed
///  latency and then hands back a copy of the seed. Without a seed
///  it fails with [`GatewayError::NotFound`].
#[derive(Debug, Clone)]
pub struct MemoryFolderGateway {
    seed: Arc<RwLock<Option<Vec<Folder>>>>,
    latency: Duration,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryFolderGatewayError {
    #[error("memory gateway error: {0}")]
    Internal(String),
}

impl MemoryFolderGateway {
    pub fn new(seed: Vec<Folder>) -> Self {
        Self {
            seed: Arc::new(RwLock::new(Some(seed))),
            latency: DEFAULT_LATENCY,
        }
    }

    /// A gateway with nothing behind it
    pub fn empty() -> Self {
        Self {
            seed: Arc::new(RwLock::new(None)),
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Swap the seed served by this gateway (and every clone of it)
    pub fn replace_seed(
        &self,
        seed: Option<Vec<Folder>>,
    ) -> Result<(), GatewayError<MemoryFolderGatewayError>> {
        let mut inner = self.seed.write().map_err(|e| {
            GatewayError::Provider(MemoryFolderGatewayError::Internal(format!(
                "failed to acquire write lock: {}",
                e
            )))
        })?;
        *inner = seed;
        Ok(())
    }
}

#[async_trait]
impl FolderGateway for MemoryFolderGateway {
    type Error = MemoryFolderGatewayError;

    async fn get_folders(&self) -> Result<Vec<Folder>, GatewayError<Self::Error>> {
        tokio::time::sleep(self.latency).await;

        let inner = self.seed.read().map_err(|e| {
            GatewayError::Provider(MemoryFolderGatewayError::Internal(format!(
                "failed to acquire read lock: {}",
                e
            )))
        })?;

        match inner.as_ref() {
            Some(folders) => {
                tracing::debug!(roots = folders.len(), "serving seed folders");
                Ok(folders.clone())
            }
            None => Err(GatewayError::NotFound),
        }
    }
}
