use std::time::Duration;

use crate::folder::Folder;
use crate::gateway::{FolderGateway, GatewayError, MemoryFolderGateway};

/// The seam between the picker and wherever folders come from.
///
/// Adds nothing on top of the gateway; it exists so the picker
///  depends on a service, not on a particular backend.
#[derive(Debug, Clone)]
pub struct FolderService<G> {
    gateway: G,
}

impl<G: FolderGateway> FolderService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub async fn get_folders(&self) -> Result<Vec<Folder>, GatewayError<G::Error>> {
        tracing::debug!("FolderService::get_folders - delegating to gateway");
        self.gateway.get_folders().await
    }
}

impl FolderService<MemoryFolderGateway> {
    /// Service over an in-memory gateway serving `seed`
    pub fn memory(seed: Option<Vec<Folder>>, latency: Duration) -> Self {
        let gateway = match seed {
            Some(seed) => MemoryFolderGateway::new(seed),
            None => MemoryFolderGateway::empty(),
        };
        Self::new(gateway.with_latency(latency))
    }
}
