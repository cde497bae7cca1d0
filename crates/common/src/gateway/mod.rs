mod memory;
mod provider;
mod seed;

pub use memory::{MemoryFolderGateway, MemoryFolderGatewayError, DEFAULT_LATENCY};
pub use provider::{FolderGateway, GatewayError};
pub use seed::seed_folders;
