use std::fmt::{Debug, Display};

use async_trait::async_trait;

use crate::folder::Folder;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError<T> {
    /// Backend specific failure
    #[error("unhandled folder gateway error: {0}")]
    Provider(#[from] T),
    /// The backend has no folder forest to hand out
    #[error("Folders not found")]
    NotFound,
}

/// Source of the initial folder forest.
///
/// The picker reads it exactly once, when it is mounted. Everything
///  after that happens on the picker's own copy.
#[async_trait]
pub trait FolderGateway: Send + Sync + Debug + 'static {
    type Error: Display + Debug + Send;

    /// Fetch the full folder forest
    ///
    /// # Returns
    /// * `Ok(Vec<Folder>)` - The root folders, children nested inside
    /// * `Err(GatewayError::NotFound)` - The backend has no forest
    /// * `Err(GatewayError::Provider(_))` - Any other backend failure
    async fn get_folders(&self) -> Result<Vec<Folder>, GatewayError<Self::Error>>;
}
