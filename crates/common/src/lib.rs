/**
 * Folder model and presentation labels.
 *  The node type every other module passes around.
 */
pub mod folder;
/**
 * Draft editor for folders that have not been
 *  saved into the forest yet.
 */
pub mod form;
/**
 * Where the initial forest comes from.
 *  An async trait plus an in-memory stand-in
 *  for a real backend.
 */
pub mod gateway;
/**
 * The picker's state machine: forest, pending
 *  folders, expansion, search and selection.
 */
pub mod picker;
/**
 * Thin service seam between the picker and
 *  the gateway.
 */
pub mod service;
/**
 * Lookups and drag-and-drop moves over the
 *  folder forest.
 */
pub mod tree;

pub mod prelude {
    pub use crate::folder::{Folder, FolderProperties, TitleMatch};
    pub use crate::form::FolderCreationForm;
    pub use crate::gateway::{seed_folders, FolderGateway, GatewayError, MemoryFolderGateway};
    pub use crate::picker::{FolderPicker, TreeRow};
    pub use crate::service::FolderService;
    pub use crate::tree::{DropInfo, Relocation};
}
