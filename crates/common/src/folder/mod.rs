//! Folder data structures
//!
//! This module defines the node type the picker operates on:
//!
//! - **[`Folder`]**: a node of the folder forest (key, title, visibility, children)
//! - **[`FolderProperties`]**: the visibility label attached to a folder
//! - **[`TitleMatch`]**: a title split around a search hit, for highlighting
//!
//! # Forest shape
//!
//! ```text
//! [root list]
//!    |
//!    +-- Folder 1
//!    +-- Folder 2
//!          |
//!          +-- Folder 3
//!          |     +-- Folder 4
//!          |     +-- Folder 5
//!          +-- Folder 6
//!                +-- Folder 7
//!                      +-- Folder 8
//! ```
//!
//! Folders own their children directly, so a forest is just a `Vec<Folder>`
//! and a subtree moves by value. Keys are unique across the whole forest.
//!
//! Visibility is a label only. Nothing in this crate enforces it.

mod label;
mod node;

pub(crate) use label::find_ignore_case;
pub use label::{visibility_label, TitleMatch};
pub use node::{generate_key, Folder, FolderProperties, KEY_LEN};
