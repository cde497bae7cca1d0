//! Operations over the folder forest
//!
//! Everything in here is a plain function over `&[Folder]` or
//! `&mut Vec<Folder>`. Nothing is cached between calls; the caller owns
//! the forest and hands in whatever is current.
//!
//! - lookups: [`find_by_key`], [`find_parent_key`], [`flatten`]
//! - search: [`compute_search_expansion`]
//! - drag and drop: [`relocate`], driven by a [`DropInfo`]
//!
//! Lookups are total. A missing key is `None`, and a drop that cannot be
//! applied reports why through [`Relocation`] while leaving the forest
//! exactly as it was.

mod lookup;
mod relocate;

pub use lookup::{
    ancestor_keys, compute_search_expansion, contains_key, find_by_key, find_by_key_mut,
    find_parent_key, flatten,
};
pub use relocate::{relocate, DropInfo, Relocation};
