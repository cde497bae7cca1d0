//! The folder picker, minus the pixels
//!
//! [`FolderPicker`] owns everything the picker dropdown shows:
//!
//! - the committed forest, loaded once through a [`FolderService`]
//! - the pending (unsaved) folders, each behind a [`FolderCreationForm`]
//! - the expanded keys and whether ancestors auto-expand
//! - the search text and the selected folder
//!
//! Every user event is a `&mut self` method. Events are applied one at a
//! time, so each one sees the state the previous one left behind.
//!
//! Loading is split so the picker stays usable while the gateway is busy:
//! fetch through a clone of [`FolderPicker::service`] and hand the result
//! to [`FolderPicker::loaded`]. [`FolderPicker::load`] does both in one go.
//!
//! Search input is debounced separately (see [`search_channel`]); feed
//! settled values in through [`FolderPicker::search`] or
//! [`FolderPicker::next_search`].

mod rows;
mod search;

use std::collections::BTreeSet;

use crate::folder::{generate_key, Folder};
use crate::form::FolderCreationForm;
use crate::gateway::{FolderGateway, GatewayError};
use crate::service::FolderService;
use crate::tree::{ancestor_keys, compute_search_expansion, find_by_key, flatten, relocate};
use crate::tree::{DropInfo, Relocation};

pub use rows::{render_rows, TreeRow};
pub use search::{search_channel, SearchDebouncer, SearchInput, DEFAULT_DEBOUNCE};

#[derive(Debug)]
pub struct FolderPicker<G> {
    service: FolderService<G>,
    forest: Vec<Folder>,
    // newest first
    pending: Vec<FolderCreationForm>,
    selected: Option<String>,
    expanded_keys: BTreeSet<String>,
    auto_expand_parent: bool,
    search_value: String,
    open: bool,
}

impl<G: FolderGateway> FolderPicker<G> {
    pub fn new(service: FolderService<G>) -> Self {
        Self {
            service,
            forest: Vec::new(),
            pending: Vec::new(),
            selected: None,
            expanded_keys: BTreeSet::new(),
            auto_expand_parent: false,
            search_value: String::new(),
            open: false,
        }
    }

    /// Fetch the forest from the service and apply it.
    ///
    /// Holds the picker for the whole fetch; use [`Self::service`] and
    ///  [`Self::loaded`] to keep handling events meanwhile.
    pub async fn load(&mut self) {
        let result = self.service.get_folders().await;
        self.loaded(result);
    }

    pub fn service(&self) -> &FolderService<G> {
        &self.service
    }

    /// Apply a finished fetch.
    ///
    /// The fetched folders replace the forest. Roots committed locally
    ///  while the fetch was in flight stay in front, unless one of their
    ///  keys came back in the fetched forest. A failed fetch is logged
    ///  and leaves the current forest alone.
    pub fn loaded(&mut self, result: Result<Vec<Folder>, GatewayError<G::Error>>) {
        match result {
            Ok(folders) => {
                tracing::info!(
                    roots = folders.len(),
                    total = flatten(&folders).len(),
                    "loaded folders"
                );
                let mut forest: Vec<Folder> = std::mem::take(&mut self.forest)
                    .into_iter()
                    .filter(|root| {
                        flatten(std::slice::from_ref(root))
                            .iter()
                            .all(|folder| find_by_key(&folders, &folder.key).is_none())
                    })
                    .collect();
                forest.extend(folders);
                self.forest = forest;
            }
            Err(e) => {
                tracing::error!("failed to load folders: {}", e);
            }
        }
    }

    pub fn forest(&self) -> &[Folder] {
        &self.forest
    }

    pub fn pending(&self) -> &[FolderCreationForm] {
        &self.pending
    }

    pub fn selected(&self) -> Option<&Folder> {
        self.selected
            .as_deref()
            .and_then(|key| find_by_key(&self.forest, key))
    }

    /// What the closed picker displays
    pub fn selected_title(&self) -> Option<&str> {
        self.selected().map(|folder| folder.title.as_str())
    }

    pub fn expanded_keys(&self) -> &BTreeSet<String> {
        &self.expanded_keys
    }

    pub fn auto_expand_parent(&self) -> bool {
        self.auto_expand_parent
    }

    pub fn search_value(&self) -> &str {
        &self.search_value
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focus(&mut self) {
        self.open = true;
    }

    /// Close the dropdown without picking anything
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Expand the ancestors of every folder matching `query`
    pub fn search(&mut self, query: impl Into<String>) {
        let query = query.into();
        let individuals = flatten(&self.forest);
        self.expanded_keys = compute_search_expansion(&self.forest, &individuals, &query);
        tracing::debug!(
            query = %query,
            expanded = self.expanded_keys.len(),
            "search expanded folders"
        );
        self.search_value = query;
        self.auto_expand_parent = true;
    }

    /// Wait for the next settled search text and apply it.
    ///
    /// Returns false once the search input is gone.
    pub async fn next_search(&mut self, input: &mut SearchDebouncer) -> bool {
        match input.settled().await {
            Some(query) => {
                self.search(query);
                true
            }
            None => false,
        }
    }

    /// Replace the expanded keys, as reported by the tree
    pub fn expand<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded_keys = keys.into_iter().map(Into::into).collect();
        self.auto_expand_parent = false;
    }

    /// Flip a single folder open or closed
    pub fn toggle(&mut self, key: &str) {
        let mut keys = self.expanded_keys.clone();
        if !keys.remove(key) {
            keys.insert(key.to_string());
        }
        self.expand(keys);
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.effective_expanded().contains(key)
    }

    // With auto expand on, an expanded key also opens its ancestors
    fn effective_expanded(&self) -> BTreeSet<String> {
        let mut expanded = self.expanded_keys.clone();
        if self.auto_expand_parent {
            for key in &self.expanded_keys {
                expanded.extend(
                    ancestor_keys(&self.forest, key)
                        .into_iter()
                        .map(str::to_string),
                );
            }
        }
        expanded
    }

    /// Start a new, unsaved folder at the top of the pending list
    pub fn add_pending(&mut self) -> String {
        let key = self.unused_key();
        self.pending
            .insert(0, FolderCreationForm::new(Folder::pending(key.clone())));
        key
    }

    pub fn pending_mut(&mut self, key: &str) -> Option<&mut FolderCreationForm> {
        self.pending.iter_mut().find(|form| form.key() == key)
    }

    /// Save a pending folder into the forest, as the first root
    pub fn save_pending(&mut self, key: &str) -> Option<&Folder> {
        let index = self.pending.iter().position(|form| form.key() == key)?;
        let folder = self.pending.remove(index).save();
        self.commit(folder)
    }

    /// Put a finished folder at the front of the root list.
    ///
    /// A pending draft with the same key is dropped. Returns `None`, and
    ///  changes nothing, if the folder or any of its children has a key
    ///  that is already in the forest.
    pub fn commit(&mut self, folder: Folder) -> Option<&Folder> {
        let taken = flatten(std::slice::from_ref(&folder))
            .iter()
            .any(|node| find_by_key(&self.forest, &node.key).is_some());
        if taken {
            tracing::warn!(key = %folder.key, "ignored commit: key already in the forest");
            return None;
        }
        self.pending.retain(|form| form.key() != folder.key);
        tracing::debug!(key = %folder.key, title = %folder.title, "committed folder");
        self.forest.insert(0, folder);
        self.forest.first()
    }

    /// Throw a pending folder away. The forest is not touched.
    pub fn delete_pending(&mut self, key: &str) -> bool {
        let before = self.pending.len();
        self.pending.retain(|form| form.key() != key);
        self.pending.len() != before
    }

    pub fn drop_folder(&mut self, drop: &DropInfo) -> Relocation {
        let outcome = relocate(&mut self.forest, drop);
        if !outcome.is_moved() {
            tracing::warn!(
                dragged = %drop.dragged_key,
                target = %drop.target_key,
                "ignored drop: {:?}",
                outcome
            );
        }
        outcome
    }

    /// Pick a folder and close the dropdown.
    ///
    /// An unknown key changes nothing.
    pub fn select(&mut self, key: &str) -> bool {
        if find_by_key(&self.forest, key).is_none() {
            tracing::warn!(key = %key, "selected folder not found");
            return false;
        }
        self.selected = Some(key.to_string());
        self.open = false;
        true
    }

    /// The visible tree, top to bottom
    pub fn rows(&self) -> Vec<TreeRow> {
        rows::visible_rows(
            &self.forest,
            &self.effective_expanded(),
            self.selected.as_deref(),
            &self.search_value,
        )
    }

    fn unused_key(&self) -> String {
        loop {
            let key = generate_key();
            let taken = find_by_key(&self.forest, &key).is_some()
                || self.pending.iter().any(|form| form.key() == key);
            if !taken {
                return key;
            }
        }
    }
}
