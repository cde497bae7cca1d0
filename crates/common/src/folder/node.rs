use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of keys handed out to newly created folders
pub const KEY_LEN: usize = 6;

const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/**
 * Folders
 * =======
 * A folder is a node in the picker's forest. It owns its
 *  children outright, so moving a folder moves its whole subtree.
 * Seed folders come with fixed keys, folders created in the
 *  picker get a random base-36 key (see [`generate_key`]).
 * Serialized as plain nested JSON with camelCase field names,
 *  the same shape the gateway hands to the service.
 */

/// Who a folder is meant to be visible to. Purely descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FolderProperties {
    #[default]
    Everyone,
    OnlyMe,
    SpecificUsers,
}

impl FolderProperties {
    /// All options, in the order the creation form offers them
    pub const ALL: [FolderProperties; 3] = [
        FolderProperties::Everyone,
        FolderProperties::OnlyMe,
        FolderProperties::SpecificUsers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FolderProperties::Everyone => "Visible to Everyone",
            FolderProperties::OnlyMe => "Only visible to Me",
            FolderProperties::SpecificUsers => "Visible to specific users",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub key: String,
    pub title: String,
    pub properties: FolderProperties,
    // only meaningful for `SpecificUsers`, empty otherwise
    #[serde(default)]
    pub specific_users: Vec<String>,
    #[serde(default)]
    pub children: Vec<Folder>,
}

impl Folder {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        properties: FolderProperties,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            properties,
            specific_users: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A fresh, untitled folder as created by the "add folder" action
    pub fn pending(key: impl Into<String>) -> Self {
        Self::new(key, "", FolderProperties::Everyone)
    }

    pub fn with_children(mut self, children: Vec<Folder>) -> Self {
        self.children = children;
        self
    }

    pub fn with_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specific_users = users.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of folders in this subtree, including this one
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Folder::size).sum::<usize>()
    }
}

/// Generate a random lowercase base-36 key of [`KEY_LEN`] characters.
///
/// Uniqueness against an existing forest is the caller's concern.
pub fn generate_key() -> String {
    let mut rng = rand::rng();
    (0..KEY_LEN)
        .map(|_| KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())] as char)
        .collect()
}
