//! Draft editor for a folder that has not been saved yet.
//!
//! A [`FolderCreationForm`] wraps a pending folder and collects edits
//! to it. Nothing here touches the forest: [`FolderCreationForm::save`]
//! hands the finished folder back to whoever owns the forest, and
//! [`FolderCreationForm::delete`] hands back the key to throw away.

use crate::folder::{Folder, FolderProperties};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderCreationForm {
    folder: Folder,
    title: String,
    properties: FolderProperties,
    specific_users: Vec<String>,
    // text typed into the "add user" input, not yet confirmed
    user_name: String,
}

impl FolderCreationForm {
    pub fn new(folder: Folder) -> Self {
        Self {
            title: String::new(),
            properties: folder.properties,
            specific_users: folder.specific_users.clone(),
            user_name: String::new(),
            folder,
        }
    }

    pub fn key(&self) -> &str {
        &self.folder.key
    }

    pub fn folder(&self) -> &Folder {
        &self.folder
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn properties(&self) -> FolderProperties {
        self.properties
    }

    pub fn specific_users(&self) -> &[String] {
        &self.specific_users
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn select_properties(&mut self, properties: FolderProperties) {
        self.properties = properties;
    }

    pub fn set_user_name(&mut self, user_name: impl Into<String>) {
        self.user_name = user_name.into();
    }

    /// The user list is only editable for specific-user folders
    pub fn show_user_editor(&self) -> bool {
        self.properties == FolderProperties::SpecificUsers
    }

    /// Commit the typed user name to the list.
    ///
    /// Blank input is ignored. Names are not deduplicated.
    pub fn confirm_user(&mut self) -> bool {
        let name = self.user_name.trim();
        if name.is_empty() {
            return false;
        }
        self.specific_users.push(name.to_string());
        self.user_name.clear();
        true
    }

    /// Drop the user at `index`, if there is one
    pub fn remove_user(&mut self, index: usize) -> Option<String> {
        (index < self.specific_users.len()).then(|| self.specific_users.remove(index))
    }

    /// The finished folder: same key and children, draft fields merged in
    pub fn save(self) -> Folder {
        let specific_users = if self.properties == FolderProperties::SpecificUsers {
            self.specific_users
        } else {
            Vec::new()
        };
        Folder {
            title: self.title,
            properties: self.properties,
            specific_users,
            ..self.folder
        }
    }

    pub fn delete(self) -> String {
        self.folder.key
    }
}

/// Visibility options in the order the form lists them, with labels
pub fn property_options() -> [(FolderProperties, &'static str); 3] {
    FolderProperties::ALL.map(|properties| (properties, properties.label()))
}
