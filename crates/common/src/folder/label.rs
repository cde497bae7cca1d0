use super::node::{Folder, FolderProperties};

/// The visibility line shown under a folder's title.
///
/// Specific-user folders list their users, falling back to the
///  generic label while the list is still empty.
pub fn visibility_label(folder: &Folder) -> String {
    match folder.properties {
        FolderProperties::SpecificUsers if !folder.specific_users.is_empty() => {
            format!("Visible to {}", folder.specific_users.join(", "))
        }
        properties => properties.label().to_string(),
    }
}

/// A folder title, split around the first case-insensitive
///  occurrence of the current search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleMatch {
    Plain(String),
    Hit {
        before: String,
        matched: String,
        after: String,
    },
}

impl TitleMatch {
    pub fn new(title: &str, query: &str) -> Self {
        match find_ignore_case(title, query) {
            Some((start, end)) => TitleMatch::Hit {
                before: title[..start].to_string(),
                matched: title[start..end].to_string(),
                after: title[end..].to_string(),
            },
            None => TitleMatch::Plain(title.to_string()),
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, TitleMatch::Hit { .. })
    }

    /// The title with the highlight dropped
    pub fn text(&self) -> String {
        match self {
            TitleMatch::Plain(title) => title.clone(),
            TitleMatch::Hit {
                before,
                matched,
                after,
            } => format!("{before}{matched}{after}"),
        }
    }
}

/// Byte range of the first case-insensitive occurrence of `needle`
///  in `haystack`. The range always lies on char boundaries of
///  `haystack`. An empty needle never matches.
pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .find_map(|(start, _)| match_at(haystack, start, &needle).map(|end| (start, end)))
}

fn match_at(haystack: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut consumed = 0;
    for (offset, c) in haystack[start..].char_indices() {
        if consumed == needle.len() {
            return Some(start + offset);
        }
        for lower in c.to_lowercase() {
            if needle.get(consumed) != Some(&lower) {
                return None;
            }
            consumed += 1;
        }
    }
    (consumed == needle.len()).then_some(haystack.len())
}
