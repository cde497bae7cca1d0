use std::collections::BTreeSet;

use crate::folder::{find_ignore_case, Folder};

/// Depth-first search in document order: a node is checked, then
///  its subtree, then its next sibling.
pub fn find_by_key<'a>(forest: &'a [Folder], key: &str) -> Option<&'a Folder> {
    for node in forest {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find_by_key(&node.children, key) {
            return Some(found);
        }
    }
    None
}

pub fn find_by_key_mut<'a>(forest: &'a mut [Folder], key: &str) -> Option<&'a mut Folder> {
    for node in forest.iter_mut() {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find_by_key_mut(&mut node.children, key) {
            return Some(found);
        }
    }
    None
}

/// Key of the direct parent of `key`. `None` for roots and for
///  keys that are not in the forest.
pub fn find_parent_key<'a>(forest: &'a [Folder], key: &str) -> Option<&'a str> {
    for node in forest {
        // immediate children first, then descend
        if node.children.iter().any(|child| child.key == key) {
            return Some(&node.key);
        }
        if let Some(parent) = find_parent_key(&node.children, key) {
            return Some(parent);
        }
    }
    None
}

/// Keys from the direct parent of `key` up to its root
pub fn ancestor_keys<'a>(forest: &'a [Folder], key: &str) -> Vec<&'a str> {
    let mut ancestors = Vec::new();
    let mut current = key;
    while let Some(parent) = find_parent_key(forest, current) {
        ancestors.push(parent);
        current = parent;
    }
    ancestors
}

/// Every folder of the forest in pre-order
pub fn flatten(forest: &[Folder]) -> Vec<&Folder> {
    fn walk<'a>(nodes: &'a [Folder], out: &mut Vec<&'a Folder>) {
        for node in nodes {
            out.push(node);
            walk(&node.children, out);
        }
    }

    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}

/// Whether `key` names `folder` itself or any folder below it
pub fn contains_key(folder: &Folder, key: &str) -> bool {
    folder.key == key || folder.children.iter().any(|child| contains_key(child, key))
}

/// Keys that need expanding so that every folder whose title contains
///  `query` (ignoring case) becomes visible.
///
/// `individuals` is the flattened forest (see [`flatten`]). The matches
///  themselves are not included, only their ancestors. An empty query
///  expands nothing.
pub fn compute_search_expansion(
    forest: &[Folder],
    individuals: &[&Folder],
    query: &str,
) -> BTreeSet<String> {
    if query.is_empty() {
        return BTreeSet::new();
    }

    individuals
        .iter()
        .filter(|folder| find_ignore_case(&folder.title, query).is_some())
        .flat_map(|folder| ancestor_keys(forest, &folder.key))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gateway::seed_folders;

    #[test]
    fn test_find_by_key() {
        let forest = seed_folders();
        assert_eq!(find_by_key(&forest, "bpbymt").unwrap().title, "Folder 4");
        assert_eq!(find_by_key(&forest, "aqh5jy").unwrap().title, "Folder 1");
        assert_eq!(find_by_key(&forest, "uh8qqn").unwrap().title, "Folder 8");
        assert!(find_by_key(&forest, "missing").is_none());
        assert!(find_by_key(&[], "bpbymt").is_none());
    }

    #[test]
    fn test_find_by_key_mut_edits_in_place() {
        let mut forest = seed_folders();
        find_by_key_mut(&mut forest, "jkwh4m").unwrap().title = "Renamed".to_string();
        assert_eq!(find_by_key(&forest, "jkwh4m").unwrap().title, "Renamed");
    }

    #[test]
    fn test_find_parent_key() {
        let forest = seed_folders();
        assert_eq!(find_parent_key(&forest, "bpbymt"), Some("dfcihj"));
        assert_eq!(find_parent_key(&forest, "dfcihj"), Some("r601gq"));
        assert_eq!(find_parent_key(&forest, "uh8qqn"), Some("jkwh4m"));
        assert_eq!(find_parent_key(&forest, "r601gq"), None);
        assert_eq!(find_parent_key(&forest, "missing"), None);
    }

    #[test]
    fn test_ancestor_keys() {
        let forest = seed_folders();
        assert_eq!(
            ancestor_keys(&forest, "uh8qqn"),
            vec!["jkwh4m", "1obkzu", "r601gq"]
        );
        assert!(ancestor_keys(&forest, "aqh5jy").is_empty());
    }

    #[test]
    fn test_flatten_is_pre_order() {
        let forest = seed_folders();
        let keys: Vec<&str> = flatten(&forest).iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["aqh5jy", "r601gq", "dfcihj", "bpbymt", "9fjtzr", "1obkzu", "jkwh4m", "uh8qqn"]
        );
    }

    #[test]
    fn test_contains_key() {
        let forest = seed_folders();
        let folder_2 = find_by_key(&forest, "r601gq").unwrap();
        assert!(contains_key(folder_2, "r601gq"));
        assert!(contains_key(folder_2, "uh8qqn"));
        assert!(!contains_key(folder_2, "aqh5jy"));
    }

    #[test]
    fn test_search_expansion() {
        let forest = seed_folders();
        let individuals = flatten(&forest);

        assert!(compute_search_expansion(&forest, &individuals, "").is_empty());

        let expanded = compute_search_expansion(&forest, &individuals, "folder 4");
        assert!(expanded.contains("r601gq"));
        assert!(expanded.contains("dfcihj"));
        assert!(!expanded.contains("bpbymt"));
        assert_eq!(expanded.len(), 2);
    }

    #[test]
    fn test_search_expansion_deduplicates() {
        let forest = seed_folders();
        let individuals = flatten(&forest);

        // every title matches; only folders with children show up
        let expanded = compute_search_expansion(&forest, &individuals, "FOLDER");
        let expected: BTreeSet<String> = ["r601gq", "dfcihj", "1obkzu", "jkwh4m"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(expanded, expected);

        assert!(compute_search_expansion(&forest, &individuals, "nothing here").is_empty());
    }
}
