use std::collections::BTreeSet;

use crate::folder::{visibility_label, Folder, TitleMatch};

/// One visible line of the folder tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub key: String,
    /// 0 for roots
    pub depth: usize,
    pub title: TitleMatch,
    /// visibility line shown under the title
    pub label: String,
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

// Flatten the visible part of the forest, descending only into
//  expanded folders
pub(super) fn visible_rows(
    forest: &[Folder],
    expanded: &BTreeSet<String>,
    selected: Option<&str>,
    query: &str,
) -> Vec<TreeRow> {
    fn walk(
        nodes: &[Folder],
        depth: usize,
        expanded: &BTreeSet<String>,
        selected: Option<&str>,
        query: &str,
        rows: &mut Vec<TreeRow>,
    ) {
        for folder in nodes {
            let is_expanded = folder.has_children() && expanded.contains(&folder.key);
            rows.push(TreeRow {
                key: folder.key.clone(),
                depth,
                title: TitleMatch::new(&folder.title, query),
                label: visibility_label(folder),
                has_children: folder.has_children(),
                expanded: is_expanded,
                selected: selected == Some(folder.key.as_str()),
            });
            if is_expanded {
                walk(&folder.children, depth + 1, expanded, selected, query, rows);
            }
        }
    }

    let mut rows = Vec::new();
    walk(forest, 0, expanded, selected, query, &mut rows);
    rows
}

/// Render rows as an indented text tree
pub fn render_rows(rows: &[TreeRow]) -> String {
    rows.iter()
        .map(|row| {
            let marker = match (row.has_children, row.expanded) {
                (false, _) => " ",
                (true, false) => "+",
                (true, true) => "-",
            };
            let title = match &row.title {
                TitleMatch::Plain(title) => title.clone(),
                TitleMatch::Hit {
                    before,
                    matched,
                    after,
                } => format!("{before}[{matched}]{after}"),
            };
            let selected = if row.selected { " *" } else { "" };
            format!(
                "{}{} {} ({}) - {}{}",
                "  ".repeat(row.depth),
                marker,
                title,
                row.key,
                row.label,
                selected
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
