use serde::{Deserialize, Serialize};

use crate::folder::Folder;

use super::lookup::{contains_key, find_by_key, find_by_key_mut, find_parent_key};

/// A drop reported by the tree widget, decoded into plain values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropInfo {
    /// The folder being dragged
    pub dragged_key: String,
    /// The folder it was dropped on or next to
    pub target_key: String,
    /// False when dropped onto the target itself,
    ///  true when dropped into the gap above or below it
    pub dropped_into_gap: bool,
    /// Where the drop landed relative to the target:
    ///  negative above it, 0 on it, 1 below it
    pub relative_position: i32,
    /// Whether the target was expanded when dropped on
    pub target_expanded: bool,
}

impl DropInfo {
    /// A drop straight onto `target_key`
    pub fn onto(dragged_key: impl Into<String>, target_key: impl Into<String>) -> Self {
        Self {
            dragged_key: dragged_key.into(),
            target_key: target_key.into(),
            dropped_into_gap: false,
            relative_position: 0,
            target_expanded: false,
        }
    }

    /// A drop into the gap above (`relative_position < 0`) or
    ///  below (`relative_position >= 0`) `target_key`
    pub fn gap(
        dragged_key: impl Into<String>,
        target_key: impl Into<String>,
        relative_position: i32,
    ) -> Self {
        Self {
            dragged_key: dragged_key.into(),
            target_key: target_key.into(),
            dropped_into_gap: true,
            relative_position,
            target_expanded: false,
        }
    }

    pub fn with_target_expanded(mut self, expanded: bool) -> Self {
        self.target_expanded = expanded;
        self
    }

    /// Decode a raw tree widget drop event.
    ///
    /// The widget reports `drop_position` as an index among the target's
    ///  siblings and the target's position as a dash-joined index path
    ///  (`"0-1-2"`). The relative position is the drop index minus the
    ///  target's own index, the last segment of that path. An unreadable
    ///  path counts as index 0.
    pub fn from_tree_event(
        dragged_key: impl Into<String>,
        target_key: impl Into<String>,
        dropped_into_gap: bool,
        drop_position: i32,
        target_pos: &str,
        target_expanded: bool,
    ) -> Self {
        let target_index = match target_pos
            .rsplit('-')
            .next()
            .and_then(|segment| segment.parse::<i32>().ok())
        {
            Some(index) => index,
            None => {
                tracing::debug!(pos = %target_pos, "unreadable target position, using 0");
                0
            }
        };
        Self {
            dragged_key: dragged_key.into(),
            target_key: target_key.into(),
            dropped_into_gap,
            relative_position: drop_position.saturating_sub(target_index),
            target_expanded,
        }
    }
}

/// What [`relocate`] did with a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// The dragged folder was moved
    Moved,
    /// No folder has the dragged key
    DragNotFound,
    /// No folder has the target key
    TargetNotFound,
    /// The target is the dragged folder or lies inside it
    IntoOwnSubtree,
}

impl Relocation {
    pub fn is_moved(&self) -> bool {
        matches!(self, Relocation::Moved)
    }
}

// Where a detached folder goes back in
enum Placement<'a> {
    FirstChildOf(&'a str),
    Before(&'a str),
    After(&'a str),
    // its own slot, used to undo a failed move
    At(Option<String>, usize),
}

/// Move the dragged folder next to or into the target folder.
///
/// - dropped onto the target: becomes the target's first child
/// - dropped below an expanded target that has children: also the
///   target's first child
/// - otherwise: inserted among the target's siblings, right before it
///   for a negative relative position, right after it otherwise
///
/// Anything other than [`Relocation::Moved`] leaves the forest untouched.
pub fn relocate(forest: &mut Vec<Folder>, drop: &DropInfo) -> Relocation {
    let Some(dragged) = find_by_key(forest, &drop.dragged_key) else {
        return Relocation::DragNotFound;
    };
    if contains_key(dragged, &drop.target_key) {
        return Relocation::IntoOwnSubtree;
    }
    let Some(target) = find_by_key(forest, &drop.target_key) else {
        return Relocation::TargetNotFound;
    };

    let into_target = !drop.dropped_into_gap
        || (target.has_children() && drop.target_expanded && drop.relative_position == 1);
    let placement = if into_target {
        Placement::FirstChildOf(&drop.target_key)
    } else if drop.relative_position < 0 {
        Placement::Before(&drop.target_key)
    } else {
        Placement::After(&drop.target_key)
    };

    let Some((origin, folder)) = detach(forest, &drop.dragged_key) else {
        return Relocation::DragNotFound;
    };
    match place(forest, folder, placement) {
        Ok(()) => Relocation::Moved,
        Err(folder) => {
            // the target was checked above and cannot sit inside the
            //  detached subtree, so this only restores on a broken forest
            let (parent, index) = origin;
            if place(forest, folder, Placement::At(parent, index)).is_err() {
                tracing::error!(key = %drop.dragged_key, "failed to restore dragged folder");
            }
            Relocation::TargetNotFound
        }
    }
}

type Origin = (Option<String>, usize);

// Position of `key` as (parent key, index among siblings)
fn locate(forest: &[Folder], key: &str) -> Option<Origin> {
    let parent = find_parent_key(forest, key);
    let siblings: &[Folder] = match parent {
        Some(parent) => &find_by_key(forest, parent)?.children,
        None => forest,
    };
    let index = siblings.iter().position(|folder| folder.key == key)?;
    Some((parent.map(str::to_string), index))
}

fn siblings_mut<'a>(
    forest: &'a mut Vec<Folder>,
    parent: Option<&str>,
) -> Option<&'a mut Vec<Folder>> {
    match parent {
        Some(parent) => find_by_key_mut(forest, parent).map(|folder| &mut folder.children),
        None => Some(forest),
    }
}

fn detach(forest: &mut Vec<Folder>, key: &str) -> Option<(Origin, Folder)> {
    let (parent, index) = locate(forest, key)?;
    let siblings = siblings_mut(forest, parent.as_deref())?;
    let folder = siblings.remove(index);
    Some(((parent, index), folder))
}

fn place(
    forest: &mut Vec<Folder>,
    folder: Folder,
    placement: Placement<'_>,
) -> Result<(), Folder> {
    let (parent, index) = match placement {
        Placement::FirstChildOf(key) => (Some(key.to_string()), 0),
        Placement::Before(key) => match locate(forest, key) {
            Some(origin) => origin,
            None => return Err(folder),
        },
        Placement::After(key) => match locate(forest, key) {
            Some((parent, index)) => (parent, index + 1),
            None => return Err(folder),
        },
        Placement::At(parent, index) => (parent, index),
    };
    match siblings_mut(forest, parent.as_deref()) {
        Some(siblings) => {
            siblings.insert(index.min(siblings.len()), folder);
            Ok(())
        }
        None => Err(folder),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gateway::seed_folders;
    use crate::tree::flatten;

    fn keys(forest: &[Folder]) -> Vec<&str> {
        forest.iter().map(|f| f.key.as_str()).collect()
    }

    fn occurrences(forest: &[Folder], key: &str) -> usize {
        flatten(forest).iter().filter(|f| f.key == key).count()
    }

    #[test]
    fn test_drop_onto_makes_first_child() {
        let mut forest = seed_folders();
        let outcome = relocate(&mut forest, &DropInfo::onto("aqh5jy", "dfcihj"));
        assert_eq!(outcome, Relocation::Moved);

        let target = find_by_key(&forest, "dfcihj").unwrap();
        assert_eq!(keys(&target.children), vec!["aqh5jy", "bpbymt", "9fjtzr"]);
        assert_eq!(keys(&forest), vec!["r601gq"]);
        assert_eq!(occurrences(&forest, "aqh5jy"), 1);
    }

    #[test]
    fn test_drop_onto_leaf() {
        let mut forest = seed_folders();
        relocate(&mut forest, &DropInfo::onto("uh8qqn", "aqh5jy"));

        assert_eq!(keys(&find_by_key(&forest, "aqh5jy").unwrap().children), vec!["uh8qqn"]);
        assert!(find_by_key(&forest, "jkwh4m").unwrap().children.is_empty());
        assert_eq!(occurrences(&forest, "uh8qqn"), 1);
    }

    #[test]
    fn test_gap_drop_before_and_after() {
        let mut forest = seed_folders();
        let outcome = relocate(&mut forest, &DropInfo::gap("uh8qqn", "bpbymt", -1));
        assert_eq!(outcome, Relocation::Moved);
        let folder_3 = find_by_key(&forest, "dfcihj").unwrap();
        assert_eq!(keys(&folder_3.children), vec!["uh8qqn", "bpbymt", "9fjtzr"]);

        let outcome = relocate(&mut forest, &DropInfo::gap("aqh5jy", "bpbymt", 1));
        assert_eq!(outcome, Relocation::Moved);
        let folder_3 = find_by_key(&forest, "dfcihj").unwrap();
        assert_eq!(
            keys(&folder_3.children),
            vec!["uh8qqn", "bpbymt", "aqh5jy", "9fjtzr"]
        );
    }

    #[test]
    fn test_gap_drop_among_same_siblings() {
        let mut forest = seed_folders();
        // move Folder 1 below Folder 2 at the root
        relocate(&mut forest, &DropInfo::gap("aqh5jy", "r601gq", 0));
        assert_eq!(keys(&forest), vec!["r601gq", "aqh5jy"]);

        // and back above it
        relocate(&mut forest, &DropInfo::gap("aqh5jy", "r601gq", -1));
        assert_eq!(keys(&forest), vec!["aqh5jy", "r601gq"]);
    }

    #[test]
    fn test_bottom_gap_of_expanded_parent() {
        let mut forest = seed_folders();
        let drop = DropInfo::gap("aqh5jy", "1obkzu", 1).with_target_expanded(true);
        relocate(&mut forest, &drop);
        assert_eq!(
            keys(&find_by_key(&forest, "1obkzu").unwrap().children),
            vec!["aqh5jy", "jkwh4m"]
        );

        // collapsed target: goes after it instead
        let mut forest = seed_folders();
        relocate(&mut forest, &DropInfo::gap("aqh5jy", "1obkzu", 1));
        assert_eq!(
            keys(&find_by_key(&forest, "r601gq").unwrap().children),
            vec!["dfcihj", "1obkzu", "aqh5jy"]
        );
    }

    #[test]
    fn test_missing_dragged_key_is_noop() {
        let mut forest = seed_folders();
        let outcome = relocate(&mut forest, &DropInfo::onto("missing", "dfcihj"));
        assert_eq!(outcome, Relocation::DragNotFound);
        assert_eq!(forest, seed_folders());
    }

    #[test]
    fn test_missing_target_key_is_noop() {
        let mut forest = seed_folders();
        let outcome = relocate(&mut forest, &DropInfo::gap("bpbymt", "missing", 1));
        assert_eq!(outcome, Relocation::TargetNotFound);
        assert_eq!(forest, seed_folders());
    }

    #[test]
    fn test_drop_into_own_subtree_is_rejected() {
        let mut forest = seed_folders();
        let outcome = relocate(&mut forest, &DropInfo::onto("r601gq", "uh8qqn"));
        assert_eq!(outcome, Relocation::IntoOwnSubtree);
        assert_eq!(forest, seed_folders());

        let outcome = relocate(&mut forest, &DropInfo::onto("dfcihj", "dfcihj"));
        assert_eq!(outcome, Relocation::IntoOwnSubtree);
        assert_eq!(forest, seed_folders());
        assert!(!outcome.is_moved());
    }

    #[test]
    fn test_from_tree_event() {
        let drop = DropInfo::from_tree_event("a", "b", true, 3, "0-1-2", true);
        assert_eq!(drop.relative_position, 1);
        assert!(drop.dropped_into_gap);
        assert!(drop.target_expanded);

        let drop = DropInfo::from_tree_event("a", "b", true, 1, "0-2", false);
        assert_eq!(drop.relative_position, -1);

        let drop = DropInfo::from_tree_event("a", "b", false, 0, "0", false);
        assert_eq!(drop.relative_position, 0);
    }

    #[test]
    fn test_from_tree_event_extremes() {
        let drop = DropInfo::from_tree_event("a", "b", true, i32::MIN, "0-5", false);
        assert_eq!(drop.relative_position, i32::MIN);

        let drop = DropInfo::from_tree_event("a", "b", true, 2, "0-x", false);
        assert_eq!(drop.relative_position, 2);
    }
}
