use crate::folder::{Folder, FolderProperties};

/// The demo forest: two roots, eight folders in total.
///
/// ```text
/// Folder 1 (aqh5jy)
/// Folder 2 (r601gq)
/// ├── Folder 3 (dfcihj)
/// │   ├── Folder 4 (bpbymt)
/// │   └── Folder 5 (9fjtzr)
/// └── Folder 6 (1obkzu)
///     └── Folder 7 (jkwh4m)
///         └── Folder 8 (uh8qqn)
/// ```
pub fn seed_folders() -> Vec<Folder> {
    use FolderProperties::{Everyone, OnlyMe};

    vec![
        Folder::new("aqh5jy", "Folder 1", Everyone),
        Folder::new("r601gq", "Folder 2", OnlyMe).with_children(vec![
            Folder::new("dfcihj", "Folder 3", OnlyMe).with_children(vec![
                Folder::new("bpbymt", "Folder 4", OnlyMe),
                Folder::new("9fjtzr", "Folder 5", OnlyMe),
            ]),
            Folder::new("1obkzu", "Folder 6", OnlyMe).with_children(vec![Folder::new(
                "jkwh4m", "Folder 7", OnlyMe,
            )
            .with_children(vec![Folder::new("uh8qqn", "Folder 8", OnlyMe)])]),
        ]),
    ]
}
