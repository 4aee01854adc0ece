//! End-to-end browsing against a real temporary folder tree.
//!
//! ```text
//! root/
//!   alpha/
//!     inner/
//!     a.txt
//!   beta/
//!   .hidden/
//!   top.md
//! ```
use pagepick::navigator::fs::LocalFilesystem;
use pagepick::{
    Console, FileMode, FolderMode, Navigator, NavigatorOptions, Selection, pick_file, pick_folder,
};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn build_tree() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    fs::create_dir_all(root.join("alpha/inner")).unwrap();
    fs::create_dir_all(root.join("beta")).unwrap();
    fs::create_dir_all(root.join(".hidden")).unwrap();
    fs::write(root.join("alpha/a.txt"), "a").unwrap();
    fs::write(root.join("top.md"), "top").unwrap();
    (tmp, root)
}

fn plain() -> NavigatorOptions {
    NavigatorOptions {
        styled: false,
        ..NavigatorOptions::default()
    }
}

fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
    Console::new(Cursor::new(input.to_string()), Vec::new())
}

/// Batch-local number shown for the entry named `name` in `dir`'s first
/// listing (hidden entries included), read back from the folder's own
/// enumeration order.
fn index_of(dir: &Path, name: &str, directories_only: bool) -> usize {
    use pagepick::navigator::fs::{EnumerationOptions, Filesystem};
    LocalFilesystem
        .children(
            dir,
            EnumerationOptions {
                include_hidden: true,
                directories_only,
            },
        )
        .unwrap()
        .iter()
        .position(|e| e.name == name)
        .unwrap()
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn folder_picker_descends_and_selects() {
    let (_tmp, root) = build_tree();
    let alpha = index_of(&root, "alpha", true);
    let inner = index_of(&root.join("alpha"), "inner", true);

    let mut nav = Navigator::new(LocalFilesystem, FolderMode, &root);
    let mut con = console(&format!("{alpha}\n{inner}\n \n"));
    assert_eq!(
        nav.run(&mut con).unwrap(),
        Some(Selection::Folder(root.join("alpha").join("inner")))
    );
}

#[test]
fn descending_then_ascending_restores_the_folder() {
    let (_tmp, root) = build_tree();
    let beta = index_of(&root, "beta", true);

    let mut nav = Navigator::new(LocalFilesystem, FolderMode, &root);
    let mut con = console(&format!("{beta}\n..\n \n"));
    assert_eq!(nav.run(&mut con).unwrap(), Some(Selection::Folder(root.clone())));
}

#[test]
fn file_picker_returns_the_file() {
    let (_tmp, root) = build_tree();
    let alpha = index_of(&root, "alpha", false);
    let a_txt = index_of(&root.join("alpha"), "a.txt", false);

    let mut nav = Navigator::new(LocalFilesystem, FileMode, &root);
    let mut con = console(&format!("{alpha}\n{a_txt}\n"));
    assert_eq!(
        nav.run(&mut con).unwrap(),
        Some(Selection::File(root.join("alpha").join("a.txt")))
    );

    let out = String::from_utf8(con.into_parts().1).unwrap();
    assert!(out.contains("[alpha]"));
    assert!(out.contains("top.md"));
}

#[cfg(unix)]
#[test]
fn hidden_folders_are_listed_until_toggled_off() {
    let (_tmp, root) = build_tree();
    let mut nav = Navigator::new(LocalFilesystem, FolderMode, &root);
    let mut con = console("H\nh\n");
    assert_eq!(nav.run(&mut con).unwrap(), None);

    let out = String::from_utf8(con.into_parts().1).unwrap();
    let first = format!("\n{} (showing Hidden *H)\n", root.display());
    assert!(out.starts_with(&first));
    // shown, hidden, shown again
    assert_eq!(out.matches(".hidden *H").count(), 2);
    assert_eq!(out.matches("(showing Hidden *H)").count(), 2);
}

#[cfg(unix)]
#[test]
fn pick_folder_can_leave_hidden_folders_out() {
    let (_tmp, root) = build_tree();
    let options = NavigatorOptions {
        show_hidden: false,
        styled: false,
        ..NavigatorOptions::default()
    };
    let mut con = console("");
    assert_eq!(pick_folder(&mut con, Some(root.as_path()), options).unwrap(), None);
    let out = String::from_utf8(con.into_parts().1).unwrap();
    assert!(!out.contains(".hidden"));
    assert!(!out.contains("showing Hidden"));
}

#[test]
fn pick_folder_starts_where_asked() {
    let (_tmp, root) = build_tree();
    let mut con = console(" \n");
    let picked = pick_folder(&mut con, Some(root.as_path()), plain()).unwrap();
    assert_eq!(picked, Some(root));
}

#[test]
fn end_of_input_selects_nothing() {
    let (_tmp, root) = build_tree();
    let mut con = console("");
    assert_eq!(pick_folder(&mut con, Some(root.as_path()), plain()).unwrap(), None);
}

#[test]
fn pick_file_returns_a_top_level_file() {
    let (_tmp, root) = build_tree();
    let top = index_of(&root, "top.md", false);
    let mut con = console(&format!("{top}\n"));
    assert_eq!(pick_file(&mut con, Some(root.as_path()), plain()).unwrap(), Some(root.join("top.md")));
}
