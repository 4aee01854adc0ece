//! Filesystem seen by the navigator: one folder's children at a time, the
//! parent of a folder, and the volumes to fall back to at a root.

use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One child of the folder being browsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub hidden: bool,
}

impl Entry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Entry::new(path.into(), true)
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Entry::new(path.into(), false)
    }

    fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let hidden = name.starts_with('.');
        Entry {
            name,
            path,
            is_dir,
            hidden,
        }
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }
}

/// A drive the user can jump to when already at a filesystem root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    pub letter: char,
    pub root: PathBuf,
}

/// Which children an enumeration returns. System entries are never returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnumerationOptions {
    pub include_hidden: bool,
    pub directories_only: bool,
}

pub trait Filesystem {
    /// Immediate children of `dir`, in the order the filesystem yields them.
    fn children(&self, dir: &Path, options: EnumerationOptions) -> io::Result<Vec<Entry>>;

    /// `None` at a filesystem root.
    fn parent(&self, dir: &Path) -> Option<PathBuf>;

    fn volumes(&self) -> Vec<Volume>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn children(&self, dir: &Path, options: EnumerationOptions) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for result in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let dirent = match result {
                Ok(v) => v,
                // The folder itself could not be read.
                Err(e) if e.depth() == 0 => return Err(e.into()),
                Err(e) => {
                    tracing::warn!("skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            let attributes = Attributes::of(&dirent);
            if attributes.system || (attributes.hidden && !options.include_hidden) {
                continue;
            }

            // Follow links so a symlinked folder can be descended into.
            let is_dir = dirent.path().is_dir();
            if options.directories_only && !is_dir {
                continue;
            }
            entries.push(Entry::new(dirent.into_path(), is_dir).hidden(attributes.hidden));
        }
        Ok(entries)
    }

    fn parent(&self, dir: &Path) -> Option<PathBuf> {
        dir.parent().map(Path::to_path_buf)
    }

    #[cfg(windows)]
    fn volumes(&self) -> Vec<Volume> {
        use windows::Win32::Storage::FileSystem::GetLogicalDriveStringsW;

        // Drive roots, each followed by a NUL: C:\ NUL D:\ NUL.
        let mut buffer = [0u16; 256];
        let len = unsafe { GetLogicalDriveStringsW(Some(&mut buffer)) } as usize;
        if len == 0 || len > buffer.len() {
            tracing::warn!("GetLogicalDriveStringsW returned {len}");
            return Vec::new();
        }
        parse_drive_strings(&String::from_utf16_lossy(&buffer[..len]))
    }

    // Unix has a single root and no drive letters.
    #[cfg(not(windows))]
    fn volumes(&self) -> Vec<Volume> {
        Vec::new()
    }
}

struct Attributes {
    hidden: bool,
    system: bool,
}

impl Attributes {
    #[cfg(windows)]
    fn of(dirent: &walkdir::DirEntry) -> Self {
        use std::os::windows::fs::MetadataExt;
        use windows::Win32::Storage::FileSystem::{FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_SYSTEM};

        let bits = dirent.metadata().map(|m| m.file_attributes()).unwrap_or(0);
        Attributes {
            hidden: bits & FILE_ATTRIBUTE_HIDDEN.0 != 0,
            system: bits & FILE_ATTRIBUTE_SYSTEM.0 != 0,
        }
    }

    #[cfg(not(windows))]
    fn of(dirent: &walkdir::DirEntry) -> Self {
        Attributes {
            hidden: dirent.file_name().to_string_lossy().starts_with('.'),
            system: false,
        }
    }
}

/// Volumes from NUL-separated drive roots (`C:\`, NUL, `D:\`, NUL).
/// Roots that do not start with a drive letter are skipped.
pub fn parse_drive_strings(roots: &str) -> Vec<Volume> {
    roots
        .split('\0')
        .filter_map(|root| {
            let letter = root.chars().next().filter(char::is_ascii_alphabetic)?;
            Some(Volume {
                letter: letter.to_ascii_uppercase(),
                root: PathBuf::from(root),
            })
        })
        .collect()
}

/// "C", "C or D", "C,D or E".
pub fn describe_volumes(volumes: &[Volume]) -> String {
    let letters: Vec<String> = volumes.iter().map(|v| v.letter.to_string()).collect();
    match letters.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} or {}", rest.join(","), last),
    }
}
