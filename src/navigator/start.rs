use std::path::{Path, PathBuf};

/// Shorthand accepted as a start path for the user's downloads folder.
pub const DOWNLOADS: &str = "Downloads";

/// Works out which folder browsing starts in.
///
/// No request means `home`. The literal `Downloads` means `home/Downloads`.
/// Anything that is not an existing folder falls back to `home`.
pub fn resolve_start(requested: Option<&Path>, home: &Path) -> PathBuf {
    let candidate = match requested {
        None => return absolute(home),
        Some(p) if p == Path::new(DOWNLOADS) => home.join(DOWNLOADS),
        Some(p) => p.to_path_buf(),
    };
    if candidate.is_dir() {
        absolute(&candidate)
    } else {
        tracing::debug!("{} is not a folder, starting in {}", candidate.display(), home.display());
        absolute(home)
    }
}

// Parent lookups need an absolute path; "." has no parent of its own.
#[cfg(not(windows))]
fn absolute(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

// canonicalize() yields \\?\ paths on Windows, which read badly in headings.
#[cfg(windows)]
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
