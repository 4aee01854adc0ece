use anyhow::Result;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Every file beneath `root`, sorted by path.
///
/// `.gitignore` rules and hidden entries are honoured unless `include_ignored`
/// is set. A non-empty `types_filter` keeps only files with one of those
/// extensions (no dot).
pub fn scan_files(root: &Path, types_filter: &[String], include_ignored: bool) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("{} is not a folder", root.display());
    }

    let mut walker = WalkBuilder::new(root);
    if include_ignored {
        walker.standard_filters(false);
    }

    let mut files = Vec::new();
    for result in walker.build() {
        let dirent = match result {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("skipping during scan: {}", e);
                continue;
            }
        };
        if !dirent.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = dirent.into_path();
        if !types_filter.is_empty()
            && !types_filter
                .iter()
                .any(|ext| path.extension() == Some(OsStr::new(ext)))
        {
            continue;
        }
        files.push(path);
    }

    files.sort();
    tracing::debug!("scan of {} found {} files", root.display(), files.len());
    Ok(files)
}
