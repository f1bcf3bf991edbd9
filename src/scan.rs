use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::error::{ContentError, Result};

const EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Markdown files directly inside `dir`, sorted by path. Hidden and
/// gitignored files are included; a missing directory is an empty listing.
pub fn collect_content_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();

    let walker = WalkBuilder::new(dir)
        .max_depth(Some(1))
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(|err| ContentError::Io {
            path: dir.to_path_buf(),
            source: err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
        })?;
        let path = entry.path();
        if path.is_file() && is_content_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| EXTENSIONS.contains(&ext))
}

pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
