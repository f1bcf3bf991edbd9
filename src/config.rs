use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// What a load does when a single file fails validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strictness {
    /// Log a warning and skip the file.
    #[default]
    Lenient,
    /// Abort the whole load with the file's error.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Directory holding `projects/` and `notes/`.
    pub root: PathBuf,
    /// Directory project screenshots are resolved against.
    pub assets: PathBuf,
    pub strictness: Strictness,
}

impl ContentConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let assets = default_assets_dir(&root);
        Self {
            root,
            assets,
            strictness: Strictness::default(),
        }
    }

    pub fn with_assets(mut self, assets: impl Into<PathBuf>) -> Self {
        self.assets = assets.into();
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}

pub fn default_assets_dir(root: &Path) -> PathBuf {
    match root.parent() {
        Some(parent) => parent.join("public"),
        None => PathBuf::from("public"),
    }
}
