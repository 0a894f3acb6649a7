use std::collections::BTreeSet;
use std::ffi::OsStr;
use tracing::debug;
use walkdir::DirEntry;

pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    "vendor",
];

/// Directory names the walker never descends into. Matched by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedDirs {
    names: BTreeSet<String>,
}

impl Default for ExcludedDirs {
    fn default() -> Self {
        ExcludedDirs::new(None)
    }
}

impl ExcludedDirs {
    /// The defaults are always present; `extra` adds to them.
    pub fn new(extra: Option<Vec<String>>) -> Self {
        let mut names: BTreeSet<String> =
            DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect();
        names.extend(extra.unwrap_or_default());

        debug!("Using excluded directories: {:?}", names);

        ExcludedDirs { names }
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.names.contains(name))
    }

    /// The walk root itself is never skipped, whatever it is called.
    pub fn should_skip(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && entry.file_type().is_dir() && self.contains(entry.file_name())
    }
}
