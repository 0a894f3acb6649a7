use crate::ignore::ExcludedDirs;
use crate::patterns::{GlobMatcher, PatternSet};
use crate::utils::{display_path, read_file_content};
use crate::GlobCopyError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// A selected file and its content, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub relative_path: String,
    pub content: String,
}

/// Everything a single walk produced.
#[derive(Debug, Default)]
pub struct MatchReport {
    pub files: Vec<MatchedFile>,
    /// Exact names that no file satisfied, sorted.
    pub missing_exact: Vec<String>,
    /// Every glob pattern, when none of them selected a file.
    pub unmatched_globs: Vec<String>,
    pub read_failures: Vec<GlobCopyError>,
}

impl MatchReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Walks `root` once and collects files whose base name matches `patterns`.
///
/// Base names are unique in the result: when two files share one, the first
/// reached wins, even if they live in different directories. Entries are
/// visited sorted by file name so that "first" is the same on every platform.
pub struct FileMatcher {
    root: PathBuf,
    excluded: ExcludedDirs,
}

impl FileMatcher {
    pub fn new(root: impl Into<PathBuf>, excluded: ExcludedDirs) -> Self {
        FileMatcher {
            root: root.into(),
            excluded,
        }
    }

    pub async fn collect(&self, mut patterns: PatternSet) -> MatchReport {
        let globs = GlobMatcher::new(&patterns.glob_patterns);
        let mut found_files: HashSet<String> = HashSet::new();
        let mut glob_hits = 0usize;
        let mut report = MatchReport::default();

        debug!("Walking {}", self.root.display());
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.excluded.should_skip(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if !is_regular_file(&entry) {
                continue;
            }

            let base_name = entry.file_name().to_string_lossy().into_owned();
            let by_glob = !globs.is_empty() && globs.matches(&base_name);
            let by_name = patterns.exact_names.contains(&base_name);
            if !by_glob && !by_name {
                continue;
            }

            if found_files.contains(&base_name) {
                debug!(
                    "Skipping {}: a file named {} was already included",
                    entry.path().display(),
                    base_name
                );
                continue;
            }

            let relative_path = display_path(entry.path(), &self.root);
            trace!("Reading {}", relative_path);
            match read_file_content(entry.path()).await {
                Ok(content) => {
                    patterns.exact_names.remove(&base_name);
                    found_files.insert(base_name);
                    if by_glob {
                        glob_hits += 1;
                    }
                    info!("Processed: {}", relative_path);
                    report.files.push(MatchedFile {
                        relative_path,
                        content,
                    });
                }
                Err(e) => {
                    error!("Error reading {}: {}", relative_path, e);
                    report.read_failures.push(e);
                }
            }
        }

        report.missing_exact = patterns.remaining_exact_names();
        if !report.missing_exact.is_empty() {
            warn!("Files not found: {}", report.missing_exact.join(", "));
        }

        if !patterns.glob_patterns.is_empty() && glob_hits == 0 {
            warn!(
                "No files found matching patterns: {}",
                patterns.glob_patterns.join(", ")
            );
            report.unmatched_globs = patterns.glob_patterns;
        }

        report
    }
}

/// Symlinked directories are not followed; a symlink resolving to a file counts as one.
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

pub async fn find_matching_files(
    root: &Path,
    patterns: PatternSet,
    excluded: ExcludedDirs,
) -> MatchReport {
    FileMatcher::new(root, excluded).collect(patterns).await
}
