use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Characters that turn a token into a glob pattern.
pub const GLOB_CHARS: &[char] = &['*', '?', '[', ']', '!'];

pub fn is_glob_pattern(token: &str) -> bool {
    token.contains(GLOB_CHARS)
}

/// The user's patterns, split into globs and exact base names.
///
/// `exact_names` shrinks during a walk: each name is removed once a file
/// with that base name has been read, so whatever is left afterwards was
/// never found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    pub glob_patterns: Vec<String>,
    pub exact_names: HashSet<String>,
}

impl PatternSet {
    pub fn classify<S: AsRef<str>>(args: &[S]) -> Self {
        let mut set = PatternSet::default();
        for arg in args {
            let arg = arg.as_ref();
            if is_glob_pattern(arg) {
                set.glob_patterns.push(arg.to_owned());
            } else {
                set.exact_names.insert(arg.to_owned());
            }
        }
        debug!(
            "Classified {} glob pattern(s) and {} exact name(s)",
            set.glob_patterns.len(),
            set.exact_names.len()
        );
        set
    }

    pub fn is_empty(&self) -> bool {
        self.glob_patterns.is_empty() && self.exact_names.is_empty()
    }

    /// Exact names not yet satisfied, sorted for stable reporting.
    pub fn remaining_exact_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.exact_names.iter().cloned().collect();
        names.sort();
        names
    }
}

/// Compiled glob patterns matched against base names.
pub struct GlobMatcher {
    patterns: Vec<Pattern>,
    options: MatchOptions,
}

impl GlobMatcher {
    pub fn new(glob_patterns: &[String]) -> Self {
        let patterns = glob_patterns
            .iter()
            .filter_map(|p| compile_base_name_pattern(p))
            .collect();

        GlobMatcher {
            patterns,
            options: platform_match_options(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, base_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(base_name, self.options))
    }
}

/// Compiles `raw` for matching a single path component.
///
/// Runs of `*` collapse to one, so `**` never takes on its directory-spanning
/// meaning. A pattern with a separator can never match a base name and is
/// dropped. A pattern `glob` rejects (such as an unclosed `[`) matches itself
/// literally.
fn compile_base_name_pattern(raw: &str) -> Option<Pattern> {
    if raw.contains('/') {
        debug!("Glob pattern '{}' contains a separator and matches no base name", raw);
        return None;
    }

    let collapsed = collapse_stars(raw);
    match Pattern::new(&collapsed) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            warn!("Treating glob pattern '{}' literally: {}", raw, e);
            Pattern::new(&Pattern::escape(&collapsed)).ok()
        }
    }
}

fn collapse_stars(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c == '*' && collapsed.ends_with('*') {
            continue;
        }
        collapsed.push(c);
    }
    collapsed
}

/// Filename matching follows the platform: case-insensitive on Windows and macOS.
fn platform_match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: !cfg!(any(windows, target_os = "macos")),
        require_literal_separator: false,
        require_literal_leading_dot: false,
    }
}
