use crate::ignore::ExcludedDirs;
use crate::patterns::PatternSet;
use crate::reporting::{count_tokens, print_stats};
use crate::utils::format_xml_content;
use crate::walker::{FileMatcher, MatchedFile};
use crate::GlobCopyError;
use arboard::Clipboard;
use async_trait::async_trait;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, error, info, trace, warn};

#[derive(Debug, Clone)]
pub struct CopyConfig {
    pub root: PathBuf,
    pub patterns: Vec<String>,
    pub excluded_dirs: ExcludedDirs,
    pub stdout: bool,
    pub no_stats: bool,
    pub model: String,
}

/// Where the concatenated content ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Clipboard,
    Stdout,
}

#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn set_text(&self, text: String) -> Result<(), GlobCopyError>;
}

/// The system clipboard.
pub struct SystemClipboard;

#[async_trait]
impl ClipboardSink for SystemClipboard {
    async fn set_text(&self, text: String) -> Result<(), GlobCopyError> {
        debug!("Initializing clipboard");
        let mut clipboard =
            Clipboard::new().map_err(|e| GlobCopyError::ClipboardInit(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| GlobCopyError::ClipboardWrite(e.to_string()))
    }
}

pub fn format_matches(files: &[MatchedFile]) -> String {
    files
        .iter()
        .map(|file| format_xml_content(&file.content, &file.relative_path))
        .collect()
}

/// Hands `content` to the clipboard, falling back to `out` when that fails.
pub async fn deliver<W: Write>(
    sink: Option<&dyn ClipboardSink>,
    content: String,
    out: &mut W,
) -> Result<Delivery, GlobCopyError> {
    if let Some(sink) = sink {
        match sink.set_text(content.clone()).await {
            Ok(()) => {
                info!("Files copied to clipboard successfully.");
                return Ok(Delivery::Clipboard);
            }
            Err(e) => {
                error!("Could not copy to clipboard ({}), printing to stdout instead", e);
            }
        }
    }

    out.write_all(content.as_bytes())?;
    out.flush()?;
    Ok(Delivery::Stdout)
}

pub struct GlobCopier<S: ClipboardSink> {
    config: CopyConfig,
    sink: S,
}

impl GlobCopier<SystemClipboard> {
    pub fn new(config: CopyConfig) -> Self {
        GlobCopier::with_sink(config, SystemClipboard)
    }
}

impl<S: ClipboardSink> GlobCopier<S> {
    pub fn with_sink(config: CopyConfig, sink: S) -> Self {
        GlobCopier { config, sink }
    }

    /// Finds, formats and delivers the matching files, writing any stdout output to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Delivery, GlobCopyError> {
        let config = &self.config;
        let patterns = PatternSet::classify(&config.patterns);
        if patterns.is_empty() {
            return Err(GlobCopyError::Usage);
        }

        let report = FileMatcher::new(&config.root, config.excluded_dirs.clone())
            .collect(patterns)
            .await;
        if report.is_empty() {
            return Err(GlobCopyError::NoMatch);
        }

        if !config.no_stats {
            match count_tokens(&report.files, &config.model) {
                Ok(trie) => print_stats(&trie),
                Err(e) => warn!("Skipping token statistics: {}", e),
            }
        }

        let content = format_matches(&report.files);
        trace!("Final content length: {}", content.len());

        let sink: Option<&dyn ClipboardSink> = if config.stdout {
            None
        } else {
            Some(&self.sink)
        };
        deliver(sink, content, out).await
    }
}

pub async fn copy_matching_files(config: CopyConfig) -> Result<Delivery, GlobCopyError> {
    let copier = GlobCopier::new(config);
    let mut stdout = std::io::stdout().lock();
    copier.run(&mut stdout).await
}
