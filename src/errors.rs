use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlobCopyError {
    #[error("No patterns supplied")]
    Usage,

    #[error("No files matched the supplied patterns")]
    NoMatch,

    #[error("Failed to read file {0}: {1}")]
    FileRead(String, String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInit(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(String),

    #[error("IO Error: {0}")]
    Io(String),

    #[error("Tokenizer Error: {0}")]
    Tokenizer(String),
}

impl From<std::io::Error> for GlobCopyError {
    fn from(err: std::io::Error) -> Self {
        GlobCopyError::Io(err.to_string())
    }
}
