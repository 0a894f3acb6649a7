use crate::GlobCopyError;
use std::path::Path;
use tokio::fs as async_fs;

pub fn normalize_path(path: &Path) -> String {
    let normalized_path = match path.strip_prefix("./") {
        Ok(stripped) if path.is_relative() => stripped,
        _ => path,
    };

    normalized_path.to_string_lossy().replace('\\', "/")
}

/// Path of `path` relative to `root`, or the absolute path when it lies outside `root`.
pub fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => normalize_path(relative),
        Err(_) => {
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            normalize_path(&absolute)
        }
    }
}

pub async fn read_file_content(file_path: &Path) -> Result<String, GlobCopyError> {
    async_fs::read_to_string(file_path)
        .await
        .map_err(|err| GlobCopyError::FileRead(file_path.display().to_string(), err.to_string()))
}

/// Wraps one file in a `<file>` block. Content is inserted verbatim.
pub fn format_xml_content(content: &str, path: &str) -> String {
    let mut formatted_content = String::with_capacity(content.len() + path.len() + 24);
    formatted_content.push_str(&format!("<file path=\"{path}\">\n"));
    formatted_content.push_str(content);
    formatted_content.push('\n');
    formatted_content.push_str("</file>\n");
    formatted_content
}
