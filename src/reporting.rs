use crate::trie::{Trie, TrieNode};
use crate::walker::MatchedFile;
use crate::GlobCopyError;
use tiktoken_rs::get_bpe_from_model;
use tracing::{debug, info};

/// Counts tokens per matched file with the tokenizer for `model`.
pub fn count_tokens(files: &[MatchedFile], model: &str) -> Result<Trie, GlobCopyError> {
    let tokenizer =
        get_bpe_from_model(model).map_err(|e| GlobCopyError::Tokenizer(e.to_string()))?;

    let mut trie = Trie::new();
    for file in files {
        let token_count = tokenizer.encode_ordinary(&file.content).len();
        debug!("{} has {} tokens", file.relative_path, token_count);
        trie.insert(&file.relative_path, token_count);
    }
    Ok(trie)
}

/// Logs the token tree, one line per file and directory.
pub fn print_stats(trie: &Trie) {
    info!("Overall ({} tokens)", trie.root().total_tokens());
    for line in render_tree(trie.root(), "") {
        info!("{}", line);
    }
}

pub fn render_tree(node: &TrieNode, prefix: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let count = node.children.len();

    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "┗━━" } else { "┣━━" };

        if child.is_file() {
            lines.push(format!(
                "{prefix}{connector} {name} ({} tokens)",
                child.total_tokens()
            ));
        } else {
            lines.push(format!(
                "{prefix}{connector} {name}/ ({} tokens)",
                child.total_tokens()
            ));
            let child_prefix = format!("{prefix}{}   ", if is_last { " " } else { "┃" });
            lines.extend(render_tree(child, &child_prefix));
        }
    }
    lines
}
