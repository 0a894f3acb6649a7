use std::collections::BTreeMap;

/// A directory or file in the token tree. Files carry a token count.
#[derive(Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<String, TrieNode>,
    pub token_count: Option<usize>,
}

impl TrieNode {
    pub fn is_file(&self) -> bool {
        self.token_count.is_some()
    }

    /// Total tokens in the subtree.
    pub fn total_tokens(&self) -> usize {
        self.token_count.unwrap_or(0)
            + self
                .children
                .values()
                .map(TrieNode::total_tokens)
                .sum::<usize>()
    }
}

/// Token counts keyed by `/`-separated relative path.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    pub fn insert(&mut self, relative_path: &str, token_count: usize) {
        let mut current_node = &mut self.root;
        for component in relative_path.split('/').filter(|c| !c.is_empty()) {
            current_node = current_node
                .children
                .entry(component.to_owned())
                .or_default();
        }
        current_node.token_count = Some(token_count);
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
