//! Prefix tree over the 26 ASCII letters
//!
//! Letters are case-folded, so `Apple` and `apple` are the same word. Nodes
//! are kept in one vector and refer to their children by index; removing a
//! word only clears its end-of-word flag and never frees nodes.

use tracing::debug;

pub mod error;
pub use error::{TrieError, TrieResult};

/// Branching factor, one path per letter
pub const TRIE_PATHS: usize = 26;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    is_word: bool,
    children: [Option<usize>; TRIE_PATHS],
}

/// Case-insensitive set of alphabetic words
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

/// Path index of `c`: `a`/`A` is 0 through `z`/`Z` at 25
pub fn alphabetical_index(c: char) -> TrieResult<usize> {
    if c.is_ascii_alphabetic() {
        Ok((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        Err(TrieError::InvalidCharacter(c))
    }
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Store `word`. Returns `false` if it was already present.
    ///
    /// The whole word is validated before any node is created. The empty
    /// word is accepted and marks the root.
    pub fn insert(&mut self, word: &str) -> TrieResult<bool> {
        let path = Self::path_of(word)?;

        let mut current = ROOT;
        for index in path {
            let existing = self.nodes[current].children[index];
            current = match existing {
                Some(child) => child,
                None => self.add_child(current, index)?,
            };
        }

        let node = &mut self.nodes[current];
        if node.is_word {
            return Ok(false);
        }
        node.is_word = true;
        self.len += 1;

        debug!(word, "inserted word");
        Ok(true)
    }

    /// Whether `word` was inserted and not removed since.
    /// Words with non-alphabetic characters are never present.
    pub fn contains(&self, word: &str) -> bool {
        self.node_for(word)
            .is_some_and(|index| self.nodes[index].is_word)
    }

    /// Whether any stored word starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.node_for(prefix)
            .is_some_and(|index| self.has_word_below(index))
    }

    /// Clear the end-of-word flag for `word`
    pub fn remove(&mut self, word: &str) -> TrieResult<()> {
        match self.node_for(word) {
            Some(index) if self.nodes[index].is_word => {
                self.nodes[index].is_word = false;
                self.len -= 1;
                debug!(word, "removed word");
                Ok(())
            }
            _ => Err(TrieError::NotFound(word.to_string())),
        }
    }

    /// Every stored word in lowercase, in alphabetical order
    pub fn words(&self) -> Vec<String> {
        self.collect_from(ROOT, String::new())
    }

    /// Stored words starting with `prefix`, lowercase and alphabetical
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        match self.node_for(prefix) {
            Some(index) => self.collect_from(index, prefix.to_ascii_lowercase()),
            None => Vec::new(),
        }
    }

    fn path_of(word: &str) -> TrieResult<Vec<usize>> {
        word.chars().map(alphabetical_index).collect()
    }

    /// Node reached by following `word` from the root
    fn node_for(&self, word: &str) -> Option<usize> {
        let mut current = ROOT;
        for c in word.chars() {
            let index = alphabetical_index(c).ok()?;
            current = self.nodes[current].children[index]?;
        }
        Some(current)
    }

    fn add_child(&mut self, parent: usize, index: usize) -> TrieResult<usize> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| TrieError::AllocationFailure)?;
        self.nodes.push(TrieNode::default());

        let child = self.nodes.len() - 1;
        self.nodes[parent].children[index] = Some(child);
        Ok(child)
    }

    fn has_word_below(&self, start: usize) -> bool {
        let mut pending = vec![start];
        while let Some(index) = pending.pop() {
            let node = &self.nodes[index];
            if node.is_word {
                return true;
            }
            pending.extend(node.children.iter().flatten());
        }
        false
    }

    /// Depth-first walk with an explicit stack, children pushed in reverse
    /// so letters come out in order
    fn collect_from(&self, start: usize, prefix: String) -> Vec<String> {
        let mut words = Vec::new();
        let mut pending = vec![(start, prefix)];

        while let Some((index, word)) = pending.pop() {
            let node = &self.nodes[index];
            if node.is_word {
                words.push(word.clone());
            }
            for (letter, child) in node.children.iter().enumerate().rev() {
                if let Some(child) = child {
                    let mut next = word.clone();
                    next.push((b'a' + letter as u8) as char);
                    pending.push((*child, next));
                }
            }
        }

        words
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
