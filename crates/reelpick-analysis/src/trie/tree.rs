//! The discrimination trie.

use reelpick_core::MovieId;

use crate::encoder::AttributeToken;

use super::node::{MovieSlot, TrieEntry, TrieKey, TrieNode};
use super::traversal::Traversal;

/// What `create_branch` did to the leaf at the end of the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOutcome {
    /// A new leaf was added.
    Created,
    /// The leaf already carried this movie.
    Unchanged,
    /// The leaf carried another movie, which is now unreachable.
    Replaced { previous: MovieId },
}

/// Multi-way trie keyed by active attribute tokens.
///
/// Built once, then read. Branches are only ever added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscriminationTrie {
    root: TrieNode,
}

impl Default for DiscriminationTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscriminationTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(TrieKey::Root),
        }
    }

    /// Add the path `tokens` followed by a leaf for `payload`.
    ///
    /// Existing nodes along the path are reused. If the path already ends in
    /// a leaf for another movie, that leaf now carries `payload` instead.
    pub fn create_branch(&mut self, tokens: &[AttributeToken], payload: MovieId) -> BranchOutcome {
        let mut node = &mut self.root;
        for token in tokens {
            node = node.token_child_mut(token);
        }
        match node.set_movie(payload) {
            MovieSlot::Created => BranchOutcome::Created,
            MovieSlot::Unchanged => BranchOutcome::Unchanged,
            MovieSlot::Replaced(previous) => {
                tracing::debug!(%previous, replacement = %payload, "leaf collision");
                BranchOutcome::Replaced { previous }
            }
        }
    }

    /// Node reached by following `tokens` from the root, in the given order.
    pub fn find(&self, tokens: &[AttributeToken]) -> Traversal<&TrieNode> {
        if self.is_empty() {
            return Traversal::EmptyTree;
        }
        let mut node = &self.root;
        for token in tokens {
            match node.child(token) {
                Some(child) => node = child,
                None => return Traversal::NoMatch,
            }
        }
        Traversal::Matches(node)
    }

    /// Children one level below the node reached by `tokens`.
    ///
    /// Tokens are matched in the order given. A sequence that is not in
    /// vocabulary order misses even when a matching movie exists.
    pub fn traverse_tree(&self, tokens: &[AttributeToken]) -> Traversal<Vec<TrieEntry>> {
        self.find(tokens)
            .map(|node| node.children().iter().filter_map(TrieNode::entry).collect())
    }

    /// Representative movies below the node reached by `tokens`: the
    /// right-most and left-most leaf under each of its children.
    pub fn representatives(&self, tokens: &[AttributeToken]) -> Traversal<Vec<MovieId>> {
        self.find(tokens).map(TrieNode::representatives)
    }

    pub fn go_left_most(&self) -> Option<MovieId> {
        self.root.go_left_most()
    }

    pub fn go_right_most(&self) -> Option<MovieId> {
        self.root.go_right_most()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Distinct movie leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// All nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// Length of the longest root-to-leaf path, leaf included.
    pub fn depth(&self) -> usize {
        self.root.height()
    }
}
