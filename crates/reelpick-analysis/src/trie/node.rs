//! Trie nodes.

use reelpick_core::MovieId;

use crate::encoder::AttributeToken;

/// What a node matched on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrieKey {
    Root,
    Token(AttributeToken),
    /// Leaf payload.
    Movie(MovieId),
}

/// A child as reported by a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrieEntry {
    Token(AttributeToken),
    Movie(MovieId),
}

/// One decision point, or a movie leaf.
///
/// Children keep first-seen order and are never removed. A token node has
/// at most one movie child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    key: TrieKey,
    children: Vec<TrieNode>,
}

impl TrieNode {
    pub(crate) fn new(key: TrieKey) -> Self {
        Self {
            key,
            children: Vec::new(),
        }
    }

    pub fn key(&self) -> &TrieKey {
        &self.key
    }

    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Movie carried by this node, if it is a leaf.
    pub fn payload(&self) -> Option<MovieId> {
        match self.key {
            TrieKey::Movie(id) => Some(id),
            _ => None,
        }
    }

    /// Child reached by `token`.
    pub fn child(&self, token: &AttributeToken) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|c| matches!(&c.key, TrieKey::Token(t) if t == token))
    }

    /// Movie leaf directly under this node.
    pub fn movie_child(&self) -> Option<MovieId> {
        self.children.iter().find_map(TrieNode::payload)
    }

    /// Follow the first child at every level down to a leaf.
    pub fn go_left_most(&self) -> Option<MovieId> {
        let mut node = self;
        while let Some(first) = node.children.first() {
            node = first;
        }
        node.payload()
    }

    /// Follow the last child at every level down to a leaf.
    pub fn go_right_most(&self) -> Option<MovieId> {
        let mut node = self;
        while let Some(last) = node.children.last() {
            node = last;
        }
        node.payload()
    }

    /// A few movies under this node: for each child, its right-most and
    /// left-most leaves. Duplicates are dropped; child order is kept.
    pub fn representatives(&self) -> Vec<MovieId> {
        let mut movies: Vec<MovieId> = Vec::new();
        for child in &self.children {
            for id in [child.go_right_most(), child.go_left_most()].into_iter().flatten() {
                if !movies.contains(&id) {
                    movies.push(id);
                }
            }
        }
        movies
    }

    /// This node as a traversal entry; `None` for the root.
    pub fn entry(&self) -> Option<TrieEntry> {
        match &self.key {
            TrieKey::Root => None,
            TrieKey::Token(token) => Some(TrieEntry::Token(token.clone())),
            TrieKey::Movie(id) => Some(TrieEntry::Movie(*id)),
        }
    }

    /// Nodes in this subtree, this one included.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(TrieNode::subtree_size).sum::<usize>()
    }

    /// Movie leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        if self.payload().is_some() {
            return 1;
        }
        self.children.iter().map(TrieNode::leaf_count).sum()
    }

    /// Edges on the longest path down from this node.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Child keyed by `token`, created if absent.
    pub(crate) fn token_child_mut(&mut self, token: &AttributeToken) -> &mut TrieNode {
        let position = self
            .children
            .iter()
            .position(|c| matches!(&c.key, TrieKey::Token(t) if t == token));
        let index = match position {
            Some(index) => index,
            None => {
                self.children.push(TrieNode::new(TrieKey::Token(token.clone())));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Put `id` in this node's movie leaf. Returns the movie it replaced.
    pub(crate) fn set_movie(&mut self, id: MovieId) -> MovieSlot {
        for child in &mut self.children {
            if let TrieKey::Movie(previous) = child.key {
                if previous == id {
                    return MovieSlot::Unchanged;
                }
                child.key = TrieKey::Movie(id);
                return MovieSlot::Replaced(previous);
            }
        }
        self.children.push(TrieNode::new(TrieKey::Movie(id)));
        MovieSlot::Created
    }
}

pub(crate) enum MovieSlot {
    Created,
    Unchanged,
    Replaced(MovieId),
}
