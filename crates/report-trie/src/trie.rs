//! Immutable-by-value prefix trie.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A mapping from label to child trie.
///
/// There is no "sequence ends here" flag: an empty trie is both the empty
/// root and the end of every inserted sequence. A sequence that is a strict
/// prefix of another is absorbed into the longer one.
pub struct Trie<T> {
    children: HashMap<T, Trie<T>>,
}

impl<T> Trie<T> {
    /// A trie with no entries.
    pub fn empty() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    /// Whether this node has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// The `(label, child)` pairs held directly under this node.
    ///
    /// Order is unspecified, but repeated calls on the same trie yield the
    /// same order.
    pub fn children(&self) -> impl Iterator<Item = (&T, &Trie<T>)> + '_ {
        self.children.iter()
    }

    /// Total number of edges in this subtree.
    pub fn edge_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.edge_count())
            .sum()
    }
}

impl<T: Eq + Hash> Trie<T> {
    /// The child trie for `label`, if present.
    pub fn get<Q>(&self, label: &Q) -> Option<&Trie<T>>
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.children.get(label)
    }

    /// This trie with the mapping for `label` replaced by `child`.
    pub fn with_child(mut self, label: T, child: Trie<T>) -> Self {
        self.children.insert(label, child);
        self
    }

    /// Whether every element of `path` is an edge walking down from here.
    ///
    /// An empty path is always contained.
    pub fn contains_path<'a, Q, I>(&self, path: I) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + Hash + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        let mut node = self;
        for label in path {
            match node.get(label) {
                Some(child) => node = child,
                None => return false,
            }
        }
        true
    }

    /// Detach the child for `label`, or an empty trie if absent.
    pub(crate) fn take_child(&mut self, label: &T) -> Trie<T> {
        self.children.remove(label).unwrap_or_default()
    }
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Trie<T> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
        }
    }
}

impl<T: Eq + Hash> PartialEq for Trie<T> {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
    }
}

impl<T: Eq + Hash> Eq for Trie<T> {}

impl<T: fmt::Debug> fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.children.iter()).finish()
    }
}
