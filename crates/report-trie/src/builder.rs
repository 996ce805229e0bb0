//! Folding label sequences into a [`Trie`].

use std::hash::Hash;

use crate::trie::Trie;

/// Incremental trie construction.
///
/// Each inserted path shares its longest existing prefix with earlier
/// paths. Insertion order has no effect on the resulting trie.
#[derive(Debug)]
pub struct TrieBuilder<T> {
    root: Trie<T>,
}

impl<T: Eq + Hash> TrieBuilder<T> {
    /// Create a builder starting from an empty trie.
    pub fn new() -> Self {
        Self { root: Trie::empty() }
    }

    /// Merge one label sequence into the trie.
    pub fn insert<S>(&mut self, path: S)
    where
        S: IntoIterator<Item = T>,
    {
        let root = std::mem::take(&mut self.root);
        self.root = insert(root, path.into_iter());
    }

    /// Finish and return the accumulated trie.
    pub fn build(self) -> Trie<T> {
        self.root
    }
}

impl<T: Eq + Hash> Default for TrieBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn insert<T, I>(mut node: Trie<T>, mut path: I) -> Trie<T>
where
    T: Eq + Hash,
    I: Iterator<Item = T>,
{
    match path.next() {
        None => node,
        Some(head) => {
            let child = insert(node.take_child(&head), path);
            node.with_child(head, child)
        }
    }
}

/// Fold a sequence of label sequences into one trie.
///
/// The outer sequence is consumed once. An empty input yields an empty
/// trie.
pub fn trie_from<T, I, S>(sequences: I) -> Trie<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = T>,
{
    let mut builder = TrieBuilder::new();
    for path in sequences {
        builder.insert(path);
    }
    builder.build()
}

impl<T, S> FromIterator<S> for Trie<T>
where
    T: Eq + Hash,
    S: IntoIterator<Item = T>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        trie_from(iter)
    }
}
