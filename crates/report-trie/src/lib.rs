//! Shared-prefix trie and ordered display trees.
//!
//! Label sequences are folded into a [`Trie`] with [`trie_from`], then
//! projected into a [`Tree`] whose siblings are sorted by the string form
//! of their labels. Nothing here knows about failures; any `Eq + Hash`
//! label type works.

mod builder;
mod tree;
mod trie;

pub use builder::{trie_from, TrieBuilder};
pub use tree::{tree_from_trie, Tree};
pub use trie::Trie;
