//! Ordered display trees projected from a [`Trie`].

use std::fmt::Display;

use serde::Serialize;

use crate::trie::Trie;

/// A labeled node with ordered children, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree<T> {
    pub label: T,
    pub children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    pub fn new(label: T, children: Vec<Tree<T>>) -> Self {
        Self { label, children }
    }

    pub fn leaf(label: T) -> Self {
        Self::new(label, Vec::new())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Tree::node_count).sum::<usize>()
    }

    /// Number of nodes without children.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Tree::leaf_count).sum()
        }
    }

    /// Edges on the longest path down from this node. A leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }
}

impl<T: Display> Tree<T> {
    /// Walk down by display key, starting below this node.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&Tree<T>> {
        let mut node = self;
        for key in path {
            node = node
                .children
                .iter()
                .find(|child| child.label.to_string() == key.as_ref())?;
        }
        Some(node)
    }
}

/// Project `trie` into a display tree rooted at `label`.
///
/// Children are sorted by the string form of their own label. Labels whose
/// string forms are equal are ordered by `Ord`, so the result does not
/// depend on how the trie was built.
pub fn tree_from_trie<T>(label: T, trie: &Trie<T>) -> Tree<T>
where
    T: Clone + Display + Ord,
{
    let mut entries: Vec<(String, &T, &Trie<T>)> = trie
        .children()
        .map(|(child_label, child)| (child_label.to_string(), child_label, child))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let children = entries
        .into_iter()
        .map(|(_, child_label, child)| tree_from_trie(child_label.clone(), child))
        .collect();

    Tree::new(label, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::trie_from;

    fn build(raw: &[&[&str]]) -> Trie<String> {
        trie_from(
            raw.iter()
                .map(|p| p.iter().map(|s| s.to_string()).collect::<Vec<_>>()),
        )
    }

    fn labels(tree: &Tree<String>) -> Vec<&str> {
        tree.children.iter().map(|c| c.label.as_str()).collect()
    }

    fn assert_sorted(tree: &Tree<String>) {
        let keys = labels(tree);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "children of {:?} not sorted", tree.label);
        tree.children.iter().for_each(assert_sorted);
    }

    #[test]
    fn test_empty_trie_projects_to_leaf() {
        let tree = tree_from_trie("root".to_string(), &Trie::empty());
        assert!(tree.is_leaf());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_children_sorted_by_label() {
        let trie = build(&[&["zeta"], &["alpha", "y", "x"], &["mid"], &["alpha", "b"]]);
        let tree = tree_from_trie("root".to_string(), &trie);

        assert_eq!(labels(&tree), vec!["alpha", "mid", "zeta"]);
        assert_eq!(labels(&tree.children[0]), vec!["b", "y"]);
        assert_sorted(&tree);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let trie = build(&[&["c", "a"], &["b"], &["c", "b"], &["a", "a", "a"]]);
        let first = tree_from_trie("root".to_string(), &trie);
        let second = tree_from_trie("root".to_string(), &trie);
        assert_eq!(first, second);
    }

    #[test]
    fn test_prefix_absorption() {
        let trie = build(&[&["a", "b"], &["a", "b", "c"]]);
        let tree = tree_from_trie("root".to_string(), &trie);

        assert_eq!(labels(&tree), vec!["a"]);
        let a = &tree.children[0];
        assert_eq!(labels(a), vec!["b"]);
        let b = &a.children[0];
        assert_eq!(labels(b), vec!["c"]);
        assert!(b.children[0].is_leaf());
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_permuted_inputs_project_identically() {
        let s1: &[&str] = &["x", "y"];
        let s2: &[&str] = &["x", "a", "q"];
        let s3: &[&str] = &["b"];

        let one = tree_from_trie("r".to_string(), &build(&[s1, s2, s3]));
        let two = tree_from_trie("r".to_string(), &build(&[s3, s1, s2]));
        let three = tree_from_trie("r".to_string(), &build(&[s2, s3, s1]));
        assert_eq!(one, two);
        assert_eq!(two, three);
    }

    #[test]
    fn test_sort_uses_display_not_ord() {
        // Numeric labels sort as strings: "10" before "9".
        let trie = trie_from(vec![vec![9], vec![10], vec![100]]);
        let tree = tree_from_trie(0, &trie);
        let keys: Vec<i32> = tree.children.iter().map(|c| c.label).collect();
        assert_eq!(keys, vec![10, 100, 9]);
    }

    #[test]
    fn test_tied_display_keys_ordered_by_label() {
        // Distinct labels, same display key.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        struct Key(&'static str, u8);

        impl std::fmt::Display for Key {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.0)
            }
        }

        let paths = [
            vec![Key("same", 2)],
            vec![Key("same", 0)],
            vec![Key("a", 9)],
            vec![Key("same", 1)],
        ];
        let expected = vec![Key("a", 9), Key("same", 0), Key("same", 1), Key("same", 2)];

        for round in 0..50 {
            let mut ordered = paths.to_vec();
            ordered.rotate_left(round % paths.len());
            let tree = tree_from_trie(Key("root", 0), &trie_from(ordered));
            let keys: Vec<Key> = tree.children.into_iter().map(|c| c.label).collect();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn test_counts_and_find() {
        let trie = build(&[&["a", "b"], &["a", "c", "d"], &["e"]]);
        let tree = tree_from_trie("root".to_string(), &trie);

        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.find(&["a", "c", "d"]).map(|t| t.label.as_str()), Some("d"));
        assert!(tree.find(&["a", "d"]).is_none());
        assert_eq!(tree.find::<&str>(&[]).map(|t| t.label.as_str()), Some("root"));
    }

    #[test]
    fn test_serialize_shape() {
        let tree = Tree::new("root", vec![Tree::leaf("child")]);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "root",
                "children": [{ "label": "child", "children": [] }]
            })
        );
    }
}
