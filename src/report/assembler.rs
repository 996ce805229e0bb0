//! View-model for one failure report

use report_trie::{tree_from_trie, trie_from, Tree};
use serde::Serialize;

use crate::model::{paths_by_message, paths_by_task, FailureNode, FailureRecord};

/// Root label of the by-message tree
pub const MESSAGE_TREE_TITLE: &str = "Failures grouped by message";

/// Root label of the by-task tree
pub const TASK_TREE_TITLE: &str = "Failures grouped by task";

/// Everything a renderer needs to present a failure report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportModel {
    /// Number of input records, regardless of how many paths were merged
    pub total_failures: usize,

    /// Failures grouped by message, then by call site
    pub message_tree: Tree<FailureNode>,

    /// Failures grouped by call site, then by error or message
    pub task_tree: Tree<FailureNode>,
}

impl ReportModel {
    /// Build both grouping trees from a failure collection
    pub fn assemble(failures: &[FailureRecord]) -> Self {
        let message_tree = grouped_tree(MESSAGE_TREE_TITLE, paths_by_message(failures));
        let task_tree = grouped_tree(TASK_TREE_TITLE, paths_by_task(failures));

        tracing::debug!(
            failures = failures.len(),
            message_nodes = message_tree.node_count(),
            task_nodes = task_tree.node_count(),
            "assembled failure report"
        );

        Self {
            total_failures: failures.len(),
            message_tree,
            task_tree,
        }
    }

    /// Number of distinct failure messages
    pub fn distinct_messages(&self) -> usize {
        self.message_tree.children.len()
    }

    /// Number of distinct first segments of the by-task paths
    pub fn distinct_task_roots(&self) -> usize {
        self.task_tree.children.len()
    }
}

fn grouped_tree<I>(title: &str, paths: I) -> Tree<FailureNode>
where
    I: Iterator<Item = Vec<FailureNode>>,
{
    tree_from_trie(FailureNode::label(title), &trie_from(paths))
}
