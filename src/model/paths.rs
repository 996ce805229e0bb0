//! The two grouping derivations over a failure collection.
//!
//! Both are lazy and borrow the records; each is consumed once by the trie
//! builder.

use super::node::FailureNode;
use super::record::FailureRecord;

/// Paths that group failures by message, then by call site.
pub fn paths_by_message(
    failures: &[FailureRecord],
) -> impl Iterator<Item = Vec<FailureNode>> + '_ {
    failures.iter().map(FailureRecord::path_by_message)
}

/// Paths that group failures by call site, innermost frame first.
pub fn paths_by_task(failures: &[FailureRecord]) -> impl Iterator<Item = Vec<FailureNode>> + '_ {
    failures.iter().map(FailureRecord::path_by_task)
}
