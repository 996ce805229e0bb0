//! Failure Report - build failures grouped by message and by task
//!
//! Failure records are turned into grouping paths, merged into shared-prefix
//! tries, and projected into two ordered trees: one grouped by failure
//! message and one grouped by call-site task.

pub mod config;
pub mod model;
pub mod report;

pub use config::{CliOverrides, ConfigError, OutputFormat, ReportConfig};
pub use model::{load_failures, FailureNode, FailureRecord, InputError, LoadedFailures};
pub use report::{render_report, render_tree, RenderOptions, ReportDocument, ReportModel};
pub use report_trie::{tree_from_trie, trie_from, Tree, Trie};
