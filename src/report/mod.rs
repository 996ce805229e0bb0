//! Report assembly and output
//!
//! A report is two display trees built from one failure collection, plus
//! the failure count. It can be printed as collapsible text trees or
//! written as a versioned JSON document.

mod assembler;
mod document;
mod render;

pub use assembler::{ReportModel, MESSAGE_TREE_TITLE, TASK_TREE_TITLE};
pub use document::{ReportDocument, REPORT_SCHEMA_ID, REPORT_SCHEMA_VERSION};
pub use render::{render_report, render_tree, RenderOptions};
