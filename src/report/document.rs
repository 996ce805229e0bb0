//! Versioned JSON report document

use chrono::{DateTime, Utc};
use report_trie::Tree;
use serde::Serialize;

use super::assembler::ReportModel;
use crate::model::{FailureNode, InputSource};

/// Schema version for the report document
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Schema identifier for the report document
pub const REPORT_SCHEMA_ID: &str = "failure-report/report@1";

/// Report document written by `render --format json`
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When the document was created
    pub created_at: DateTime<Utc>,

    /// Input the report was built from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<InputSource>,

    /// Number of failures in the input
    pub total_failures: usize,

    /// Failures grouped by message
    pub message_tree: Tree<FailureNode>,

    /// Failures grouped by task
    pub task_tree: Tree<FailureNode>,
}

impl ReportDocument {
    pub fn new(model: ReportModel, source: Option<InputSource>) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            schema_id: REPORT_SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            source,
            total_failures: model.total_failures,
            message_tree: model.message_tree,
            task_tree: model.task_tree,
        }
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
