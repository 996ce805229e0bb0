//! Failure records as produced by the report generator

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::node::FailureNode;

/// One reported build-time failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Call-site frames, outermost first
    pub trace: Vec<String>,

    /// Summary message
    pub message: String,

    /// Raw error text, possibly multi-line
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors that can occur when loading the failure collection
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failure report not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read failure report: {0}")]
    Io(#[from] io::Error),

    #[error("Failure report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to parse failure report: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where a failure collection was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSource {
    /// File path as given
    pub path: String,

    /// SHA-256 of the raw file bytes, hex encoded
    pub digest: String,
}

/// A validated failure collection plus its provenance
#[derive(Debug, Clone)]
pub struct LoadedFailures {
    pub source: InputSource,
    pub failures: Vec<FailureRecord>,
}

impl FailureRecord {
    pub fn new(trace: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            trace,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Parsed error node, if error text was reported
    pub fn error_node(&self) -> Option<FailureNode> {
        self.error.as_deref().map(FailureNode::parse_error)
    }

    /// Message, then trace frames in order, then the error if present
    pub fn path_by_message(&self) -> Vec<FailureNode> {
        let mut path = Vec::with_capacity(self.trace.len() + 2);
        path.push(FailureNode::label(self.message.as_str()));
        path.extend(self.trace.iter().map(|frame| FailureNode::label(frame.as_str())));
        path.extend(self.error_node());
        path
    }

    /// Trace frames reversed, then the error or, failing that, the message
    pub fn path_by_task(&self) -> Vec<FailureNode> {
        let mut path = Vec::with_capacity(self.trace.len() + 1);
        path.extend(self.trace.iter().rev().map(|frame| FailureNode::label(frame.as_str())));
        path.push(
            self.error_node()
                .unwrap_or_else(|| FailureNode::label(self.message.as_str())),
        );
        path
    }

    /// Parse a failure collection.
    ///
    /// Accepts either a bare JSON array or the generated script form
    /// `instantExecutionFailures = [...];`.
    pub fn parse_collection(content: &str) -> Result<Vec<FailureRecord>, InputError> {
        let failures = serde_json::from_str(strip_assignment(content))?;
        Ok(failures)
    }
}

fn strip_assignment(content: &str) -> &str {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        return trimmed;
    }
    let value = match trimmed.split_once('=') {
        Some((_, value)) => value.trim(),
        None => trimmed,
    };
    value.strip_suffix(';').unwrap_or(value).trim_end()
}

/// Load and validate a failure collection from disk
pub fn load_failures(path: &Path) -> Result<LoadedFailures, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path)?;
    let digest = hex::encode(Sha256::digest(&bytes));
    let content = String::from_utf8(bytes)?;
    let failures = FailureRecord::parse_collection(&content)?;

    tracing::debug!(
        path = %path.display(),
        failures = failures.len(),
        "loaded failure report"
    );

    Ok(LoadedFailures {
        source: InputSource {
            path: path.to_string_lossy().to_string(),
            digest,
        },
        failures,
    })
}
