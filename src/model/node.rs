//! Path segments of a failure grouping

use serde::{Deserialize, Serialize};
use std::fmt;

/// One segment of a grouping path
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FailureNode {
    /// Trace frame, grouping header, or failure message
    Label { text: String },

    /// Parsed error text; only ever the last segment of a path
    Error { headline: String, body: String },
}

impl FailureNode {
    pub fn label(text: impl Into<String>) -> Self {
        FailureNode::Label { text: text.into() }
    }

    pub fn error(headline: impl Into<String>, body: impl Into<String>) -> Self {
        FailureNode::Error {
            headline: headline.into(),
            body: body.into(),
        }
    }

    /// Parse raw error text.
    ///
    /// The first line becomes the headline. Every following line is trimmed
    /// and the results are joined with `\n` to form the body.
    pub fn parse_error(raw: &str) -> Self {
        let mut lines = split_lines(raw).into_iter();
        let headline = lines.next().unwrap_or_default();
        let body = lines.map(str::trim).collect::<Vec<_>>().join("\n");
        FailureNode::error(headline, body)
    }

    /// Lines shown for this node in a rendered tree.
    ///
    /// The first line goes next to the tree connector; the rest are
    /// continuation lines. Multi-line labels are split, and an error's body
    /// follows its headline with blank lines kept.
    pub fn display_lines(&self) -> Vec<&str> {
        match self {
            FailureNode::Label { text } => split_lines(text),
            FailureNode::Error { headline, body } => {
                let mut lines = split_lines(headline);
                if !body.is_empty() {
                    lines.extend(split_lines(body));
                }
                lines
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FailureNode::Error { .. })
    }
}

/// Display key used for ordering siblings.
///
/// Errors display as headline and body concatenated, so they sort by their
/// whole text rather than by headline alone.
impl fmt::Display for FailureNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureNode::Label { text } => f.write_str(text),
            FailureNode::Error { headline, body } => write!(f, "{}{}", headline, body),
        }
    }
}

/// Split on `\r\n`, `\n` or `\r`. An empty string is one empty line and a
/// trailing break yields a trailing empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    lines.push(&text[start..]);
    lines
}
