//! Failure records and the grouping paths derived from them.
//!
//! Records arrive from the report generator as a JSON array and are
//! validated at load time. Each record yields one path per grouping: by
//! message (message, then trace) and by task (reversed trace, then error or
//! message).

mod node;
mod paths;
mod record;

pub use node::FailureNode;
pub use paths::{paths_by_message, paths_by_task};
pub use record::{load_failures, FailureRecord, InputError, InputSource, LoadedFailures};
