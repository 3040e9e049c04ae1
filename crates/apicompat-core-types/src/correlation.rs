//! Correlation of log events and errors to one comparison run.
//!
//! The CLI builds one [`RequestContext`] per invocation. Every boundary event
//! and every [`RequestId`]-tagged error raised while serving it share the
//! same id, so a CI log can be filtered down to a single check.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a single comparison run
///
/// Fresh ids are UUIDv7, so they sort by creation time. Ids handed in from
/// outside (a CI job id, say) are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for RequestId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-run context passed to every engine operation
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub request_id: RequestId,
}

impl RequestContext {
    /// Context with a freshly generated id
    pub fn new() -> Self {
        Self::default()
    }

    /// Context reusing an id supplied by the caller
    pub fn with_request_id(request_id: impl Into<RequestId>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}
