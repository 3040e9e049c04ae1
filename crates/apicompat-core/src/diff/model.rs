//! Compatibility report types.
//!
//! [`DiffReport`] serializes to the stable report shape consumed by
//! downstream tooling; its field order is part of that contract.

use serde::{Deserialize, Serialize};

/// Classification of a single change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Existing callers may fail against the new contract
    Breaking,
    NonBreaking,
}

/// One classified difference between two contracts.
///
/// `category` scopes the change to an endpoint section, e.g.
/// `[Params] GET /users/{id}`; endpoint-level changes have none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Change {
    pub kind: ChangeKind,
    pub category: Option<String>,
    pub description: String,
}

impl Change {
    pub fn breaking(category: Option<&str>, description: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::Breaking,
            category: category.map(str::to_string),
            description: description.into(),
        }
    }

    pub fn non_breaking(category: Option<&str>, description: impl Into<String>) -> Self {
        Self {
            kind: ChangeKind::NonBreaking,
            category: category.map(str::to_string),
            description: description.into(),
        }
    }

    pub fn is_breaking(&self) -> bool {
        self.kind == ChangeKind::Breaking
    }

    /// Report line: `"<category> <description>"`, or the bare description
    pub fn text(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {}", category, self.description),
            None => self.description.clone(),
        }
    }
}

/// Counts over a report.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffSummary {
    pub breaking: usize,
    pub non_breaking: usize,
    pub removed_endpoints: usize,
    pub added_endpoints: usize,
}

/// Result of comparing an old contract with a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffReport {
    /// Breaking change lines, in emission order
    pub breaking: Vec<String>,
    /// Non-breaking change lines, in emission order
    pub non_breaking: Vec<String>,
    /// Informational lines; empty under the shipped policy
    pub notes: Vec<String>,
    pub summary: DiffSummary,
    /// Sorted endpoint keys only in the new contract
    pub added_endpoints: Vec<String>,
    /// Sorted endpoint keys only in the old contract
    pub removed_endpoints: Vec<String>,
}

impl DiffReport {
    /// Assemble a report, splitting changes by kind while keeping their order
    pub fn from_changes(
        changes: &[Change],
        added_endpoints: Vec<String>,
        removed_endpoints: Vec<String>,
    ) -> Self {
        let (breaking, non_breaking): (Vec<&Change>, Vec<&Change>) =
            changes.iter().partition(|c| c.is_breaking());
        let breaking: Vec<String> = breaking.into_iter().map(Change::text).collect();
        let non_breaking: Vec<String> = non_breaking.into_iter().map(Change::text).collect();

        Self {
            summary: DiffSummary {
                breaking: breaking.len(),
                non_breaking: non_breaking.len(),
                removed_endpoints: removed_endpoints.len(),
                added_endpoints: added_endpoints.len(),
            },
            breaking,
            non_breaking,
            notes: Vec::new(),
            added_endpoints,
            removed_endpoints,
        }
    }

    /// No breaking changes
    pub fn is_compatible(&self) -> bool {
        self.breaking.is_empty()
    }

    /// No changes of any kind
    pub fn is_empty(&self) -> bool {
        self.breaking.is_empty() && self.non_breaking.is_empty()
    }
}
