use serde::Serialize;

/// What went wrong while following a `$ref`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The reference is external, malformed, or points at nothing usable
    UnresolvedRef,
    /// The reference re-enters a schema that is still being reduced
    RecursiveRef,
}

/// A recoverable normalization problem
///
/// The affected fragment is treated as an empty schema; the warning records
/// that this happened so the degradation is visible to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeWarning {
    pub kind: WarningKind,
    pub reference: String,
    /// Which part of the contract was being read, e.g. `GET /users request body`
    pub context: String,
}

impl std::fmt::Display for NormalizeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.kind {
            WarningKind::UnresolvedRef => "unresolved",
            WarningKind::RecursiveRef => "recursive",
        };
        write!(f, "{} $ref '{}'", what, self.reference)?;
        if !self.context.is_empty() {
            write!(f, " in {}", self.context)?;
        }
        f.write_str(" (treated as empty schema)")
    }
}
