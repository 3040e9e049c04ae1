//! apicompat core: contract normalization and compatibility comparison
//!
//! This crate is the pure kernel of the workspace:
//! - [`normalize`]: reads a simplified contract or an interface-description
//!   (OpenAPI subset) document into a [`NormalizedContract`]
//! - [`diff`]: compares two normalized contracts into a [`DiffReport`] and
//!   renders it as text, Markdown or JSON
//! - [`policy`]: which changes count as breaking, per category
//! - [`errors`] and [`logging_facility`]: the shared error and logging stack
//!
//! Nothing here performs I/O; loading files and owning operation boundaries
//! is the engine's job.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod policy;

pub use apicompat_core_types as core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use diff::{compare_contracts, DiffReport, ReportFormat};
pub use errors::{ContractError, ExError, ExErrorKind, Result};
pub use model::{Endpoint, Field, FieldMap, NormalizedContract};
pub use normalize::{normalize_document, Normalized, NormalizeWarning};
pub use policy::CompatibilityPolicy;
