//! Compatibility Comparator.
//!
//! Compares two [`NormalizedContract`](crate::model::NormalizedContract)s and
//! produces a [`DiffReport`] of breaking and non-breaking changes.
//!
//! ```
//! use apicompat_core::diff::{compare_contracts, render_text};
//! use apicompat_core::model::NormalizedContract;
//! use apicompat_core::policy::CompatibilityPolicy;
//!
//! let old = NormalizedContract::new();
//! let report = compare_contracts(&old, &old.clone(), &CompatibilityPolicy::default());
//! assert!(report.is_compatible());
//! assert!(render_text(&report).starts_with("API Contract Diff Results"));
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical reports.
//! - **Totality**: comparison never fails; every difference is classified.

pub mod engine;
pub mod model;
pub mod render;

pub use engine::{compare_contracts, diff_field_maps, is_non_breaking_widen};
pub use model::{Change, ChangeKind, DiffReport, DiffSummary};
pub use render::{render, render_json, render_markdown, render_text, ReportFormat};
