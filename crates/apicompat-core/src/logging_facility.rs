//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`) used by
//!   the engine layer around each load/normalize/compare operation
//! - Test capture mode for asserting on emitted events
//!
//! The kernel itself (normalizer, comparator, renderers) only emits
//! `tracing::debug!` and `tracing::warn!`; operation boundaries belong to the
//! caller.
//!
//! ```rust
//! use apicompat_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
