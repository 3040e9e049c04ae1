//! Command orchestration layer.
//!
//! ## Logging Ownership
//!
//! Every public function here emits `log_op_start!` on entry and exactly one
//! of `log_op_end!` / `log_op_error!` on exit, tagged with the caller's
//! request id. Core only logs at debug and warn level.

pub mod compare;
pub mod convert;
pub mod load;
