//! Normalized contract model
//!
//! Every contract, whichever document shape it was read from, ends up as a
//! [`NormalizedContract`]: endpoints keyed by `"<METHOD> <path>"`, each with
//! flattened [`FieldMap`]s for parameters, request body and per-status
//! response bodies.

pub mod contract;
pub mod endpoint;
pub mod field;

pub use contract::NormalizedContract;
pub use endpoint::Endpoint;
pub use field::{param_key, Field, FieldMap, ParamScope};
