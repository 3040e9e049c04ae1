//! apicompat engine: orchestration layer
//!
//! Loads contract documents and policy files, runs the normalizer and the
//! comparator from `apicompat-core`, and owns the operation boundary logging
//! for every call.

pub mod commands;

pub use commands::compare::{compare_documents, compare_files, Comparison};
pub use commands::convert::convert_file;
pub use commands::load::{load_document_file, load_document_str, load_policy_file};
