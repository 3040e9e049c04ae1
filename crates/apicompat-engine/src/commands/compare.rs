//! Contract comparison with boundary logging.
//!
//! Normalizes both sides, compares them under a policy, and returns the
//! report together with the normalization warnings of each side.

#![allow(clippy::result_large_err)]

use crate::commands::load::load_document_file;
use apicompat_core::diff::{compare_contracts, DiffReport};
use apicompat_core::errors::ExError;
use apicompat_core::normalize::{normalize_document, Normalized, NormalizeWarning};
use apicompat_core::policy::CompatibilityPolicy;
use apicompat_core::{log_op_end, log_op_error, log_op_start};
use apicompat_core_types::RequestContext;
use serde_json::Value;
use std::path::Path;

/// Outcome of one comparison run
#[derive(Debug, Clone)]
pub struct Comparison {
    pub report: DiffReport,
    pub old_warnings: Vec<NormalizeWarning>,
    pub new_warnings: Vec<NormalizeWarning>,
    /// Digest of the normalized old contract
    pub old_digest: String,
    /// Digest of the normalized new contract
    pub new_digest: String,
}

impl Comparison {
    /// All warnings, old side first, each labelled with its side
    pub fn labelled_warnings(&self) -> impl Iterator<Item = (&'static str, &NormalizeWarning)> {
        self.old_warnings
            .iter()
            .map(|w| ("old", w))
            .chain(self.new_warnings.iter().map(|w| ("new", w)))
    }

    /// Identical normalized contracts
    pub fn is_unchanged(&self) -> bool {
        self.old_digest == self.new_digest
    }
}

/// Compare two parsed documents
///
/// # Errors
///
/// `InvalidContract` when either document is neither a simplified contract
/// nor an interface-description document. Nothing is compared in that case.
pub fn compare_documents(
    old: &Value,
    new: &Value,
    policy: &CompatibilityPolicy,
    ctx: &RequestContext,
) -> Result<Comparison, ExError> {
    log_op_start!("compare_documents", request_id = %ctx.request_id);
    let start = std::time::Instant::now();

    let comparison = compare_impl(old, new, policy, ctx).map_err(|e| {
        log_op_error!(
            "compare_documents",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = %ctx.request_id
        );
        e
    })?;

    log_op_end!(
        "compare_documents",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        breaking_count = comparison.report.summary.breaking,
        non_breaking_count = comparison.report.summary.non_breaking,
        warning_count = comparison.old_warnings.len() + comparison.new_warnings.len()
    );

    Ok(comparison)
}

/// Read, parse and compare two contract files
///
/// # Errors
///
/// - `Io`: a file could not be read
/// - `InvalidJson`: a file is not JSON
/// - `InvalidContract`: a document has neither shape
pub fn compare_files(
    old_path: &Path,
    new_path: &Path,
    policy: &CompatibilityPolicy,
    ctx: &RequestContext,
) -> Result<Comparison, ExError> {
    log_op_start!(
        "compare_files",
        request_id = %ctx.request_id,
        old = %old_path.display(),
        new = %new_path.display()
    );
    let start = std::time::Instant::now();

    let result = load_document_file(old_path, ctx)
        .and_then(|old| Ok((old, load_document_file(new_path, ctx)?)))
        .and_then(|(old, new)| compare_documents(&old, &new, policy, ctx))
        .map_err(|e| {
            log_op_error!(
                "compare_files",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e
        })?;

    log_op_end!(
        "compare_files",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id
    );

    Ok(result)
}

fn compare_impl(
    old: &Value,
    new: &Value,
    policy: &CompatibilityPolicy,
    ctx: &RequestContext,
) -> Result<Comparison, ExError> {
    let (old, old_digest) = normalize_side(old, "old", ctx)?;
    let (new, new_digest) = normalize_side(new, "new", ctx)?;

    let report = compare_contracts(&old.contract, &new.contract, policy);

    Ok(Comparison {
        report,
        old_digest,
        new_digest,
        old_warnings: old.warnings,
        new_warnings: new.warnings,
    })
}

/// Normalize one side and return it with its contract digest
fn normalize_side(
    doc: &Value,
    side: &str,
    ctx: &RequestContext,
) -> Result<(Normalized, String), ExError> {
    let normalized = normalize_document(doc).map_err(|e| {
        let message = format!("{} contract: {}", side, e.message());
        e.with_message(message).with_request_id(ctx.request_id.clone())
    })?;
    let digest = normalized.contract.digest();

    tracing::debug!(
        request_id = %ctx.request_id,
        side,
        document_kind = normalized.kind.as_str(),
        contract_digest = %digest,
        endpoint_count = normalized.contract.len(),
        warning_count = normalized.warnings.len(),
        "normalized contract"
    );

    Ok((normalized, digest))
}
