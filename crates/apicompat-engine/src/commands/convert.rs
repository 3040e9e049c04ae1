//! Conversion of a contract file to simplified form.

#![allow(clippy::result_large_err)]

use crate::commands::load::load_document_file;
use apicompat_core::errors::ExError;
use apicompat_core::normalize::{convert_document, Converted};
use apicompat_core::{log_op_end, log_op_error, log_op_start};
use apicompat_core_types::RequestContext;
use std::path::Path;

/// Read a contract file of either shape and convert it to simplified form
///
/// # Errors
///
/// - `Io`: the file could not be read
/// - `InvalidJson`: the file is not JSON
/// - `InvalidContract`: the document has neither shape
pub fn convert_file(path: &Path, ctx: &RequestContext) -> Result<Converted, ExError> {
    log_op_start!(
        "convert_file",
        request_id = %ctx.request_id,
        path = %path.display()
    );
    let start = std::time::Instant::now();

    let converted = load_document_file(path, ctx)
        .and_then(|doc| {
            convert_document(&doc).map_err(|e| {
                e.with_path(path.display().to_string())
                    .with_request_id(ctx.request_id.clone())
            })
        })
        .map_err(|e| {
            log_op_error!(
                "convert_file",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e
        })?;

    log_op_end!(
        "convert_file",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        document_kind = converted.kind.as_str(),
        endpoint_count = converted.contract.apis.len(),
        warning_count = converted.warnings.len()
    );

    Ok(converted)
}
