//! Document and policy loading.

#![allow(clippy::result_large_err)]

use apicompat_core::errors::{ContractError, ExError};
use apicompat_core::policy::{CompatibilityPolicy, PolicyOverrides};
use apicompat_core::{log_op_end, log_op_error, log_op_start};
use apicompat_core_types::RequestContext;
use serde_json::Value;
use std::path::Path;

/// Parse contract text into a raw document
///
/// # Errors
///
/// `InvalidJson` when the text is not JSON.
pub fn load_document_str(text: &str) -> Result<Value, ExError> {
    serde_json::from_str(text).map_err(|e| {
        ExError::from(ContractError::InvalidJson {
            message: e.to_string(),
        })
        .with_op("load_document_str")
    })
}

/// Read and parse a contract file
///
/// # Errors
///
/// - `Io`: the file could not be read
/// - `InvalidJson`: the file is not JSON
pub fn load_document_file(path: &Path, ctx: &RequestContext) -> Result<Value, ExError> {
    log_op_start!(
        "load_document_file",
        request_id = %ctx.request_id,
        path = %path.display()
    );
    let start = std::time::Instant::now();

    let result = read_to_string(path)
        .and_then(|text| load_document_str(&text).map_err(|e| e.with_path(path_str(path))))
        .map_err(|e| {
            let e = e.with_request_id(ctx.request_id.clone());
            log_op_error!(
                "load_document_file",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e
        })?;

    log_op_end!(
        "load_document_file",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id
    );

    Ok(result)
}

/// Parse policy overrides from TOML text onto the default policy
///
/// Keys left out keep their default value; unknown keys are rejected.
///
/// # Errors
///
/// `InvalidPolicy` when the text is not valid TOML or has unknown keys.
pub fn load_policy_str(text: &str) -> Result<CompatibilityPolicy, ExError> {
    let overrides: PolicyOverrides = toml::from_str(text).map_err(|e| {
        ExError::from(ContractError::InvalidPolicy {
            message: e.to_string().trim_end().to_string(),
        })
        .with_op("load_policy_str")
    })?;
    Ok(CompatibilityPolicy::default().with_overrides(&overrides))
}

/// Read a TOML policy file
///
/// # Errors
///
/// - `Io`: the file could not be read
/// - `InvalidPolicy`: the file does not parse
pub fn load_policy_file(
    path: &Path,
    ctx: &RequestContext,
) -> Result<CompatibilityPolicy, ExError> {
    log_op_start!(
        "load_policy_file",
        request_id = %ctx.request_id,
        path = %path.display()
    );
    let start = std::time::Instant::now();

    let policy = read_to_string(path)
        .and_then(|text| load_policy_str(&text).map_err(|e| e.with_path(path_str(path))))
        .map_err(|e| {
            let e = e.with_request_id(ctx.request_id.clone());
            log_op_error!(
                "load_policy_file",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = %ctx.request_id
            );
            e
        })?;

    log_op_end!(
        "load_policy_file",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id
    );

    Ok(policy)
}

fn read_to_string(path: &Path) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::from(ContractError::Io {
            path: path_str(path),
            message: e.to_string(),
        })
    })
}

fn path_str(path: &Path) -> String {
    path.display().to_string()
}
