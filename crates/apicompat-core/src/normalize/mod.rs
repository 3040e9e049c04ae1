//! Schema Normalizer
//!
//! Turns a parsed contract document into a [`NormalizedContract`]. Two input
//! shapes are accepted:
//!
//! - a simplified contract, an object with an `apis` array
//! - an interface-description document (OpenAPI subset), an object with
//!   `paths`
//!
//! Interface-description documents are first converted to the simplified
//! form, then both go through the same flattening. Unresolvable `$ref`s never
//! fail normalization; they degrade to an empty schema and are reported as
//! [`NormalizeWarning`]s next to the contract.

pub mod flatten;
pub mod openapi;
pub mod refs;
pub mod schema;
pub mod simple;
pub mod warning;

pub use flatten::flatten_schema;
pub use openapi::openapi_to_simple;
pub use refs::resolve_ref;
pub use schema::{reduce_schema, SchemaNode, SchemaReducer};
pub use simple::{parse_simplified, ApiEntry, ParamSpec, SimplifiedContract};
pub use warning::{NormalizeWarning, WarningKind};

use crate::errors::{ContractError, ExError};
use crate::model::NormalizedContract;
use serde::Serialize;
use serde_json::Value;

/// Which input shape a document was read as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    OpenApi,
    Simplified,
}

impl DocumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::OpenApi => "openapi",
            DocumentKind::Simplified => "simplified",
        }
    }
}

/// Output of a successful normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub kind: DocumentKind,
    pub contract: NormalizedContract,
    pub warnings: Vec<NormalizeWarning>,
}

/// Output of [`convert_document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub kind: DocumentKind,
    pub contract: SimplifiedContract,
    pub warnings: Vec<NormalizeWarning>,
}

/// True for an object with `paths` that does not also carry an `apis` array
pub fn is_openapi_document(doc: &Value) -> bool {
    let Some(obj) = doc.as_object() else {
        return false;
    };
    obj.contains_key("paths") && !obj.get("apis").is_some_and(Value::is_array)
}

/// Classify a document
///
/// # Errors
///
/// `InvalidContract` when the document is neither shape.
pub fn detect_document_kind(doc: &Value) -> Result<DocumentKind, ContractError> {
    if is_openapi_document(doc) {
        return Ok(DocumentKind::OpenApi);
    }
    if doc.get("apis").is_some_and(Value::is_array) {
        return Ok(DocumentKind::Simplified);
    }
    Err(ContractError::InvalidContract {
        message: "Root object should contain 'apis' list (or provide OpenAPI JSON)".to_string(),
    })
}

/// Read a document of either shape into simplified form
///
/// # Errors
///
/// `InvalidContract` when the document is neither shape or its `paths` is
/// not an object.
pub fn convert_document(doc: &Value) -> Result<Converted, ExError> {
    convert_inner(doc).map_err(|e| ExError::from(e).with_op("convert_document"))
}

fn convert_inner(doc: &Value) -> Result<Converted, ContractError> {
    let kind = detect_document_kind(doc)?;
    let mut reducer = SchemaReducer::new(doc);
    let contract = match kind {
        DocumentKind::OpenApi => openapi_to_simple(doc, &mut reducer)?,
        DocumentKind::Simplified => parse_simplified(doc, &mut reducer)?,
    };
    Ok(Converted {
        kind,
        contract,
        warnings: reducer.into_warnings(),
    })
}

/// Normalize a parsed document
///
/// # Errors
///
/// `InvalidContract` when the document is neither shape. No partial
/// contract is returned.
pub fn normalize_document(doc: &Value) -> Result<Normalized, ExError> {
    let converted =
        convert_inner(doc).map_err(|e| ExError::from(e).with_op("normalize_document"))?;
    let contract = converted.contract.to_contract();

    for warning in &converted.warnings {
        tracing::warn!(kind = ?warning.kind, reference = %warning.reference, "{}", warning);
    }
    tracing::debug!(
        document_kind = converted.kind.as_str(),
        endpoint_count = contract.len(),
        "normalized contract"
    );

    Ok(Normalized {
        kind: converted.kind,
        contract,
        warnings: converted.warnings,
    })
}

/// Loose truthiness: null, false, 0, "", [] and {} are false
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// String form of a scalar; strings are taken verbatim, absent or null is ""
pub(crate) fn value_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
