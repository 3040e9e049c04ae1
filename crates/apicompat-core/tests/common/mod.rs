use apicompat_core::diff::{compare_contracts, DiffReport};
use apicompat_core::normalize::normalize_document;
use apicompat_core::policy::CompatibilityPolicy;
use apicompat_core::NormalizedContract;
use serde_json::{json, Value};

/// Normalize a document that is expected to be valid
#[allow(dead_code)]
pub fn normalize(doc: &Value) -> NormalizedContract {
    normalize_document(doc)
        .expect("document should normalize")
        .contract
}

/// Normalize both documents and compare them under the default policy
#[allow(dead_code)]
pub fn compare_docs(old: &Value, new: &Value) -> DiffReport {
    compare_contracts(
        &normalize(old),
        &normalize(new),
        &CompatibilityPolicy::default(),
    )
}

/// Simplified contract with one endpoint
#[allow(dead_code)]
pub fn single_api(api: Value) -> Value {
    json!({ "apis": [api] })
}
