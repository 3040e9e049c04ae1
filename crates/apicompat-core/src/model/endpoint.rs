use crate::model::field::FieldMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `(method, path)` operation of a contract, with its schemas flattened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// `operationId` / declared name, or the endpoint key when absent
    pub name: String,
    /// Upper-cased HTTP verb
    pub method: String,
    pub path: String,
    /// Parameters keyed by `"<scope>.<name>"`
    pub params: FieldMap,
    /// Flattened request body
    pub request: FieldMap,
    /// Flattened response bodies keyed by status code
    pub responses: BTreeMap<String, FieldMap>,
}

impl Endpoint {
    /// Create an endpoint with empty field maps; `method` is upper-cased
    pub fn new(method: &str, path: impl Into<String>) -> Self {
        let method = method.to_uppercase();
        let path = path.into();
        Self {
            name: endpoint_key(&method, &path),
            method,
            path,
            params: FieldMap::new(),
            request: FieldMap::new(),
            responses: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Identity key `"<METHOD> <path>"`
    pub fn key(&self) -> String {
        endpoint_key(&self.method, &self.path)
    }
}

/// Identity key for an endpoint
pub fn endpoint_key(method: &str, path: &str) -> String {
    format!("{} {}", method, path)
}
