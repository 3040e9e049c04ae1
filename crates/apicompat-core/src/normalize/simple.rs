//! Simplified contract documents (`{"apis": [...]}`)
//!
//! Both input shapes are first read into a [`SimplifiedContract`]; the
//! normalizer then flattens every entry into an [`Endpoint`].

use crate::errors::ContractError;
use crate::model::endpoint::endpoint_key;
use crate::model::{param_key, Endpoint, Field, NormalizedContract, ParamScope};
use crate::normalize::flatten::flatten_schema;
use crate::normalize::schema::{SchemaNode, SchemaReducer};
use crate::normalize::{is_truthy, value_to_string};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// One declared parameter before it is keyed into a `FieldMap`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    #[serde(rename = "in")]
    pub location: String,
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub required: bool,
}

/// One endpoint in simplified form, schemas already reduced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub method: String,
    pub path: String,
    pub params: Vec<ParamSpec>,
    pub request: Option<SchemaNode>,
    pub responses: BTreeMap<String, SchemaNode>,
}

impl ApiEntry {
    /// Flatten into an endpoint
    ///
    /// Parameters are keyed `"<scope>.<name>"`; a later declaration with the
    /// same key replaces an earlier one.
    pub fn to_endpoint(&self) -> Endpoint {
        let mut endpoint = Endpoint::new(&self.method, self.path.clone());
        if let Some(name) = &self.name {
            endpoint.name = name.clone();
        }
        for param in &self.params {
            let key = param_key(&ParamScope::parse(&param.location), &param.name);
            endpoint
                .params
                .insert(key, Field::new(param.param_type.as_str(), param.required));
        }
        if let Some(request) = &self.request {
            endpoint.request = flatten_schema(request, "");
        }
        endpoint.responses = self
            .responses
            .iter()
            .map(|(code, schema)| (code.clone(), flatten_schema(schema, "")))
            .collect();
        endpoint
    }
}

/// A whole contract in simplified form; serializes to `{"apis": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimplifiedContract {
    pub apis: Vec<ApiEntry>,
}

impl SimplifiedContract {
    /// Flatten every entry; later entries with the same key win
    pub fn to_contract(&self) -> NormalizedContract {
        self.apis.iter().map(ApiEntry::to_endpoint).collect()
    }
}

/// Parameter lists read from a simplified entry, with the scope each forces
const PARAM_LISTS: [(&str, Option<&str>); 4] = [
    ("params", None),
    ("query", Some("query")),
    ("headers", Some("header")),
    ("pathParams", Some("path")),
];

/// Read a document that carries an `apis` array
///
/// Entries that are not objects, or lack `method` or `path`, are skipped.
///
/// # Errors
///
/// `InvalidContract` when `apis` is missing or not an array.
pub fn parse_simplified<'a>(
    doc: &'a Value,
    reducer: &mut SchemaReducer<'a>,
) -> Result<SimplifiedContract, ContractError> {
    let apis = doc
        .get("apis")
        .and_then(Value::as_array)
        .ok_or_else(|| ContractError::InvalidContract {
            message: "Root object should contain 'apis' list (or provide OpenAPI JSON)"
                .to_string(),
        })?;

    let mut contract = SimplifiedContract::default();
    for (index, api) in apis.iter().enumerate() {
        match parse_entry(api, reducer) {
            Some(entry) => contract.apis.push(entry),
            None => tracing::debug!(index, "skipping api entry without method or path"),
        }
    }
    Ok(contract)
}

fn parse_entry<'a>(api: &'a Value, reducer: &mut SchemaReducer<'a>) -> Option<ApiEntry> {
    let obj = api.as_object()?;
    let method = value_to_string(obj.get("method")).to_uppercase();
    let path = value_to_string(obj.get("path"));
    if method.is_empty() || path.is_empty() {
        return None;
    }
    let key = endpoint_key(&method, &path);

    let mut params = Vec::new();
    for (list, forced_scope) in PARAM_LISTS {
        let Some(items) = obj.get(list).and_then(Value::as_array) else {
            continue;
        };
        for item in items {
            if let Some(param) = parse_param(item, forced_scope) {
                params.push(param);
            }
        }
    }

    let request = match obj.get("request") {
        Some(schema) if is_truthy(schema) => {
            reducer.set_context(format!("{} request body", key));
            Some(reducer.reduce(schema))
        }
        _ => None,
    };

    let mut responses = BTreeMap::new();
    if let Some(declared) = obj.get("responses").and_then(Value::as_object) {
        for (code, schema) in declared {
            reducer.set_context(format!("{} response {}", key, code));
            let node = if is_truthy(schema) {
                reducer.reduce(schema)
            } else {
                SchemaNode::Unknown
            };
            responses.insert(code.clone(), node);
        }
    }

    Some(ApiEntry {
        name: obj.get("name").and_then(Value::as_str).map(str::to_string),
        method,
        path,
        params,
        request,
        responses,
    })
}

fn parse_param(item: &Value, forced_scope: Option<&str>) -> Option<ParamSpec> {
    let name = value_to_string(item.get("name"));
    if name.is_empty() {
        return None;
    }
    let location = match forced_scope {
        Some(scope) => scope.to_string(),
        None => match item.get("in") {
            Some(v) if !v.is_null() => value_to_string(Some(v)),
            _ => "query".to_string(),
        },
    };
    let param_type = match item.get("type") {
        Some(v) if !v.is_null() => value_to_string(Some(v)),
        _ => "string".to_string(),
    };
    Some(ParamSpec {
        location,
        name,
        param_type,
        required: item.get("required").is_some_and(is_truthy),
    })
}
