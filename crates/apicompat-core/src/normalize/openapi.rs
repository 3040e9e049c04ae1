//! Interface-description (OpenAPI subset) to simplified conversion

use crate::errors::ContractError;
use crate::model::endpoint::endpoint_key;
use crate::normalize::schema::{SchemaNode, SchemaReducer};
use crate::normalize::simple::{ApiEntry, ParamSpec, SimplifiedContract};
use crate::normalize::{is_truthy, value_to_string};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Operation keys read from each path item, in emission order
pub const HTTP_METHODS: [&str; 7] = ["get", "post", "put", "patch", "delete", "options", "head"];

const JSON_MEDIA_TYPE: &str = "application/json";

/// Convert an interface-description document into simplified form
///
/// Only `application/json` bodies are read; a response without one is left
/// out. Parameter lists of the path item and the operation are concatenated
/// without override.
///
/// # Errors
///
/// `InvalidContract` when `paths` is present but is not an object.
pub fn openapi_to_simple<'a>(
    doc: &'a Value,
    reducer: &mut SchemaReducer<'a>,
) -> Result<SimplifiedContract, ContractError> {
    let paths = match doc.get("paths") {
        None | Some(Value::Null) => return Ok(SimplifiedContract::default()),
        Some(Value::Object(paths)) => paths,
        Some(_) => {
            return Err(ContractError::InvalidContract {
                message: "'paths' must be an object".to_string(),
            })
        }
    };

    let mut contract = SimplifiedContract::default();
    for (path, item) in paths {
        let Some(item) = item.as_object() else {
            continue;
        };
        let path_params = param_list(item);

        for method in HTTP_METHODS {
            let Some(op) = item.get(method).and_then(Value::as_object) else {
                continue;
            };
            let verb = method.to_uppercase();
            let key = endpoint_key(&verb, path);

            reducer.set_context(format!("{} parameters", key));
            let params = path_params
                .iter()
                .chain(param_list(op).iter())
                .filter_map(|param| convert_param(param, reducer))
                .collect();

            let request = op
                .get("requestBody")
                .and_then(Value::as_object)
                .and_then(|body| {
                    reducer.set_context(format!("{} request body", key));
                    json_body_schema(body, reducer)
                });

            let mut responses = BTreeMap::new();
            if let Some(declared) = op.get("responses").and_then(Value::as_object) {
                for (code, response) in declared {
                    let Some(response) = response.as_object() else {
                        continue;
                    };
                    reducer.set_context(format!("{} response {}", key, code));
                    if let Some(node) = json_body_schema(response, reducer) {
                        responses.insert(code.clone(), node);
                    }
                }
            }

            let name = op
                .get("operationId")
                .filter(|id| is_truthy(id))
                .map(|id| value_to_string(Some(id)))
                .unwrap_or_else(|| key.clone());

            contract.apis.push(ApiEntry {
                name: Some(name),
                method: verb,
                path: path.clone(),
                params,
                request,
                responses,
            });
        }
    }
    Ok(contract)
}

fn param_list(obj: &Map<String, Value>) -> &[Value] {
    obj.get("parameters")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn convert_param<'a>(param: &'a Value, reducer: &mut SchemaReducer<'a>) -> Option<ParamSpec> {
    let param = reducer.deref_object(param.as_object()?)?;
    let location = value_to_string(param.get("in"));
    let name = value_to_string(param.get("name"));
    if location.is_empty() || name.is_empty() {
        return None;
    }

    let schema = param
        .get("schema")
        .and_then(Value::as_object)
        .and_then(|schema| reducer.deref_object(schema));
    let param_type = schema
        .and_then(|schema| schema.get("type"))
        .filter(|t| is_truthy(t))
        .map(|t| value_to_string(Some(t)))
        .unwrap_or_else(|| "string".to_string());

    Some(ParamSpec {
        location,
        name,
        param_type,
        required: param.get("required").is_some_and(is_truthy),
    })
}

/// `content."application/json".schema` of a request body or response, reduced
fn json_body_schema<'a>(
    holder: &'a Map<String, Value>,
    reducer: &mut SchemaReducer<'a>,
) -> Option<SchemaNode> {
    let holder = reducer.deref_object(holder)?;
    let schema = holder
        .get("content")?
        .get(JSON_MEDIA_TYPE)?
        .get("schema")
        .filter(|schema| schema.is_object())?;
    Some(reducer.reduce(schema))
}
