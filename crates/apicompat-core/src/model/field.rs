use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type name used when a field's type cannot be determined
pub const ANY_TYPE: &str = "any";

/// A single flattened leaf: its type name and whether it is required
///
/// `type` is one of `string`, `number`, `integer`, `boolean`, `object`,
/// `array<T>` or `any`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

impl Field {
    pub fn new(field_type: impl Into<String>, required: bool) -> Self {
        Self {
            field_type: field_type.into(),
            required,
        }
    }

    /// Build the `array<T>` type name for an array whose items are `item_type`
    pub fn array_of(item_type: &str, required: bool) -> Self {
        Self::new(format!("array<{}>", item_type), required)
    }
}

/// Field path -> field. Paths use `.` for object nesting and `[]` for array
/// elements (`items[]`, `items[].sku`).
pub type FieldMap = BTreeMap<String, Field>;

/// Where a parameter lives in the request
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamScope {
    Path,
    Query,
    Header,
    /// Any other location named by a contract (e.g. `cookie`), kept verbatim
    Other(String),
}

impl ParamScope {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "path" => ParamScope::Path,
            "query" => ParamScope::Query,
            "header" => ParamScope::Header,
            other => ParamScope::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ParamScope::Path => "path",
            ParamScope::Query => "query",
            ParamScope::Header => "header",
            ParamScope::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for ParamScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map key for a parameter: `"<scope>.<name>"`
pub fn param_key(scope: &ParamScope, name: &str) -> String {
    format!("{}.{}", scope, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_key_uses_scope_prefix() {
        assert_eq!(param_key(&ParamScope::Query, "page"), "query.page");
        assert_eq!(param_key(&ParamScope::Header, "X-Token"), "header.X-Token");
        assert_eq!(
            param_key(&ParamScope::parse("cookie"), "session"),
            "cookie.session"
        );
    }

    #[test]
    fn test_scope_parse_round_trips_known_scopes() {
        for raw in ["path", "query", "header"] {
            assert_eq!(ParamScope::parse(raw).as_str(), raw);
        }
        assert!(matches!(ParamScope::parse("cookie"), ParamScope::Other(_)));
    }

    #[test]
    fn test_field_serializes_type_key() {
        let json = serde_json::to_value(Field::array_of("string", true)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "array<string>", "required": true}));
    }
}
