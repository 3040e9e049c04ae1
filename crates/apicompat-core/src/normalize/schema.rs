//! Schema reduction
//!
//! Turns a raw JSON schema fragment (interface-description or simplified
//! contract form) into a [`SchemaNode`], resolving local `$ref`s and
//! shallow-merging `allOf` on the way.

use crate::normalize::refs::resolve_ref;
use crate::normalize::warning::{NormalizeWarning, WarningKind};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Type names kept as-is by the reducer
pub const ATOMIC_TYPES: [&str; 4] = ["string", "number", "integer", "boolean"];

/// A reduced schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    Object {
        properties: BTreeMap<String, SchemaNode>,
        required: BTreeSet<String>,
    },
    Array {
        items: Box<SchemaNode>,
    },
    Atomic {
        name: String,
    },
    /// Type absent or unsupported
    Unknown,
}

impl SchemaNode {
    pub fn atomic(name: impl Into<String>) -> Self {
        SchemaNode::Atomic { name: name.into() }
    }

    /// Object with no properties; what an unusable `$ref` degrades to
    pub fn empty_object() -> Self {
        SchemaNode::Object {
            properties: BTreeMap::new(),
            required: BTreeSet::new(),
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array {
            items: Box::new(items),
        }
    }

    /// Type name used when this node is the item of a scalar array
    pub fn item_type_name(&self) -> &str {
        match self {
            SchemaNode::Object { .. } => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::Atomic { name } => name,
            SchemaNode::Unknown => crate::model::field::ANY_TYPE,
        }
    }
}

/// Serializes back into the simplified-contract schema shape
/// (`type`, `properties`, `required`, `items`). `Unknown` becomes `{}`.
impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SchemaNode::Object {
                properties,
                required,
            } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "object")?;
                if !properties.is_empty() {
                    map.serialize_entry("properties", properties)?;
                }
                if !required.is_empty() {
                    map.serialize_entry("required", required)?;
                }
                map.end()
            }
            SchemaNode::Array { items } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("items", items)?;
                map.end()
            }
            SchemaNode::Atomic { name } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("type", name)?;
                map.end()
            }
            SchemaNode::Unknown => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Reduces schema fragments of one document, collecting warnings
///
/// References are resolved against `root`. The reducer keeps the chain of
/// references currently being expanded so that self-referencing schemas
/// terminate instead of recursing forever.
pub struct SchemaReducer<'a> {
    root: &'a Value,
    active: Vec<String>,
    context: String,
    warnings: Vec<NormalizeWarning>,
}

impl<'a> SchemaReducer<'a> {
    pub fn new(root: &'a Value) -> Self {
        Self {
            root,
            active: Vec::new(),
            context: String::new(),
            warnings: Vec::new(),
        }
    }

    /// Label attached to warnings raised from now on
    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn warnings(&self) -> &[NormalizeWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<NormalizeWarning> {
        self.warnings
    }

    fn warn(&mut self, kind: WarningKind, reference: String) {
        tracing::debug!(
            reference = %reference,
            context = %self.context,
            ?kind,
            "degrading $ref to empty schema"
        );
        self.warnings.push(NormalizeWarning {
            kind,
            reference,
            context: self.context.clone(),
        });
    }

    /// Follow `$ref` chains on a non-schema object (parameter, request body,
    /// response). `None` means the chain could not be resolved.
    pub fn deref_object(&mut self, obj: &'a Map<String, Value>) -> Option<&'a Map<String, Value>> {
        let mut current = obj;
        let mut seen: Vec<String> = Vec::new();
        while let Some(reference) = current.get("$ref") {
            let Some(reference) = reference.as_str() else {
                self.warn(WarningKind::UnresolvedRef, reference.to_string());
                return None;
            };
            if seen.iter().any(|r| r == reference) {
                self.warn(WarningKind::RecursiveRef, reference.to_string());
                return None;
            }
            match resolve_ref(self.root, reference) {
                Some(target) => {
                    seen.push(reference.to_string());
                    current = target;
                }
                None => {
                    self.warn(WarningKind::UnresolvedRef, reference.to_string());
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Reduce any JSON value; non-objects reduce to `Unknown`
    pub fn reduce(&mut self, schema: &'a Value) -> SchemaNode {
        match schema.as_object() {
            Some(obj) => self.reduce_object(obj),
            None => SchemaNode::Unknown,
        }
    }

    fn reduce_object(&mut self, schema: &'a Map<String, Value>) -> SchemaNode {
        if let Some(reference) = schema.get("$ref") {
            return self.reduce_ref(reference);
        }

        if let Some(Value::Array(parts)) = schema.get("allOf") {
            return self.merge_all_of(parts);
        }

        let type_name = schema.get("type").and_then(Value::as_str);
        let object_shaped = type_name == Some("object")
            || schema.contains_key("properties")
            || schema.contains_key("required");

        if object_shaped {
            let properties = match schema.get("properties").and_then(Value::as_object) {
                Some(props) => props
                    .iter()
                    .map(|(name, sub)| (name.clone(), self.reduce(sub)))
                    .collect(),
                None => BTreeMap::new(),
            };
            return SchemaNode::Object {
                properties,
                required: required_names(schema),
            };
        }

        match type_name {
            Some("array") => {
                let items = schema
                    .get("items")
                    .map(|items| self.reduce(items))
                    .unwrap_or(SchemaNode::Unknown);
                SchemaNode::array(items)
            }
            Some(name) if ATOMIC_TYPES.contains(&name) => SchemaNode::atomic(name),
            _ => SchemaNode::Unknown,
        }
    }

    /// An unresolvable or re-entered reference becomes an empty object, so it
    /// contributes no fields
    fn reduce_ref(&mut self, reference: &'a Value) -> SchemaNode {
        let Some(reference) = reference.as_str() else {
            self.warn(WarningKind::UnresolvedRef, reference.to_string());
            return SchemaNode::empty_object();
        };
        if self.active.iter().any(|r| r == reference) {
            self.warn(WarningKind::RecursiveRef, reference.to_string());
            return SchemaNode::empty_object();
        }
        let Some(target) = resolve_ref(self.root, reference) else {
            self.warn(WarningKind::UnresolvedRef, reference.to_string());
            return SchemaNode::empty_object();
        };

        self.active.push(reference.to_string());
        let node = self.reduce_object(target);
        self.active.pop();
        node
    }

    /// Shallow merge: properties of later parts overwrite earlier ones,
    /// required names are unioned. Non-object parts contribute nothing.
    fn merge_all_of(&mut self, parts: &'a [Value]) -> SchemaNode {
        let mut properties = BTreeMap::new();
        let mut required = BTreeSet::new();
        for part in parts {
            if let SchemaNode::Object {
                properties: part_props,
                required: part_required,
            } = self.reduce(part)
            {
                properties.extend(part_props);
                required.extend(part_required);
            }
        }
        SchemaNode::Object {
            properties,
            required,
        }
    }
}

fn required_names(schema: &Map<String, Value>) -> BTreeSet<String> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| {
            names
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Reduce a single schema against `root`, returning the node and any warnings
pub fn reduce_schema(root: &Value, schema: &Value) -> (SchemaNode, Vec<NormalizeWarning>) {
    let mut reducer = SchemaReducer::new(root);
    let node = reducer.reduce(schema);
    (node, reducer.into_warnings())
}
