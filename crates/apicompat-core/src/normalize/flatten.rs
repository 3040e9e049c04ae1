//! Flattening reduced schemas into field paths
//!
//! Objects contribute `parent.child` paths, arrays contribute a `[]`
//! segment. Arrays of objects are flattened through (`items[].sku`); arrays
//! of anything else become a single `array<T>` leaf (`tags[]`).

use crate::model::field::{Field, FieldMap};
use crate::normalize::schema::SchemaNode;
use std::collections::{BTreeMap, BTreeSet};

/// Flatten a reduced schema under `prefix` (empty for a top-level body)
///
/// - object: one entry per leaf property, `required` taken from the parent
/// - array at the top level: `<prefix>[]`, never required
/// - atomic at the top level: `<prefix>` or `value`, never required
/// - unknown (anywhere): no entries, as for an empty object
pub fn flatten_schema(node: &SchemaNode, prefix: &str) -> FieldMap {
    let mut out = FieldMap::new();
    match node {
        SchemaNode::Object {
            properties,
            required,
        } => flatten_object(properties, required, prefix, &mut out),
        SchemaNode::Array { items } => {
            let path = format!("{}[]", prefix.trim_end_matches('.'));
            flatten_array(items, path, false, &mut out);
        }
        SchemaNode::Atomic { name } => {
            let path = if prefix.is_empty() { "value" } else { prefix };
            out.insert(path.to_string(), Field::new(name.as_str(), false));
        }
        SchemaNode::Unknown => {}
    }
    out
}

fn flatten_object(
    properties: &BTreeMap<String, SchemaNode>,
    required: &BTreeSet<String>,
    prefix: &str,
    out: &mut FieldMap,
) {
    for (name, sub) in properties {
        let is_required = required.contains(name);
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match sub {
            SchemaNode::Object { .. } => out.extend(flatten_schema(sub, &path)),
            SchemaNode::Array { items } => {
                flatten_array(items, format!("{}[]", path), is_required, out)
            }
            SchemaNode::Atomic { name: type_name } => {
                out.insert(path, Field::new(type_name.as_str(), is_required));
            }
            // Treated as an empty object: no fields
            SchemaNode::Unknown => {}
        }
    }
}

fn flatten_array(items: &SchemaNode, path: String, required: bool, out: &mut FieldMap) {
    match items {
        SchemaNode::Object { .. } => out.extend(flatten_schema(items, &path)),
        other => {
            out.insert(path, Field::array_of(other.item_type_name(), required));
        }
    }
}
