//! Local `$ref` resolution (`#/...` only)

use serde_json::{Map, Value};

/// Resolve a local reference against the document root
///
/// Only references starting with `#/` are supported. Each segment is looked
/// up from the root through objects only; `~1` and `~0` escapes are decoded.
/// Returns `None` when the reference is external, a segment is missing, or
/// the walk reaches a non-object.
pub fn resolve_ref<'a>(root: &'a Value, reference: &str) -> Option<&'a Map<String, Value>> {
    let pointer = reference.strip_prefix("#/")?;
    let mut node = root.as_object()?;
    for raw in pointer.split('/') {
        let segment = raw.replace("~1", "/").replace("~0", "~");
        node = node.get(&segment)?.as_object()?;
    }
    Some(node)
}
