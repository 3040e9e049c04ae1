//! Compatibility comparison.
//!
//! The entry point is [`compare_contracts`]. Emission order is fixed:
//!
//! 1. removed endpoints, then added endpoints (each sorted by key)
//! 2. per endpoint present on both sides, in key order: parameters, request
//!    body, then every status code in the sorted union of both sides
//!
//! Within one field map, removed paths come first, then added, then paths
//! present on both sides; each group in sorted path order.

use crate::diff::model::{Change, DiffReport};
use crate::model::{Endpoint, FieldMap, NormalizedContract};
use crate::policy::{CompatibilityPolicy, FieldRules};

/// Compare two normalized contracts under `policy`.
pub fn compare_contracts(
    old: &NormalizedContract,
    new: &NormalizedContract,
    policy: &CompatibilityPolicy,
) -> DiffReport {
    let mut changes = Vec::new();

    let removed: Vec<String> = old
        .keys()
        .filter(|k| !new.contains(k))
        .map(str::to_string)
        .collect();
    let added: Vec<String> = new
        .keys()
        .filter(|k| !old.contains(k))
        .map(str::to_string)
        .collect();

    for key in &removed {
        changes.push(Change::breaking(None, format!("Removed endpoint: {}", key)));
    }
    for key in &added {
        changes.push(Change::non_breaking(None, format!("Added endpoint: {}", key)));
    }

    for (key, old_ep) in old.iter() {
        if let Some(new_ep) = new.get(key) {
            diff_endpoint(&mut changes, key, old_ep, new_ep, policy);
        }
    }

    tracing::debug!(
        change_count = changes.len(),
        removed = removed.len(),
        added = added.len(),
        "compared contracts"
    );

    DiffReport::from_changes(&changes, added, removed)
}

fn diff_endpoint(
    changes: &mut Vec<Change>,
    key: &str,
    old: &Endpoint,
    new: &Endpoint,
    policy: &CompatibilityPolicy,
) {
    diff_field_maps(
        changes,
        &format!("[Params] {}", key),
        &old.params,
        &new.params,
        &policy.params,
    );
    diff_field_maps(
        changes,
        &format!("[Request Body] {}", key),
        &old.request,
        &new.request,
        &policy.request,
    );

    let mut codes: Vec<&String> = old.responses.keys().chain(new.responses.keys()).collect();
    codes.sort();
    codes.dedup();

    for code in codes {
        let category = format!("[Response {}] {}", code, key);
        match (old.responses.get(code), new.responses.get(code)) {
            (None, Some(_)) => {
                changes.push(Change::non_breaking(Some(&category), "Added status code"))
            }
            (Some(_), None) => {
                changes.push(Change::breaking(Some(&category), "Removed status code"))
            }
            (Some(old_map), Some(new_map)) => {
                diff_field_maps(changes, &category, old_map, new_map, &policy.response)
            }
            (None, None) => {}
        }
    }
}

/// Compare two field maps of one category, appending to `changes`.
pub fn diff_field_maps(
    changes: &mut Vec<Change>,
    category: &str,
    old: &FieldMap,
    new: &FieldMap,
    rules: &FieldRules,
) {
    let category = Some(category);

    for path in old.keys().filter(|p| !new.contains_key(*p)) {
        if rules.remove_is_breaking {
            changes.push(Change::breaking(category, format!("Removed field: {}", path)));
        } else {
            changes.push(Change::non_breaking(
                category,
                format!("Removed field: {} (non-breaking)", path),
            ));
        }
    }

    for (path, field) in new.iter().filter(|(p, _)| !old.contains_key(*p)) {
        if field.required && rules.add_required_is_breaking {
            changes.push(Change::breaking(
                category,
                format!("Added required field: {}", path),
            ));
        } else {
            changes.push(Change::non_breaking(category, format!("Added field: {}", path)));
        }
    }

    for (path, old_field) in old {
        let Some(new_field) = new.get(path) else {
            continue;
        };

        match (old_field.required, new_field.required) {
            (false, true) => changes.push(Change::breaking(
                category,
                format!("Field changed to required: {}", path),
            )),
            (true, false) => changes.push(Change::non_breaking(
                category,
                format!("Field changed from required to optional: {}", path),
            )),
            _ => {}
        }

        let (ot, nt) = (&old_field.field_type, &new_field.field_type);
        if ot != nt {
            if is_non_breaking_widen(ot, nt, rules.allow_type_widening) {
                changes.push(Change::non_breaking(
                    category,
                    format!("Field type widened: {} {} -> {}", path, ot, nt),
                ));
            } else {
                changes.push(Change::breaking(
                    category,
                    format!("Field type changed: {} {} -> {}", path, ot, nt),
                ));
            }
        }
    }
}

/// `integer -> number`, and only where widening is allowed.
pub fn is_non_breaking_widen(old_type: &str, new_type: &str, allow_widening: bool) -> bool {
    allow_widening && old_type == "integer" && new_type == "number"
}
