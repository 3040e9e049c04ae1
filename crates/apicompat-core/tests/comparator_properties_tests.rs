use apicompat_core::diff::compare_contracts;
use apicompat_core::model::{Endpoint, Field, FieldMap, NormalizedContract};
use apicompat_core::normalize::{flatten_schema, reduce_schema};
use apicompat_core::policy::CompatibilityPolicy;
use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::{json, Value};
use std::collections::BTreeSet;

fn contract(keys: &BTreeSet<(String, String)>) -> NormalizedContract {
    keys.iter()
        .map(|(method, path)| Endpoint::new(method, path.clone()))
        .collect()
}

fn endpoint_keys() -> impl Strategy<Value = BTreeSet<(String, String)>> {
    prop::collection::btree_set(
        (
            prop::sample::select(vec!["GET", "POST", "PUT", "DELETE"]).prop_map(str::to_string),
            "/[a-z]{1,6}(/\\{id\\})?",
        ),
        0..8,
    )
}

/// Nested object schemas with scalar, array and object leaves
fn schema_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(json!({"type": "string"})),
        Just(json!({"type": "integer"})),
        Just(json!({"type": "number"})),
        Just(json!({"type": "boolean"})),
        Just(json!({})),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            inner
                .clone()
                .prop_map(|items| json!({"type": "array", "items": items})),
            (
                prop::collection::btree_map("[a-z]{1,4}", inner, 1..4),
                any::<bool>()
            )
                .prop_map(|(props, first_required)| {
                    let required: Vec<&String> =
                        props.keys().take(usize::from(first_required)).collect();
                    json!({"type": "object", "properties": props, "required": required})
                }),
        ]
    })
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn endpoint_add_remove_is_symmetric(a in endpoint_keys(), b in endpoint_keys()) {
        let (a, b) = (contract(&a), contract(&b));
        let policy = CompatibilityPolicy::default();

        let forward = compare_contracts(&a, &b, &policy);
        let backward = compare_contracts(&b, &a, &policy);

        prop_assert_eq!(&forward.added_endpoints, &backward.removed_endpoints);
        prop_assert_eq!(&forward.removed_endpoints, &backward.added_endpoints);
    }

    #[test]
    fn flattening_is_idempotent(schema in schema_strategy()) {
        let root = json!({});
        let (first, _) = reduce_schema(&root, &schema);
        let (second, _) = reduce_schema(&root, &schema);

        prop_assert_eq!(flatten_schema(&first, ""), flatten_schema(&second, ""));
    }

    #[test]
    fn comparing_a_contract_with_itself_is_empty(schema in schema_strategy()) {
        let (node, _) = reduce_schema(&json!({}), &schema);
        let mut endpoint = Endpoint::new("POST", "/things");
        endpoint.request = flatten_schema(&node, "");
        endpoint.responses.insert("200".to_string(), flatten_schema(&node, ""));
        let contract: NormalizedContract = [endpoint].into_iter().collect();

        let report = compare_contracts(&contract, &contract, &CompatibilityPolicy::default());
        prop_assert!(report.is_empty());
    }

    #[test]
    fn removing_any_field_is_breaking(
        fields in prop::collection::btree_map("[a-z]{1,5}(\\[\\])?(\\.[a-z]{1,3})?", any::<bool>(), 1..6),
        index in any::<prop::sample::Index>()
    ) {
        let old: FieldMap = fields
            .iter()
            .map(|(path, required)| (path.clone(), Field::new("string", *required)))
            .collect();
        let mut new = old.clone();
        let victim = index.get(&old.keys().cloned().collect::<Vec<_>>()).clone();
        new.remove(&victim);

        for code_side in [false, true] {
            let mut old_ep = Endpoint::new("PATCH", "/x");
            let mut new_ep = Endpoint::new("PATCH", "/x");
            if code_side {
                old_ep.responses.insert("200".to_string(), old.clone());
                new_ep.responses.insert("200".to_string(), new.clone());
            } else {
                old_ep.request = old.clone();
                new_ep.request = new.clone();
            }
            let old_contract: NormalizedContract = [old_ep].into_iter().collect();
            let new_contract: NormalizedContract = [new_ep].into_iter().collect();
            let report =
                compare_contracts(&old_contract, &new_contract, &CompatibilityPolicy::default());

            prop_assert_eq!(report.breaking.len(), 1);
            let expected_suffix = format!("Removed field: {}", victim);
            prop_assert!(report.breaking[0].ends_with(&expected_suffix));
        }
    }
}
