//! Interface-description documents through the full normalizer.

mod common;

use apicompat_core::errors::ExErrorKind;
use apicompat_core::model::Field;
use apicompat_core::normalize::{normalize_document, DocumentKind, WarningKind};
use common::normalize;
use serde_json::json;

fn petstore() -> serde_json::Value {
    json!({
        "openapi": "3.0.3",
        "components": {
            "schemas": {
                "Named": {"type": "object", "required": ["name"], "properties": {
                    "name": {"type": "string"}
                }},
                "Pet": {"allOf": [
                    {"$ref": "#/components/schemas/Named"},
                    {"type": "object", "required": ["id"], "properties": {
                        "id": {"type": "integer"},
                        "tags": {"type": "array", "items": {"type": "string"}},
                        "owner": {"type": "object", "properties": {
                            "email": {"type": "string"}
                        }}
                    }}
                ]},
                "PetList": {"type": "array", "items": {"$ref": "#/components/schemas/Pet"}}
            },
            "parameters": {
                "Limit": {"in": "query", "name": "limit", "schema": {"type": "integer"}}
            },
            "requestBodies": {
                "NewPet": {"content": {"application/json": {
                    "schema": {"$ref": "#/components/schemas/Pet"}
                }}}
            }
        },
        "paths": {
            "/pets": {
                "get": {
                    "operationId": "listPets",
                    "parameters": [{"$ref": "#/components/parameters/Limit"}],
                    "responses": {"200": {"content": {"application/json": {
                        "schema": {"$ref": "#/components/schemas/PetList"}
                    }}}}
                },
                "post": {
                    "requestBody": {"$ref": "#/components/requestBodies/NewPet"},
                    "responses": {"201": {"description": "created"}}
                }
            }
        }
    })
}

#[test]
fn test_openapi_document_is_flattened() {
    // GIVEN a document using $ref, allOf and arrays
    let doc = petstore();

    // WHEN normalizing
    let normalized = normalize_document(&doc).expect("should normalize");
    let contract = &normalized.contract;

    // THEN both operations exist
    assert_eq!(normalized.kind, DocumentKind::OpenApi);
    assert!(normalized.warnings.is_empty());
    let keys: Vec<&str> = contract.keys().collect();
    assert_eq!(keys, vec!["GET /pets", "POST /pets"]);

    // AND the referenced parameter is keyed by scope
    let list = contract.get("GET /pets").unwrap();
    assert_eq!(list.name, "listPets");
    assert_eq!(list.params["query.limit"], Field::new("integer", false));

    // AND the top-level array response flattens through []
    let listed = &list.responses["200"];
    assert_eq!(listed["[].id"], Field::new("integer", true));
    assert_eq!(listed["[].name"], Field::new("string", true));
    assert_eq!(listed["[].tags[]"], Field::new("array<string>", false));
    assert_eq!(listed["[].owner.email"], Field::new("string", false));

    // AND the referenced request body is merged from allOf
    let create = contract.get("POST /pets").unwrap();
    assert_eq!(create.name, "POST /pets");
    let body_paths: Vec<&str> = create.request.keys().map(String::as_str).collect();
    assert_eq!(body_paths, vec!["id", "name", "owner.email", "tags[]"]);

    // AND a response without a JSON body is not recorded
    assert!(create.responses.is_empty());
}

#[test]
fn test_recursive_schema_terminates_with_warning() {
    let doc = json!({
        "components": {"schemas": {"Category": {
            "type": "object",
            "properties": {
                "label": {"type": "string"},
                "parent": {"$ref": "#/components/schemas/Category"}
            }
        }}},
        "paths": {"/categories": {"get": {"responses": {"200": {"content": {
            "application/json": {"schema": {"$ref": "#/components/schemas/Category"}}
        }}}}}}
    });

    let normalized = normalize_document(&doc).expect("should normalize");
    let fields = &normalized.contract.get("GET /categories").unwrap().responses["200"];

    assert_eq!(fields["label"], Field::new("string", false));
    assert!(!fields.contains_key("parent"));
    assert_eq!(fields.len(), 1);
    assert_eq!(normalized.warnings.len(), 1);
    assert_eq!(normalized.warnings[0].kind, WarningKind::RecursiveRef);
    assert_eq!(normalized.warnings[0].context, "GET /categories response 200");
}

#[test]
fn test_unresolved_and_external_refs_degrade_to_empty() {
    let doc = json!({"paths": {"/a": {"post": {
        "requestBody": {"content": {"application/json": {
            "schema": {"$ref": "other.json#/components/schemas/A"}
        }}},
        "responses": {"200": {"content": {"application/json": {
            "schema": {"$ref": "#/components/schemas/Missing"}
        }}}}
    }}}});

    let normalized = normalize_document(&doc).expect("should still normalize");
    let endpoint = normalized.contract.get("POST /a").unwrap();

    assert!(endpoint.request.is_empty());
    assert!(endpoint.responses["200"].is_empty());
    let references: Vec<&str> = normalized
        .warnings
        .iter()
        .map(|w| w.reference.as_str())
        .collect();
    assert_eq!(
        references,
        vec!["other.json#/components/schemas/A", "#/components/schemas/Missing"]
    );
}

#[test]
fn test_same_contract_in_both_shapes_normalizes_identically() {
    let openapi = json!({"paths": {"/items/{id}": {
        "parameters": [{"in": "path", "name": "id", "required": true}],
        "patch": {
            "operationId": "patchItem",
            "parameters": [{"in": "header", "name": "If-Match", "schema": {"type": "string"}}],
            "requestBody": {"content": {"application/json": {"schema": {
                "type": "object", "properties": {"qty": {"type": "integer"}}
            }}}}
        }
    }}});
    let simplified = json!({"apis": [{
        "name": "patchItem",
        "method": "PATCH",
        "path": "/items/{id}",
        "pathParams": [{"name": "id", "required": true}],
        "headers": [{"name": "If-Match"}],
        "request": {"type": "object", "properties": {"qty": {"type": "integer"}}}
    }]});

    assert_eq!(normalize(&openapi), normalize(&simplified));
    assert_eq!(normalize(&openapi).digest(), normalize(&simplified).digest());
}

#[test]
fn test_non_object_paths_is_rejected() {
    let err = normalize_document(&json!({"paths": "nope"})).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidContract);
}
