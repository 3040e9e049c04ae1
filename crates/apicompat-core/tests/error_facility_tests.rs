use apicompat_core::errors::{ContractError, ExError, ExErrorKind};
use apicompat_core::normalize::normalize_document;
use apicompat_core::core_types::RequestId;
use serde_json::json;

#[test]
fn test_invalid_contract_verifiable_by_kind() {
    let err = ContractError::InvalidContract {
        message: "Root object should contain 'apis' list (or provide OpenAPI JSON)".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidContract);
    assert_eq!(ex_err.code(), "ERR_INVALID_CONTRACT");
    assert!(ex_err.message().starts_with("Invalid contract JSON format:"));
}

#[test]
fn test_invalid_json_distinct_from_invalid_contract() {
    let ex_err: ExError = ContractError::InvalidJson {
        message: "expected value at line 1 column 1".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidJson);
    assert_eq!(
        ex_err.message(),
        "Contract is not valid JSON: expected value at line 1 column 1"
    );
    assert_ne!(ex_err.kind(), ExErrorKind::InvalidContract);
    assert_eq!(ex_err.code(), "ERR_INVALID_JSON");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidJson, "ERR_INVALID_JSON"),
        (ExErrorKind::InvalidContract, "ERR_INVALID_CONTRACT"),
        (ExErrorKind::InvalidPolicy, "ERR_INVALID_POLICY"),
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_builder_context_is_preserved() {
    let request_id = RequestId::from("req-42");
    let err = ExError::new(ExErrorKind::InvalidPolicy)
        .with_op("load_policy_file")
        .with_path("policy.toml")
        .with_request_id(request_id.clone())
        .with_message("unknown field `strict`");

    assert_eq!(err.op(), Some("load_policy_file"));
    assert_eq!(err.path(), Some("policy.toml"));
    assert_eq!(err.request_id(), Some(&request_id));
    assert_eq!(
        err.to_string(),
        "[ERR_INVALID_POLICY] in operation 'load_policy_file': unknown field `strict` (path: policy.toml)"
    );
}

#[test]
fn test_normalizer_failure_is_structured() {
    let err = normalize_document(&json!({"paths": 7})).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidContract);
    assert_eq!(err.op(), Some("normalize_document"));
    assert!(err.message().contains("'paths' must be an object"));
}

#[test]
fn test_serde_errors_map_to_serialization() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let ex_err: ExError = ContractError::from(serde_err).into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
}
