//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the engine's
//! boundary events and the assertions made against them in tests.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Contract identifiers
pub const FIELD_DOCUMENT_KIND: &str = "document_kind";
pub const FIELD_CONTRACT_DIGEST: &str = "contract_digest";

// Collection sizes
pub const FIELD_ENDPOINT_COUNT: &str = "endpoint_count";
pub const FIELD_WARNING_COUNT: &str = "warning_count";
pub const FIELD_BREAKING_COUNT: &str = "breaking_count";
pub const FIELD_NON_BREAKING_COUNT: &str = "non_breaking_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_count_fields_are_distinct() {
        let fields = [
            FIELD_ENDPOINT_COUNT,
            FIELD_WARNING_COUNT,
            FIELD_BREAKING_COUNT,
            FIELD_NON_BREAKING_COUNT,
        ];
        let unique: std::collections::BTreeSet<_> = fields.iter().collect();
        assert_eq!(unique.len(), fields.len());
    }
}
