//! Operation boundary macros
//!
//! Field names come from `apicompat_core_types::schema`. Extra fields use
//! ordinary `tracing` syntax (`name = value`, `name = %display`).

/// Emit the `start` event of an operation
///
/// ```
/// # use apicompat_core::log_op_start;
/// log_op_start!("compare_documents");
/// log_op_start!("load_document_file", path = "v1.json");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)+)?
        )
    };
}

/// Emit the `end` event of a successful operation
///
/// ```
/// # use apicompat_core::log_op_end;
/// log_op_end!("compare_documents", duration_ms = 3, breaking_count = 0);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        $crate::tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)+)?
        )
    };
}

/// Emit the `end_error` event of a failed operation
///
/// Anything convertible into [`ExError`](crate::errors::ExError) is
/// accepted; its kind, stable code and rendered message are recorded.
///
/// ```
/// # use apicompat_core::{log_op_error, errors::ContractError};
/// let err = ContractError::InvalidJson { message: "EOF".to_string() };
/// log_op_error!("load_document_str", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            error = %ex_err,
            $($($field)+)?
        );
    }};
}
