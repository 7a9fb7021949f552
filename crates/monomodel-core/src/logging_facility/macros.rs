//! Operation lifecycle macros
//!
//! Every boundary operation emits exactly one `start` event and then either
//! an `end` or an `end_error` event. The closing macros take the
//! [`Instant`](std::time::Instant) captured at start and derive
//! `duration_ms` from it. Extra `key = value` fields (typically `entity` and
//! `table`) are passed through to `tracing` unchanged.

/// Emit the `start` event of an operation
///
/// ```
/// # use monomodel_core::log_op_start;
/// log_op_start!("save");
/// log_op_start!("save", entity = "User", table = "user");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = monomodel_core_types::schema::EVENT_START,
            $($($field)+)?
        )
    };
}

/// Emit the `end` event of an operation started at `started`
///
/// ```
/// # use monomodel_core::log_op_end;
/// let started = std::time::Instant::now();
/// log_op_end!("save", started = started, table = "user");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, started = $started:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = monomodel_core_types::schema::EVENT_END,
            duration_ms = $started.elapsed().as_millis() as u64,
            $($($field)+)?
        )
    };
}

/// Emit the `end_error` event of an operation, with the error's kind and code
///
/// Accepts anything convertible into `ExError`.
///
/// ```
/// # use monomodel_core::{log_op_error, errors::ModelError};
/// let started = std::time::Instant::now();
/// log_op_error!("find", ModelError::MissingConnection, started = started);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, started = $started:expr $(, $($field:tt)+)?) => {{
        let err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = monomodel_core_types::schema::EVENT_END_ERROR,
            duration_ms = $started.elapsed().as_millis() as u64,
            err_kind = ?err.kind(),
            err_code = err.code(),
            $($($field)+)?
        )
    }};
}
