//! Structured log helpers.
//!
//! Events carry a `component` field so a log pipeline can split streams per
//! algorithmic component without parsing messages.

/// Emit an event with the standard `component` field.
///
/// ```rust,ignore
/// use agora_telemetry::{components, log_component_event};
///
/// log_component_event!(info, components::RATE_LIMITER, "Bucket created", key = %key);
/// ```
#[macro_export]
macro_rules! log_component_event {
    ($level:ident, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}
