//! Diagnostics hooks.
//!
//! This module purposefully avoids pulling a telemetry stack into default
//! builds. Wire these up to a subscriber in the hosting layer.

#[cfg(feature = "tracing")]
pub fn emit(event: &str, key_values: &[(&str, String)]) {
    for (k, v) in key_values {
        tracing::trace!(%event, %k, %v, "view");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn emit(_event: &str, _key_values: &[(&str, String)]) { /* no-op */
}
