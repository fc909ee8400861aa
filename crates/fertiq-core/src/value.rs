//! Shared presence check for numeric observations.
//!
//! Every interpreter routes its optional inputs through [`present`] so that
//! missing, NaN, and infinite values all degrade the same way.

/// Returns the value only if it was supplied and is finite.
///
/// Negative values are passed through unchanged; a `warn!` is emitted so
/// implausible entries show up in logs without altering the result.
pub fn present(value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => {
            if v < 0.0 {
                tracing::warn!(value = v, "negative clinical observation");
            }
            Some(v)
        }
        Some(v) => {
            tracing::warn!(value = %v, "non-finite clinical observation treated as absent");
            None
        }
        None => None,
    }
}

/// Round to one decimal place, as displayed on intake forms.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
