//! Trace hooks for terminal operations.

/// Report how many slots a collection reserved up front from the size hint.
#[cfg(feature = "tracing")]
pub fn collect_presized(target: &'static str, reserved: usize, hint: sluice_core::SizeHint) {
    tracing::trace!(container = %target, reserved, %hint, "collect presized");
}

#[cfg(not(feature = "tracing"))]
pub fn collect_presized(_target: &'static str, _reserved: usize, _hint: sluice_core::SizeHint) {
    /* no-op */
}
