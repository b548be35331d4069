//! Trace hooks for stages that materialize their input.
//!
//! Events are only emitted with the `tracing` feature and when
//! `PipeConfig::global().trace_materialization` is set.

#[cfg(feature = "tracing")]
pub fn materialized(stage: &'static str, key_values: &[(&str, usize)]) {
    if !sluice_core::config::PipeConfig::global().trace_materialization {
        return;
    }
    let span = tracing::span!(tracing::Level::TRACE, "sluice", stage);
    let _enter = span.enter();
    for (k, v) in key_values {
        tracing::trace!(%stage, %k, %v, "materialized");
    }
}

#[cfg(not(feature = "tracing"))]
pub fn materialized(_stage: &'static str, _key_values: &[(&str, usize)]) { /* no-op */
}
