//! Pipeline configuration that terminal operations consult.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipeConfig {
    /// Upper limit on slots reserved up-front from a size hint. Hints are
    /// advisory and `repeat` reports an infinite lower bound, so collection
    /// never trusts them beyond this.
    pub max_reserve: usize,

    /// Stability used by `sorted()` / `sorted_by_key()` when the caller
    /// does not pick one.
    pub stable_sort: bool,

    /// Emit trace events when a stage materializes its input (needs the
    /// `tracing` feature to have any effect).
    pub trace_materialization: bool,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self {
            max_reserve: 1 << 20, // 1 Mi elements
            stable_sort: true,
            trace_materialization: false,
        }
    }
}

static GLOBAL: Lazy<PipeConfig> = Lazy::new(PipeConfig::from_env);

impl PipeConfig {
    /// Process-wide snapshot, read from the environment on first use.
    pub fn global() -> &'static PipeConfig {
        &GLOBAL
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SLUICE_MAX_RESERVE`: cap on pre-allocated slots
    /// - `SLUICE_STABLE_SORT`: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
    /// - `SLUICE_TRACE`: same flag spellings as `SLUICE_STABLE_SORT`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup_lenient(|key| std::env::var(key).ok())
    }

    /// Like [`PipeConfig::from_lookup`], but a malformed value keeps the
    /// default for its key.
    fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SLUICE_MAX_RESERVE") {
            if let Ok(v) = s.trim().parse::<usize>() {
                cfg.max_reserve = v;
            }
        }

        if let Some(s) = lookup("SLUICE_STABLE_SORT") {
            if let Ok(v) = parse_flag("SLUICE_STABLE_SORT", &s) {
                cfg.stable_sort = v;
            }
        }

        if let Some(s) = lookup("SLUICE_TRACE") {
            if let Ok(v) = parse_flag("SLUICE_TRACE", &s) {
                cfg.trace_materialization = v;
            }
        }

        cfg
    }

    /// Like [`PipeConfig::from_env`], but malformed values are errors.
    pub fn from_env_strict() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, file, test map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(s) = lookup("SLUICE_MAX_RESERVE") {
            cfg.max_reserve = s
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("SLUICE_MAX_RESERVE: '{}' is not a count", s)))?;
        }

        if let Some(s) = lookup("SLUICE_STABLE_SORT") {
            cfg.stable_sort = parse_flag("SLUICE_STABLE_SORT", &s)?;
        }

        if let Some(s) = lookup("SLUICE_TRACE") {
            cfg.trace_materialization = parse_flag("SLUICE_TRACE", &s)?;
        }

        Ok(cfg)
    }

    pub fn with_max_reserve(mut self, max_reserve: usize) -> Self {
        self.max_reserve = max_reserve;
        self
    }

    pub fn with_stable_sort(mut self, stable: bool) -> Self {
        self.stable_sort = stable;
        self
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::Config(format!("{}: '{}' is not a boolean", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let cfg = PipeConfig::from_lookup(lookup_from(&[
            ("SLUICE_MAX_RESERVE", "128"),
            ("SLUICE_STABLE_SORT", "off"),
        ]))
        .unwrap();
        assert_eq!(cfg.max_reserve, 128);
        assert!(!cfg.stable_sort);
        assert!(!cfg.trace_materialization);
    }

    #[test]
    fn test_lookup_rejects_malformed_values() {
        let err = PipeConfig::from_lookup(lookup_from(&[("SLUICE_TRACE", "maybe")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err =
            PipeConfig::from_lookup(lookup_from(&[("SLUICE_MAX_RESERVE", "-1")])).unwrap_err();
        assert!(err.to_string().contains("SLUICE_MAX_RESERVE"));
    }

    #[test]
    fn test_lenient_and_strict_accept_the_same_flags() {
        for (value, expected) in [("1", true), ("off", false), ("Yes", true), ("false", false)] {
            let pairs = [("SLUICE_TRACE", value), ("SLUICE_STABLE_SORT", value)];
            let lenient = PipeConfig::from_lookup_lenient(lookup_from(&pairs));
            let strict = PipeConfig::from_lookup(lookup_from(&pairs)).unwrap();
            assert_eq!(lenient, strict, "flag value {}", value);
            assert_eq!(lenient.trace_materialization, expected);
            assert_eq!(lenient.stable_sort, expected);
        }
    }

    #[test]
    fn test_lenient_keeps_defaults_for_malformed_values() {
        let cfg = PipeConfig::from_lookup_lenient(lookup_from(&[
            ("SLUICE_TRACE", "maybe"),
            ("SLUICE_MAX_RESERVE", "lots"),
            ("SLUICE_STABLE_SORT", "no"),
        ]));
        assert_eq!(cfg.max_reserve, PipeConfig::default().max_reserve);
        assert!(!cfg.trace_materialization);
        assert!(!cfg.stable_sort);
    }

    #[test]
    fn test_serde_round_trip_and_partial_input() {
        let cfg = PipeConfig::default().with_max_reserve(7);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PipeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);

        let partial: PipeConfig = serde_json::from_str(r#"{"stable_sort":false}"#).unwrap();
        assert_eq!(partial.max_reserve, PipeConfig::default().max_reserve);
        assert!(!partial.stable_sort);
    }
}
