//! Dump configuration.

use rtdump_suite::ThrowingSuffix;

/// Environment variable that keeps suites with no logical test methods.
///
/// Accepts `1`, `true` or `yes` (case-insensitive).
pub const KEEP_EMPTY_SUITES_ENV_VAR: &str = "RTDUMP_KEEP_EMPTY_SUITES";

/// Configuration for [`RuntimeDump`](crate::RuntimeDump).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpConfig {
    /// Marker stripped from reflected names of throwing methods.
    pub throwing_suffix: ThrowingSuffix,
    /// Emit entries for test cases whose reconciled method list is empty.
    pub keep_empty_suites: bool,
    /// Only report logical methods starting with this prefix.
    ///
    /// Applied when entries are built. The reconciled suite itself is
    /// never filtered.
    pub method_prefix: Option<String>,
}

impl Default for DumpConfig {
    fn default() -> Self {
        DumpConfig {
            throwing_suffix: ThrowingSuffix::default(),
            keep_empty_suites: false,
            method_prefix: None,
        }
    }
}

impl DumpConfig {
    /// Configuration from the process environment.
    ///
    /// The throwing suffix is the frozen process-wide one.
    pub fn from_env() -> Self {
        Self::from_lookup(
            ThrowingSuffix::process_wide().clone(),
            |key| std::env::var(key).ok(),
        )
    }

    fn from_lookup(
        throwing_suffix: ThrowingSuffix,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let keep_empty_suites = lookup(KEEP_EMPTY_SUITES_ENV_VAR)
            .is_some_and(|value| parse_flag(&value));
        DumpConfig {
            throwing_suffix,
            keep_empty_suites,
            method_prefix: None,
        }
    }

    #[must_use]
    pub fn with_throwing_suffix(mut self, suffix: ThrowingSuffix) -> Self {
        self.throwing_suffix = suffix;
        self
    }

    #[must_use]
    pub fn with_keep_empty_suites(mut self, keep: bool) -> Self {
        self.keep_empty_suites = keep;
        self
    }

    #[must_use]
    pub fn with_method_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.method_prefix = Some(prefix.into());
        self
    }

    /// Whether a logical method passes the prefix filter.
    pub fn reports_method(&self, logical: &str) -> bool {
        self.method_prefix
            .as_deref()
            .is_none_or(|prefix| logical.starts_with(prefix))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
