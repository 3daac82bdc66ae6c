//! The throwing-test suffix marker.
//!
//! A test method declared as `func testFoo() throws` is exposed to the
//! Objective-C runtime as the selector `testFooAndReturnError:`. Reflection
//! reports that selector, not the logical name, so everything that reads
//! reflected names needs to agree on the exact tail to strip.
//!
//! The marker is fixed for the life of the process. [`ThrowingSuffix`] has
//! no setters; a non-default marker is either injected by value or resolved
//! once through [`ThrowingSuffix::process_wide`].

use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

/// Selector tail the runtime bridge appends to throwing test methods.
pub const THROWING_TEST_SUFFIX: &str = "AndReturnError:";

/// Environment variable that overrides the process-wide marker.
///
/// Read at most once per process, on the first call to
/// [`ThrowingSuffix::process_wide`]. An empty value is ignored.
pub const SUFFIX_ENV_VAR: &str = "RTDUMP_THROWING_SUFFIX";

/// Immutable throwing-suffix marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThrowingSuffix(Cow<'static, str>);

impl ThrowingSuffix {
    /// The marker used when nothing overrides it.
    pub const DEFAULT: ThrowingSuffix = ThrowingSuffix(Cow::Borrowed(THROWING_TEST_SUFFIX));

    pub fn new(marker: impl Into<Cow<'static, str>>) -> Self {
        ThrowingSuffix(marker.into())
    }

    /// The marker shared by the whole process.
    ///
    /// Resolved from [`SUFFIX_ENV_VAR`] on first use, falling back to
    /// [`THROWING_TEST_SUFFIX`]. Later changes to the environment have no
    /// effect.
    pub fn process_wide() -> &'static ThrowingSuffix {
        static PROCESS_SUFFIX: OnceLock<ThrowingSuffix> = OnceLock::new();
        PROCESS_SUFFIX.get_or_init(|| Self::resolve(std::env::var(SUFFIX_ENV_VAR).ok()))
    }

    fn resolve(value: Option<String>) -> Self {
        value
            .filter(|v| !v.is_empty())
            .map_or(Self::DEFAULT, ThrowingSuffix::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `name` ends with the marker.
    ///
    /// An empty marker never matches.
    pub fn is_suffixed(&self, name: &str) -> bool {
        !self.0.is_empty() && name.ends_with(self.as_str())
    }

    /// Logical name for a reflected method name.
    ///
    /// Removes exactly one trailing occurrence of the marker. Names without
    /// the marker come back unchanged. A name that is only the marker
    /// yields the empty string.
    pub fn strip<'n>(&self, name: &'n str) -> &'n str {
        if self.0.is_empty() {
            return name;
        }
        name.strip_suffix(self.as_str()).unwrap_or(name)
    }

    /// Reflected name the bridge produces for a throwing method.
    pub fn apply(&self, logical: &str) -> String {
        let mut name = String::with_capacity(logical.len() + self.0.len());
        name.push_str(logical);
        name.push_str(self.as_str());
        name
    }
}

impl Default for ThrowingSuffix {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThrowingSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
