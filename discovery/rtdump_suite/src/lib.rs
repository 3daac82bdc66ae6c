//! Runtime test suite reconciliation.
//!
//! A test binary that bridges several language runtimes does not report its
//! test methods consistently through reflection. A test method that is
//! declared as throwing is surfaced by the runtime bridge under a renamed
//! selector: the logical name followed by a fixed throwing suffix. When both
//! the canonical and the suffixed form show up in the reflected method list,
//! they still refer to one logical test.
//!
//! This crate owns that reconciliation and nothing else:
//!
//! - [`ThrowingSuffix`]: the frozen marker the bridge appends to throwing
//!   methods, with [`THROWING_TEST_SUFFIX`] as the process-wide default.
//! - [`ReflectionSource`]: the capability that enumerates raw method names
//!   for one test case. Platform adapters implement it.
//! - [`TestSuiteInfo`]: one borrowed test case plus its raw method names and
//!   the reconciled, de-suffixed, de-duplicated logical method list.
//!
//! Filtering reflected names against declared tests is not done here. The
//! reconciled list is handed to an external validator for that.

mod reflect;
mod suffix;
mod suite_info;

pub use reflect::{ReflectionError, ReflectionSource};
pub use suffix::{ThrowingSuffix, SUFFIX_ENV_VAR, THROWING_TEST_SUFFIX};
pub use suite_info::{reconcile, TestSuiteInfo};
