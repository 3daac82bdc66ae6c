//! Runtime test dump assembly.
//!
//! Turns a set of registered test cases into [`DiscoveredTestEntry`] values
//! by asking a [`ReflectionSource`] for each test case's raw method names and
//! reconciling them through [`TestSuiteInfo`].
//!
//! - [`RuntimeDump`]: runs reflection and reconciliation for every test case.
//! - [`SymbolTableReflection`]: a reflection source backed by demangled
//!   symbol-table lines, for binaries that cannot be introspected live.
//! - [`cross_check`]: compares a reconciled suite against declared methods.
//!   Reconciliation itself never filters; this is where over-reporting is
//!   caught.
//!
//! Writing the dump to disk is left to the caller.

mod config;
mod cross_check;
mod dump;
mod entry;
mod symbols;

pub use config::{DumpConfig, KEEP_EMPTY_SUITES_ENV_VAR};
pub use cross_check::{cross_check, CrossCheck, CrossCheckError, DeclarationSource};
pub use dump::{DumpError, RuntimeDump};
pub use entry::{DiscoveredTestEntry, TestCaseDescriptor};
pub use symbols::{SymbolMethod, SymbolTableReflection};

pub use rtdump_suite::{
    reconcile, ReflectionError, ReflectionSource, TestSuiteInfo, ThrowingSuffix,
    SUFFIX_ENV_VAR, THROWING_TEST_SUFFIX,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=rtdump=debug` or `RUST_LOG=rtdump_suite=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
