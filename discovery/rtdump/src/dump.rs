//! Runtime dump assembly.

use rtdump_suite::{ReflectionError, ReflectionSource, TestSuiteInfo};
use tracing::{debug, debug_span};

use crate::config::DumpConfig;
use crate::entry::{DiscoveredTestEntry, TestCaseDescriptor};

/// Failure while assembling a runtime dump.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("failed to reflect test case `{class_name}`")]
    Reflection {
        class_name: String,
        #[source]
        source: ReflectionError,
    },
}

/// Builds the per-test-case method inventory for a set of test cases.
///
/// Each test case is reflected once and reconciled into a
/// [`TestSuiteInfo`]. Output follows the order the test cases are given in.
#[derive(Clone, Debug, Default)]
pub struct RuntimeDump {
    config: DumpConfig,
}

impl RuntimeDump {
    pub fn new() -> Self {
        RuntimeDump::default()
    }

    pub fn with_config(config: DumpConfig) -> Self {
        RuntimeDump { config }
    }

    /// Reflect and reconcile every test case.
    ///
    /// Stops at the first reflection failure. Suites are returned whether or
    /// not they have logical methods.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn suites<'a, C, I, R>(
        &self,
        test_cases: I,
        source: &R,
    ) -> Result<Vec<TestSuiteInfo<'a, C>>, DumpError>
    where
        C: TestCaseDescriptor + ?Sized + 'a,
        I: IntoIterator<Item = &'a C>,
        R: ReflectionSource<C> + ?Sized,
    {
        test_cases
            .into_iter()
            .map(|test_case| {
                let _suite = debug_span!("suite", class_name = test_case.class_name()).entered();
                TestSuiteInfo::from_reflection(test_case, source, &self.config.throwing_suffix)
                    .map_err(|err| DumpError::Reflection {
                        class_name: test_case.class_name().to_owned(),
                        source: err,
                    })
            })
            .collect()
    }

    /// Reflect every test case and build its dump entry.
    ///
    /// Entries with no reported methods are dropped unless the config keeps
    /// empty suites.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn collect<'a, C, I, R>(
        &self,
        test_cases: I,
        source: &R,
    ) -> Result<Vec<DiscoveredTestEntry>, DumpError>
    where
        C: TestCaseDescriptor + ?Sized + 'a,
        I: IntoIterator<Item = &'a C>,
        R: ReflectionSource<C> + ?Sized,
    {
        let suites = self.suites(test_cases, source)?;
        Ok(self.entries(&suites))
    }

    /// Dump entries for already reconciled suites.
    pub fn entries<C>(&self, suites: &[TestSuiteInfo<'_, C>]) -> Vec<DiscoveredTestEntry>
    where
        C: TestCaseDescriptor + ?Sized,
    {
        let entries: Vec<_> = suites
            .iter()
            .map(|suite| DiscoveredTestEntry::from_suite(suite, &self.config))
            .filter(|entry| self.config.keep_empty_suites || !entry.test_methods.is_empty())
            .collect();
        debug!(
            suites = suites.len(),
            entries = entries.len(),
            "assembled runtime dump"
        );
        entries
    }
}
