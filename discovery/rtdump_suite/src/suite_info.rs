//! Per-test-case reconciled method view.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::reflect::{ReflectionError, ReflectionSource};
use crate::suffix::ThrowingSuffix;

/// One test case and its reconciled test methods.
///
/// Holds a borrow of the test case, never ownership: the harness that
/// registered the test case decides when it goes away, and this view cannot
/// outlive it. The raw reflected names are kept exactly as supplied. The
/// logical list is computed once at construction and never changes.
///
/// # Invariants
///
/// - Every logical method comes from at least one raw name, after the
///   throwing suffix is stripped.
/// - No logical method appears twice.
/// - Logical methods keep the order in which they were first seen.
#[derive(Debug)]
pub struct TestSuiteInfo<'a, C: ?Sized> {
    test_case: &'a C,
    runtime_test_methods: Vec<String>,
    test_methods: Vec<String>,
}

impl<'a, C: ?Sized> TestSuiteInfo<'a, C> {
    /// Reconcile `runtime_test_methods` for `test_case` against `suffix`.
    ///
    /// Empty input is valid and yields no logical methods.
    pub fn new(
        test_case: &'a C,
        runtime_test_methods: Vec<String>,
        suffix: &ThrowingSuffix,
    ) -> Self {
        let test_methods = reconcile(&runtime_test_methods, suffix);
        debug!(
            runtime = runtime_test_methods.len(),
            logical = test_methods.len(),
            "reconciled test suite"
        );
        TestSuiteInfo {
            test_case,
            runtime_test_methods,
            test_methods,
        }
    }

    /// Like [`TestSuiteInfo::new`], using [`ThrowingSuffix::process_wide`].
    pub fn with_process_suffix(test_case: &'a C, runtime_test_methods: Vec<String>) -> Self {
        Self::new(test_case, runtime_test_methods, ThrowingSuffix::process_wide())
    }

    /// Ask `source` for the raw names of `test_case`, then reconcile them.
    ///
    /// Reflection failures surface here, before any reconciliation happens.
    pub fn from_reflection<R>(
        test_case: &'a C,
        source: &R,
        suffix: &ThrowingSuffix,
    ) -> Result<Self, ReflectionError>
    where
        R: ReflectionSource<C> + ?Sized,
    {
        let runtime_test_methods = source.enumerate_methods(test_case)?;
        Ok(Self::new(test_case, runtime_test_methods, suffix))
    }

    pub fn test_case(&self) -> &'a C {
        self.test_case
    }

    /// Raw reflected names, in input order, duplicates included.
    pub fn runtime_test_methods(&self) -> &[String] {
        &self.runtime_test_methods
    }

    /// Reconciled logical method names.
    ///
    /// This is the list reporting should use as the test case's method
    /// inventory.
    pub fn test_methods(&self) -> &[String] {
        &self.test_methods
    }

    pub fn contains(&self, logical: &str) -> bool {
        self.test_methods.iter().any(|m| m == logical)
    }

    pub fn is_empty(&self) -> bool {
        self.test_methods.is_empty()
    }
}

impl<C: ?Sized> Clone for TestSuiteInfo<'_, C> {
    fn clone(&self) -> Self {
        TestSuiteInfo {
            test_case: self.test_case,
            runtime_test_methods: self.runtime_test_methods.clone(),
            test_methods: self.test_methods.clone(),
        }
    }
}

/// Collapse raw reflected names onto logical method names.
///
/// Strips the throwing suffix from each name and keeps the first occurrence
/// of every resulting name, in input order. Nothing is filtered, sorted or
/// case-folded.
pub fn reconcile<S: AsRef<str>>(runtime_test_methods: &[S], suffix: &ThrowingSuffix) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut logical = Vec::with_capacity(runtime_test_methods.len());

    for raw in runtime_test_methods {
        let raw = raw.as_ref();
        let name = if suffix.is_suffixed(raw) {
            let stripped = suffix.strip(raw);
            trace!(raw, logical = stripped, "stripped throwing suffix");
            stripped
        } else {
            raw
        };
        if seen.insert(name) {
            logical.push(name.to_owned());
        } else {
            trace!(raw, logical = name, "collapsed duplicate method");
        }
    }

    logical
}
