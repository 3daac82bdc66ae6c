//! Cross-checking reconciled suites against declared test methods.
//!
//! Reflection over-reports: helpers, lifecycle hooks and inherited methods
//! all show up next to real tests. Reconciliation keeps them on purpose.
//! This module is the separate validation step that sorts a reconciled
//! suite into what the declarations confirm, what they do not know about,
//! and what they declare but the runtime never reported.

use rustc_hash::FxHashSet;

use rtdump_suite::TestSuiteInfo;

/// Authoritative, non-reflective list of a test case's test methods.
///
/// Declared names are canonical and never carry the throwing suffix.
pub trait DeclarationSource<C: ?Sized> {
    fn declared_methods(&self, test_case: &C) -> Vec<String>;
}

impl<C, F> DeclarationSource<C> for F
where
    C: ?Sized,
    F: Fn(&C) -> Vec<String>,
{
    fn declared_methods(&self, test_case: &C) -> Vec<String> {
        self(test_case)
    }
}

/// Outcome of [`cross_check`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossCheck {
    /// Reconciled methods that are declared, in suite order.
    pub confirmed: Vec<String>,
    /// Reconciled methods with no declaration, in suite order.
    pub undeclared: Vec<String>,
    /// Declared methods the runtime never reported, in declaration order.
    pub missing: Vec<String>,
}

impl CrossCheck {
    /// No declared method is missing at runtime.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Confirmed methods, or an error listing what the runtime is missing.
    pub fn into_result(self) -> Result<Vec<String>, CrossCheckError> {
        if self.missing.is_empty() {
            Ok(self.confirmed)
        } else {
            Err(CrossCheckError::MissingInRuntime {
                missing: self.missing,
            })
        }
    }
}

/// A declared test method has no counterpart in the runtime dump.
#[derive(Debug, thiserror::Error)]
pub enum CrossCheckError {
    #[error("some tests are missing in runtime: {}", .missing.join(", "))]
    MissingInRuntime { missing: Vec<String> },
}

/// Compare a reconciled suite with its declared methods.
pub fn cross_check<C, D>(suite: &TestSuiteInfo<'_, C>, declarations: &D) -> CrossCheck
where
    C: ?Sized,
    D: DeclarationSource<C> + ?Sized,
{
    let declared = declarations.declared_methods(suite.test_case());
    let declared_set: FxHashSet<&str> = declared.iter().map(String::as_str).collect();

    let mut check = CrossCheck::default();
    for method in suite.test_methods() {
        if declared_set.contains(method.as_str()) {
            check.confirmed.push(method.clone());
        } else {
            check.undeclared.push(method.clone());
        }
    }

    let mut reported = FxHashSet::default();
    for method in &declared {
        if !suite.contains(method) && reported.insert(method.as_str()) {
            check.missing.push(method.clone());
        }
    }

    tracing::debug!(
        confirmed = check.confirmed.len(),
        undeclared = check.undeclared.len(),
        missing = check.missing.len(),
        "cross-checked suite against declarations"
    );
    check
}
