//! Discovered test entries.

use std::fmt;

use rtdump_suite::TestSuiteInfo;

use crate::config::DumpConfig;

/// Identity of a registered test case, as the harness knows it.
pub trait TestCaseDescriptor {
    /// Runtime class name of the test case.
    fn class_name(&self) -> &str;

    /// Source path, when the harness knows it.
    fn path(&self) -> &str {
        ""
    }

    /// External test management id.
    fn case_id(&self) -> Option<u64> {
        None
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

/// One test case's entry in the runtime dump.
///
/// `test_methods` is always the reconciled list, never the raw reflected
/// one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiscoveredTestEntry {
    pub class_name: String,
    pub path: String,
    pub test_methods: Vec<String>,
    pub case_id: Option<u64>,
    pub tags: Vec<String>,
}

impl DiscoveredTestEntry {
    pub fn new(class_name: impl Into<String>, test_methods: Vec<String>) -> Self {
        DiscoveredTestEntry {
            class_name: class_name.into(),
            path: String::new(),
            test_methods,
            case_id: None,
            tags: Vec::new(),
        }
    }

    /// Build an entry from a reconciled suite.
    ///
    /// Identity comes from the borrowed test case. Methods are the suite's
    /// logical methods that pass `config`'s prefix filter, in suite order.
    pub fn from_suite<C>(suite: &TestSuiteInfo<'_, C>, config: &DumpConfig) -> Self
    where
        C: TestCaseDescriptor + ?Sized,
    {
        let test_case = suite.test_case();
        let test_methods = suite
            .test_methods()
            .iter()
            .filter(|m| config.reports_method(m))
            .cloned()
            .collect();
        DiscoveredTestEntry {
            class_name: test_case.class_name().to_owned(),
            path: test_case.path().to_owned(),
            test_methods,
            case_id: test_case.case_id(),
            tags: test_case.tags().to_vec(),
        }
    }

    /// Fully qualified `Class/method` names, one per test method.
    pub fn test_names(&self) -> impl Iterator<Item = String> + '_ {
        self.test_methods
            .iter()
            .map(move |method| format!("{}/{method}", self.class_name))
    }
}

impl fmt::Display for DiscoveredTestEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(DiscoveredTestEntry: ")?;
        if let Some(case_id) = self.case_id {
            write!(f, "id {case_id},")?;
        }
        write!(
            f,
            "{} / [{}]",
            self.class_name,
            self.test_methods.join("|")
        )?;
        if !self.tags.is_empty() {
            write!(f, " / tags [{}]", self.tags.join("|"))?;
        }
        f.write_str(")")
    }
}
