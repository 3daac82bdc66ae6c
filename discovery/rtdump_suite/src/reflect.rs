//! Reflection seam.

/// Enumerates the raw method names of one test case.
///
/// Implemented by platform adapters (runtime metadata walkers, symbol
/// table readers). Order is whatever the platform reports; names may be
/// duplicated or carry the throwing suffix.
pub trait ReflectionSource<C: ?Sized> {
    fn enumerate_methods(&self, test_case: &C) -> Result<Vec<String>, ReflectionError>;
}

impl<C, F> ReflectionSource<C> for F
where
    C: ?Sized,
    F: Fn(&C) -> Result<Vec<String>, ReflectionError>,
{
    fn enumerate_methods(&self, test_case: &C) -> Result<Vec<String>, ReflectionError> {
        self(test_case)
    }
}

/// Failure to obtain raw method names from a [`ReflectionSource`].
#[derive(Debug, thiserror::Error)]
pub enum ReflectionError {
    /// The source has no type metadata for this test case.
    #[error("no runtime type metadata for test case `{class_name}`")]
    UnknownTestCase { class_name: String },
    /// The source itself could not be queried.
    #[error("reflection source unavailable: {reason}")]
    Unavailable { reason: String },
}
