//! Reflection backed by a demangled symbol table.
//!
//! When a test binary cannot be loaded and introspected live, its exported
//! `@objc` entry points still describe what the runtime would report. A
//! demangled symbol line for a test method looks like one of:
//!
//! ```text
//! @objc Module.Class.testMethod() -> ()
//! @objc Module.Class.testMethod() throws -> ()
//! ```
//!
//! Throwing methods are reported with the throwing suffix appended, the same
//! way the runtime bridge renames them, so reconciliation treats both
//! sources alike.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use rtdump_suite::{ReflectionError, ReflectionSource, ThrowingSuffix};

use crate::entry::TestCaseDescriptor;

const OBJC_PREFIX: &str = "@objc ";
const PLAIN_SIGNATURE: &str = "() -> ()";
const THROWING_SIGNATURE: &str = "() throws -> ()";

/// One `@objc` zero-argument method recovered from a symbol line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolMethod {
    pub module: String,
    pub class_name: String,
    pub method: String,
    pub throws: bool,
}

impl SymbolMethod {
    /// Parse one demangled symbol line.
    ///
    /// Returns `None` for anything that is not an `@objc` zero-argument
    /// instance method of a top-level class: other signatures, nested or
    /// private types, closures and thunks.
    pub fn parse(demangled: &str) -> Option<Self> {
        let line = demangled.trim_end();
        let rest = line.strip_prefix(OBJC_PREFIX)?;

        let (qualified, throws) = if let Some(q) = rest.strip_suffix(THROWING_SIGNATURE) {
            (q, true)
        } else {
            (rest.strip_suffix(PLAIN_SIGNATURE)?, false)
        };

        if qualified.contains(' ') {
            return None;
        }

        let mut parts = qualified.split('.');
        let (Some(module), Some(class_name), Some(method), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return None;
        };
        if module.is_empty() || class_name.is_empty() || method.is_empty() {
            return None;
        }

        Some(SymbolMethod {
            module: module.to_owned(),
            class_name: class_name.to_owned(),
            method: method.to_owned(),
            throws,
        })
    }

    /// Class owning an `@objc` symbol, whatever its signature.
    ///
    /// Looks only at `Module.Class.member` before the parameter list, so
    /// methods taking arguments or returning values still name their class.
    pub fn owning_class(demangled: &str) -> Option<&str> {
        let rest = demangled.trim_end().strip_prefix(OBJC_PREFIX)?;
        let (qualified, _) = rest.split_once('(')?;
        if qualified.contains(' ') {
            return None;
        }
        let mut parts = qualified.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(module), Some(class_name), Some(member), None)
                if !module.is_empty() && !class_name.is_empty() && !member.is_empty() =>
            {
                Some(class_name)
            }
            _ => None,
        }
    }

    /// Method name as runtime reflection would report it.
    pub fn reflected_name(&self, suffix: &ThrowingSuffix) -> String {
        if self.throws {
            suffix.apply(&self.method)
        } else {
            self.method.clone()
        }
    }
}

/// [`ReflectionSource`] over a demangled symbol table.
///
/// Methods are grouped by class name and kept in symbol order. A class with
/// `@objc` symbols but no reportable methods is still known and enumerates
/// to an empty list. The symbol table is read once; lookups never touch the
/// binary again.
#[derive(Clone, Debug, Default)]
pub struct SymbolTableReflection {
    class_names: Vec<String>,
    methods: FxHashMap<String, Vec<String>>,
}

impl SymbolTableReflection {
    /// Index demangled symbol lines.
    pub fn from_demangled<'l>(
        lines: impl IntoIterator<Item = &'l str>,
        suffix: &ThrowingSuffix,
    ) -> Self {
        let mut table = SymbolTableReflection::default();
        for line in lines {
            let Some(symbol) = SymbolMethod::parse(line) else {
                if let Some(class_name) = SymbolMethod::owning_class(line) {
                    table.class_methods(class_name);
                }
                continue;
            };
            trace!(
                module = %symbol.module,
                class_name = %symbol.class_name,
                method = %symbol.method,
                throws = symbol.throws,
                "extracted symbol method"
            );
            let reflected = symbol.reflected_name(suffix);
            table.class_methods(&symbol.class_name).push(reflected);
        }
        debug!(classes = table.class_names.len(), "indexed symbol table");
        table
    }

    fn class_methods(&mut self, class_name: &str) -> &mut Vec<String> {
        if !self.methods.contains_key(class_name) {
            self.class_names.push(class_name.to_owned());
        }
        self.methods.entry(class_name.to_owned()).or_default()
    }

    /// Index a whole demangled symbol dump, one symbol per line.
    pub fn parse(output: &str, suffix: &ThrowingSuffix) -> Self {
        Self::from_demangled(output.lines(), suffix)
    }

    /// Classes with at least one `@objc` symbol, in first-seen order.
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn methods_of(&self, class_name: &str) -> Option<&[String]> {
        self.methods.get(class_name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty()
    }
}

impl<C: TestCaseDescriptor + ?Sized> ReflectionSource<C> for SymbolTableReflection {
    fn enumerate_methods(&self, test_case: &C) -> Result<Vec<String>, ReflectionError> {
        let class_name = test_case.class_name();
        self.methods_of(class_name)
            .map(<[String]>::to_vec)
            .ok_or_else(|| ReflectionError::UnknownTestCase {
                class_name: class_name.to_owned(),
            })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
