use super::*;
use pretty_assertions::assert_eq;

const SYMBOLS: &str = "\
@objc MainPage_UnitTests.ShortcutsConverterTests.testUnboxesCorrectly_withOneShortcut() -> ()
MainPage_UnitTests.ShortcutsConverterTests.testUnboxesCorrectly_withOneShortcut() -> ()
closure #1 () -> Swift.String in MainPage_UnitTests.ShortcutsConverterTests.testUnboxesCorrectly_withOneShortcut() -> ()
@objc Catalog_UnitTests.CategoryCalculatorTests.testReturnsLeafCategory() throws -> ()
@objc Catalog_UnitTests.CategoryCalculatorTests.setUp() -> ()
@objc Messenger_UnitTests.ChannelsTests.(AdStub in _C0CEFAE3E7CB).loadImages() -> ()
@objc Catalog_UnitTests.CategoryCalculatorTests.testWithArgument(Swift.Int) -> ()
@objc MainPage_UnitTests.ShortcutsConverterTests.testEmpty() -> ()
";

struct Named(&'static str);

impl TestCaseDescriptor for Named {
    fn class_name(&self) -> &str {
        self.0
    }
}

// === Line parsing ===

#[test]
fn parses_plain_method() {
    let symbol = SymbolMethod::parse("@objc Module.FooTests.testBar() -> ()").unwrap();
    assert_eq!(
        symbol,
        SymbolMethod {
            module: "Module".to_string(),
            class_name: "FooTests".to_string(),
            method: "testBar".to_string(),
            throws: false,
        }
    );
}

#[test]
fn parses_throwing_method() {
    let symbol = SymbolMethod::parse("@objc Module.FooTests.testBar() throws -> ()").unwrap();
    assert!(symbol.throws);
    assert_eq!(symbol.method, "testBar");
}

#[test]
fn rejects_non_objc_and_nested_symbols() {
    assert!(SymbolMethod::parse("Module.FooTests.testBar() -> ()").is_none());
    assert!(SymbolMethod::parse("@objc Module.FooTests.Inner.testBar() -> ()").is_none());
    assert!(SymbolMethod::parse("@objc FooTests.testBar() -> ()").is_none());
    assert!(SymbolMethod::parse("@objc Module.(Stub in _ABC).load() -> ()").is_none());
    assert!(SymbolMethod::parse("@objc Module..testBar() -> ()").is_none());
}

#[test]
fn rejects_other_signatures() {
    assert!(SymbolMethod::parse("@objc Module.FooTests.testBar(Swift.Int) -> ()").is_none());
    assert!(SymbolMethod::parse("@objc Module.FooTests.value() -> Swift.Int").is_none());
}

#[test]
fn reflected_name_follows_bridge_renaming() {
    let suffix = ThrowingSuffix::default();
    let plain = SymbolMethod::parse("@objc M.C.testA() -> ()").unwrap();
    let throwing = SymbolMethod::parse("@objc M.C.testB() throws -> ()").unwrap();
    assert_eq!(plain.reflected_name(&suffix), "testA");
    assert_eq!(throwing.reflected_name(&suffix), "testBAndReturnError:");
}

// === Table ===

#[test]
fn indexes_classes_in_symbol_order() {
    let table = SymbolTableReflection::parse(SYMBOLS, &ThrowingSuffix::default());
    assert_eq!(
        table.class_names(),
        ["ShortcutsConverterTests", "CategoryCalculatorTests"]
    );
    assert_eq!(
        table.methods_of("ShortcutsConverterTests").unwrap(),
        ["testUnboxesCorrectly_withOneShortcut", "testEmpty"]
    );
    assert_eq!(
        table.methods_of("CategoryCalculatorTests").unwrap(),
        ["testReturnsLeafCategoryAndReturnError:", "setUp"]
    );
}

#[test]
fn empty_dump_has_no_classes() {
    let table = SymbolTableReflection::parse("", &ThrowingSuffix::default());
    assert!(table.is_empty());
    assert!(table.methods_of("Anything").is_none());
}

#[test]
fn tolerates_crlf_line_endings() {
    let table = SymbolTableReflection::parse(
        "@objc M.CrlfTests.testA() -> ()\r\n@objc M.CrlfTests.testB() throws -> ()\r\n",
        &ThrowingSuffix::new("🔥"),
    );
    assert_eq!(table.methods_of("CrlfTests").unwrap(), ["testA", "testB🔥"]);
}

#[test]
fn enumerates_methods_for_known_case() {
    let table = SymbolTableReflection::parse(SYMBOLS, &ThrowingSuffix::default());
    let methods = table
        .enumerate_methods(&Named("CategoryCalculatorTests"))
        .unwrap();
    assert_eq!(methods, ["testReturnsLeafCategoryAndReturnError:", "setUp"]);
}

#[test]
fn unknown_case_is_reflection_error() {
    let table = SymbolTableReflection::parse(SYMBOLS, &ThrowingSuffix::default());
    let err = table.enumerate_methods(&Named("MissingTests")).unwrap_err();
    assert!(matches!(
        err,
        ReflectionError::UnknownTestCase { ref class_name } if class_name == "MissingTests"
    ));
}

#[test]
fn throwing_symbols_collapse_after_reconciliation() {
    let suffix = ThrowingSuffix::default();
    let table = SymbolTableReflection::parse(
        "@objc M.MixedTests.testA() -> ()\n@objc M.MixedTests.testA() throws -> ()\n",
        &suffix,
    );
    let case = Named("MixedTests");
    let suite = rtdump_suite::TestSuiteInfo::from_reflection(&case, &table, &suffix).unwrap();
    assert_eq!(suite.runtime_test_methods().len(), 2);
    assert_eq!(suite.test_methods(), ["testA"]);
}

#[test]
fn owning_class_ignores_signature() {
    assert_eq!(
        SymbolMethod::owning_class("@objc M.EmptyTests.helper(Swift.Int) -> ()"),
        Some("EmptyTests")
    );
    assert_eq!(
        SymbolMethod::owning_class("@objc M.EmptyTests.value() -> Swift.Int"),
        Some("EmptyTests")
    );
    assert_eq!(SymbolMethod::owning_class("M.EmptyTests.helper() -> ()"), None);
    assert_eq!(
        SymbolMethod::owning_class("@objc M.Outer.(Stub in _ABC).load() -> ()"),
        None
    );
    assert_eq!(SymbolMethod::owning_class("@objc M.Outer.Inner.load() -> ()"), None);
}

#[test]
fn class_without_reportable_methods_enumerates_empty() {
    let table = SymbolTableReflection::parse(
        "@objc M.CartTests.testA() -> ()\n@objc M.EmptyTests.helper(Swift.Int) -> ()\n",
        &ThrowingSuffix::default(),
    );
    assert_eq!(table.class_names(), ["CartTests", "EmptyTests"]);

    let methods = table.enumerate_methods(&Named("EmptyTests")).unwrap();
    assert!(methods.is_empty());
    assert!(table.enumerate_methods(&Named("NeverSeenTests")).is_err());
}
