//! End-to-end analysis over real Python source snippets.

use std::path::PathBuf;

use packlint_core::{Config, Severity, Violation};
use packlint_python::ImportRuleEngine;

fn analyze(source: &str, file: &str) -> Vec<Violation> {
    analyze_with(source, file, "")
}

fn analyze_with(source: &str, file: &str, config: &str) -> Vec<Violation> {
    let config = Config::parse(config).expect("config should parse");
    let engine = ImportRuleEngine::new(&config).expect("engine should build");
    engine
        .analyze(&PathBuf::from(file), source)
        .expect("analysis should succeed")
}

const NO_DEDUCE: &str = "
[analyzer]
deduce_path = false
";

#[test]
fn clean_sources_with_unknown_module_name() {
    let good_sources = [
        "from . import module\n",
        "from .subpackage.module import name\n",
        "from ._subpackage.module import name\n",
        "from package.module import name\n",
        "from ..subpackage.module import name\n",
        "from .._subpackage import name\n",
        "from __future__ import print_function\n",
    ];
    for source in good_sources {
        let violations = analyze_with(source, "any.py", NO_DEDUCE);
        assert!(violations.is_empty(), "unexpected violations for {source:?}");
    }
}

#[test]
fn clean_sources_within_own_package() {
    let config = "
[analyzer]
deduce_path = false
";
    let annotated = |body: &str| format!("# packlint.name: package.subpackage.module\n{body}");
    let good_sources = [
        "from . import _module2\n",
        "from ._module2 import name\n",
        // same subpackage, so the private module is visible
        "from ..subpackage._module2 import name\n",
        "from package._module import name\n",
    ];
    for body in good_sources {
        let violations = analyze_with(&annotated(body), "any.py", config);
        assert!(violations.is_empty(), "unexpected violations for {body:?}");
    }
}

#[test]
fn private_crossings_flag_with_and_without_module_name() {
    let bad_sources = [
        "from .._subpackage import _name\n",
        "from ._subpackage._module import name\n",
    ];
    for body in bad_sources {
        let unknown = analyze_with(body, "any.py", NO_DEDUCE);
        assert_eq!(unknown.len(), 1, "expected one violation for {body:?}");

        let annotated = format!("# packlint.name: package.subpackage.module\n{body}");
        let known = analyze_with(&annotated, "any.py", NO_DEDUCE);
        assert_eq!(known.len(), 1, "expected one violation for {body:?}");
    }
}

#[test]
fn private_sibling_within_own_package_is_allowed() {
    // source package.module1 importing package._module2
    let source = "# packlint.name: package.module1\nimport package._module2\n";
    assert!(analyze(source, "any.py").is_empty());
}

#[test]
fn nested_private_package_is_flagged_with_full_path_in_message() {
    let source = "# packlint.name: package.module1\nimport package.subpackage._module3\n";
    let violations = analyze(source, "any.py");
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].message,
        "Importing private name 'package.subpackage._module3'."
    );
}

#[test]
fn relative_private_import_with_unknown_source() {
    let violations = analyze_with("from .module import _name\n", "any.py", NO_DEDUCE);
    assert_eq!(violations.len(), 1);
    let v = &violations[0];
    assert_eq!(v.code, "DEP401");
    assert_eq!(v.message, "Importing private name 'module._name'.");
    assert_eq!((v.location.line, v.location.column), (1, 0));
}

#[test]
fn module_name_deduced_from_file_path() {
    // package/module.py importing package._name: private sibling, fine.
    assert!(analyze("from package import _name\n", "package/module.py").is_empty());

    // The same import from an unrelated file crosses the boundary.
    let violations = analyze("from package import _name\n", "elsewhere.py");
    assert_eq!(violations.len(), 1);
}

#[test]
fn top_level_dir_strips_source_prefix() {
    let config = r#"
[analyzer]
top_level_dir = "src"
"#;
    let violations = analyze_with(
        "from package import _name\n",
        "src/package/module.py",
        config,
    );
    assert!(violations.is_empty());
}

#[test]
fn denylist_flags_prefix_match() {
    let config = r#"
[analyzer]
deduce_path = false

[rules.private-import]
enabled = false

[rules.import-denylist]
patterns = ["^gui_package"]
"#;
    let violations = analyze_with("from gui_package.api import x\n", "any.py", config);
    assert_eq!(violations.len(), 1);
    let v = &violations[0];
    assert_eq!(v.code, "DEP501");
    assert_eq!(
        v.message,
        "Import 'gui_package.api.x' violates pattern: '^gui_package'."
    );
}

#[test]
fn denylist_resolves_relative_imports_before_matching() {
    let config = r#"
[analyzer]
deduce_path = false

[rules.private-import]
enabled = false

[rules.import-denylist]
patterns = ['.*\.gui\..*', '.*\.web\..*']
"#;
    // Known source: ".web.api" resolves to "package.web.api" and matches.
    let source = "# packlint.name: package.module2\nfrom .web.api import x\n";
    assert_eq!(analyze_with(source, "any.py", config).len(), 1);

    // Unknown source: the same import resolves to just "web.api.x",
    // which matches no pattern.
    assert!(analyze_with("from .web.api import x\n", "any.py", config).is_empty());
}

#[test]
fn empty_denylist_never_fires() {
    let config = r#"
[analyzer]
deduce_path = false

[rules.private-import]
enabled = false
"#;
    let violations = analyze_with(
        "import anything.at._all\nfrom x import y\n",
        "any.py",
        config,
    );
    assert!(violations.is_empty());
}

#[test]
fn violations_follow_source_order() {
    let source = "\
import package.sub._one

def f():
    import package.sub._two
";
    let violations = analyze_with(source, "any.py", NO_DEDUCE);
    assert_eq!(violations.len(), 2);
    assert!(violations[0].message.contains("_one"));
    assert_eq!(violations[0].location.line, 1);
    assert!(violations[1].message.contains("_two"));
    assert_eq!(violations[1].location.line, 4);
}

#[test]
fn multiple_names_on_one_statement_each_get_an_edge() {
    let source = "from package.sub import _one, two, _three\n";
    let violations = analyze_with(source, "any.py", NO_DEDUCE);
    assert_eq!(violations.len(), 2);
    // All edges share the statement position.
    assert_eq!(violations[0].location.line, violations[1].location.line);
}

#[test]
fn default_severity_is_error() {
    let violations = analyze_with("import package.sub._impl\n", "any.py", NO_DEDUCE);
    assert_eq!(violations[0].severity, Severity::Error);
}
