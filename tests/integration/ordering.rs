//! Canonical ordering holds for every arrangement of sibling declarations

use classmodel::{format, parse};
use proptest::prelude::*;

const PREAMBLE: &str = "/*\nNotice.\n*/\n\n/*\nPackage shapes.\n*/\npackage shapes\n";

/// Method signatures in canonical order
const METHODS: [&str; 6] = [
    "AsString() string",
    "GetArea() float64",
    "GetCorners() []Point",
    "Resize(factor float64)",
    "Rotate(degrees float64) error",
    "ToPolygon() (points []Point, closed bool)",
];

/// Module lines in canonical order
const MODULES: [&str; 4] = [
    "fmt \"fmt\"",
    "geo \"github.com/example/geometry\"",
    "mat \"math\"",
    "sts \"strings\"",
];

/// Aspect names in canonical order
const ASPECTS: [&str; 5] = ["Closed", "drawable", "Movable", "Scaled", "visible"];

fn aspect(
    identifier: &str,
    methods: &[&str],
) -> String {
    let mut text = format!(
        "\n/*\n{} is a test aspect.\n*/\ntype {} interface {{\n\t// Methods",
        identifier, identifier
    );
    for method in methods {
        text.push_str("\n\t");
        text.push_str(method);
    }
    text.push_str("\n}\n");
    text
}

fn interfaces(aspects: &[String]) -> String {
    format!(
        "{}\n// INTERFACES\n\n// Aspects\n{}",
        PREAMBLE,
        aspects.concat()
    )
}

fn imports(modules: &[&str]) -> String {
    let mut text = format!("{}\nimport (", PREAMBLE);
    for module in modules {
        text.push_str("\n\t");
        text.push_str(module);
    }
    text.push_str("\n)\n");
    text
}

proptest! {
    #[test]
    fn test_methods_sorted(methods in Just(METHODS.to_vec()).prop_shuffle()) {
        let source = interfaces(&[aspect("Shape", &methods)]);
        let expected = interfaces(&[aspect("Shape", &METHODS)]);
        let formatted = format(&parse(&source).unwrap());
        prop_assert_eq!(formatted, expected);
    }

    #[test]
    fn test_aspects_sorted(names in Just(ASPECTS.to_vec()).prop_shuffle()) {
        let blocks: Vec<String> = names.iter().map(|n| aspect(n, &["Reset()"])).collect();
        let canonical: Vec<String> = ASPECTS.iter().map(|n| aspect(n, &["Reset()"])).collect();
        let formatted = format(&parse(&interfaces(&blocks)).unwrap());
        prop_assert_eq!(formatted, interfaces(&canonical));
    }

    #[test]
    fn test_modules_sorted_by_locator(modules in Just(MODULES.to_vec()).prop_shuffle()) {
        let formatted = format(&parse(&imports(&modules)).unwrap());
        prop_assert_eq!(formatted, imports(&MODULES));
    }

    #[test]
    fn test_sorting_is_idempotent(methods in Just(METHODS.to_vec()).prop_shuffle()) {
        let source = interfaces(&[aspect("Shape", &methods)]);
        let once = format(&parse(&source).unwrap());
        let twice = format(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }
}
