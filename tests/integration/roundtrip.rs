//! Round-trip formatting over the fixture files

use crate::{fixture, fixture_names};
use classmodel::frontend::parser::parse_with_capacity;
use classmodel::{format, parse, Frontend};

#[test]
fn test_fixtures_are_canonical() {
    let names = fixture_names();
    assert!(names.len() >= 3, "fixtures missing: {:?}", names);
    for name in names {
        let source = fixture(&name);
        let document = parse(&source).unwrap_or_else(|err| panic!("{}: {}", name, err));
        assert_eq!(format(&document), source, "{} is not reproduced", name);
    }
}

#[test]
fn test_tree_round_trip() {
    for name in fixture_names() {
        let document = parse(&fixture(&name)).unwrap();
        let reparsed = parse(&format(&document)).unwrap();
        assert_eq!(reparsed, document, "{}", name);
    }
}

#[test]
fn test_queue_capacity_does_not_change_result() {
    let source = fixture("collections.model");
    let expected = parse(&source).unwrap();
    for capacity in [0, 1, 2, 64] {
        assert_eq!(parse_with_capacity(&source, capacity).unwrap(), expected);
    }
}

#[test]
fn test_minimal_document() {
    let document = parse(&fixture("minimal.model")).unwrap();
    assert_eq!(document.header.identifier, "widgets");
    assert!(document.imports.is_none());
    assert!(document.types.is_none());
    assert!(document.interfaces.is_none());
}

#[test]
fn test_collections_structure() {
    let document = parse(&fixture("collections.model")).unwrap();
    let modules: Vec<&str> = document
        .modules()
        .iter()
        .map(|m| m.identifier.as_str())
        .collect();
    assert_eq!(modules, vec!["fmt", "age"]);

    let aspects: Vec<&str> = document
        .aspects()
        .iter()
        .map(|a| a.declaration.identifier.as_str())
        .collect();
    assert_eq!(aspects, vec!["Sequential", "Sortable"]);

    let list = &document.classes()[1];
    assert_eq!(list.declaration.identifier, "ListClassLike");
    assert_eq!(list.constants.len(), 1);
    assert_eq!(list.constructors.len(), 3);
    assert_eq!(list.functions[0].parameters.len(), 3);
}

#[test]
fn test_canonical_check() {
    let frontend = Frontend::new();
    let source = fixture("widgets.model");
    assert!(frontend.is_canonical(&source).unwrap());

    let spaced = source.replace("\tGetSize() int", "\tGetSize()   int");
    assert!(!frontend.is_canonical(&spaced).unwrap());
    assert_eq!(frontend.format(&spaced).unwrap(), source);
}
