//! Validation over the fixture files and targeted edits of them

use crate::{fixture, fixture_names};
use classmodel::frontend::validator::DeclarationKind;
use classmodel::{parse, validate, ValidationError};

fn check(source: &str) -> Result<(), ValidationError> {
    validate(&parse(source).unwrap())
}

fn edited(
    name: &str,
    from: &str,
    to: &str,
) -> String {
    let source = fixture(name);
    assert!(source.contains(from), "{} does not contain {:?}", name, from);
    source.replacen(from, to, 1)
}

#[test]
fn test_fixtures_validate() {
    for name in fixture_names() {
        assert_eq!(check(&fixture(&name)), Ok(()), "{}", name);
    }
}

#[test]
fn test_unused_aspect_then_removed() {
    let source = edited("collections.model", "\tSortable[V]\n", "");
    assert_eq!(
        check(&source),
        Err(ValidationError::Unused {
            kind: DeclarationKind::Aspect,
            identifier: "Sortable".to_string(),
        })
    );

    let start = source.find("/*\nSortable").unwrap();
    let end = source.find("// Classes").unwrap();
    let mut removed = source.clone();
    removed.replace_range(start..end, "");
    assert_eq!(check(&removed), Ok(()));
}

#[test]
fn test_pairing_reports_both_lists() {
    let source = edited(
        "collections.model",
        "type CatalogLike[",
        "type DirectoryLike[",
    );
    let err = check(&source).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Mismatched {
            classes: vec!["catalog".to_string(), "list".to_string()],
            instances: vec!["directory".to_string(), "list".to_string()],
        }
    );
    let message = err.to_string();
    assert!(message.contains("[catalog, list]"));
    assert!(message.contains("[directory, list]"));
}

#[test]
fn test_question_attribute_type() {
    let source = edited("widgets.model", "IsVisible() bool", "IsReady() int");
    assert_eq!(
        check(&source),
        Err(ValidationError::BooleanType {
            identifier: "IsReady".to_string(),
        })
    );

    let source = edited("widgets.model", "IsVisible() bool", "GetCount() int");
    assert_eq!(check(&source), Ok(()));
}

#[test]
fn test_alias_needs_import() {
    let source = edited("widgets.model", "fmt.Stringer", "xyz.Stringer");
    assert_eq!(
        check(&source),
        Err(ValidationError::UnknownModule {
            alias: "xyz".to_string(),
        })
    );

    let source = source.replacen(
        "\tfmt \"fmt\"\n",
        "\tfmt \"fmt\"\n\txyz \"example.com/xyz\"\n",
        1,
    );
    assert_eq!(check(&source), Ok(()));
}

#[test]
fn test_generic_aspect_claim() {
    use classmodel::frontend::generics::specialize_claim;
    use classmodel::Formatter;

    let document = parse(&fixture("collections.model")).unwrap();
    let list = &document.instances()[1];
    let claim = &list.abstractions[0];
    assert_eq!(claim.identifier, "Sequential");

    let methods = specialize_claim(&document, claim).unwrap();
    let mut formatter = Formatter::new();
    let rendered: Vec<String> = methods.iter().map(|m| formatter.format_method(m)).collect();
    assert_eq!(
        rendered,
        vec![
            "AsArray() []V",
            "GetIterator() age.IteratorLike[V]",
            "GetSize() int",
            "IsEmpty() bool",
        ]
    );
}
