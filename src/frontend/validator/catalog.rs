//! Lookup tables built from a document before validation

use crate::frontend::parser::ast::*;
use crate::frontend::parser::ordering::{class_key, instance_key};
use indexmap::IndexMap;

/// Declarations of one document keyed the way they are matched up, every
/// table sorted by key.
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    /// Modules by lowercase alias
    pub modules: IndexMap<String, &'a Module>,
    /// Specializations by lowercase identifier
    pub specializations: IndexMap<String, &'a Specialization>,
    /// Functionals by lowercase identifier
    pub functionals: IndexMap<String, &'a Functional>,
    /// Aspects by lowercase identifier
    pub aspects: IndexMap<String, &'a Aspect>,
    /// Classes by lowercase identifier without `ClassLike`
    pub classes: IndexMap<String, &'a Class>,
    /// Instances by lowercase identifier without `Like`
    pub instances: IndexMap<String, &'a Instance>,
}

impl<'a> Catalog<'a> {
    pub fn extract(document: &'a Document) -> Self {
        let mut catalog = Catalog {
            modules: table(document.modules(), |m| m.identifier.to_lowercase()),
            specializations: table(document.specializations(), |s| {
                s.declaration.identifier.to_lowercase()
            }),
            functionals: table(document.functionals(), |f| {
                f.declaration.identifier.to_lowercase()
            }),
            aspects: table(document.aspects(), |a| a.declaration.identifier.to_lowercase()),
            classes: table(document.classes(), |c| class_key(&c.declaration.identifier)),
            instances: table(document.instances(), |i| {
                instance_key(&i.declaration.identifier)
            }),
        };
        catalog.sort();
        catalog
    }

    fn sort(&mut self) {
        self.modules.sort_keys();
        self.specializations.sort_keys();
        self.functionals.sort_keys();
        self.aspects.sort_keys();
        self.classes.sort_keys();
        self.instances.sort_keys();
    }

    /// Whether an alias names an imported module
    pub fn has_module(
        &self,
        alias: &str,
    ) -> bool {
        self.modules.contains_key(&alias.to_lowercase())
    }

    pub fn class_keys(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    pub fn instance_keys(&self) -> Vec<String> {
        self.instances.keys().cloned().collect()
    }
}

fn table<'a, T>(
    items: &'a [T],
    key: impl Fn(&T) -> String,
) -> IndexMap<String, &'a T> {
    items.iter().map(|item| (key(item), item)).collect()
}
