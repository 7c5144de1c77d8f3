//! Canonical ordering of sibling declarations

use super::ast::*;

/// Suffix stripped from class identifiers before ranking
pub const CLASS_SUFFIX: &str = "ClassLike";
/// Suffix stripped from instance identifiers before ranking
pub const INSTANCE_SUFFIX: &str = "Like";

/// Key a declaration is ranked by within its section
pub trait Ranked {
    fn rank_key(&self) -> String;
}

/// Stable sort by rank key
pub fn canonical_sort<T: Ranked>(items: &mut [T]) {
    items.sort_by_cached_key(|item| item.rank_key());
}

/// Lowercase class name without its `ClassLike` suffix
pub fn class_key(identifier: &str) -> String {
    identifier
        .strip_suffix(CLASS_SUFFIX)
        .unwrap_or(identifier)
        .to_lowercase()
}

/// Lowercase instance name without its `Like` suffix
pub fn instance_key(identifier: &str) -> String {
    identifier
        .strip_suffix(INSTANCE_SUFFIX)
        .unwrap_or(identifier)
        .to_lowercase()
}

impl Ranked for Aspect {
    fn rank_key(&self) -> String {
        self.declaration.identifier.to_lowercase()
    }
}

impl Ranked for Class {
    fn rank_key(&self) -> String {
        class_key(&self.declaration.identifier)
    }
}

impl Ranked for Instance {
    fn rank_key(&self) -> String {
        instance_key(&self.declaration.identifier)
    }
}

impl Ranked for Constructor {
    fn rank_key(&self) -> String {
        self.identifier.to_lowercase()
    }
}

impl Ranked for Function {
    fn rank_key(&self) -> String {
        self.identifier.to_lowercase()
    }
}

impl Ranked for Method {
    fn rank_key(&self) -> String {
        self.identifier.to_lowercase()
    }
}

impl Ranked for Specialization {
    fn rank_key(&self) -> String {
        self.declaration.identifier.to_lowercase()
    }
}

impl Ranked for Functional {
    fn rank_key(&self) -> String {
        self.declaration.identifier.to_lowercase()
    }
}

// Locators compare byte-wise, case included.
impl Ranked for Module {
    fn rank_key(&self) -> String {
        self.text.clone()
    }
}
