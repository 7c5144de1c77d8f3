//! Semantic validator
//!
//! Checks a parsed document against the naming and usage rules of the
//! notation. Validation stops at the first violation. Checks run in a fixed
//! order: module aliases, class/instance pairing, then a walk over classes,
//! instances, aspects, specializations and functionals (each in key order),
//! and finally the search for declarations nothing references.

pub mod catalog;


pub use catalog::Catalog;

use crate::frontend::parser::ast::*;
use indexmap::IndexSet;
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Required length of an imported module alias
pub const ALIAS_LENGTH: usize = 3;

/// Prefixes that mark an attribute returning a boolean
pub const QUESTION_PREFIXES: &[&str] = &["Is", "Are", "Was", "Were", "Has", "Had"];

/// Kind of declaration that must be referenced somewhere in its package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Aspect,
    Specialization,
    Functional,
}

impl fmt::Display for DeclarationKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name = match self {
            DeclarationKind::Aspect => "aspect",
            DeclarationKind::Specialization => "specialization",
            DeclarationKind::Functional => "functional",
        };
        write!(f, "{}", name)
    }
}

/// First rule violation found in a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The length of the identifier for an imported module must be 3: {alias}")]
    ModuleAlias { alias: String },

    #[error(
        "Mismatched class and instance interfaces:\n[{}]\n[{}]",
        .classes.join(", "),
        .instances.join(", ")
    )]
    Mismatched {
        classes: Vec<String>,
        instances: Vec<String>,
    },

    #[error("Found an illegal attribute method name: {identifier}")]
    IllegalAttribute { identifier: String },

    #[error("A setter attribute takes one parameter and returns nothing: {identifier}")]
    Setter { identifier: String },

    #[error("A getter attribute takes no parameter and returns a value: {identifier}")]
    Getter { identifier: String },

    #[error("A boolean type cannot have a prefix: {identifier}")]
    BooleanPrefix { identifier: String },

    #[error("A question attribute must have a boolean type: {identifier}")]
    BooleanType { identifier: String },

    #[error("A boolean type cannot be a generic type: {identifier}")]
    BooleanGeneric { identifier: String },

    #[error("Unknown module alias: {alias}")]
    UnknownModule { alias: String },

    #[error("The following {kind} is declared but never referenced in this package: {identifier}")]
    Unused {
        kind: DeclarationKind,
        identifier: String,
    },
}

/// Validate a document, reporting the first violation
pub fn validate(document: &Document) -> Result<(), ValidationError> {
    let catalog = Catalog::extract(document);
    let mut validator = Validator::new(&catalog);
    let result = validator.run();
    match &result {
        Ok(()) => debug!("Validated package {}", document.header.identifier),
        Err(err) => debug!("Validation failed: {}", err),
    }
    result
}

/// Walk state: the tables being checked and the identifiers referenced so
/// far, in first-seen order.
pub struct Validator<'c, 'a> {
    catalog: &'c Catalog<'a>,
    referenced: IndexSet<String>,
    current: String,
}

impl<'c, 'a> Validator<'c, 'a> {
    pub fn new(catalog: &'c Catalog<'a>) -> Self {
        Self {
            catalog,
            referenced: IndexSet::new(),
            current: String::new(),
        }
    }

    /// Identifiers referenced by the walk so far
    pub fn referenced(&self) -> &IndexSet<String> {
        &self.referenced
    }

    pub fn run(&mut self) -> Result<(), ValidationError> {
        self.check_modules()?;
        self.check_pairing()?;

        let catalog = self.catalog;
        for class in catalog.classes.values() {
            self.class(class)?;
        }
        for instance in catalog.instances.values() {
            self.instance(instance)?;
        }
        for aspect in catalog.aspects.values() {
            self.aspect(aspect)?;
        }
        for specialization in catalog.specializations.values() {
            self.specialization(specialization)?;
        }
        for functional in catalog.functionals.values() {
            self.functional(functional)?;
        }

        self.check_usage()
    }

    fn check_modules(&self) -> Result<(), ValidationError> {
        for module in self.catalog.modules.values() {
            if module.identifier.chars().count() != ALIAS_LENGTH {
                return Err(ValidationError::ModuleAlias {
                    alias: module.identifier.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_pairing(&self) -> Result<(), ValidationError> {
        let classes = self.catalog.class_keys();
        let instances = self.catalog.instance_keys();
        if classes != instances {
            return Err(ValidationError::Mismatched { classes, instances });
        }
        Ok(())
    }

    fn check_usage(&self) -> Result<(), ValidationError> {
        let catalog = self.catalog;
        let declared = catalog
            .aspects
            .values()
            .map(|a| (DeclarationKind::Aspect, &a.declaration))
            .chain(
                catalog
                    .specializations
                    .values()
                    .map(|s| (DeclarationKind::Specialization, &s.declaration)),
            )
            .chain(
                catalog
                    .functionals
                    .values()
                    .map(|f| (DeclarationKind::Functional, &f.declaration)),
            );
        for (kind, declaration) in declared {
            if !self.referenced.contains(&declaration.identifier) {
                return Err(ValidationError::Unused {
                    kind,
                    identifier: declaration.identifier.clone(),
                });
            }
        }
        Ok(())
    }

    fn enter(
        &mut self,
        declaration: &Declaration,
    ) -> Result<(), ValidationError> {
        trace!("Validating {}", declaration.identifier);
        self.current = declaration.identifier.clone();
        self.parameters(&declaration.parameters)
    }

    fn class(
        &mut self,
        class: &Class,
    ) -> Result<(), ValidationError> {
        self.enter(&class.declaration)?;
        for constant in &class.constants {
            self.abstraction(&constant.abstraction)?;
        }
        for constructor in &class.constructors {
            self.parameters(&constructor.parameters)?;
            self.abstraction(&constructor.abstraction)?;
        }
        for function in &class.functions {
            self.parameters(&function.parameters)?;
            self.result(&function.result)?;
        }
        Ok(())
    }

    fn instance(
        &mut self,
        instance: &Instance,
    ) -> Result<(), ValidationError> {
        self.enter(&instance.declaration)?;
        for attribute in &instance.attributes {
            self.attribute(attribute)?;
        }
        for abstraction in &instance.abstractions {
            self.abstraction(abstraction)?;
        }
        self.methods(&instance.methods)
    }

    fn aspect(
        &mut self,
        aspect: &Aspect,
    ) -> Result<(), ValidationError> {
        self.enter(&aspect.declaration)?;
        self.methods(&aspect.methods)
    }

    fn specialization(
        &mut self,
        specialization: &Specialization,
    ) -> Result<(), ValidationError> {
        self.enter(&specialization.declaration)?;
        self.abstraction(&specialization.abstraction)?;
        if let Some(enumeration) = &specialization.enumeration {
            self.parameter(&enumeration.values.parameter)?;
        }
        Ok(())
    }

    fn functional(
        &mut self,
        functional: &Functional,
    ) -> Result<(), ValidationError> {
        self.enter(&functional.declaration)?;
        self.parameters(&functional.parameters)?;
        self.result(&functional.result)
    }

    fn methods(
        &mut self,
        methods: &[Method],
    ) -> Result<(), ValidationError> {
        for method in methods {
            self.parameters(&method.parameters)?;
            if let Some(result) = &method.result {
                self.result(result)?;
            }
        }
        Ok(())
    }

    fn attribute(
        &mut self,
        attribute: &Attribute,
    ) -> Result<(), ValidationError> {
        let identifier = &attribute.identifier;
        let shape = (&attribute.parameter, &attribute.abstraction);

        if identifier.starts_with("Get") {
            let (None, Some(abstraction)) = shape else {
                return Err(ValidationError::Getter {
                    identifier: identifier.clone(),
                });
            };
            return self.abstraction(abstraction);
        }

        if identifier.starts_with("Set") {
            let (Some(parameter), None) = shape else {
                return Err(ValidationError::Setter {
                    identifier: identifier.clone(),
                });
            };
            return self.parameter(parameter);
        }

        if QUESTION_PREFIXES.iter().any(|p| identifier.starts_with(p)) {
            let (None, Some(abstraction)) = shape else {
                return Err(ValidationError::Getter {
                    identifier: identifier.clone(),
                });
            };
            return boolean(identifier, abstraction);
        }

        Err(ValidationError::IllegalAttribute {
            identifier: identifier.clone(),
        })
    }

    fn result(
        &mut self,
        result: &ResultType,
    ) -> Result<(), ValidationError> {
        match result {
            ResultType::Abstraction(abstraction) => self.abstraction(abstraction),
            ResultType::Parameters(parameters) => self.parameters(parameters),
        }
    }

    fn parameters(
        &mut self,
        parameters: &[Parameter],
    ) -> Result<(), ValidationError> {
        for parameter in parameters {
            self.parameter(parameter)?;
        }
        Ok(())
    }

    fn parameter(
        &mut self,
        parameter: &Parameter,
    ) -> Result<(), ValidationError> {
        self.abstraction(&parameter.abstraction)
    }

    fn abstraction(
        &mut self,
        abstraction: &Abstraction,
    ) -> Result<(), ValidationError> {
        match &abstraction.prefix {
            Some(Prefix::Alias(alias)) if !self.catalog.has_module(alias) => {
                return Err(ValidationError::UnknownModule {
                    alias: alias.clone(),
                });
            }
            Some(Prefix::Map(key)) => self.reference(key),
            _ => {}
        }
        self.reference(&abstraction.identifier);
        for argument in &abstraction.arguments {
            self.abstraction(argument)?;
        }
        Ok(())
    }

    /// Record a use, ignoring a declaration's references to itself
    fn reference(
        &mut self,
        identifier: &str,
    ) {
        if identifier != self.current {
            self.referenced.insert(identifier.to_string());
        }
    }
}

fn boolean(
    identifier: &str,
    abstraction: &Abstraction,
) -> Result<(), ValidationError> {
    let identifier = identifier.to_string();
    if abstraction.prefix.is_some() {
        return Err(ValidationError::BooleanPrefix { identifier });
    }
    if abstraction.identifier != "bool" {
        return Err(ValidationError::BooleanType { identifier });
    }
    if !abstraction.arguments.is_empty() {
        return Err(ValidationError::BooleanGeneric { identifier });
    }
    Ok(())
}
