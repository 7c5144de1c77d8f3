//! Declaration tree
//!
//! Every node is a plain value built once by its constructor. Optional
//! sequences are empty vectors when absent from the source.

use serde::Serialize;

/// Root of a parsed source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub notice: Notice,
    pub header: Header,
    pub imports: Option<Imports>,
    pub types: Option<Types>,
    pub interfaces: Option<Interfaces>,
}

impl Document {
    pub fn new(
        notice: Notice,
        header: Header,
        imports: Option<Imports>,
        types: Option<Types>,
        interfaces: Option<Interfaces>,
    ) -> Self {
        Self {
            notice,
            header,
            imports,
            types,
            interfaces,
        }
    }

    /// Imported modules, empty when there is no import block
    pub fn modules(&self) -> &[Module] {
        self.imports.as_ref().map_or(&[], |i| i.modules.as_slice())
    }

    pub fn specializations(&self) -> &[Specialization] {
        self.types
            .as_ref()
            .map_or(&[], |t| t.specializations.as_slice())
    }

    pub fn functionals(&self) -> &[Functional] {
        self.types.as_ref().map_or(&[], |t| t.functionals.as_slice())
    }

    pub fn aspects(&self) -> &[Aspect] {
        self.interfaces.as_ref().map_or(&[], |i| i.aspects.as_slice())
    }

    pub fn classes(&self) -> &[Class] {
        self.interfaces.as_ref().map_or(&[], |i| i.classes.as_slice())
    }

    pub fn instances(&self) -> &[Instance] {
        self.interfaces
            .as_ref()
            .map_or(&[], |i| i.instances.as_slice())
    }
}

/// Leading notice comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub comment: String,
}

impl Notice {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: comment.into(),
        }
    }
}

/// `COMMENT package IDENTIFIER`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub comment: String,
    pub identifier: String,
}

impl Header {
    pub fn new(
        comment: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            comment: comment.into(),
            identifier: identifier.into(),
        }
    }
}

/// `import ( ... )` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Imports {
    pub modules: Vec<Module>,
}

impl Imports {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }
}

/// Imported module: alias and quoted locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub identifier: String,
    /// Locator text including its quotes
    pub text: String,
}

impl Module {
    pub fn new(
        identifier: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// `// TYPES` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Types {
    pub specializations: Vec<Specialization>,
    pub functionals: Vec<Functional>,
}

impl Types {
    pub fn new(
        specializations: Vec<Specialization>,
        functionals: Vec<Functional>,
    ) -> Self {
        Self {
            specializations,
            functionals,
        }
    }
}

/// `// INTERFACES` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interfaces {
    pub aspects: Vec<Aspect>,
    pub classes: Vec<Class>,
    pub instances: Vec<Instance>,
}

impl Interfaces {
    pub fn new(
        aspects: Vec<Aspect>,
        classes: Vec<Class>,
        instances: Vec<Instance>,
    ) -> Self {
        Self {
            aspects,
            classes,
            instances,
        }
    }
}

/// `COMMENT type IDENTIFIER [parameters]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub comment: String,
    pub identifier: String,
    /// Generic parameters
    pub parameters: Vec<Parameter>,
}

impl Declaration {
    pub fn new(
        comment: impl Into<String>,
        identifier: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            comment: comment.into(),
            identifier: identifier.into(),
            parameters,
        }
    }
}

/// Qualifier in front of an abstraction's identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Prefix {
    /// `alias.`
    Alias(String),
    /// `[]`
    Array,
    /// `chan `
    Channel,
    /// `map[key]`
    Map(String),
}

/// A type reference such as `[]col.Sequence[Item]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Abstraction {
    pub prefix: Option<Prefix>,
    pub identifier: String,
    pub arguments: Vec<Abstraction>,
}

impl Abstraction {
    pub fn new(
        prefix: Option<Prefix>,
        identifier: impl Into<String>,
        arguments: Vec<Abstraction>,
    ) -> Self {
        Self {
            prefix,
            identifier: identifier.into(),
            arguments,
        }
    }

    /// Abstraction with no prefix and no arguments
    pub fn named(identifier: impl Into<String>) -> Self {
        Self::new(None, identifier, Vec::new())
    }
}

/// `IDENTIFIER abstraction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub identifier: String,
    pub abstraction: Abstraction,
}

impl Parameter {
    pub fn new(
        identifier: impl Into<String>,
        abstraction: Abstraction,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            abstraction,
        }
    }
}

/// Either a single abstraction or named return values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ResultType {
    Abstraction(Abstraction),
    Parameters(Vec<Parameter>),
}

/// `Name(parameter?) abstraction?`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub identifier: String,
    pub parameter: Option<Parameter>,
    pub abstraction: Option<Abstraction>,
}

impl Attribute {
    pub fn new(
        identifier: impl Into<String>,
        parameter: Option<Parameter>,
        abstraction: Option<Abstraction>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            parameter,
            abstraction,
        }
    }
}

/// `Name() abstraction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constant {
    pub identifier: String,
    pub abstraction: Abstraction,
}

impl Constant {
    pub fn new(
        identifier: impl Into<String>,
        abstraction: Abstraction,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            abstraction,
        }
    }
}

/// `Name(parameters?) abstraction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constructor {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub abstraction: Abstraction,
}

impl Constructor {
    pub fn new(
        identifier: impl Into<String>,
        parameters: Vec<Parameter>,
        abstraction: Abstraction,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            parameters,
            abstraction,
        }
    }
}

/// `Name(parameters?) result`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub result: ResultType,
}

impl Function {
    pub fn new(
        identifier: impl Into<String>,
        parameters: Vec<Parameter>,
        result: ResultType,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            parameters,
            result,
        }
    }
}

/// `Name(parameters?) result?`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub result: Option<ResultType>,
}

impl Method {
    pub fn new(
        identifier: impl Into<String>,
        parameters: Vec<Parameter>,
        result: Option<ResultType>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            parameters,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aspect {
    pub declaration: Declaration,
    pub methods: Vec<Method>,
}

impl Aspect {
    pub fn new(
        declaration: Declaration,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            declaration,
            methods,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class {
    pub declaration: Declaration,
    pub constants: Vec<Constant>,
    pub constructors: Vec<Constructor>,
    pub functions: Vec<Function>,
}

impl Class {
    pub fn new(
        declaration: Declaration,
        constants: Vec<Constant>,
        constructors: Vec<Constructor>,
        functions: Vec<Function>,
    ) -> Self {
        Self {
            declaration,
            constants,
            constructors,
            functions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    pub declaration: Declaration,
    pub attributes: Vec<Attribute>,
    pub abstractions: Vec<Abstraction>,
    pub methods: Vec<Method>,
}

impl Instance {
    pub fn new(
        declaration: Declaration,
        attributes: Vec<Attribute>,
        abstractions: Vec<Abstraction>,
        methods: Vec<Method>,
    ) -> Self {
        Self {
            declaration,
            attributes,
            abstractions,
            methods,
        }
    }
}

/// `declaration abstraction enumeration?`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Specialization {
    pub declaration: Declaration,
    pub abstraction: Abstraction,
    pub enumeration: Option<Enumeration>,
}

impl Specialization {
    pub fn new(
        declaration: Declaration,
        abstraction: Abstraction,
        enumeration: Option<Enumeration>,
    ) -> Self {
        Self {
            declaration,
            abstraction,
            enumeration,
        }
    }
}

/// `const ( values )`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumeration {
    pub values: Values,
}

impl Enumeration {
    pub fn new(values: Values) -> Self {
        Self { values }
    }
}

/// `First Type = iota` followed by further value names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Values {
    /// The typed leading value
    pub parameter: Parameter,
    pub identifiers: Vec<String>,
}

impl Values {
    pub fn new(
        parameter: Parameter,
        identifiers: Vec<String>,
    ) -> Self {
        Self {
            parameter,
            identifiers,
        }
    }

    /// All value names in source order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.parameter.identifier.as_str())
            .chain(self.identifiers.iter().map(String::as_str))
    }
}

/// `declaration func(parameters?) result`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Functional {
    pub declaration: Declaration,
    pub parameters: Vec<Parameter>,
    pub result: ResultType,
}

impl Functional {
    pub fn new(
        declaration: Declaration,
        parameters: Vec<Parameter>,
        result: ResultType,
    ) -> Self {
        Self {
            declaration,
            parameters,
            result,
        }
    }
}
