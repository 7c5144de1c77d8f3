//! Generic substitution
//!
//! An instance that claims a generic aspect, e.g. `Sequence[Widget]`,
//! inherits the aspect's methods with every generic parameter replaced by
//! the matching argument of the claim.

use crate::frontend::formatter::Formatter;
use crate::frontend::parser::ast::*;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenericsError {
    #[error("Missing the following aspect definition: {identifier}")]
    MissingAspect { identifier: String },

    #[error("The aspect {aspect} takes {expected} generic arguments but {found} were given")]
    Arity {
        aspect: String,
        expected: usize,
        found: usize,
    },
}

/// Aspect declared with exactly this identifier
pub fn find_aspect<'a>(
    document: &'a Document,
    identifier: &str,
) -> Result<&'a Aspect, GenericsError> {
    document
        .aspects()
        .iter()
        .find(|aspect| aspect.declaration.identifier == identifier)
        .ok_or_else(|| GenericsError::MissingAspect {
            identifier: identifier.to_string(),
        })
}

/// Methods of the aspect a claim names, specialized for the claim
pub fn specialize_claim(
    document: &Document,
    claim: &Abstraction,
) -> Result<Vec<Method>, GenericsError> {
    let aspect = find_aspect(document, &claim.identifier)?;
    specialize_methods(aspect, claim)
}

/// The aspect's methods with its generic parameters bound to the claim's
/// arguments
pub fn specialize_methods(
    aspect: &Aspect,
    claim: &Abstraction,
) -> Result<Vec<Method>, GenericsError> {
    let parameters = &aspect.declaration.parameters;
    if parameters.len() != claim.arguments.len() {
        return Err(GenericsError::Arity {
            aspect: aspect.declaration.identifier.clone(),
            expected: parameters.len(),
            found: claim.arguments.len(),
        });
    }

    let bindings: IndexMap<&str, &Abstraction> = parameters
        .iter()
        .map(|parameter| parameter.identifier.as_str())
        .zip(claim.arguments.iter())
        .collect();
    debug!(
        "Specializing {} with {} bindings",
        aspect.declaration.identifier,
        bindings.len()
    );

    let mut substitution = Substitution {
        bindings,
        formatter: Formatter::new(),
    };
    Ok(aspect
        .methods
        .iter()
        .map(|method| substitution.method(method))
        .collect())
}

struct Substitution<'a> {
    bindings: IndexMap<&'a str, &'a Abstraction>,
    formatter: Formatter,
}

impl Substitution<'_> {
    fn method(
        &mut self,
        method: &Method,
    ) -> Method {
        Method::new(
            method.identifier.clone(),
            self.parameters(&method.parameters),
            method.result.as_ref().map(|result| self.result(result)),
        )
    }

    fn result(
        &mut self,
        result: &ResultType,
    ) -> ResultType {
        match result {
            ResultType::Abstraction(abstraction) => {
                ResultType::Abstraction(self.abstraction(abstraction))
            }
            ResultType::Parameters(parameters) => {
                ResultType::Parameters(self.parameters(parameters))
            }
        }
    }

    fn parameters(
        &mut self,
        parameters: &[Parameter],
    ) -> Vec<Parameter> {
        parameters
            .iter()
            .map(|parameter| {
                Parameter::new(
                    parameter.identifier.clone(),
                    self.abstraction(&parameter.abstraction),
                )
            })
            .collect()
    }

    fn abstraction(
        &mut self,
        abstraction: &Abstraction,
    ) -> Abstraction {
        let prefix = abstraction.prefix.as_ref().map(|prefix| self.prefix(prefix));

        let bound = if abstraction.arguments.is_empty() {
            self.bindings.get(abstraction.identifier.as_str()).copied()
        } else {
            None
        };
        let Some(argument) = bound else {
            let arguments = abstraction
                .arguments
                .iter()
                .map(|argument| self.abstraction(argument))
                .collect();
            return Abstraction::new(prefix, abstraction.identifier.clone(), arguments);
        };

        match (prefix, &argument.prefix) {
            (None, _) => argument.clone(),
            (Some(prefix), None) => Abstraction::new(
                Some(prefix),
                argument.identifier.clone(),
                argument.arguments.clone(),
            ),
            // Two prefixes cannot be stacked; the concrete type becomes the
            // identifier.
            (Some(prefix), Some(_)) => Abstraction::new(
                Some(prefix),
                self.formatter.format_abstraction(argument),
                Vec::new(),
            ),
        }
    }

    /// Map keys name a type too and are substituted the same way
    fn prefix(
        &mut self,
        prefix: &Prefix,
    ) -> Prefix {
        match prefix {
            Prefix::Map(key) => match self.bindings.get(key.as_str()) {
                Some(argument) => Prefix::Map(self.formatter.format_abstraction(argument)),
                None => prefix.clone(),
            },
            _ => prefix.clone(),
        }
    }
}
