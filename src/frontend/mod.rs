//! Notation frontend
//!
//! This module contains the lexer, parser, formatter, validator and the
//! generic substitution over parsed documents.

use crate::util::config::ParserConfig;
use thiserror::Error;
use tracing::debug;

pub mod formatter;
pub mod generics;
pub mod lexer;
pub mod parser;
pub mod validator;

use generics::GenericsError;
use parser::{Document, ParseError};
use validator::ValidationError;

/// Processing context shared by the frontend stages
#[derive(Debug, Clone)]
pub struct Frontend {
    /// Capacity of the token queue
    queue_capacity: usize,
}

impl Default for Frontend {
    fn default() -> Self {
        Self {
            queue_capacity: parser::DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl Frontend {
    /// Create a frontend with default settings
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frontend from parser settings
    pub fn with_config(config: &ParserConfig) -> Self {
        Self {
            queue_capacity: config.queue_capacity.max(1),
        }
    }

    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    /// Parse source text
    pub fn parse(
        &self,
        source: &str,
    ) -> Result<Document, FrontendError> {
        Ok(parser::parse_with_capacity(source, self.queue_capacity)?)
    }

    /// Parse and validate source text
    pub fn check(
        &self,
        source: &str,
    ) -> Result<Document, FrontendError> {
        debug!("Checking source ({} bytes)", source.len());
        let document = self.parse(source)?;
        validator::validate(&document)?;
        debug!("Check successful");
        Ok(document)
    }

    /// Parse source text and render it canonically
    pub fn format(
        &self,
        source: &str,
    ) -> Result<String, FrontendError> {
        let document = self.parse(source)?;
        Ok(formatter::format(&document))
    }

    /// Whether the source text is already in canonical form
    pub fn is_canonical(
        &self,
        source: &str,
    ) -> Result<bool, FrontendError> {
        Ok(self.format(source)? == source)
    }
}

/// Frontend errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generics(#[from] GenericsError),
}

impl FrontendError {
    /// Short name of the failing stage
    pub fn stage(&self) -> &'static str {
        match self {
            FrontendError::Parse(ParseError::Lexical { .. }) => "lexical",
            FrontendError::Parse(_) => "syntax",
            FrontendError::Validation(_) => "semantic",
            FrontendError::Generics(_) => "generics",
        }
    }

    /// First line of the message
    pub fn headline(&self) -> String {
        match self {
            FrontendError::Parse(err) => err.headline(),
            other => other.to_string().lines().next().unwrap_or_default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "/*\nNotice.\n*/\n\n/*\nPackage widgets.\n*/\npackage widgets\n";

    #[test]
    fn test_check_minimal_document() {
        let document = Frontend::new().check(MINIMAL).unwrap();
        assert_eq!(document.header.identifier, "widgets");
        assert!(document.imports.is_none());
        assert!(document.types.is_none());
        assert!(document.interfaces.is_none());
    }

    #[test]
    fn test_minimal_document_is_canonical() {
        assert!(Frontend::new().is_canonical(MINIMAL).unwrap());
        let loose = MINIMAL.replace("package widgets", "package   widgets");
        assert!(!Frontend::new().is_canonical(&loose).unwrap());
    }

    #[test]
    fn test_queue_capacity_from_config() {
        let frontend = Frontend::with_config(&ParserConfig { queue_capacity: 0 });
        assert_eq!(frontend.queue_capacity(), 1);
        assert!(frontend.parse(MINIMAL).is_ok());
    }

    #[test]
    fn test_error_stages() {
        let frontend = Frontend::new();

        let lexical = frontend.parse(&format!("{}$", MINIMAL)).unwrap_err();
        assert_eq!(lexical.stage(), "lexical");

        let syntax = frontend.parse("package widgets\n").unwrap_err();
        assert_eq!(syntax.stage(), "syntax");
        assert!(syntax.headline().starts_with("An unexpected token"));

        let source = format!(
            "{}\nimport (\n\tform \"fmt\"\n)\n",
            MINIMAL
        );
        let semantic = frontend.check(&source).unwrap_err();
        assert_eq!(semantic.stage(), "semantic");
        assert_eq!(
            semantic.headline(),
            "The length of the identifier for an imported module must be 3: form"
        );
    }
}
