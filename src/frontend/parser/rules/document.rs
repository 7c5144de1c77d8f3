//! Document, header and imports

use crate::frontend::lexer::TokenKind;
use crate::frontend::parser::ast::{Document, Header, Imports, Module, Notice};
use crate::frontend::parser::error::ParseError;
use crate::frontend::parser::grammar::Rule;
use crate::frontend::parser::ordering::canonical_sort;
use crate::frontend::parser::state::ParserState;

impl<'a> ParserState<'a> {
    /// `document EOF`
    pub fn parse_source(&mut self) -> Result<Document, ParseError> {
        const RULES: &[Rule] = &[Rule::Source, Rule::Document];

        let document = self.parse_document()?;
        let document = self.require(document, "document", RULES)?;
        self.expect(TokenKind::Eof, None, "EOF", RULES)?;
        Ok(document)
    }

    /// `notice header imports? types? interfaces?`
    pub(crate) fn parse_document(&mut self) -> Result<Option<Document>, ParseError> {
        let Some(notice) = self.parse_notice()? else {
            return Ok(None);
        };

        let header = self.parse_header()?;
        let header = self.require(
            header,
            "header",
            &[
                Rule::Document,
                Rule::Notice,
                Rule::Header,
                Rule::Imports,
                Rule::Types,
                Rule::Interfaces,
            ],
        )?;

        let imports = self.parse_imports()?;
        let types = self.parse_types()?;
        let interfaces = self.parse_interfaces()?;

        Ok(Some(Document::new(notice, header, imports, types, interfaces)))
    }

    /// `COMMENT`
    pub(crate) fn parse_notice(&mut self) -> Result<Option<Notice>, ParseError> {
        Ok(self
            .take(TokenKind::Comment, None)?
            .map(|token| Notice::new(token.value)))
    }

    /// `COMMENT "package" IDENTIFIER`
    pub(crate) fn parse_header(&mut self) -> Result<Option<Header>, ParseError> {
        let Some(comment) = self.take(TokenKind::Comment, None)? else {
            return Ok(None);
        };
        self.expect_keyword("package", &[Rule::Header])?;
        let identifier = self.expect_identifier(&[Rule::Header])?;
        Ok(Some(Header::new(comment.value, identifier)))
    }

    /// `"import" "(" modules? ")"`
    pub(crate) fn parse_imports(&mut self) -> Result<Option<Imports>, ParseError> {
        const RULES: &[Rule] = &[Rule::Imports, Rule::Modules, Rule::Module];

        if !self.take_keyword("import")? {
            return Ok(None);
        }
        self.expect_delimiter("(", RULES)?;
        let modules = self.parse_modules()?.unwrap_or_default();
        self.expect_delimiter(")", RULES)?;
        Ok(Some(Imports::new(modules)))
    }

    /// `module+`, ordered by locator
    pub(crate) fn parse_modules(&mut self) -> Result<Option<Vec<Module>>, ParseError> {
        let Some(first) = self.parse_module()? else {
            return Ok(None);
        };
        let mut modules = vec![first];
        while let Some(module) = self.parse_module()? {
            modules.push(module);
        }
        canonical_sort(&mut modules);
        Ok(Some(modules))
    }

    /// `IDENTIFIER TEXT`
    pub(crate) fn parse_module(&mut self) -> Result<Option<Module>, ParseError> {
        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        let text = self.expect(TokenKind::Text, None, "TEXT", &[Rule::Module])?;
        Ok(Some(Module::new(identifier, text.value)))
    }
}
