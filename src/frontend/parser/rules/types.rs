//! Type declarations: specializations, enumerations and functionals

use crate::frontend::lexer::TokenKind;
use crate::frontend::parser::ast::{
    Declaration, Enumeration, Functional, Parameter, Specialization, Types, Values,
};
use crate::frontend::parser::error::ParseError;
use crate::frontend::parser::grammar::Rule;
use crate::frontend::parser::state::ParserState;

impl<'a> ParserState<'a> {
    /// `COMMENT "type" IDENTIFIER ("[" parameters "]")?`
    pub(crate) fn parse_declaration(&mut self) -> Result<Option<Declaration>, ParseError> {
        const RULES: &[Rule] = &[Rule::Declaration, Rule::Parameters];

        let Some(comment) = self.take(TokenKind::Comment, None)? else {
            return Ok(None);
        };
        self.expect_keyword("type", RULES)?;
        let identifier = self.expect_identifier(RULES)?;

        let mut parameters = Vec::new();
        if self.take_delimiter("[")? {
            let parsed = self.parse_parameters()?;
            parameters = self.require(parsed, "parameters", RULES)?;
            self.expect_delimiter("]", RULES)?;
        }

        Ok(Some(Declaration::new(comment.value, identifier, parameters)))
    }

    /// `"// TYPES" specializations? functionals?`
    pub(crate) fn parse_types(&mut self) -> Result<Option<Types>, ParseError> {
        if !self.take_note("// TYPES")? {
            return Ok(None);
        }
        let specializations = self.parse_sorted_section(
            "// Specializations",
            "specialization",
            &[Rule::Specializations, Rule::Specialization],
            Self::parse_specialization,
        )?;
        let functionals = self.parse_sorted_section(
            "// Functionals",
            "functional",
            &[Rule::Functionals, Rule::Functional],
            Self::parse_functional,
        )?;
        Ok(Some(Types::new(
            specializations.unwrap_or_default(),
            functionals.unwrap_or_default(),
        )))
    }

    /// `declaration abstraction enumeration?`
    pub(crate) fn parse_specialization(&mut self) -> Result<Option<Specialization>, ParseError> {
        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        let abstraction = self.parse_abstraction()?;
        let abstraction = self.require(
            abstraction,
            "abstraction",
            &[
                Rule::Specialization,
                Rule::Declaration,
                Rule::Abstraction,
                Rule::Enumeration,
            ],
        )?;
        let enumeration = self.parse_enumeration()?;
        Ok(Some(Specialization::new(declaration, abstraction, enumeration)))
    }

    /// `"const" "(" values ")"`
    pub(crate) fn parse_enumeration(&mut self) -> Result<Option<Enumeration>, ParseError> {
        const RULES: &[Rule] = &[Rule::Enumeration, Rule::Values];

        if !self.take_keyword("const")? {
            return Ok(None);
        }
        self.expect_delimiter("(", RULES)?;
        let values = self.parse_values()?;
        let values = self.require(values, "values", RULES)?;
        self.expect_delimiter(")", RULES)?;
        Ok(Some(Enumeration::new(values)))
    }

    /// `parameter "=" "iota" IDENTIFIER*`
    pub(crate) fn parse_values(&mut self) -> Result<Option<Values>, ParseError> {
        const RULES: &[Rule] = &[Rule::Values, Rule::Parameter];

        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        let abstraction = self.parse_abstraction()?;
        let abstraction = self.require(abstraction, "abstraction", RULES)?;
        self.expect_delimiter("=", RULES)?;
        self.expect_keyword("iota", RULES)?;

        let mut identifiers = Vec::new();
        while let Some(identifier) = self.take_identifier()? {
            identifiers.push(identifier);
        }

        Ok(Some(Values::new(
            Parameter::new(identifier, abstraction),
            identifiers,
        )))
    }

    /// `declaration "func" "(" parameters? ")" result`
    pub(crate) fn parse_functional(&mut self) -> Result<Option<Functional>, ParseError> {
        const RULES: &[Rule] = &[
            Rule::Functional,
            Rule::Declaration,
            Rule::Parameters,
            Rule::Result,
        ];

        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_keyword("func", RULES)?;
        self.expect_delimiter("(", RULES)?;
        let parameters = self.parse_parameters()?.unwrap_or_default();
        self.expect_delimiter(")", RULES)?;
        let result = self.parse_result()?;
        let result = self.require(result, "result", RULES)?;
        Ok(Some(Functional::new(declaration, parameters, result)))
    }
}
