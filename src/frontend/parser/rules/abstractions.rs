//! Abstractions, parameters and results

use crate::frontend::lexer::TokenKind;
use crate::frontend::parser::ast::{Abstraction, Parameter, Prefix, ResultType};
use crate::frontend::parser::error::ParseError;
use crate::frontend::parser::grammar::Rule;
use crate::frontend::parser::state::ParserState;

impl<'a> ParserState<'a> {
    /// `"[" "]" | "map" "[" IDENTIFIER "]" | "chan" | IDENTIFIER "."`
    pub(crate) fn parse_prefix(&mut self) -> Result<Option<Prefix>, ParseError> {
        if let Some(open) = self.take(TokenKind::Delimiter, Some("["))? {
            if self.take_delimiter("]")? {
                return Ok(Some(Prefix::Array));
            }
            // `[` starting an argument list, not an array prefix
            self.push_back(open);
            return Ok(None);
        }

        if self.take_keyword("map")? {
            self.expect_delimiter("[", &[Rule::Prefix])?;
            let key = self.expect_identifier(&[Rule::Prefix])?;
            self.expect_delimiter("]", &[Rule::Prefix])?;
            return Ok(Some(Prefix::Map(key)));
        }

        if self.take_keyword("chan")? {
            return Ok(Some(Prefix::Channel));
        }

        if let Some(alias) = self.take(TokenKind::Identifier, None)? {
            if self.take_delimiter(".")? {
                return Ok(Some(Prefix::Alias(alias.value)));
            }
            self.push_back(alias);
        }
        Ok(None)
    }

    /// `prefix? IDENTIFIER ("[" arguments "]")?`
    pub(crate) fn parse_abstraction(&mut self) -> Result<Option<Abstraction>, ParseError> {
        const RULES: &[Rule] = &[Rule::Abstraction, Rule::Prefix, Rule::Arguments];

        let prefix = self.parse_prefix()?;
        let identifier = match prefix {
            Some(_) => self.expect_identifier(RULES)?,
            None => {
                let Some(token) = self.take(TokenKind::Identifier, None)? else {
                    return Ok(None);
                };
                // An identifier followed by `(` names the next method or
                // attribute.
                if let Some(open) = self.take(TokenKind::Delimiter, Some("("))? {
                    self.push_back(open);
                    self.push_back(token);
                    return Ok(None);
                }
                token.value
            }
        };

        let mut arguments = Vec::new();
        if self.take_delimiter("[")? {
            let parsed = self.parse_arguments()?;
            arguments = self.require(parsed, "arguments", RULES)?;
            self.expect_delimiter("]", RULES)?;
        }

        Ok(Some(Abstraction::new(prefix, identifier, arguments)))
    }

    /// `abstraction ("," abstraction)* ","?`
    pub(crate) fn parse_arguments(&mut self) -> Result<Option<Vec<Abstraction>>, ParseError> {
        let Some(first) = self.parse_abstraction()? else {
            return Ok(None);
        };
        let mut arguments = vec![first];
        while self.take_delimiter(",")? {
            match self.parse_abstraction()? {
                Some(argument) => arguments.push(argument),
                None => break,
            }
        }
        Ok(Some(arguments))
    }

    /// `IDENTIFIER abstraction`
    pub(crate) fn parse_parameter(&mut self) -> Result<Option<Parameter>, ParseError> {
        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        let abstraction = self.parse_abstraction()?;
        let abstraction = self.require(
            abstraction,
            "abstraction",
            &[Rule::Parameter, Rule::Abstraction],
        )?;
        Ok(Some(Parameter::new(identifier, abstraction)))
    }

    /// `parameter ("," parameter)* ","?`
    pub(crate) fn parse_parameters(&mut self) -> Result<Option<Vec<Parameter>>, ParseError> {
        let Some(first) = self.parse_parameter()? else {
            return Ok(None);
        };
        let mut parameters = vec![first];
        while self.take_delimiter(",")? {
            match self.parse_parameter()? {
                Some(parameter) => parameters.push(parameter),
                None => break,
            }
        }
        Ok(Some(parameters))
    }

    /// `abstraction | "(" parameters ")"`
    pub(crate) fn parse_result(&mut self) -> Result<Option<ResultType>, ParseError> {
        const RULES: &[Rule] = &[Rule::Result, Rule::Abstraction, Rule::Parameters];

        if let Some(abstraction) = self.parse_abstraction()? {
            return Ok(Some(ResultType::Abstraction(abstraction)));
        }

        if self.take_delimiter("(")? {
            let parameters = self.parse_parameters()?;
            let parameters = self.require(parameters, "parameters", RULES)?;
            self.expect_delimiter(")", RULES)?;
            return Ok(Some(ResultType::Parameters(parameters)));
        }

        Ok(None)
    }
}
