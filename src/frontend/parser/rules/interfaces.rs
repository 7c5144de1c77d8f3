//! Interface declarations: aspects, classes and instances

use crate::frontend::parser::ast::{
    Aspect, Attribute, Class, Constant, Constructor, Function, Instance, Interfaces, Method,
};
use crate::frontend::parser::error::ParseError;
use crate::frontend::parser::grammar::Rule;
use crate::frontend::parser::state::ParserState;

impl<'a> ParserState<'a> {
    /// `"// INTERFACES" aspects? classes? instances?`
    pub(crate) fn parse_interfaces(&mut self) -> Result<Option<Interfaces>, ParseError> {
        if !self.take_note("// INTERFACES")? {
            return Ok(None);
        }
        let aspects = self.parse_sorted_section(
            "// Aspects",
            "aspect",
            &[Rule::Aspects, Rule::Aspect],
            Self::parse_aspect,
        )?;
        let classes = self.parse_sorted_section(
            "// Classes",
            "class",
            &[Rule::Classes, Rule::Class],
            Self::parse_class,
        )?;
        let instances = self.parse_sorted_section(
            "// Instances",
            "instance",
            &[Rule::Instances, Rule::Instance],
            Self::parse_instance,
        )?;
        Ok(Some(Interfaces::new(
            aspects.unwrap_or_default(),
            classes.unwrap_or_default(),
            instances.unwrap_or_default(),
        )))
    }

    /// `declaration "interface" "{" methods? "}"`
    pub(crate) fn parse_aspect(&mut self) -> Result<Option<Aspect>, ParseError> {
        const RULES: &[Rule] = &[Rule::Aspect, Rule::Declaration, Rule::Methods];

        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_keyword("interface", RULES)?;
        self.expect_delimiter("{", RULES)?;
        let methods = self.parse_methods()?;
        self.expect_delimiter("}", RULES)?;
        Ok(Some(Aspect::new(declaration, methods.unwrap_or_default())))
    }

    /// `declaration "interface" "{" constants? constructors? functions? "}"`
    pub(crate) fn parse_class(&mut self) -> Result<Option<Class>, ParseError> {
        const RULES: &[Rule] = &[
            Rule::Class,
            Rule::Declaration,
            Rule::Constants,
            Rule::Constructors,
            Rule::Functions,
        ];

        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_keyword("interface", RULES)?;
        self.expect_delimiter("{", RULES)?;

        // Constants keep their source order.
        let constants = self.parse_section(
            "// Constants",
            "constant",
            &[Rule::Constants, Rule::Constant],
            Self::parse_constant,
        )?;
        let constructors = self.parse_sorted_section(
            "// Constructors",
            "constructor",
            &[Rule::Constructors, Rule::Constructor],
            Self::parse_constructor,
        )?;
        let functions = self.parse_sorted_section(
            "// Functions",
            "function",
            &[Rule::Functions, Rule::Function],
            Self::parse_function,
        )?;

        self.expect_delimiter("}", RULES)?;
        Ok(Some(Class::new(
            declaration,
            constants.unwrap_or_default(),
            constructors.unwrap_or_default(),
            functions.unwrap_or_default(),
        )))
    }

    /// `declaration "interface" "{" attributes? abstractions? methods? "}"`
    pub(crate) fn parse_instance(&mut self) -> Result<Option<Instance>, ParseError> {
        const RULES: &[Rule] = &[
            Rule::Instance,
            Rule::Declaration,
            Rule::Attributes,
            Rule::Abstractions,
            Rule::Methods,
        ];

        let Some(declaration) = self.parse_declaration()? else {
            return Ok(None);
        };
        self.expect_keyword("interface", RULES)?;
        self.expect_delimiter("{", RULES)?;

        let attributes = self.parse_section(
            "// Attributes",
            "attribute",
            &[Rule::Attributes, Rule::Attribute],
            Self::parse_attribute,
        )?;
        let abstractions = self.parse_section(
            "// Abstractions",
            "abstraction",
            &[Rule::Abstractions, Rule::Abstraction],
            Self::parse_abstraction,
        )?;
        let methods = self.parse_methods()?;

        self.expect_delimiter("}", RULES)?;
        Ok(Some(Instance::new(
            declaration,
            attributes.unwrap_or_default(),
            abstractions.unwrap_or_default(),
            methods.unwrap_or_default(),
        )))
    }

    /// `"// Methods" method+`
    pub(crate) fn parse_methods(&mut self) -> Result<Option<Vec<Method>>, ParseError> {
        self.parse_sorted_section(
            "// Methods",
            "method",
            &[Rule::Methods, Rule::Method],
            Self::parse_method,
        )
    }

    /// `IDENTIFIER "(" ")" abstraction`
    pub(crate) fn parse_constant(&mut self) -> Result<Option<Constant>, ParseError> {
        const RULES: &[Rule] = &[Rule::Constant, Rule::Abstraction];

        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        self.expect_delimiter("(", RULES)?;
        self.expect_delimiter(")", RULES)?;
        let abstraction = self.parse_abstraction()?;
        let abstraction = self.require(abstraction, "abstraction", RULES)?;
        Ok(Some(Constant::new(identifier, abstraction)))
    }

    /// `IDENTIFIER "(" parameters? ")" abstraction`
    pub(crate) fn parse_constructor(&mut self) -> Result<Option<Constructor>, ParseError> {
        const RULES: &[Rule] = &[Rule::Constructor, Rule::Parameters, Rule::Abstraction];

        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        self.expect_delimiter("(", RULES)?;
        let parameters = self.parse_parameters()?.unwrap_or_default();
        self.expect_delimiter(")", RULES)?;
        let abstraction = self.parse_abstraction()?;
        let abstraction = self.require(abstraction, "abstraction", RULES)?;
        Ok(Some(Constructor::new(identifier, parameters, abstraction)))
    }

    /// `IDENTIFIER "(" parameters? ")" result`
    pub(crate) fn parse_function(&mut self) -> Result<Option<Function>, ParseError> {
        const RULES: &[Rule] = &[Rule::Function, Rule::Parameters, Rule::Result];

        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        self.expect_delimiter("(", RULES)?;
        let parameters = self.parse_parameters()?.unwrap_or_default();
        self.expect_delimiter(")", RULES)?;
        let result = self.parse_result()?;
        let result = self.require(result, "result", RULES)?;
        Ok(Some(Function::new(identifier, parameters, result)))
    }

    /// `IDENTIFIER "(" parameters? ")" result?`
    pub(crate) fn parse_method(&mut self) -> Result<Option<Method>, ParseError> {
        const RULES: &[Rule] = &[Rule::Method, Rule::Parameters, Rule::Result];

        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        self.expect_delimiter("(", RULES)?;
        let parameters = self.parse_parameters()?.unwrap_or_default();
        self.expect_delimiter(")", RULES)?;
        let result = self.parse_result()?;
        Ok(Some(Method::new(identifier, parameters, result)))
    }

    /// `IDENTIFIER "(" parameter? ")" abstraction?`
    pub(crate) fn parse_attribute(&mut self) -> Result<Option<Attribute>, ParseError> {
        const RULES: &[Rule] = &[Rule::Attribute, Rule::Parameter, Rule::Abstraction];

        let Some(identifier) = self.take_identifier()? else {
            return Ok(None);
        };
        self.expect_delimiter("(", RULES)?;
        let parameter = self.parse_parameter()?;
        self.expect_delimiter(")", RULES)?;
        let abstraction = self.parse_abstraction()?;
        Ok(Some(Attribute::new(identifier, parameter, abstraction)))
    }
}
