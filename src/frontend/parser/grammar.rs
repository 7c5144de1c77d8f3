//! Grammar rules quoted in syntax errors

use serde::Serialize;
use std::fmt;

/// A named production of the notation's grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    Abstraction,
    Abstractions,
    Arguments,
    Aspect,
    Aspects,
    Attribute,
    Attributes,
    Class,
    Classes,
    Constant,
    Constants,
    Constructor,
    Constructors,
    Declaration,
    Document,
    Enumeration,
    Function,
    Functional,
    Functionals,
    Functions,
    Header,
    Imports,
    Instance,
    Instances,
    Interfaces,
    Method,
    Methods,
    Module,
    Modules,
    Notice,
    Parameter,
    Parameters,
    Prefix,
    Result,
    Source,
    Specialization,
    Specializations,
    Types,
    Values,
}

impl Rule {
    /// Every rule, alphabetically
    pub const ALL: [Rule; 39] = [
        Rule::Abstraction,
        Rule::Abstractions,
        Rule::Arguments,
        Rule::Aspect,
        Rule::Aspects,
        Rule::Attribute,
        Rule::Attributes,
        Rule::Class,
        Rule::Classes,
        Rule::Constant,
        Rule::Constants,
        Rule::Constructor,
        Rule::Constructors,
        Rule::Declaration,
        Rule::Document,
        Rule::Enumeration,
        Rule::Function,
        Rule::Functional,
        Rule::Functionals,
        Rule::Functions,
        Rule::Header,
        Rule::Imports,
        Rule::Instance,
        Rule::Instances,
        Rule::Interfaces,
        Rule::Method,
        Rule::Methods,
        Rule::Module,
        Rule::Modules,
        Rule::Notice,
        Rule::Parameter,
        Rule::Parameters,
        Rule::Prefix,
        Rule::Result,
        Rule::Source,
        Rule::Specialization,
        Rule::Specializations,
        Rule::Types,
        Rule::Values,
    ];

    /// Symbol used for the rule, e.g. `$abstraction`
    pub fn symbol(self) -> &'static str {
        match self {
            Rule::Abstraction => "$abstraction",
            Rule::Abstractions => "$abstractions",
            Rule::Arguments => "$arguments",
            Rule::Aspect => "$aspect",
            Rule::Aspects => "$aspects",
            Rule::Attribute => "$attribute",
            Rule::Attributes => "$attributes",
            Rule::Class => "$class",
            Rule::Classes => "$classes",
            Rule::Constant => "$constant",
            Rule::Constants => "$constants",
            Rule::Constructor => "$constructor",
            Rule::Constructors => "$constructors",
            Rule::Declaration => "$declaration",
            Rule::Document => "$document",
            Rule::Enumeration => "$enumeration",
            Rule::Function => "$function",
            Rule::Functional => "$functional",
            Rule::Functionals => "$functionals",
            Rule::Functions => "$functions",
            Rule::Header => "$header",
            Rule::Imports => "$imports",
            Rule::Instance => "$instance",
            Rule::Instances => "$instances",
            Rule::Interfaces => "$interfaces",
            Rule::Method => "$method",
            Rule::Methods => "$methods",
            Rule::Module => "$module",
            Rule::Modules => "$modules",
            Rule::Notice => "$notice",
            Rule::Parameter => "$parameter",
            Rule::Parameters => "$parameters",
            Rule::Prefix => "$prefix",
            Rule::Result => "$result",
            Rule::Source => "$source",
            Rule::Specialization => "$specialization",
            Rule::Specializations => "$specializations",
            Rule::Types => "$types",
            Rule::Values => "$values",
        }
    }

    /// Right-hand side of the rule
    pub fn text(self) -> &'static str {
        match self {
            Rule::Abstraction => r#"prefix? IDENTIFIER ("[" arguments "]")?"#,
            Rule::Abstractions => r#""// Abstractions" abstraction+"#,
            Rule::Arguments => r#"abstraction ("," abstraction)* ","?"#,
            Rule::Aspect => r#"declaration "interface" "{" methods? "}""#,
            Rule::Aspects => r#""// Aspects" aspect+"#,
            Rule::Attribute => r#"IDENTIFIER "(" parameter? ")" abstraction?"#,
            Rule::Attributes => r#""// Attributes" attribute+"#,
            Rule::Class => {
                r#"declaration "interface" "{" constants? constructors? functions? "}""#
            }
            Rule::Classes => r#""// Classes" class+"#,
            Rule::Constant => r#"IDENTIFIER "(" ")" abstraction"#,
            Rule::Constants => r#""// Constants" constant+"#,
            Rule::Constructor => r#"IDENTIFIER "(" parameters? ")" abstraction"#,
            Rule::Constructors => r#""// Constructors" constructor+"#,
            Rule::Declaration => r#"COMMENT "type" IDENTIFIER ("[" parameters "]")?"#,
            Rule::Document => "notice header imports? types? interfaces?",
            Rule::Enumeration => r#""const" "(" values ")""#,
            Rule::Function => r#"IDENTIFIER "(" parameters? ")" result"#,
            Rule::Functional => r#"declaration "func" "(" parameters? ")" result"#,
            Rule::Functionals => r#""// Functionals" functional+"#,
            Rule::Functions => r#""// Functions" function+"#,
            Rule::Header => r#"COMMENT "package" IDENTIFIER"#,
            Rule::Imports => r#""import" "(" modules? ")""#,
            Rule::Instance => {
                r#"declaration "interface" "{" attributes? abstractions? methods? "}""#
            }
            Rule::Instances => r#""// Instances" instance+"#,
            Rule::Interfaces => r#""// INTERFACES" aspects? classes? instances?"#,
            Rule::Method => r#"IDENTIFIER "(" parameters? ")" result?"#,
            Rule::Methods => r#""// Methods" method+"#,
            Rule::Module => "IDENTIFIER TEXT",
            Rule::Modules => "module+",
            Rule::Notice => "COMMENT",
            Rule::Parameter => "IDENTIFIER abstraction",
            Rule::Parameters => r#"parameter ("," parameter)* ","?"#,
            Rule::Prefix => r#""[" "]" | "map" "[" IDENTIFIER "]" | "chan" | IDENTIFIER ".""#,
            Rule::Result => r#"abstraction | "(" parameters ")""#,
            Rule::Source => "document EOF  ! Terminated with an end-of-file marker.",
            Rule::Specialization => "declaration abstraction enumeration?",
            Rule::Specializations => r#""// Specializations" specialization+"#,
            Rule::Types => r#""// TYPES" specializations? functionals?"#,
            Rule::Values => r#"parameter "=" "iota" IDENTIFIER*"#,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.symbol(), self.text())
    }
}

/// Render the grammar table, one rule per line
pub fn grammar_table() -> String {
    let width = Rule::ALL
        .iter()
        .map(|rule| rule.symbol().len())
        .max()
        .unwrap_or(0);
    Rule::ALL
        .iter()
        .map(|rule| format!("{:<width$} {}\n", rule.symbol(), rule.text(), width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_sorted_and_unique() {
        let symbols: Vec<&str> = Rule::ALL.iter().map(|r| r.symbol()).collect();
        let mut sorted = symbols.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(symbols, sorted);
    }

    #[test]
    fn test_display() {
        assert_eq!(Rule::Module.to_string(), "$module: IDENTIFIER TEXT");
    }

    #[test]
    fn test_table_lists_every_rule() {
        let table = grammar_table();
        assert_eq!(table.lines().count(), Rule::ALL.len());
        assert!(table.starts_with("$abstraction     prefix?"));
    }
}
