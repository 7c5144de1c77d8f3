//! Canonical formatter
//!
//! Renders a declaration tree back to source text. Indentation is one tab
//! per depth level; comments are written exactly as they were scanned.
//! Formatting a tree parsed from canonical text reproduces that text byte
//! for byte.


use crate::frontend::parser::ast::*;

/// Sequences longer than this are written one element per line
const INLINE_LIMIT: usize = 2;

/// Format a whole document
pub fn format(document: &Document) -> String {
    Formatter::new().format_document(document)
}

/// Pretty-printer state: output buffer and current depth
#[derive(Debug, Default)]
pub struct Formatter {
    depth: usize,
    buffer: String,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_document(
        &mut self,
        document: &Document,
    ) -> String {
        self.reset();
        self.document(document);
        self.take_result()
    }

    pub fn format_abstraction(
        &mut self,
        abstraction: &Abstraction,
    ) -> String {
        self.reset();
        self.abstraction(abstraction);
        self.take_result()
    }

    pub fn format_arguments(
        &mut self,
        arguments: &[Abstraction],
    ) -> String {
        self.reset();
        self.arguments(arguments);
        self.take_result()
    }

    pub fn format_method(
        &mut self,
        method: &Method,
    ) -> String {
        self.reset();
        self.method(method);
        self.take_result()
    }

    pub fn format_parameter(
        &mut self,
        parameter: &Parameter,
    ) -> String {
        self.reset();
        self.parameter(parameter);
        self.take_result()
    }

    pub fn format_parameters(
        &mut self,
        parameters: &[Parameter],
    ) -> String {
        self.reset();
        self.parameters(parameters);
        self.take_result()
    }

    /// Parameter identifiers only, e.g. `K, V` for `[K any, V any]`
    pub fn format_parameter_names(
        &mut self,
        parameters: &[Parameter],
    ) -> String {
        self.reset();
        self.sequence(parameters, |f, parameter| {
            f.push(&parameter.identifier)
        });
        self.take_result()
    }

    pub fn format_result(
        &mut self,
        result: &ResultType,
    ) -> String {
        self.reset();
        self.result(result);
        self.take_result()
    }

    fn reset(&mut self) {
        self.depth = 0;
        self.buffer.clear();
    }

    fn take_result(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    fn push(
        &mut self,
        text: &str,
    ) {
        self.buffer.push_str(text);
    }

    fn newline(&mut self) {
        self.buffer.push('\n');
        for _ in 0..self.depth {
            self.buffer.push('\t');
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Comma-separated sequence: inline for short ones, otherwise one
    /// element per line with a trailing comma.
    fn sequence<T>(
        &mut self,
        items: &[T],
        mut item: impl FnMut(&mut Self, &T),
    ) {
        let multiline = items.len() > INLINE_LIMIT;
        if multiline {
            self.indent();
            self.newline();
        }
        for (index, element) in items.iter().enumerate() {
            if index > 0 {
                self.push(",");
                if multiline {
                    self.newline();
                } else {
                    self.push(" ");
                }
            }
            item(self, element);
        }
        if multiline {
            self.push(",");
            self.dedent();
            self.newline();
        }
    }

    /// Section note followed by one item per line
    fn section<T>(
        &mut self,
        note: &str,
        items: &[T],
        mut item: impl FnMut(&mut Self, &T),
    ) {
        self.newline();
        self.push(note);
        for element in items {
            self.newline();
            item(self, element);
        }
    }

    /// Note followed by blank-line separated top-level declarations
    fn block<T>(
        &mut self,
        note: &str,
        items: &[T],
        mut item: impl FnMut(&mut Self, &T),
    ) {
        self.newline();
        self.push(note);
        self.newline();
        for element in items {
            item(self, element);
            self.newline();
        }
    }

    fn document(
        &mut self,
        document: &Document,
    ) {
        self.push(&document.notice.comment);
        self.push(&document.header.comment);
        self.push("package ");
        self.push(&document.header.identifier);
        self.newline();

        if let Some(imports) = &document.imports {
            self.imports(imports);
        }
        if let Some(types) = &document.types {
            self.types(types);
        }
        if let Some(interfaces) = &document.interfaces {
            self.interfaces(interfaces);
        }
    }

    fn imports(
        &mut self,
        imports: &Imports,
    ) {
        self.newline();
        self.push("import (");
        if !imports.modules.is_empty() {
            self.indent();
            for module in &imports.modules {
                self.newline();
                self.module(module);
            }
            self.dedent();
            self.newline();
        }
        self.push(")");
        self.newline();
    }

    fn module(
        &mut self,
        module: &Module,
    ) {
        self.push(&module.identifier);
        self.push(" ");
        self.push(&module.text);
    }

    fn types(
        &mut self,
        types: &Types,
    ) {
        self.newline();
        self.push("// TYPES");
        self.newline();
        if !types.specializations.is_empty() {
            self.block("// Specializations", &types.specializations, Self::specialization);
        }
        if !types.functionals.is_empty() {
            self.block("// Functionals", &types.functionals, Self::functional);
        }
    }

    fn interfaces(
        &mut self,
        interfaces: &Interfaces,
    ) {
        self.newline();
        self.push("// INTERFACES");
        self.newline();
        if !interfaces.aspects.is_empty() {
            self.block("// Aspects", &interfaces.aspects, Self::aspect);
        }
        if !interfaces.classes.is_empty() {
            self.block("// Classes", &interfaces.classes, Self::class);
        }
        if !interfaces.instances.is_empty() {
            self.block("// Instances", &interfaces.instances, Self::instance);
        }
    }

    fn declaration(
        &mut self,
        declaration: &Declaration,
    ) {
        self.newline();
        self.push(&declaration.comment);
        self.push("type ");
        self.push(&declaration.identifier);
        if !declaration.parameters.is_empty() {
            self.push("[");
            self.parameters(&declaration.parameters);
            self.push("]");
        }
    }

    fn specialization(
        &mut self,
        specialization: &Specialization,
    ) {
        self.declaration(&specialization.declaration);
        self.push(" ");
        self.abstraction(&specialization.abstraction);
        if let Some(enumeration) = &specialization.enumeration {
            self.newline();
            self.enumeration(enumeration);
        }
    }

    fn enumeration(
        &mut self,
        enumeration: &Enumeration,
    ) {
        self.newline();
        self.push("const (");
        self.indent();
        self.newline();
        self.values(&enumeration.values);
        self.dedent();
        self.newline();
        self.push(")");
    }

    fn values(
        &mut self,
        values: &Values,
    ) {
        self.parameter(&values.parameter);
        self.push(" = iota");
        for identifier in &values.identifiers {
            self.newline();
            self.push(identifier);
        }
    }

    fn functional(
        &mut self,
        functional: &Functional,
    ) {
        self.declaration(&functional.declaration);
        self.push(" func(");
        self.parameters(&functional.parameters);
        self.push(") ");
        self.result(&functional.result);
    }

    fn open_interface(
        &mut self,
        declaration: &Declaration,
    ) {
        self.declaration(declaration);
        self.push(" interface {");
        self.indent();
    }

    fn close_interface(&mut self) {
        self.dedent();
        self.newline();
        self.push("}");
    }

    fn aspect(
        &mut self,
        aspect: &Aspect,
    ) {
        self.open_interface(&aspect.declaration);
        self.optional_section(false, "// Methods", &aspect.methods, Self::method);
        self.close_interface();
    }

    fn class(
        &mut self,
        class: &Class,
    ) {
        self.open_interface(&class.declaration);
        let mut written = false;
        written |= self.optional_section(written, "// Constants", &class.constants, Self::constant);
        written |= self.optional_section(
            written,
            "// Constructors",
            &class.constructors,
            Self::constructor,
        );
        self.optional_section(written, "// Functions", &class.functions, Self::function);
        self.close_interface();
    }

    fn instance(
        &mut self,
        instance: &Instance,
    ) {
        self.open_interface(&instance.declaration);
        let mut written = false;
        written |= self.optional_section(
            written,
            "// Attributes",
            &instance.attributes,
            Self::attribute,
        );
        written |= self.optional_section(
            written,
            "// Abstractions",
            &instance.abstractions,
            Self::abstraction,
        );
        self.optional_section(written, "// Methods", &instance.methods, Self::method);
        self.close_interface();
    }

    /// Write the section when it has items, after a blank line if another
    /// section precedes it. Reports whether anything was written.
    fn optional_section<T>(
        &mut self,
        separated: bool,
        note: &str,
        items: &[T],
        item: impl FnMut(&mut Self, &T),
    ) -> bool {
        if items.is_empty() {
            return false;
        }
        if separated {
            self.push("\n");
        }
        self.section(note, items, item);
        true
    }

    fn constant(
        &mut self,
        constant: &Constant,
    ) {
        self.push(&constant.identifier);
        self.push("() ");
        self.abstraction(&constant.abstraction);
    }

    fn constructor(
        &mut self,
        constructor: &Constructor,
    ) {
        self.push(&constructor.identifier);
        self.push("(");
        self.parameters(&constructor.parameters);
        self.push(") ");
        self.abstraction(&constructor.abstraction);
    }

    fn function(
        &mut self,
        function: &Function,
    ) {
        self.push(&function.identifier);
        self.push("(");
        self.parameters(&function.parameters);
        self.push(") ");
        self.result(&function.result);
    }

    fn method(
        &mut self,
        method: &Method,
    ) {
        self.push(&method.identifier);
        self.push("(");
        self.parameters(&method.parameters);
        self.push(")");
        if let Some(result) = &method.result {
            self.push(" ");
            self.result(result);
        }
    }

    fn attribute(
        &mut self,
        attribute: &Attribute,
    ) {
        self.push(&attribute.identifier);
        self.push("(");
        if let Some(parameter) = &attribute.parameter {
            self.parameter(parameter);
        }
        self.push(")");
        if let Some(abstraction) = &attribute.abstraction {
            self.push(" ");
            self.abstraction(abstraction);
        }
    }

    fn result(
        &mut self,
        result: &ResultType,
    ) {
        match result {
            ResultType::Abstraction(abstraction) => self.abstraction(abstraction),
            ResultType::Parameters(parameters) => {
                self.push("(");
                self.parameters(parameters);
                self.push(")");
            }
        }
    }

    fn parameters(
        &mut self,
        parameters: &[Parameter],
    ) {
        self.sequence(parameters, Self::parameter);
    }

    fn parameter(
        &mut self,
        parameter: &Parameter,
    ) {
        self.push(&parameter.identifier);
        self.push(" ");
        self.abstraction(&parameter.abstraction);
    }

    fn arguments(
        &mut self,
        arguments: &[Abstraction],
    ) {
        self.sequence(arguments, Self::abstraction);
    }

    fn abstraction(
        &mut self,
        abstraction: &Abstraction,
    ) {
        if let Some(prefix) = &abstraction.prefix {
            self.prefix(prefix);
        }
        self.push(&abstraction.identifier);
        if !abstraction.arguments.is_empty() {
            self.push("[");
            self.arguments(&abstraction.arguments);
            self.push("]");
        }
    }

    fn prefix(
        &mut self,
        prefix: &Prefix,
    ) {
        match prefix {
            Prefix::Alias(alias) => {
                self.push(alias);
                self.push(".");
            }
            Prefix::Array => self.push("[]"),
            Prefix::Channel => self.push("chan "),
            Prefix::Map(key) => {
                self.push("map[");
                self.push(key);
                self.push("]");
            }
        }
    }
}
