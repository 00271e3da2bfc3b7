//! TypeScript source writer.
//!
//! [`TypeScriptWriter`] renders [definitions](crate::definitions) into an
//! indentation-aware buffer. Block-level writers accept `Option`s: writing
//! `None` is a no-op.

use tsemit_codegen::{CodeBuilder, Diagnostic, TypeNameProvider};
use tsemit_core::{quote_single, to_camel_case, to_pascal_case, word_wrap};
use tsemit_model::{
    Class, Comment, Enumeration, Interface, Operation, Property, Type, TypedElement,
};

use crate::{
    DefinitionBuilder, Result,
    definitions::{
        ClassDefinition, DecoratorDefinition, DecoratorParameters, EnumDefinition,
        FunctionDefinition, InterfaceDefinition, ParameterDefinition, PropertyDefinition,
        StringLiteralTypeDefinition, VariableDefinition,
    },
    options::{
        ClassOptions, EnumOptions, FunctionOptions, InterfaceOptions, PropertyOptions,
        WriterOptions,
    },
};

/// Writes TypeScript source text.
///
/// # Example
///
/// ```
/// use tsemit_typescript::{ClassDefinition, PropertyDefinition, TypeScriptWriter};
///
/// let mut writer = TypeScriptWriter::new();
/// let class = ClassDefinition {
///     export: true,
///     ..ClassDefinition::new("Animal")
/// };
/// writer.write_class_block(&class, |w| {
///     w.write_property_definition(&PropertyDefinition::new("name", "string"));
/// });
///
/// assert_eq!(writer.as_str(), "export class Animal {\n  name: string;\n}\n");
/// ```
#[derive(Debug)]
pub struct TypeScriptWriter {
    builder: CodeBuilder,
    definitions: DefinitionBuilder,
    max_comment_width: usize,
}

impl Default for TypeScriptWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeScriptWriter {
    pub fn new() -> Self {
        Self::with_options(&WriterOptions::default())
    }

    pub fn with_options(options: &WriterOptions) -> Self {
        Self {
            builder: CodeBuilder::new(options.indent),
            definitions: DefinitionBuilder::typescript()
                .with_fallback_type_name(&options.fallback_type_name),
            max_comment_width: options.max_comment_width,
        }
    }

    /// Replace the naming strategy used when writing model elements.
    pub fn with_type_name_provider(mut self, provider: impl TypeNameProvider + 'static) -> Self {
        let fallback = self.definitions.fallback_type_name().to_string();
        self.definitions = DefinitionBuilder::new(provider).with_fallback_type_name(fallback);
        self
    }

    /// The builder used by the model-driven writers.
    pub fn definitions(&self) -> &DefinitionBuilder {
        &self.definitions
    }

    pub fn definitions_mut(&mut self) -> &mut DefinitionBuilder {
        &mut self.definitions
    }

    /// Drain the diagnostics collected while building definitions.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.definitions.take_diagnostics()
    }

    pub fn max_comment_width(&self) -> usize {
        self.max_comment_width
    }

    pub fn set_max_comment_width(&mut self, width: usize) {
        self.max_comment_width = width;
    }

    pub fn as_str(&self) -> &str {
        self.builder.as_str()
    }

    pub fn into_string(self) -> String {
        self.builder.build()
    }

    // Output primitives

    /// Write an indented, terminated line.
    pub fn write_line(&mut self, line: &str) -> &mut Self {
        self.builder.push_line(line);
        self
    }

    /// Write an empty line.
    pub fn write_blank_line(&mut self) -> &mut Self {
        self.builder.push_blank();
        self
    }

    /// Write a fragment on the current line.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.builder.push_raw(text);
        self
    }

    /// Start a new line at the current indentation.
    pub fn write_indent(&mut self) -> &mut Self {
        self.builder.push_indentation();
        self
    }

    /// Write `text` and terminate the current line.
    pub fn write_end_of_line(&mut self, text: &str) -> &mut Self {
        self.builder.end_line(text);
        self
    }

    pub fn increase_indent(&mut self) -> &mut Self {
        self.builder.push_indent();
        self
    }

    pub fn decrease_indent(&mut self) -> &mut Self {
        self.builder.push_dedent();
        self
    }

    // Type names

    /// Get the name of a type through the configured naming strategy.
    pub fn type_name(&self, ty: &Type) -> Option<String> {
        self.definitions.type_name_provider().type_name(ty)
    }

    /// Get the type name of a typed element through the configured naming strategy.
    pub fn typed_element_type_name(&self, element: &dyn TypedElement) -> Option<String> {
        self.definitions
            .type_name_provider()
            .typed_element_type_name(element)
    }

    // Imports

    /// Write `import { a, b } from 'module';`.
    ///
    /// Nothing is written when the module or the name list is empty.
    pub fn write_imports<S: AsRef<str>>(&mut self, module: &str, names: &[S]) {
        if module.is_empty() || names.is_empty() {
            return;
        }
        let names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
        let line = format!(
            "import {{ {} }} from '{}';",
            names.join(", "),
            module.replace('\\', "/")
        );
        self.write_line(&line);
    }

    /// Write `import * as alias from 'module';`.
    ///
    /// Without an alias, one is derived from the module name with
    /// [`make_safe_module_name`].
    pub fn write_import_all(&mut self, module: &str, alias: Option<&str>) {
        if module.is_empty() {
            return;
        }
        let module = module.replace('\\', "/");
        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => alias.to_string(),
            None => make_safe_module_name(&module),
        };
        let line = format!("import * as {} from '{}';", alias, module);
        self.write_line(&line);
    }

    // Blocks

    /// Write `{`, the indented contents and `}`.
    pub fn write_code_block(&mut self, contents: impl FnOnce(&mut Self)) {
        self.write_line("{");
        self.scoped(contents);
        self.write_line("}");
    }

    /// Write `@Name({`, the indented contents and `})`.
    pub fn write_decorator_code_block(&mut self, name: &str, contents: impl FnOnce(&mut Self)) {
        self.write_line(&format!("@{}({{", name));
        self.scoped(contents);
        self.write_line("})");
    }

    /// Write a class declaration around the class contents.
    ///
    /// This doesn't write class members; `contents` does.
    pub fn write_class_block<'a>(
        &mut self,
        class: impl Into<Option<&'a ClassDefinition>>,
        contents: impl FnOnce(&mut Self),
    ) {
        let Some(class) = class.into() else {
            return;
        };
        tracing::trace!(class = %class.name, "writing class");

        self.write_js_doc_description(&class.description);
        for decorator in &class.decorators {
            self.write_indent();
            self.write_decorator(decorator);
            self.write_end_of_line("");
        }
        self.write_indent();
        self.write_export_declare(class.export, class.declare);
        if class.is_abstract {
            self.write("abstract ");
        }
        self.write("class ").write(&class.name);
        self.write_name_list(" extends ", &class.extends);
        self.write_name_list(" implements ", &class.implements);
        self.write_end_of_line(" {");
        self.scoped(contents);
        self.write_line("}");
    }

    /// Write an interface declaration around the interface contents.
    pub fn write_interface_block<'a>(
        &mut self,
        interface: impl Into<Option<&'a InterfaceDefinition>>,
        contents: impl FnOnce(&mut Self),
    ) {
        let Some(interface) = interface.into() else {
            return;
        };
        tracing::trace!(interface = %interface.name, "writing interface");

        self.write_js_doc_description(&interface.description);
        self.write_indent();
        self.write_export_declare(interface.export, interface.declare);
        self.write("interface ").write(&interface.name);
        self.write_name_list(" extends ", &interface.extends);
        self.write_end_of_line(" {");
        self.scoped(contents);
        self.write_line("}");
    }

    /// Write a complete enum, including its members.
    pub fn write_enum<'a>(&mut self, enumeration: impl Into<Option<&'a EnumDefinition>>) {
        let Some(enumeration) = enumeration.into() else {
            return;
        };
        tracing::trace!(enumeration = %enumeration.name, "writing enum");

        self.write_js_doc_description(&enumeration.description);
        self.write_indent();
        self.write_export_declare(enumeration.export, enumeration.declare);
        if enumeration.const_ {
            self.write("const ");
        }
        self.write("enum ").write(&enumeration.name);
        self.write_end_of_line(" {");
        self.scoped(|w| {
            let last = enumeration.members.len().saturating_sub(1);
            for (i, member) in enumeration.members.iter().enumerate() {
                w.write_js_doc_description(&member.description);
                w.write_indent();
                w.write(&member.name);
                if let Some(value) = &member.value {
                    w.write(" = ").write(&value.to_string());
                }
                w.write_end_of_line(if i < last { "," } else { "" });
            }
        });
        self.write_line("}");
    }

    /// Write a string literal union type, e.g. `type Easing = 'in' | 'out';`.
    pub fn write_string_literal_type<'a>(
        &mut self,
        definition: impl Into<Option<&'a StringLiteralTypeDefinition>>,
    ) {
        let Some(definition) = definition.into() else {
            return;
        };

        self.write_js_doc_description(&definition.description);
        self.write_indent();
        self.write_export_declare(definition.export, definition.declare);
        self.write("type ").write(&definition.name).write(" = ");
        if definition.literals.is_empty() {
            self.write("never");
        } else {
            let literals: Vec<String> = definition.literals.iter().map(|l| quote_single(l)).collect();
            self.write(&literals.join(" | "));
        }
        self.write_end_of_line(";");
    }

    /// Write a class or interface property.
    pub fn write_property_definition<'a>(
        &mut self,
        property: impl Into<Option<&'a PropertyDefinition>>,
    ) {
        let Some(property) = property.into() else {
            return;
        };
        tracing::trace!(property = %property.name, "writing property");

        self.write_js_doc_description(&property.description);
        self.write_indent();
        for decorator in &property.decorators {
            self.write_decorator(decorator);
            self.write(" ");
        }
        if let Some(access) = property.access_modifier {
            self.write(access.as_str()).write(" ");
        }
        if property.is_static {
            self.write("static ");
        }
        if property.is_readonly {
            self.write("readonly ");
        }
        self.write(&property.name);
        if property.is_optional && property.use_question_token {
            self.write("?");
        } else if !property.is_optional
            && property.default_value.is_none()
            && property.use_definite_assignment_assertion_modifier
        {
            self.write("!");
        }
        self.write(": ").write(&property.type_name);
        if property.is_multivalued {
            self.write("[]");
        }
        if property.is_optional && property.has_null_union_type {
            self.write(" | null");
        }
        if let Some(default_value) = &property.default_value {
            self.write(" = ").write(default_value);
        }
        self.write_end_of_line(";");
    }

    /// Write a function signature terminated by `;`.
    pub fn write_function_declaration<'a>(
        &mut self,
        function: impl Into<Option<&'a FunctionDefinition>>,
    ) {
        let Some(function) = function.into() else {
            return;
        };
        self.write_function_start(function);
        self.write_end_of_line(";");
    }

    /// Write a function signature followed by a body block.
    ///
    /// Abstract functions get no body: the signature is terminated by `;`
    /// and `contents` is not called.
    pub fn write_function_block<'a>(
        &mut self,
        function: impl Into<Option<&'a FunctionDefinition>>,
        contents: impl FnOnce(&mut Self),
    ) {
        let Some(function) = function.into() else {
            return;
        };
        self.write_function_start(function);
        if function.is_abstract {
            self.write_end_of_line(";");
            return;
        }
        self.write_end_of_line(" {");
        self.scoped(contents);
        self.write_line("}");
    }

    /// Write a variable declaration, e.g. `export const VERSION: string = '1.0';`.
    pub fn write_variable_declaration<'a>(
        &mut self,
        variable: impl Into<Option<&'a VariableDefinition>>,
    ) {
        let Some(variable) = variable.into() else {
            return;
        };

        self.write_js_doc_description(&variable.description);
        self.write_indent();
        self.write_export_declare(variable.export, variable.declare);
        self.write(variable.kind.as_str()).write(" ").write(&variable.name);
        if let Some(type_name) = &variable.type_name {
            self.write(": ").write(type_name);
        }
        if let Some(initializer) = &variable.initializer {
            self.write(" = ").write(initializer);
        }
        self.write_end_of_line(";");
    }

    // Model-driven writers

    /// Build a class definition from the model and write the class block.
    pub fn write_class(
        &mut self,
        class: &Class,
        decorators: Vec<DecoratorDefinition>,
        options: &ClassOptions,
        contents: impl FnOnce(&mut Self),
    ) -> Result<()> {
        let definition = self
            .definitions
            .build_class_definition(class, decorators, options)?;
        self.write_class_block(&definition, contents);
        Ok(())
    }

    /// Build an interface definition from the model and write the interface block.
    pub fn write_interface(
        &mut self,
        interface: &Interface,
        options: &InterfaceOptions,
        contents: impl FnOnce(&mut Self),
    ) -> Result<()> {
        let definition = self
            .definitions
            .build_interface_definition(interface, options)?;
        self.write_interface_block(&definition, contents);
        Ok(())
    }

    /// Build an enum definition from the model and write it.
    pub fn write_enumeration(
        &mut self,
        enumeration: &Enumeration,
        options: &EnumOptions,
    ) -> Result<()> {
        let definition = self.definitions.build_enum_definition(enumeration, options)?;
        self.write_enum(&definition);
        Ok(())
    }

    /// Build a property definition from the model and write it.
    pub fn write_property(
        &mut self,
        property: &Property,
        decorators: Vec<DecoratorDefinition>,
        options: &PropertyOptions,
    ) -> Result<()> {
        let definition = self
            .definitions
            .build_property_definition(property, decorators, options)?;
        self.write_property_definition(&definition);
        Ok(())
    }

    /// Build a function definition from the model and write the function block.
    pub fn write_function(
        &mut self,
        operation: &Operation,
        options: &FunctionOptions,
        contents: impl FnOnce(&mut Self),
    ) -> Result<()> {
        let definition = self
            .definitions
            .build_function_definition(operation, options)?;
        self.write_function_block(&definition, contents);
        Ok(())
    }

    // Doc comments

    /// Write a doc comment block from description paragraphs.
    ///
    /// Paragraphs are separated by a blank comment line; empty paragraphs are
    /// skipped.
    pub fn write_js_doc_description(&mut self, paragraphs: &[String]) {
        let lines = paragraph_lines(paragraphs.iter().map(String::as_str));
        self.write_js_doc_lines(&lines);
    }

    /// Write a doc comment block from model comments.
    pub fn write_js_doc_comments(&mut self, comments: &[Comment]) {
        let lines = paragraph_lines(comments.iter().map(|c| c.body.as_str()));
        self.write_js_doc_lines(&lines);
    }

    /// Write a doc comment block with a single paragraph.
    pub fn write_js_doc_paragraph(&mut self, text: &str) {
        self.write_js_doc_lines(&[text.to_string()]);
    }

    /// Write a doc comment block with the given lines.
    ///
    /// Lines longer than the maximum comment width are word-wrapped. Writes
    /// nothing for an empty slice.
    pub fn write_js_doc_lines(&mut self, lines: &[String]) {
        if lines.is_empty() {
            return;
        }

        self.write_line("/**");
        for line in lines {
            // A literal terminator inside the text would close the block early.
            let line = line.replace("*/", "*\\/");
            if line.is_empty() {
                self.write_line("*");
            } else if self.max_comment_width > 0 && line.chars().count() > self.max_comment_width {
                for wrapped in word_wrap(&line, self.max_comment_width) {
                    self.write_line(&format!("* {}", wrapped));
                }
            } else {
                self.write_line(&format!("* {}", line));
            }
        }
        self.write_line("*/");
    }

    // Helpers

    /// Write a decorator on the current line, without a line terminator.
    fn write_decorator(&mut self, decorator: &DecoratorDefinition) {
        self.write("@").write(&decorator.name);
        if !decorator.is_call() {
            return;
        }
        self.write("(");
        match &decorator.parameters {
            Some(DecoratorParameters::Text(text)) => {
                self.write(text);
            }
            Some(DecoratorParameters::Writer(writer)) => writer.write(self),
            None => {}
        }
        self.write(")");
    }

    fn write_export_declare(&mut self, export: bool, declare: bool) {
        if export {
            self.write("export ");
        }
        if declare {
            self.write("declare ");
        }
    }

    fn write_name_list(&mut self, keyword: &str, names: &[String]) {
        if names.is_empty() {
            return;
        }
        self.write(keyword).write(&names.join(", "));
    }

    /// Run `contents` one level deeper and restore the indentation level.
    fn scoped(&mut self, contents: impl FnOnce(&mut Self)) {
        let level = self.builder.current_indent();
        self.builder.set_indent_level(level + 1);
        contents(self);
        self.builder.set_indent_level(level);
    }

    fn write_function_start(&mut self, function: &FunctionDefinition) {
        tracing::trace!(
            function = function.name.as_deref().unwrap_or("constructor"),
            "writing function"
        );

        if !function.description.is_empty() {
            let mut lines = paragraph_lines(function.description.iter().map(String::as_str));
            lines.extend(
                function
                    .parameters
                    .iter()
                    .filter(|p| p.include_in_js_doc || !p.description.is_empty())
                    .map(parameter_doc_line),
            );
            self.write_js_doc_lines(&lines);
        }

        self.write_indent();
        if function.is_constructor {
            self.write("constructor");
        } else {
            if let Some(access) = function.access_modifier {
                self.write(access.as_str()).write(" ");
            }
            if function.is_static {
                self.write("static ");
            } else if function.is_abstract {
                self.write("abstract ");
            }
            self.write(function.name.as_deref().unwrap_or_default());
            if function.returns_optional && function.return_uses_question_token {
                self.write("?");
            }
        }

        let parameters: Vec<&ParameterDefinition> = function.input_parameters().collect();
        let in_constructor = function.is_constructor;
        if function.multi_line_signature && !parameters.is_empty() {
            self.write_end_of_line("(");
            self.scoped(|w| {
                for parameter in &parameters {
                    w.write_indent();
                    w.write_parameter(parameter, in_constructor);
                    w.write_end_of_line(",");
                }
            });
            self.write_indent();
            self.write(")");
        } else {
            self.write("(");
            for (i, parameter) in parameters.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                self.write_parameter(parameter, in_constructor);
            }
            self.write(")");
        }

        if function.is_constructor {
            return;
        }
        self.write(": ")
            .write(function.return_type_name.as_deref().unwrap_or("void"));
        if function.returns_multivalued {
            self.write("[]");
        }
        if function.returns_optional && function.return_has_null_union_type {
            self.write(" | null");
        }
    }

    fn write_parameter(&mut self, parameter: &ParameterDefinition, in_constructor: bool) {
        if let Some(access) = parameter.access_modifier.filter(|_| in_constructor) {
            self.write(access.as_str()).write(" ");
        }
        self.write(&parameter.name);
        if parameter.is_optional && parameter.use_question_token {
            self.write("?");
        }
        self.write(": ").write(&parameter.type_name);
        if parameter.is_multivalued {
            self.write("[]");
        }
        if parameter.is_optional && parameter.has_null_union_type {
            self.write(" | null");
        }
    }
}

/// Derive a safe import alias from a module name.
///
/// A leading `@` is stripped. Multi-segment paths are joined in camel case:
/// the first segment is lower camel case, the others upper camel case
/// (`@angular/core` becomes `angularCore`). Single segments are kept as-is.
pub fn make_safe_module_name(module: &str) -> String {
    let module = module.strip_prefix('@').unwrap_or(module);
    let mut segments = module.split('/');
    let (Some(first), Some(_)) = (segments.next(), module.find('/')) else {
        return module.to_string();
    };
    let mut alias = to_camel_case(first);
    for segment in segments {
        alias.push_str(&to_pascal_case(segment));
    }
    alias
}

/// Flatten paragraphs into doc comment lines, with a blank line between them.
fn paragraph_lines<'a>(paragraphs: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in paragraphs.filter(|p| !p.is_empty()) {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(paragraph.to_string());
    }
    lines
}

/// `@param {type} name description` or `@returns {type} description`.
fn parameter_doc_line(parameter: &ParameterDefinition) -> String {
    let suffix = if parameter.is_multivalued { "[]" } else { "" };
    let mut line = if parameter.is_return {
        format!("@returns {{{}{}}}", parameter.type_name, suffix)
    } else {
        format!("@param {{{}{}}} {}", parameter.type_name, suffix, parameter.name)
    };
    let description = parameter.description.join(" ");
    if !description.is_empty() {
        line.push(' ');
        line.push_str(&description);
    }
    line
}
