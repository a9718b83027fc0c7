use crate::SourceLocation;
use crate::ast::Name;
use crate::ast::Value;
use crate::ast::impl_ast_node_for_structs;

/// `name: value`, as passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Option<SourceLocation<'src>>,
}

/// An `@name(arguments)` annotation.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> Directive<'src> {
    pub fn argument(&self, name: &str) -> Option<&Argument<'src>> {
        self.arguments.iter().find(|argument| argument.name == name)
    }
}

impl_ast_node_for_structs!(Argument, Directive);
