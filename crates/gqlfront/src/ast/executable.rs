use crate::SourceLocation;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::ast::VariableValue;
use crate::ast::impl_ast_node_for_structs;

/// The root operation types this parser accepts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
        }
    }
}

/// `query Name($var: Type) @directive { ... }`, or the `{ ... }`
/// shorthand for an anonymous query.
///
/// See <https://spec.graphql.org/October2021/#sec-Language.Operations>.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation: OperationKind,
    pub name: Option<Name<'src>>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<SourceLocation<'src>>,
}

/// `$name: Type = default @directive`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: VariableValue<'src>,
    pub type_ref: TypeReference<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

/// `fragment Name on Type @directive { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: Name<'src>,
    pub type_condition: NamedType<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<SourceLocation<'src>>,
}

/// A `{ ... }` block of selections. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

/// See <https://spec.graphql.org/October2021/#Selection>.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(FieldSelection<'src>),
    FragmentSpread(FragmentSpreadSelection<'src>),
    InlineFragment(InlineFragmentSelection<'src>),
}

#[inherent::inherent]
impl<'src> AstNode<'src> for Selection<'src> {
    pub fn location(&self) -> Option<&SourceLocation<'src>> {
        match self {
            Selection::Field(field) => field.location(),
            Selection::FragmentSpread(spread) => spread.location(),
            Selection::InlineFragment(inline) => inline.location(),
        }
    }

    pub fn source_text(&self) -> Option<&'src str>;
}

/// `alias: name(arguments) @directive { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection<'src> {
    pub alias: Option<Name<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> FieldSelection<'src> {
    /// The key this field is returned under: its alias if any, else its
    /// name.
    pub fn response_key(&self) -> &Name<'src> {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

/// `...FragmentName @directive`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpreadSelection<'src> {
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

/// `... on Type @directive { ... }`; the type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragmentSelection<'src> {
    pub type_condition: Option<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<SourceLocation<'src>>,
}

impl_ast_node_for_structs!(
    FieldSelection,
    FragmentDefinition,
    FragmentSpreadSelection,
    InlineFragmentSelection,
    OperationDefinition,
    SelectionSet,
    VariableDefinition,
);
