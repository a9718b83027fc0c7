use crate::SourceLocation;
use crate::ast::Directive;
use crate::ast::DirectiveLocation;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::ast::impl_ast_node_for_structs;

/// `schema @directive { query: Query mutation: Mutation }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> SchemaDefinition<'src> {
    pub fn root_type(&self, operation: OperationKind) -> Option<&NamedType<'src>> {
        self.operation_types
            .iter()
            .find(|def| def.operation == operation)
            .map(|def| &def.type_ref)
    }
}

/// `query: Query` inside a [`SchemaDefinition`].
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition<'src> {
    pub operation: OperationKind,
    pub type_ref: NamedType<'src>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

/// `name(arguments): Type @directive` inside an object or interface.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub type_ref: TypeReference<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

/// `name: Type = default @directive`: an argument declaration or an
/// input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub type_ref: TypeReference<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub members: Vec<NamedType<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

/// `directive @name(arguments) repeatable on LOCATION | LOCATION`
///
/// Every entry of `locations` is a valid [`DirectiveLocation`] name;
/// the parser rejects anything else.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub repeatable: bool,
    pub locations: Vec<Name<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> DirectiveTypeDefinition<'src> {
    pub fn location_kinds(&self) -> impl Iterator<Item = DirectiveLocation> + '_ {
        self.locations
            .iter()
            .filter_map(|name| DirectiveLocation::from_name(name.as_str()))
    }
}

impl_ast_node_for_structs!(
    DirectiveTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    FieldDefinition,
    InputObjectTypeDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    ObjectTypeDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    SchemaDefinition,
    UnionTypeDefinition,
);
