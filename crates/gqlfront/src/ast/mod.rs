//! The abstract syntax tree produced by the [`Parser`](crate::Parser).
//!
//! Every node is exclusively owned by its parent. Borrowed text
//! (`Cow<'src, str>`) and [`SourceLocation`](crate::SourceLocation)s
//! refer back to the [`Source`](crate::Source) that was parsed.

mod ast_node;
mod directive;
mod directive_location;
mod document;
mod executable;
mod name;
mod type_reference;
mod type_system;
mod value;

pub use ast_node::AstNode;
pub(crate) use ast_node::impl_ast_node_for_structs;
pub use directive::Argument;
pub use directive::Directive;
pub use directive_location::DirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use executable::FieldSelection;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpreadSelection;
pub use executable::InlineFragmentSelection;
pub use executable::OperationDefinition;
pub use executable::OperationKind;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use name::Name;
pub use type_reference::ListType;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::TypeReference;
pub use type_system::DirectiveTypeDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::OperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::UnionTypeDefinition;
pub use value::BooleanValue;
pub use value::EnumValue;
pub use value::FloatValue;
pub use value::IntValue;
pub use value::ListValue;
pub use value::NullValue;
pub use value::ObjectField;
pub use value::ObjectValue;
pub use value::StringValue;
pub use value::Value;
pub use value::VariableValue;
