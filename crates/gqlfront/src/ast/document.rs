use crate::SourceLocation;
use crate::ast::AstNode;
use crate::ast::DirectiveTypeDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Name;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::impl_ast_node_for_structs;

/// The root of a parsed GraphQL document. `definitions` is never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> Document<'src> {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'src>> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        })
    }

    /// Finds a fragment definition by name.
    ///
    /// Consumers resolving `...Spread` selections use this in place of a
    /// parent link on the spread itself.
    pub fn fragment(&self, name: &str) -> Option<&FragmentDefinition<'src>> {
        self.fragments().find(|fragment| fragment.name == name)
    }
}

/// A top-level definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    Operation(OperationDefinition<'src>),
    Fragment(FragmentDefinition<'src>),
    Schema(SchemaDefinition<'src>),
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
    Directive(DirectiveTypeDefinition<'src>),
}

impl<'src> Definition<'src> {
    /// `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        match self {
            Definition::Operation(_) | Definition::Fragment(_) => true,

            Definition::Schema(_)
            | Definition::Scalar(_)
            | Definition::Object(_)
            | Definition::Interface(_)
            | Definition::Union(_)
            | Definition::Enum(_)
            | Definition::InputObject(_)
            | Definition::Directive(_) => false,
        }
    }

    /// The defined name; `None` for anonymous operations and `schema`.
    pub fn name(&self) -> Option<&Name<'src>> {
        match self {
            Definition::Operation(def) => def.name.as_ref(),
            Definition::Fragment(def) => Some(&def.name),
            Definition::Schema(_) => None,
            Definition::Scalar(def) => Some(&def.name),
            Definition::Object(def) => Some(&def.name),
            Definition::Interface(def) => Some(&def.name),
            Definition::Union(def) => Some(&def.name),
            Definition::Enum(def) => Some(&def.name),
            Definition::InputObject(def) => Some(&def.name),
            Definition::Directive(def) => Some(&def.name),
        }
    }
}

#[inherent::inherent]
impl<'src> AstNode<'src> for Definition<'src> {
    pub fn location(&self) -> Option<&SourceLocation<'src>> {
        match self {
            Definition::Operation(def) => def.location(),
            Definition::Fragment(def) => def.location(),
            Definition::Schema(def) => def.location(),
            Definition::Scalar(def) => def.location(),
            Definition::Object(def) => def.location(),
            Definition::Interface(def) => def.location(),
            Definition::Union(def) => def.location(),
            Definition::Enum(def) => def.location(),
            Definition::InputObject(def) => def.location(),
            Definition::Directive(def) => def.location(),
        }
    }

    pub fn source_text(&self) -> Option<&'src str>;
}

impl_ast_node_for_structs!(Document);
