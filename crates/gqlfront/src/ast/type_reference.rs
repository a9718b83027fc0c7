use crate::SourceLocation;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::impl_ast_node_for_structs;

/// A type reference such as `String`, `[ID!]` or `[[Int]!]!`.
///
/// The parser never produces `NonNull(NonNull(..))`.
///
/// See <https://spec.graphql.org/October2021/#sec-Type-References>.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeReference<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

impl<'src> TypeReference<'src> {
    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_named_type(&self) -> &NamedType<'src> {
        match self {
            TypeReference::Named(named) => named,
            TypeReference::List(list) => list.inner.innermost_named_type(),
            TypeReference::NonNull(non_null) => non_null.inner.innermost_named_type(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        !matches!(self, TypeReference::NonNull(_))
    }
}

#[inherent::inherent]
impl<'src> AstNode<'src> for TypeReference<'src> {
    pub fn location(&self) -> Option<&SourceLocation<'src>> {
        match self {
            TypeReference::Named(named) => named.location(),
            TypeReference::List(list) => list.location(),
            TypeReference::NonNull(non_null) => non_null.location(),
        }
    }

    pub fn source_text(&self) -> Option<&'src str>;
}

impl std::fmt::Display for TypeReference<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeReference::Named(named) => write!(f, "{}", named.name),
            TypeReference::List(list) => write!(f, "[{}]", list.inner),
            TypeReference::NonNull(non_null) => write!(f, "{}!", non_null.inner),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub location: Option<SourceLocation<'src>>,
}

/// `[inner]`
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub inner: Box<TypeReference<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> ListType<'src> {
    /// Whether the list may contain `null`: true unless the wrapped type
    /// is non-null.
    pub fn is_nullable(&self) -> bool {
        self.inner.is_nullable()
    }
}

/// `inner!`
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub inner: Box<TypeReference<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl_ast_node_for_structs!(ListType, NamedType, NonNullType);
