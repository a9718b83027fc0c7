use crate::SourceLocation;

/// Implemented by every AST node type.
///
/// Node structs implement it through `#[inherent] impl AstNode`, so
/// `node.location()` works without importing the trait while generic
/// code (such as [`GraphQLError::from_nodes`]) can still take
/// `&dyn AstNode`.
///
/// [`GraphQLError::from_nodes`]: crate::GraphQLError::from_nodes
pub trait AstNode<'src> {
    /// Where this node was parsed from, or `None` when parsing ran with
    /// [`ParseOptions::no_location`](crate::ParseOptions::no_location).
    fn location(&self) -> Option<&SourceLocation<'src>>;

    /// The exact source text this node was parsed from.
    fn source_text(&self) -> Option<&'src str> {
        self.location().map(|location| location.source_text())
    }
}

/// Implements [`AstNode`] for node structs that store their location in
/// a `location: Option<SourceLocation<'src>>` field.
macro_rules! impl_ast_node_for_structs {
    ($($node:ident),* $(,)?) => {
        $(
            #[inherent::inherent]
            impl<'src> $crate::ast::AstNode<'src> for $node<'src> {
                pub fn location(&self) -> Option<&$crate::SourceLocation<'src>> {
                    self.location.as_ref()
                }

                pub fn source_text(&self) -> Option<&'src str>;
            }
        )*
    };
}

pub(crate) use impl_ast_node_for_structs;
