use crate::SourceLocation;
use crate::ast::impl_ast_node_for_structs;
use std::borrow::Cow;

/// A GraphQL name (`[A-Za-z_][A-Za-z0-9_]*`).
#[derive(Clone, Debug, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> Name<'src> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for Name<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Name<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl std::fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl_ast_node_for_structs!(Name);
