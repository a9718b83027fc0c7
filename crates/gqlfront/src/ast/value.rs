use crate::SourceLocation;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::impl_ast_node_for_structs;
use std::borrow::Cow;

/// An input value literal, or a `$variable` reference in non-constant
/// positions.
///
/// See <https://spec.graphql.org/October2021/#sec-Input-Values>.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Boolean(BooleanValue<'src>),
    Enum(EnumValue<'src>),
    Float(FloatValue<'src>),
    Int(IntValue<'src>),
    List(ListValue<'src>),
    Null(NullValue<'src>),
    Object(ObjectValue<'src>),
    String(StringValue<'src>),
    Variable(VariableValue<'src>),
}

impl<'src> Value<'src> {
    /// `true` if this value contains no variable reference at any depth.
    pub fn is_const(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_const),
            Value::Object(object) => {
                object.members.iter().all(|member| member.value.is_const())
            },
            Value::Boolean(_)
            | Value::Enum(_)
            | Value::Float(_)
            | Value::Int(_)
            | Value::Null(_)
            | Value::String(_) => true,
        }
    }
}

#[inherent::inherent]
impl<'src> AstNode<'src> for Value<'src> {
    pub fn location(&self) -> Option<&SourceLocation<'src>> {
        match self {
            Value::Boolean(value) => value.location(),
            Value::Enum(value) => value.location(),
            Value::Float(value) => value.location(),
            Value::Int(value) => value.location(),
            Value::List(value) => value.location(),
            Value::Null(value) => value.location(),
            Value::Object(value) => value.location(),
            Value::String(value) => value.location(),
            Value::Variable(value) => value.location(),
        }
    }

    pub fn source_text(&self) -> Option<&'src str>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'src> {
    pub value: bool,
    pub location: Option<SourceLocation<'src>>,
}

/// Any name other than `true`, `false` and `null` in value position.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue<'src> {
    pub value: f64,
    pub location: Option<SourceLocation<'src>>,
}

/// A 32-bit signed integer literal.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue<'src> {
    pub value: i32,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'src> {
    pub location: Option<SourceLocation<'src>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub members: Vec<ObjectField<'src>>,
    pub location: Option<SourceLocation<'src>>,
}

impl<'src> ObjectValue<'src> {
    pub fn member(&self, name: &str) -> Option<&Value<'src>> {
        self.members
            .iter()
            .find(|member| member.name == name)
            .map(|member| &member.value)
    }
}

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Option<SourceLocation<'src>>,
}

/// A quoted (`"..."`) or block (`"""..."""`) string, already decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    pub is_block: bool,
    pub location: Option<SourceLocation<'src>>,
}

/// A `$name` reference.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableValue<'src> {
    pub name: Name<'src>,
    pub location: Option<SourceLocation<'src>>,
}

impl_ast_node_for_structs!(
    BooleanValue,
    EnumValue,
    FloatValue,
    IntValue,
    ListValue,
    NullValue,
    ObjectField,
    ObjectValue,
    StringValue,
    VariableValue,
);
