//! A recursive-descent parser with one token of lookahead.
//!
//! [`Parser`] pulls tokens from a [`Lexer`] and builds the
//! [`ast`](crate::ast) directly. [`parse`], [`parse_value`] and
//! [`parse_type`] are the entry points. The first lexical or syntax error
//! aborts the parse.

use crate::GraphQLError;
use crate::GraphQLErrorKind;
use crate::Lexer;
use crate::ParseOptions;
use crate::ParseResult;
use crate::Source;
use crate::SourceLocation;
use crate::ast;
use crate::ast::AstNode;
use crate::token::Token;
use crate::token::TokenKind;

/// Parses `source` into a [`Document`](ast::Document).
///
/// Parsing stops at the first lexical or syntax error, which is
/// returned; no partial document is produced.
///
/// ```
/// use gqlfront::ParseOptions;
/// use gqlfront::Source;
/// use gqlfront::ast::Definition;
///
/// let source = Source::anonymous("{ hero { name } }");
/// let document = gqlfront::parse(&source, ParseOptions::default())?;
/// assert!(matches!(document.definitions[0], Definition::Operation(_)));
/// # Ok::<(), gqlfront::GraphQLError>(())
/// ```
pub fn parse(source: &Source, options: ParseOptions) -> ParseResult<ast::Document<'_>> {
    Parser::new(source, options).parse_document()
}

/// Parses `source` as a single value literal, such as
/// `{ limit: 10, tags: ["a"] }`. Variables are allowed.
pub fn parse_value(source: &Source, options: ParseOptions) -> ParseResult<ast::Value<'_>> {
    let mut parser = Parser::new(source, options);
    parser.expect_token(TokenKind::StartOfFile)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect_token(TokenKind::EndOfFile)?;
    Ok(value)
}

/// Parses `source` as a single type reference, such as `[String!]!`.
pub fn parse_type(
    source: &Source,
    options: ParseOptions,
) -> ParseResult<ast::TypeReference<'_>> {
    let mut parser = Parser::new(source, options);
    parser.expect_token(TokenKind::StartOfFile)?;
    let type_ref = parser.parse_type_reference()?;
    parser.expect_token(TokenKind::EndOfFile)?;
    Ok(type_ref)
}

/// Recursive-descent parser over a [`Lexer`] with one token of
/// lookahead.
///
/// Each `parse_*` method documents the production it implements. A node's
/// location runs from the first token the method examined to the last
/// token it consumed.
///
/// See <https://spec.graphql.org/October2021/#sec-Document-Syntax>.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    options: ParseOptions,

    /// Current nesting of selection sets, list/object values and list
    /// type references.
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src Source, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source),
            options,
            depth: 0,
        }
    }

    /// The lexer driving this parser. After a parse its token chain holds
    /// every token that was examined.
    pub fn lexer(&self) -> &Lexer<'src> {
        &self.lexer
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    fn peek(&self, kind: TokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    fn peek_keyword(&self, keyword: &str) -> bool {
        self.lexer.token().is_keyword(keyword)
    }

    fn peek_description(&self) -> bool {
        self.peek(TokenKind::String) || self.peek(TokenKind::BlockString)
    }

    /// Consumes the current token if it is of `kind`, or fails.
    fn expect_token(&mut self, kind: TokenKind) -> ParseResult<Token<'src>> {
        let token = self.lexer.token().clone();
        if token.kind != kind {
            return Err(self.syntax_error(
                format!("Expected {kind}, found {}", token.description()),
                GraphQLErrorKind::UnexpectedToken {
                    expected: Some(kind.description().into_owned()),
                    found: token.description(),
                },
                token.start,
            ));
        }
        self.lexer.advance()?;
        Ok(token)
    }

    /// Consumes the current token if it is of `kind`.
    fn expect_optional_token(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if !self.peek(kind) {
            return Ok(false);
        }
        self.lexer.advance()?;
        Ok(true)
    }

    /// Consumes the current token if it is the name `keyword`, or fails.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if !self.peek_keyword(keyword) {
            let token = self.lexer.token();
            return Err(self.syntax_error(
                format!("Expected \"{keyword}\", found {}", token.description()),
                GraphQLErrorKind::UnexpectedToken {
                    expected: Some(format!("\"{keyword}\"")),
                    found: token.description(),
                },
                token.start,
            ));
        }
        self.lexer.advance()?;
        Ok(())
    }

    /// Consumes the current token if it is the name `keyword`.
    fn expect_optional_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        if !self.peek_keyword(keyword) {
            return Ok(false);
        }
        self.lexer.advance()?;
        Ok(true)
    }

    fn unexpected(&self, token: &Token<'src>) -> GraphQLError {
        self.syntax_error(
            format!("Unexpected {}", token.description()),
            GraphQLErrorKind::UnexpectedToken {
                expected: None,
                found: token.description(),
            },
            token.start,
        )
    }

    fn unexpected_current(&self) -> GraphQLError {
        self.unexpected(self.lexer.token())
    }

    fn unsupported_keyword(&self, keyword: &str, position: usize) -> GraphQLError {
        log::trace!("Rejecting unsupported keyword `{keyword}` at byte {position}.");
        let reason = match keyword {
            "extend" => "type system extensions cannot be parsed",
            _ => "only `query` and `mutation` operations can be parsed",
        };
        self.syntax_error(
            format!("`{keyword}` is not supported: {reason}."),
            GraphQLErrorKind::UnsupportedKeyword {
                keyword: keyword.to_string(),
            },
            position,
        )
    }

    fn syntax_error(
        &self,
        message: String,
        kind: GraphQLErrorKind,
        position: usize,
    ) -> GraphQLError {
        GraphQLError::at_position(message, kind, self.lexer.source(), position)
    }

    /// The location of a node that began at byte `start` and ended with
    /// the last consumed token.
    fn location_from(&self, start: usize) -> Option<SourceLocation<'src>> {
        if self.options.no_location {
            return None;
        }
        Some(SourceLocation::new(
            start,
            self.lexer.last_token().end,
            self.lexer.source(),
        ))
    }

    fn current_start(&self) -> usize {
        self.lexer.token().start
    }

    /// Runs `parse` one nesting level deeper, failing instead once
    /// [`ParseOptions::max_nesting_depth`] would be exceeded.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        let max_depth = self.options.max_nesting_depth;
        if self.depth >= max_depth {
            let position = self.current_start();
            log::trace!("Nesting depth limit of {max_depth} reached at byte {position}.");
            return Err(self.syntax_error(
                format!("Document nesting exceeds the maximum depth of {max_depth}."),
                GraphQLErrorKind::NestingTooDeep { max_depth },
                position,
            ));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    // =========================================================================
    // Repetition combinators
    // =========================================================================

    /// `open item+ close`
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect_token(open)?;
        let mut nodes = vec![parse_one(self)?];
        while !self.expect_optional_token(close)? {
            nodes.push(parse_one(self)?);
        }
        Ok(nodes)
    }

    /// `(open item+ close)?`
    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        if !self.peek(open) {
            return Ok(Vec::new());
        }
        self.many(open, parse_one, close)
    }

    /// `open item* close`
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect_token(open)?;
        let mut nodes = Vec::new();
        while !self.expect_optional_token(close)? {
            nodes.push(parse_one(self)?);
        }
        Ok(nodes)
    }

    /// `separator? item (separator item)*`
    fn delimited_any<T>(
        &mut self,
        separator: TokenKind,
        mut parse_one: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.expect_optional_token(separator)?;
        let mut nodes = vec![parse_one(self)?];
        while self.expect_optional_token(separator)? {
            nodes.push(parse_one(self)?);
        }
        Ok(nodes)
    }

    // =========================================================================
    // Document and definitions
    // =========================================================================

    /// Document : Definition+
    pub fn parse_document(&mut self) -> ParseResult<ast::Document<'src>> {
        let start = self.current_start();
        let definitions = self.many(
            TokenKind::StartOfFile,
            Self::parse_definition,
            TokenKind::EndOfFile,
        )?;
        let document = ast::Document {
            definitions,
            location: self.location_from(start),
        };
        log::debug!(
            "Parsed {} definition(s) from `{}` ({} tokens).",
            document.definitions.len(),
            self.lexer.source().name(),
            self.lexer.tokens().len(),
        );
        Ok(document)
    }

    /// Definition :
    ///   - ExecutableDefinition
    ///   - TypeSystemDefinition
    fn parse_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        let token = self.lexer.token();
        let (kind, start, value) = (token.kind, token.start, token.value.clone());
        match (kind, value.as_deref()) {
            (TokenKind::Name, Some("query" | "mutation")) | (TokenKind::LeftBrace, _) => {
                Ok(ast::Definition::Operation(self.parse_operation_definition()?))
            },
            (TokenKind::Name, Some("fragment")) => {
                Ok(ast::Definition::Fragment(self.parse_fragment_definition()?))
            },
            (
                TokenKind::Name,
                Some(
                    "schema" | "scalar" | "type" | "interface" | "union" | "enum"
                    | "input" | "directive",
                ),
            )
            | (TokenKind::String | TokenKind::BlockString, _) => {
                self.parse_type_system_definition()
            },
            (TokenKind::Name, Some(keyword @ ("extend" | "subscription"))) => {
                Err(self.unsupported_keyword(keyword, start))
            },
            _ => Err(self.unexpected_current()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// OperationDefinition :
    ///   - SelectionSet
    ///   - OperationType Name? VariableDefinitions? Directives? SelectionSet
    fn parse_operation_definition(&mut self) -> ParseResult<ast::OperationDefinition<'src>> {
        let start = self.current_start();
        if self.peek(TokenKind::LeftBrace) {
            let selection_set = self.parse_selection_set()?;
            return Ok(ast::OperationDefinition {
                operation: ast::OperationKind::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                location: self.location_from(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.optional_many(
            TokenKind::LeftParen,
            Self::parse_variable_definition,
            TokenKind::RightParen,
        )?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            location: self.location_from(start),
        })
    }

    /// OperationType : one of `query` `mutation`
    fn parse_operation_type(&mut self) -> ParseResult<ast::OperationKind> {
        let token = self.expect_token(TokenKind::Name)?;
        let keyword = token.value().unwrap_or_default();
        if let Some(operation) = ast::OperationKind::from_keyword(keyword) {
            return Ok(operation);
        }
        if keyword == "subscription" {
            return Err(self.unsupported_keyword(keyword, token.start));
        }
        Err(self.unexpected(&token))
    }

    /// VariableDefinition : Variable : Type DefaultValue? Directives[Const]?
    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition<'src>> {
        let start = self.current_start();
        let variable = self.parse_variable()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ref = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;

        Ok(ast::VariableDefinition {
            variable,
            type_ref,
            default_value,
            directives,
            location: self.location_from(start),
        })
    }

    /// Variable : $ Name
    fn parse_variable(&mut self) -> ParseResult<ast::VariableValue<'src>> {
        let start = self.current_start();
        self.expect_token(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(ast::VariableValue {
            name,
            location: self.location_from(start),
        })
    }

    /// SelectionSet : { Selection+ }
    fn parse_selection_set(&mut self) -> ParseResult<ast::SelectionSet<'src>> {
        self.nested(|parser| {
            let start = parser.current_start();
            let selections = parser.many(
                TokenKind::LeftBrace,
                Self::parse_selection,
                TokenKind::RightBrace,
            )?;
            Ok(ast::SelectionSet {
                selections,
                location: parser.location_from(start),
            })
        })
    }

    /// Selection :
    ///   - Field
    ///   - FragmentSpread
    ///   - InlineFragment
    fn parse_selection(&mut self) -> ParseResult<ast::Selection<'src>> {
        if self.peek(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            self.parse_field().map(ast::Selection::Field)
        }
    }

    /// Field : Alias? Name Arguments? Directives? SelectionSet?
    fn parse_field(&mut self) -> ParseResult<ast::FieldSelection<'src>> {
        let start = self.current_start();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.expect_optional_token(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(TokenKind::LeftBrace) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(ast::FieldSelection {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: self.location_from(start),
        })
    }

    /// Arguments[Const] : ( Argument[?Const]+ )
    fn parse_arguments(&mut self, is_const: bool) -> ParseResult<Vec<ast::Argument<'src>>> {
        self.optional_many(
            TokenKind::LeftParen,
            |parser| parser.parse_argument(is_const),
            TokenKind::RightParen,
        )
    }

    /// Argument[Const] : Name : Value[?Const]
    fn parse_argument(&mut self, is_const: bool) -> ParseResult<ast::Argument<'src>> {
        let start = self.current_start();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::Argument {
            name,
            value,
            location: self.location_from(start),
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// FragmentSpread : ... FragmentName Directives?
    ///
    /// InlineFragment : ... TypeCondition? Directives? SelectionSet
    fn parse_fragment(&mut self) -> ParseResult<ast::Selection<'src>> {
        let start = self.current_start();
        self.expect_token(TokenKind::Spread)?;

        let has_type_condition = self.expect_optional_keyword("on")?;
        if !has_type_condition && self.peek(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(ast::Selection::FragmentSpread(ast::FragmentSpreadSelection {
                name,
                directives,
                location: self.location_from(start),
            }));
        }

        let type_condition = if has_type_condition {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragmentSelection {
            type_condition,
            directives,
            selection_set,
            location: self.location_from(start),
        }))
    }

    /// FragmentDefinition :
    ///   - fragment FragmentName TypeCondition Directives? SelectionSet
    ///
    /// TypeCondition : on NamedType
    fn parse_fragment_definition(&mut self) -> ParseResult<ast::FragmentDefinition<'src>> {
        let start = self.current_start();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;

        Ok(ast::FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location: self.location_from(start),
        })
    }

    /// FragmentName : Name but not `on`
    fn parse_fragment_name(&mut self) -> ParseResult<ast::Name<'src>> {
        if self.peek_keyword("on") {
            let token = self.lexer.token();
            return Err(self.syntax_error(
                format!("Unexpected {}", token.description()),
                GraphQLErrorKind::ReservedName {
                    name: "on".to_string(),
                },
                token.start,
            ));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Value[Const] :
    ///   - [~Const] Variable
    ///   - IntValue
    ///   - FloatValue
    ///   - StringValue
    ///   - BooleanValue
    ///   - NullValue
    ///   - EnumValue
    ///   - ListValue[?Const]
    ///   - ObjectValue[?Const]
    fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<ast::Value<'src>> {
        let token = self.lexer.token().clone();
        match token.kind {
            TokenKind::LeftBracket => self
                .nested(|parser| parser.parse_list(is_const))
                .map(ast::Value::List),

            TokenKind::LeftBrace => self
                .nested(|parser| parser.parse_object(is_const))
                .map(ast::Value::Object),

            TokenKind::Integer => {
                self.lexer.advance()?;
                let raw = token.value().unwrap_or_default();
                let value = raw.parse::<i32>().map_err(|err| {
                    self.syntax_error(
                        format!("Int cannot represent non 32-bit signed integer value: {raw}"),
                        GraphQLErrorKind::InvalidValue,
                        token.start,
                    )
                    .with_cause(err)
                })?;
                Ok(ast::Value::Int(ast::IntValue {
                    value,
                    location: self.location_from(token.start),
                }))
            },

            TokenKind::Float => {
                self.lexer.advance()?;
                let raw = token.value().unwrap_or_default();
                let value = raw.parse::<f64>().map_err(|err| {
                    self.syntax_error(
                        format!("Float cannot represent value: {raw}"),
                        GraphQLErrorKind::InvalidValue,
                        token.start,
                    )
                    .with_cause(err)
                })?;
                Ok(ast::Value::Float(ast::FloatValue {
                    value,
                    location: self.location_from(token.start),
                }))
            },

            TokenKind::String | TokenKind::BlockString => {
                self.parse_string_literal().map(ast::Value::String)
            },

            TokenKind::Name => {
                self.lexer.advance()?;
                let location = self.location_from(token.start);
                Ok(match token.value() {
                    Some("true") => ast::Value::Boolean(ast::BooleanValue { value: true, location }),
                    Some("false") => ast::Value::Boolean(ast::BooleanValue { value: false, location }),
                    Some("null") => ast::Value::Null(ast::NullValue { location }),
                    _ => ast::Value::Enum(ast::EnumValue {
                        value: token.value.clone().unwrap_or_default(),
                        location,
                    }),
                })
            },

            TokenKind::Dollar if is_const => {
                let next = self.lexer.lookahead()?;
                if next.kind != TokenKind::Name {
                    return Err(self.unexpected(&token));
                }
                let name = next.value().unwrap_or_default().to_string();
                Err(self.syntax_error(
                    format!("Unexpected variable \"${name}\" in constant value."),
                    GraphQLErrorKind::VariableInConstContext { name },
                    token.start,
                ))
            },

            TokenKind::Dollar => self.parse_variable().map(ast::Value::Variable),

            _ => Err(self.unexpected(&token)),
        }
    }

    fn parse_string_literal(&mut self) -> ParseResult<ast::StringValue<'src>> {
        let token = self.lexer.token().clone();
        self.lexer.advance()?;
        Ok(ast::StringValue {
            is_block: token.kind == TokenKind::BlockString,
            value: token.value.unwrap_or_default(),
            location: self.location_from(token.start),
        })
    }

    /// ListValue[Const] :
    ///   - [ ]
    ///   - [ Value[?Const]+ ]
    fn parse_list(&mut self, is_const: bool) -> ParseResult<ast::ListValue<'src>> {
        let start = self.current_start();
        let values = self.any(
            TokenKind::LeftBracket,
            |parser| parser.parse_value_literal(is_const),
            TokenKind::RightBracket,
        )?;
        Ok(ast::ListValue {
            values,
            location: self.location_from(start),
        })
    }

    /// ObjectValue[Const] :
    ///   - { }
    ///   - { ObjectField[?Const]+ }
    fn parse_object(&mut self, is_const: bool) -> ParseResult<ast::ObjectValue<'src>> {
        let start = self.current_start();
        let members = self.any(
            TokenKind::LeftBrace,
            |parser| parser.parse_object_field(is_const),
            TokenKind::RightBrace,
        )?;
        Ok(ast::ObjectValue {
            members,
            location: self.location_from(start),
        })
    }

    /// ObjectField[Const] : Name : Value[?Const]
    fn parse_object_field(&mut self, is_const: bool) -> ParseResult<ast::ObjectField<'src>> {
        let start = self.current_start();
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ast::ObjectField {
            name,
            value,
            location: self.location_from(start),
        })
    }

    // =========================================================================
    // Directives, names and types
    // =========================================================================

    /// Directives[Const] : Directive[?Const]+
    fn parse_directives(&mut self, is_const: bool) -> ParseResult<Vec<ast::Directive<'src>>> {
        let mut directives = Vec::new();
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    /// Directive[Const] : @ Name Arguments[?Const]?
    fn parse_directive(&mut self, is_const: bool) -> ParseResult<ast::Directive<'src>> {
        let start = self.current_start();
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(ast::Directive {
            name,
            arguments,
            location: self.location_from(start),
        })
    }

    fn parse_name(&mut self) -> ParseResult<ast::Name<'src>> {
        let token = self.expect_token(TokenKind::Name)?;
        Ok(ast::Name {
            value: token.value.unwrap_or_default(),
            location: self.location_from(token.start),
        })
    }

    /// Type :
    ///   - NamedType
    ///   - ListType
    ///   - NonNullType
    fn parse_type_reference(&mut self) -> ParseResult<ast::TypeReference<'src>> {
        let start = self.current_start();
        let type_ref = if self.expect_optional_token(TokenKind::LeftBracket)? {
            let inner = self.nested(Self::parse_type_reference)?;
            self.expect_token(TokenKind::RightBracket)?;
            ast::TypeReference::List(ast::ListType {
                inner: Box::new(inner),
                location: self.location_from(start),
            })
        } else {
            ast::TypeReference::Named(self.parse_named_type()?)
        };

        if self.expect_optional_token(TokenKind::Bang)? {
            return Ok(ast::TypeReference::NonNull(ast::NonNullType {
                inner: Box::new(type_ref),
                location: self.location_from(start),
            }));
        }
        Ok(type_ref)
    }

    /// NamedType : Name
    fn parse_named_type(&mut self) -> ParseResult<ast::NamedType<'src>> {
        let start = self.current_start();
        let name = self.parse_name()?;
        Ok(ast::NamedType {
            name,
            location: self.location_from(start),
        })
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    /// TypeSystemDefinition :
    ///   - SchemaDefinition
    ///   - TypeDefinition
    ///   - DirectiveDefinition
    ///
    /// A leading description is skipped over to find the keyword.
    fn parse_type_system_definition(&mut self) -> ParseResult<ast::Definition<'src>> {
        let keyword_token = if self.peek_description() {
            self.lexer.lookahead()?.clone()
        } else {
            self.lexer.token().clone()
        };

        let keyword = match keyword_token.kind {
            TokenKind::Name => keyword_token.value().unwrap_or_default(),
            _ => return Err(self.unexpected(&keyword_token)),
        };
        let definition = match keyword {
            "schema" => ast::Definition::Schema(self.parse_schema_definition()?),
            "scalar" => ast::Definition::Scalar(self.parse_scalar_type_definition()?),
            "type" => ast::Definition::Object(self.parse_object_type_definition()?),
            "interface" => ast::Definition::Interface(self.parse_interface_type_definition()?),
            "union" => ast::Definition::Union(self.parse_union_type_definition()?),
            "enum" => ast::Definition::Enum(self.parse_enum_type_definition()?),
            "input" => ast::Definition::InputObject(self.parse_input_object_type_definition()?),
            "directive" => ast::Definition::Directive(self.parse_directive_definition()?),
            _ => return Err(self.unexpected(&keyword_token)),
        };
        Ok(definition)
    }

    /// Description : StringValue
    fn parse_description(&mut self) -> ParseResult<Option<ast::StringValue<'src>>> {
        if self.peek_description() {
            self.parse_string_literal().map(Some)
        } else {
            Ok(None)
        }
    }

    /// SchemaDefinition :
    ///   - Description? schema Directives[Const]? { RootOperationTypeDefinition+ }
    fn parse_schema_definition(&mut self) -> ParseResult<ast::SchemaDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::LeftBrace,
            Self::parse_operation_type_definition,
            TokenKind::RightBrace,
        )?;
        Ok(ast::SchemaDefinition {
            description,
            directives,
            operation_types,
            location: self.location_from(start),
        })
    }

    /// RootOperationTypeDefinition : OperationType : NamedType
    fn parse_operation_type_definition(
        &mut self,
    ) -> ParseResult<ast::OperationTypeDefinition<'src>> {
        let start = self.current_start();
        let operation = self.parse_operation_type()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ref = self.parse_named_type()?;
        Ok(ast::OperationTypeDefinition {
            operation,
            type_ref,
            location: self.location_from(start),
        })
    }

    /// ScalarTypeDefinition : Description? scalar Name Directives[Const]?
    fn parse_scalar_type_definition(&mut self) -> ParseResult<ast::ScalarTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::ScalarTypeDefinition {
            description,
            name,
            directives,
            location: self.location_from(start),
        })
    }

    /// ObjectTypeDefinition :
    ///   - Description? type Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
    fn parse_object_type_definition(&mut self) -> ParseResult<ast::ObjectTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: self.location_from(start),
        })
    }

    /// ImplementsInterfaces : implements &? NamedType (& NamedType)*
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<ast::NamedType<'src>>> {
        if !self.expect_optional_keyword("implements")? {
            return Ok(Vec::new());
        }
        self.delimited_any(TokenKind::Ampersand, Self::parse_named_type)
    }

    /// FieldsDefinition : { FieldDefinition+ }
    fn parse_fields_definition(&mut self) -> ParseResult<Vec<ast::FieldDefinition<'src>>> {
        self.optional_many(
            TokenKind::LeftBrace,
            Self::parse_field_definition,
            TokenKind::RightBrace,
        )
    }

    /// FieldDefinition :
    ///   - Description? Name ArgumentsDefinition? : Type Directives[Const]?
    fn parse_field_definition(&mut self) -> ParseResult<ast::FieldDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ref = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::FieldDefinition {
            description,
            name,
            arguments,
            type_ref,
            directives,
            location: self.location_from(start),
        })
    }

    /// ArgumentsDefinition : ( InputValueDefinition+ )
    fn parse_argument_definitions(
        &mut self,
    ) -> ParseResult<Vec<ast::InputValueDefinition<'src>>> {
        self.optional_many(
            TokenKind::LeftParen,
            Self::parse_input_value_definition,
            TokenKind::RightParen,
        )
    }

    /// InputValueDefinition :
    ///   - Description? Name : Type DefaultValue? Directives[Const]?
    fn parse_input_value_definition(
        &mut self,
    ) -> ParseResult<ast::InputValueDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let type_ref = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(ast::InputValueDefinition {
            description,
            name,
            type_ref,
            default_value,
            directives,
            location: self.location_from(start),
        })
    }

    /// InterfaceTypeDefinition :
    ///   - Description? interface Name ImplementsInterfaces? Directives[Const]? FieldsDefinition?
    fn parse_interface_type_definition(
        &mut self,
    ) -> ParseResult<ast::InterfaceTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives(true)?;
        let fields = self.parse_fields_definition()?;
        Ok(ast::InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            location: self.location_from(start),
        })
    }

    /// UnionTypeDefinition :
    ///   - Description? union Name Directives[Const]? UnionMemberTypes?
    ///
    /// UnionMemberTypes : = |? NamedType (| NamedType)*
    fn parse_union_type_definition(&mut self) -> ParseResult<ast::UnionTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let members = if self.expect_optional_token(TokenKind::Equals)? {
            self.delimited_any(TokenKind::Pipe, Self::parse_named_type)?
        } else {
            Vec::new()
        };
        Ok(ast::UnionTypeDefinition {
            description,
            name,
            directives,
            members,
            location: self.location_from(start),
        })
    }

    /// EnumTypeDefinition :
    ///   - Description? enum Name Directives[Const]? EnumValuesDefinition?
    fn parse_enum_type_definition(&mut self) -> ParseResult<ast::EnumTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let values = self.optional_many(
            TokenKind::LeftBrace,
            Self::parse_enum_value_definition,
            TokenKind::RightBrace,
        )?;
        Ok(ast::EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            location: self.location_from(start),
        })
    }

    /// EnumValueDefinition : Description? EnumValue Directives[Const]?
    fn parse_enum_value_definition(&mut self) -> ParseResult<ast::EnumValueDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(ast::EnumValueDefinition {
            description,
            name,
            directives,
            location: self.location_from(start),
        })
    }

    /// InputObjectTypeDefinition :
    ///   - Description? input Name Directives[Const]? InputFieldsDefinition?
    fn parse_input_object_type_definition(
        &mut self,
    ) -> ParseResult<ast::InputObjectTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        let fields = self.optional_many(
            TokenKind::LeftBrace,
            Self::parse_input_value_definition,
            TokenKind::RightBrace,
        )?;
        Ok(ast::InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            location: self.location_from(start),
        })
    }

    /// DirectiveDefinition :
    ///   - Description? directive @ Name ArgumentsDefinition? repeatable? on DirectiveLocations
    ///
    /// DirectiveLocations : |? DirectiveLocation (| DirectiveLocation)*
    fn parse_directive_definition(
        &mut self,
    ) -> ParseResult<ast::DirectiveTypeDefinition<'src>> {
        let start = self.current_start();
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_definitions()?;
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.delimited_any(TokenKind::Pipe, Self::parse_directive_location)?;
        Ok(ast::DirectiveTypeDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            location: self.location_from(start),
        })
    }

    /// DirectiveLocation : one of the names in [`ast::DirectiveLocation`]
    fn parse_directive_location(&mut self) -> ParseResult<ast::Name<'src>> {
        let start = self.current_start();
        let name = self.parse_name()?;
        if ast::DirectiveLocation::from_name(name.as_str()).is_some() {
            return Ok(name);
        }

        let message = format!("Unexpected Name \"{name}\"");
        let kind = GraphQLErrorKind::UnknownDirectiveLocation {
            name: name.as_str().to_string(),
        };
        if name.location().is_some() {
            let nodes: [&dyn AstNode<'src>; 1] = [&name];
            return Err(GraphQLError::from_nodes(message, &nodes).with_kind(kind));
        }
        Err(self.syntax_error(message, kind, start))
    }
}
