//! Recursive descent parser for GraphQL executable documents.
//!
//! [`GraphQLParser`] works with any token source implementing
//! [`GraphQLTokenSource`] and builds an owned [`ast::Document`].
//!
//! # Architecture
//!
//! Each grammar rule has a `parse_*` method returning `Result<T, GraphQLError>`.
//! The first lexer or parser error aborts the whole parse: there is no error
//! recovery and no partial AST.
//!
//! Selection sets, values, and type annotations receive their nesting depth
//! as an explicit `depth` argument. Entering a rule with a depth above
//! [`GraphQLParserOptions::max_recursion_depth`] fails with
//! [`RecursionLimitExceeded`](GraphQLParseErrorKind::RecursionLimitExceeded)
//! before the native stack is at risk.

use crate::ast;
use crate::DefinitionKind;
use crate::Expectation;
use crate::GraphQLError;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParserOptions;
use crate::GraphQLTokenStream;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token_source::GraphQLTokenSource;
use crate::token_source::StrGraphQLTokenSource;

type ParseResult<T> = Result<T, GraphQLError>;

/// Parses `source` as an executable document with default options.
///
/// # Example
///
/// ```
/// use graphquery_parser::ast;
/// use graphquery_parser::parse_document;
///
/// let doc = parse_document("{ hero { name } }").unwrap();
/// assert!(matches!(doc.definitions[0], ast::Definition::Operation(_)));
/// ```
pub fn parse_document(source: &str) -> Result<ast::Document, GraphQLError> {
    GraphQLParser::new(source).parse()
}

/// A recursive descent parser for GraphQL executable documents.
///
/// Generic over the token source so that callers can feed pre-lexed or
/// synthesized tokens instead of source text.
///
/// # Usage
///
/// ```
/// use graphquery_parser::GraphQLParser;
/// use graphquery_parser::GraphQLParserOptions;
///
/// let options = GraphQLParserOptions {
///     max_recursion_depth: 8,
///     ..GraphQLParserOptions::default()
/// };
/// let doc = GraphQLParser::new("query Q($id: ID!) { node(id: $id) { id } }")
///     .with_options(options)
///     .parse()
///     .unwrap();
/// assert_eq!(doc.definitions[0].name(), Some("Q"));
/// ```
pub struct GraphQLParser<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_stream: GraphQLTokenStream<'src, TTokenSource>,
    options: GraphQLParserOptions,
}

impl<'src> GraphQLParser<'src, StrGraphQLTokenSource<'src>> {
    /// Creates a new parser from a string-like source.
    ///
    /// Accepts any type that can be referenced as a `str`,
    /// including `&str`, `&String`, and `&Cow<str>`.
    pub fn new<S: AsRef<str> + ?Sized>(source: &'src S) -> Self {
        Self::from_token_source(StrGraphQLTokenSource::new(source.as_ref()))
    }
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLParser<'src, TTokenSource> {
    /// Creates a new parser from a token source.
    pub fn from_token_source(token_source: TTokenSource) -> Self {
        Self {
            token_stream: GraphQLTokenStream::new(token_source),
            options: GraphQLParserOptions::default(),
        }
    }

    /// Replaces this parser's options.
    pub fn with_options(mut self, options: GraphQLParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &GraphQLParserOptions {
        &self.options
    }

    /// Parses the whole token stream into a [`ast::Document`].
    ///
    /// Returns the first error encountered, either from the lexer
    /// ([`GraphQLError::Lex`]) or from the grammar ([`GraphQLError::Parse`]).
    pub fn parse(mut self) -> Result<ast::Document, GraphQLError> {
        log::trace!("parsing executable document with {:?}", self.options);
        let mut definitions = Vec::new();
        while !self.token_stream.is_at_end()? {
            definitions.push(self.parse_definition()?);
        }
        log::debug!("parsed executable document with {} definition(s)", definitions.len());
        Ok(ast::Document { definitions })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek_kind(&mut self) -> ParseResult<GraphQLTokenKind> {
        Ok(self.token_stream.peek()?.kind)
    }

    fn peek_is(&mut self, kind: GraphQLTokenKind) -> ParseResult<bool> {
        Ok(self.peek_kind()? == kind)
    }

    fn peek_is_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        Ok(self.token_stream.peek()?.is_keyword(keyword))
    }

    fn consume(&mut self) -> ParseResult<GraphQLToken<'src>> {
        Ok(self.token_stream.consume()?)
    }

    /// Consumes the next token if it has kind `expected`; otherwise fails
    /// with an unexpected-token error at that token.
    fn expect(&mut self, expected: GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.peek_is(expected)? {
            self.consume()
        } else {
            Err(self.unexpected(vec![expected.into()]))
        }
    }

    /// Consumes a `Name` token and returns its text.
    fn expect_name(&mut self) -> ParseResult<String> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        Self::owned_text(token)
    }

    fn owned_text(token: GraphQLToken<'src>) -> ParseResult<String> {
        let span = token.span;
        let kind = token.kind;
        token.into_text().map(|text| text.into_owned()).ok_or_else(|| {
            GraphQLParseError::unexpected(
                &GraphQLToken::new(kind, span),
                vec![kind.into()],
            )
            .into()
        })
    }

    /// Builds an unexpected-token error for the next (unconsumed) token.
    fn unexpected(&mut self, expected: Vec<Expectation>) -> GraphQLError {
        match self.token_stream.peek() {
            Ok(token) => GraphQLParseError::unexpected(token, expected).into(),
            Err(lex_error) => lex_error.into(),
        }
    }

    fn check_depth(&mut self, depth: usize) -> ParseResult<()> {
        let max_depth = self.options.max_recursion_depth;
        if depth <= max_depth {
            return Ok(());
        }
        let span = self.token_stream.peek()?.span;
        Err(GraphQLParseError::new(
            format!("maximum recursion depth of {max_depth} exceeded"),
            span,
            GraphQLParseErrorKind::RecursionLimitExceeded { max_depth },
        )
        .into())
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn definition_expectations() -> Vec<Expectation> {
        vec![
            Expectation::Keyword("query"),
            Expectation::Keyword("mutation"),
            Expectation::Keyword("subscription"),
            Expectation::Keyword("fragment"),
            Expectation::Token(GraphQLTokenKind::CurlyBraceOpen),
        ]
    }

    /// Kind of the next token plus, for a `Name`, the definition it starts.
    fn peek_definition_start(
        &mut self,
    ) -> ParseResult<(GraphQLTokenKind, Option<DefinitionKind>, GraphQLTokenSpan)> {
        let token = self.token_stream.peek()?;
        let definition_kind = match token.kind {
            GraphQLTokenKind::Name => token.text().and_then(DefinitionKind::from_keyword),
            _ => None,
        };
        Ok((token.kind, definition_kind, token.span))
    }

    fn parse_definition(&mut self) -> ParseResult<ast::Definition> {
        let (token_kind, definition_kind, span) = self.peek_definition_start()?;
        match (token_kind, definition_kind) {
            (GraphQLTokenKind::CurlyBraceOpen, _) => {
                let selection_set = self.parse_selection_set(1)?;
                Ok(ast::Definition::Operation(ast::OperationDefinition {
                    operation_type: ast::OperationType::Query,
                    name: None,
                    variables: Vec::new(),
                    directives: Vec::new(),
                    selection_set,
                }))
            },
            (_, Some(DefinitionKind::Operation)) => {
                self.parse_operation_definition().map(ast::Definition::Operation)
            },
            (_, Some(DefinitionKind::Fragment)) => {
                self.parse_fragment_definition().map(ast::Definition::Fragment)
            },
            (_, Some(schema_kind)) => Err(Self::unsupported_definition(schema_kind, span)),
            (GraphQLTokenKind::StringValue, None) => self.reject_described_definition(),
            _ => Err(self.unexpected(Self::definition_expectations())),
        }
    }

    /// A leading string can only be the description of a schema definition,
    /// none of which are accepted.
    fn reject_described_definition(&mut self) -> ParseResult<ast::Definition> {
        let description = self.consume()?;
        match self.peek_definition_start()? {
            (_, Some(kind), span) if !kind.is_executable() => {
                Err(Self::unsupported_definition(kind, span))
            },
            _ => Err(GraphQLParseError::unexpected(
                &description,
                Self::definition_expectations(),
            )
            .into()),
        }
    }

    fn unsupported_definition(found: DefinitionKind, span: GraphQLTokenSpan) -> GraphQLError {
        log::debug!("rejecting {found} definition at {}", span.start_inclusive);
        let mut error = GraphQLParseError::new(
            format!("{found} definitions aren't supported"),
            span,
            GraphQLParseErrorKind::UnsupportedDefinition { found },
        );
        error.add_help("only executable documents (operations and fragments) can be parsed");
        error.into()
    }

    /// `query|mutation|subscription Name? VariableDefinitions? Directives? SelectionSet`
    fn parse_operation_definition(&mut self) -> ParseResult<ast::OperationDefinition> {
        let keyword = self.consume()?;
        let operation_type = keyword
            .text()
            .and_then(ast::OperationType::from_keyword)
            .ok_or_else(|| {
                GraphQLError::from(GraphQLParseError::unexpected(
                    &keyword,
                    Self::definition_expectations(),
                ))
            })?;

        let name = if self.peek_is(GraphQLTokenKind::Name)? {
            Some(self.expect_name()?)
        } else {
            None
        };
        let variables = if self.peek_is(GraphQLTokenKind::ParenOpen)? {
            self.parse_variable_definitions()?
        } else {
            Vec::new()
        };
        let directives = self.parse_directives(1)?;
        let selection_set = self.parse_selection_set(1)?;

        Ok(ast::OperationDefinition {
            operation_type,
            name,
            variables,
            directives,
            selection_set,
        })
    }

    /// `fragment Name on Type Directives? SelectionSet`
    fn parse_fragment_definition(&mut self) -> ParseResult<ast::FragmentDefinition> {
        self.consume()?;
        let name = self.expect_name()?;
        if !self.peek_is_keyword("on")? {
            return Err(self.unexpected(vec![Expectation::Keyword("on")]));
        }
        self.consume()?;
        let on_type = self.expect_name()?;
        let directives = self.parse_directives(1)?;
        let selection_set = self.parse_selection_set(1)?;

        Ok(ast::FragmentDefinition {
            name,
            on_type,
            directives,
            selection_set,
        })
    }

    /// `( $name: Type = default ... )`
    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<ast::VariableDefinition>> {
        self.expect(GraphQLTokenKind::ParenOpen)?;
        let mut variables = Vec::new();
        loop {
            match self.peek_kind()? {
                GraphQLTokenKind::ParenClose => {
                    self.consume()?;
                    return Ok(variables);
                },
                GraphQLTokenKind::Dollar => {
                    variables.push(self.parse_variable_definition()?);
                },
                _ => {
                    return Err(self.unexpected(vec![
                        GraphQLTokenKind::Dollar.into(),
                        GraphQLTokenKind::ParenClose.into(),
                    ]));
                },
            }
        }
    }

    fn parse_variable_definition(&mut self) -> ParseResult<ast::VariableDefinition> {
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.expect_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let type_annotation = self.parse_type_annotation(1)?;
        let default_value = if self.peek_is(GraphQLTokenKind::Equals)? {
            self.consume()?;
            Some(self.parse_value(1)?)
        } else {
            None
        };

        Ok(ast::VariableDefinition {
            name,
            type_annotation,
            default_value,
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// `Name`, `[Type]`, either optionally followed by `!`.
    fn parse_type_annotation(&mut self, depth: usize) -> ParseResult<ast::TypeAnnotation> {
        self.check_depth(depth)?;
        let nullable = match self.peek_kind()? {
            GraphQLTokenKind::Name => ast::TypeAnnotation::Named(self.expect_name()?),
            GraphQLTokenKind::SquareBracketOpen => {
                self.consume()?;
                let inner = self.parse_type_annotation(depth + 1)?;
                self.expect(GraphQLTokenKind::SquareBracketClose)?;
                ast::TypeAnnotation::list(inner)
            },
            _ => {
                return Err(self.unexpected(vec![
                    GraphQLTokenKind::Name.into(),
                    GraphQLTokenKind::SquareBracketOpen.into(),
                ]));
            },
        };

        if self.peek_is(GraphQLTokenKind::Bang)? {
            self.consume()?;
            Ok(ast::TypeAnnotation::non_null(nullable))
        } else {
            Ok(nullable)
        }
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    fn parse_directives(&mut self, depth: usize) -> ParseResult<Vec<ast::Directive>> {
        let mut directives = Vec::new();
        while self.peek_is(GraphQLTokenKind::At)? {
            self.consume()?;
            let name = self.expect_name()?;
            let arguments = self.parse_arguments(depth)?;
            directives.push(ast::Directive { name, arguments });
        }
        Ok(directives)
    }

    /// Optional `( name: value ... )`. Absent arguments yield an empty list.
    fn parse_arguments(&mut self, depth: usize) -> ParseResult<Vec<ast::Argument>> {
        let mut arguments = Vec::new();
        if !self.peek_is(GraphQLTokenKind::ParenOpen)? {
            return Ok(arguments);
        }
        self.consume()?;
        loop {
            match self.peek_kind()? {
                GraphQLTokenKind::ParenClose => {
                    self.consume()?;
                    return Ok(arguments);
                },
                GraphQLTokenKind::Name => {
                    let name = self.expect_name()?;
                    self.expect(GraphQLTokenKind::Colon)?;
                    let value = self.parse_value(depth)?;
                    arguments.push(ast::Argument { name, value });
                },
                _ => {
                    return Err(self.unexpected(vec![
                        GraphQLTokenKind::Name.into(),
                        GraphQLTokenKind::ParenClose.into(),
                    ]));
                },
            }
        }
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    /// `{ Selection... }`
    fn parse_selection_set(&mut self, depth: usize) -> ParseResult<ast::SelectionSet> {
        self.check_depth(depth)?;
        let open = self.expect(GraphQLTokenKind::CurlyBraceOpen)?;

        if self.options.reject_empty_selection_sets
            && self.peek_is(GraphQLTokenKind::CurlyBraceClose)?
        {
            let close = self.consume()?;
            let mut error = GraphQLParseError::new(
                "selection set cannot be empty",
                GraphQLTokenSpan::new(open.span.start_inclusive, close.span.end_exclusive),
                GraphQLParseErrorKind::InvalidEmptyConstruct {
                    construct: "selection set".to_string(),
                },
            );
            error.add_help("select at least one field or fragment");
            return Err(error.into());
        }

        let mut items = Vec::new();
        loop {
            match self.peek_kind()? {
                GraphQLTokenKind::CurlyBraceClose => {
                    self.consume()?;
                    return Ok(ast::SelectionSet { items });
                },
                GraphQLTokenKind::Name => {
                    items.push(ast::Selection::Field(self.parse_field(depth)?));
                },
                GraphQLTokenKind::Ellipsis => {
                    items.push(self.parse_fragment_selection(depth)?);
                },
                _ => {
                    return Err(self.unexpected(vec![
                        GraphQLTokenKind::CurlyBraceClose.into(),
                        GraphQLTokenKind::Name.into(),
                        GraphQLTokenKind::Ellipsis.into(),
                    ]));
                },
            }
        }
    }

    /// `alias: name(args) @directives { selections }`
    fn parse_field(&mut self, depth: usize) -> ParseResult<ast::Field> {
        let first_name = self.expect_name()?;
        let (alias, name) = if self.peek_is(GraphQLTokenKind::Colon)? {
            self.consume()?;
            (Some(first_name), self.expect_name()?)
        } else {
            (None, first_name)
        };

        let arguments = self.parse_arguments(depth)?;
        let directives = self.parse_directives(depth)?;
        let selection_set = if self.peek_is(GraphQLTokenKind::CurlyBraceOpen)? {
            Some(self.parse_selection_set(depth + 1)?)
        } else {
            None
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }

    /// Everything starting with `...`: a fragment spread or an inline
    /// fragment (with or without a type condition).
    fn parse_fragment_selection(&mut self, depth: usize) -> ParseResult<ast::Selection> {
        self.expect(GraphQLTokenKind::Ellipsis)?;

        match self.peek_kind()? {
            GraphQLTokenKind::Name if self.peek_is_keyword("on")? => {
                self.consume()?;
                let type_condition = Some(self.expect_name()?);
                self.parse_inline_fragment(type_condition, depth)
            },
            GraphQLTokenKind::Name => {
                let name = self.expect_name()?;
                let directives = self.parse_directives(depth)?;
                Ok(ast::Selection::FragmentSpread(ast::FragmentSpread {
                    name,
                    directives,
                }))
            },
            GraphQLTokenKind::CurlyBraceOpen | GraphQLTokenKind::At => {
                self.parse_inline_fragment(None, depth)
            },
            _ => Err(self.unexpected(vec![
                GraphQLTokenKind::Name.into(),
                GraphQLTokenKind::CurlyBraceOpen.into(),
                GraphQLTokenKind::At.into(),
            ])),
        }
    }

    fn parse_inline_fragment(
        &mut self,
        type_condition: Option<String>,
        depth: usize,
    ) -> ParseResult<ast::Selection> {
        let directives = self.parse_directives(depth)?;
        let selection_set = self.parse_selection_set(depth + 1)?;
        Ok(ast::Selection::InlineFragment(ast::InlineFragment {
            type_condition,
            directives,
            selection_set,
        }))
    }

    // =========================================================================
    // Values
    // =========================================================================

    fn value_expectations() -> Vec<Expectation> {
        vec![
            GraphQLTokenKind::Dollar.into(),
            GraphQLTokenKind::IntValue.into(),
            GraphQLTokenKind::FloatValue.into(),
            GraphQLTokenKind::StringValue.into(),
            GraphQLTokenKind::Name.into(),
            GraphQLTokenKind::SquareBracketOpen.into(),
            GraphQLTokenKind::CurlyBraceOpen.into(),
        ]
    }

    /// Dispatches purely on the next token: `$` variable, numeric and string
    /// literals, `true`/`false`/`null`/enum names, `[` lists, `{` objects.
    fn parse_value(&mut self, depth: usize) -> ParseResult<ast::Value> {
        self.check_depth(depth)?;
        match self.peek_kind()? {
            GraphQLTokenKind::Dollar => {
                self.consume()?;
                Ok(ast::Value::Variable(self.expect_name()?))
            },
            GraphQLTokenKind::IntValue => {
                let token = self.consume()?;
                token.int_value().map(ast::Value::Int).ok_or_else(|| {
                    GraphQLParseError::unexpected(&token, Self::value_expectations()).into()
                })
            },
            GraphQLTokenKind::FloatValue => {
                let token = self.consume()?;
                token.float_value().map(ast::Value::Float).ok_or_else(|| {
                    GraphQLParseError::unexpected(&token, Self::value_expectations()).into()
                })
            },
            GraphQLTokenKind::StringValue => {
                let token = self.consume()?;
                Self::owned_text(token).map(ast::Value::String)
            },
            GraphQLTokenKind::Name => {
                let name = self.expect_name()?;
                Ok(match name.as_str() {
                    "true" => ast::Value::Boolean(true),
                    "false" => ast::Value::Boolean(false),
                    "null" => ast::Value::Null,
                    _ => ast::Value::Enum(name),
                })
            },
            GraphQLTokenKind::SquareBracketOpen => self.parse_list_value(depth),
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object_value(depth),
            _ => Err(self.unexpected(Self::value_expectations())),
        }
    }

    /// `[ value... ]`
    fn parse_list_value(&mut self, depth: usize) -> ParseResult<ast::Value> {
        self.expect(GraphQLTokenKind::SquareBracketOpen)?;
        let mut values = Vec::new();
        loop {
            if self.peek_is(GraphQLTokenKind::SquareBracketClose)? {
                self.consume()?;
                return Ok(ast::Value::List(ast::ListValue::new(values)));
            }
            values.push(self.parse_value(depth + 1)?);
        }
    }

    /// `{ name: value... }`
    fn parse_object_value(&mut self, depth: usize) -> ParseResult<ast::Value> {
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        let mut fields = Vec::new();
        loop {
            match self.peek_kind()? {
                GraphQLTokenKind::CurlyBraceClose => {
                    self.consume()?;
                    return Ok(ast::Value::Object(ast::ObjectValue::new(fields)));
                },
                GraphQLTokenKind::Name => {
                    let name = self.expect_name()?;
                    self.expect(GraphQLTokenKind::Colon)?;
                    let value = self.parse_value(depth + 1)?;
                    fields.push(ast::ObjectField { name, value });
                },
                _ => {
                    return Err(self.unexpected(vec![
                        GraphQLTokenKind::Name.into(),
                        GraphQLTokenKind::CurlyBraceClose.into(),
                    ]));
                },
            }
        }
    }
}
