//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! Every character of the input belongs to exactly one token, including
//! whitespace, line terminators, comments, and commas. Filtering those
//! insignificant tokens out is the job of
//! [`GraphQLTokenStream`](crate::GraphQLTokenStream).
//!
//! Names and escape-free strings borrow directly from the source string using
//! `Cow::Borrowed`. Numbers are decoded to `i32`/`f64` while lexing.
//!
//! # Usage
//!
//! ```rust
//! use graphquery_parser::token::GraphQLTokenKind;
//! use graphquery_parser::token_source::StrGraphQLTokenSource;
//!
//! let kinds = StrGraphQLTokenSource::new("{ name }")
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Whitespace,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::Whitespace,
//!     GraphQLTokenKind::CurlyBraceClose,
//! ]);
//! ```

use crate::smallvec;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token::GraphQLTokenSpan;
use crate::token::GraphQLTokenValue;
use crate::GraphQLErrorNote;
use crate::GraphQLLexError;
use crate::GraphQLLexErrorKind;
use crate::SourcePosition;
use std::borrow::Cow;
use std::iter::FusedIterator;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const FLOAT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Float-Value";

/// Lexes `source` eagerly into its full token sequence, stopping at the first
/// lexer error.
///
/// The result contains every token, significant or not; it never contains an
/// `Eof` token.
pub fn lex_all(source: &str) -> Result<Vec<GraphQLToken<'_>>, GraphQLLexError> {
    StrGraphQLTokenSource::new(source).collect()
}

/// A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
/// lexes from a `&str` input.
///
/// The iterator yields `Ok(token)` for each token, `Some(Err(..))` once for
/// the first lexer error, and `None` at end of input or after an error.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current 1-based line number.
    curr_line: usize,

    /// Current 1-based character column.
    curr_column: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline: when we see `\r`, we set
    /// this flag; if the next character is `\n`, we skip it without
    /// incrementing the line number again.
    last_char_was_cr: bool,

    /// Set once the end of input or an error has been returned.
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 1,
            curr_column: 1,
            last_char_was_cr: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    pub fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_column, self.curr_byte_offset)
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Returns `None` if at end of input.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // Second half of `\r\n`; the line was already advanced.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_column = 1;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_column = 1;
            self.last_char_was_cr = true;
        } else {
            self.curr_column += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Consumes `text`, which must be a prefix of `remaining()` containing no
    /// line terminators.
    fn consume_within_line(&mut self, text: &str) {
        self.curr_column += text.chars().count();
        self.curr_byte_offset += text.len();
        self.last_char_was_cr = false;
    }

    /// Creates a span from a start position to the current position.
    fn make_span(&self, start: SourcePosition) -> GraphQLTokenSpan {
        GraphQLTokenSpan::new(start, self.curr_position())
    }

    /// Creates a span covering only the next (unconsumed) character, or a
    /// zero-width span at end of input.
    fn next_char_span(&self) -> GraphQLTokenSpan {
        let start = self.curr_position();
        let end = match self.peek_char() {
            None => start,
            Some(ch @ ('\n' | '\r')) => {
                SourcePosition::new(self.curr_line + 1, 1, self.curr_byte_offset + ch.len_utf8())
            },
            Some(ch) => SourcePosition::new(
                self.curr_line,
                self.curr_column + 1,
                self.curr_byte_offset + ch.len_utf8(),
            ),
        };
        GraphQLTokenSpan::new(start, end)
    }

    /// Describes the next character for error messages, or `end of input`.
    fn describe_next_char(&self) -> String {
        match self.peek_char() {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        }
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    /// Lexes the next token. Returns `None` at end of input.
    fn next_token(&mut self) -> Option<Result<GraphQLToken<'src>, GraphQLLexError>> {
        let start = self.curr_position();

        let result = match self.peek_char()? {
            ' ' | '\t' | '\u{FEFF}' => Ok(self.lex_whitespace(start)),
            '\n' | '\r' => Ok(self.lex_line_terminator(start)),
            '#' => Ok(self.lex_comment(start)),

            ',' => Ok(self.lex_punctuator(start, GraphQLTokenKind::Comma)),
            '!' => Ok(self.lex_punctuator(start, GraphQLTokenKind::Bang)),
            '$' => Ok(self.lex_punctuator(start, GraphQLTokenKind::Dollar)),
            '(' => Ok(self.lex_punctuator(start, GraphQLTokenKind::ParenOpen)),
            ')' => Ok(self.lex_punctuator(start, GraphQLTokenKind::ParenClose)),
            ':' => Ok(self.lex_punctuator(start, GraphQLTokenKind::Colon)),
            '=' => Ok(self.lex_punctuator(start, GraphQLTokenKind::Equals)),
            '@' => Ok(self.lex_punctuator(start, GraphQLTokenKind::At)),
            '[' => Ok(self.lex_punctuator(start, GraphQLTokenKind::SquareBracketOpen)),
            ']' => Ok(self.lex_punctuator(start, GraphQLTokenKind::SquareBracketClose)),
            '{' => Ok(self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceOpen)),
            '}' => Ok(self.lex_punctuator(start, GraphQLTokenKind::CurlyBraceClose)),
            '|' => Ok(self.lex_punctuator(start, GraphQLTokenKind::Pipe)),

            '.' => self.lex_ellipsis(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => Ok(self.lex_name(start)),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            c => Err(self.lex_unknown_character(c)),
        };

        Some(result)
    }

    /// Consumes a single-character punctuator.
    fn lex_punctuator(
        &mut self,
        start: SourcePosition,
        kind: GraphQLTokenKind,
    ) -> GraphQLToken<'src> {
        self.consume();
        GraphQLToken::new(kind, self.make_span(start))
    }

    // =========================================================================
    // Whitespace, line terminators, and comments
    // =========================================================================

    /// Lexes a run of spaces, tabs, and byte order marks.
    fn lex_whitespace(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        while let Some(' ' | '\t' | '\u{FEFF}') = self.peek_char() {
            self.consume();
        }
        GraphQLToken::new(GraphQLTokenKind::Whitespace, self.make_span(start))
    }

    /// Lexes `\n`, `\r`, or `\r\n` as one `LineTerminator`.
    fn lex_line_terminator(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        if self.consume() == Some('\r') && self.peek_char() == Some('\n') {
            self.consume();
        }
        GraphQLToken::new(GraphQLTokenKind::LineTerminator, self.make_span(start))
    }

    /// Lexes a `#` comment up to (not including) the end of the line.
    ///
    /// Comments carry no meaning, so they are emitted with the `Whitespace`
    /// kind and their text is discarded.
    fn lex_comment(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let remaining = self.remaining();
        let comment_len = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
            .unwrap_or(remaining.len());
        self.consume_within_line(&remaining[..comment_len]);
        GraphQLToken::new(GraphQLTokenKind::Whitespace, self.make_span(start))
    }

    // =========================================================================
    // Ellipsis lexing
    // =========================================================================

    /// Lexes `...`. Anything other than three adjacent dots is an error
    /// reported at the first character that isn't a `.`.
    fn lex_ellipsis(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        self.consume();

        for dots_seen in 1..3 {
            if self.peek_char() != Some('.') {
                let mut error = GraphQLLexError::new(
                    format!("expecting `.`, found {}", self.describe_next_char()),
                    self.next_char_span(),
                    GraphQLLexErrorKind::InvalidEllipsis,
                );
                if dots_seen == 2 {
                    error.add_help("Add one more `.` to form the spread operator `...`");
                }
                return Err(error);
            }
            self.consume();
        }

        Ok(GraphQLToken::new(GraphQLTokenKind::Ellipsis, self.make_span(start)))
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name: `[_A-Za-z][_0-9A-Za-z]*`.
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let remaining = self.remaining();
        let name_len = remaining
            .bytes()
            .position(|b| !is_name_continue(b as char))
            .unwrap_or(remaining.len());
        let name = &remaining[..name_len];
        self.consume_within_line(name);

        GraphQLToken::with_value(
            GraphQLTokenKind::Name,
            GraphQLTokenValue::text_borrowed(name),
            self.make_span(start),
        )
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    fn lex_number(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        // Integer part
        match self.peek_char() {
            Some('0') => {
                self.consume();
                if let Some(ch) = self.peek_char()
                    && ch.is_ascii_digit()
                {
                    return Err(self.number_error(
                        num_start,
                        "invalid number: leading zeros are not allowed",
                        INT_VALUE_SPEC_URL,
                    ));
                }
            },
            Some(ch) if ch.is_ascii_digit() => self.consume_digits(),
            _ => {
                return Err(self.number_error(
                    num_start,
                    "invalid number: expecting a digit after `-`",
                    INT_VALUE_SPEC_URL,
                ));
            },
        }

        // Fractional part
        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.number_error(
                    num_start,
                    "invalid number: expecting a digit after `.`",
                    FLOAT_VALUE_SPEC_URL,
                ));
            }
            self.consume_digits();
        }

        // Exponent part
        if let Some('e' | 'E') = self.peek_char() {
            is_float = true;
            self.consume();
            if let Some('+' | '-') = self.peek_char() {
                self.consume();
            }
            if !self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(self.number_error(
                    num_start,
                    "invalid number: exponent must have at least one digit",
                    FLOAT_VALUE_SPEC_URL,
                ));
            }
            self.consume_digits();
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let span = self.make_span(start);

        let value = if is_float {
            match num_text.parse::<f64>() {
                Ok(value) if value.is_finite() => GraphQLTokenValue::Float(value),
                _ => {
                    return Err(GraphQLLexError::new(
                        format!("invalid number: `{num_text}` overflows a 64-bit float"),
                        span,
                        GraphQLLexErrorKind::InvalidNumber {
                            text: num_text.to_string(),
                        },
                    ));
                },
            }
        } else {
            match num_text.parse::<i32>() {
                Ok(value) => GraphQLTokenValue::Int(value),
                Err(_) => {
                    return Err(GraphQLLexError::new(
                        format!("invalid number: `{num_text}` overflows a 32-bit integer"),
                        span,
                        GraphQLLexErrorKind::InvalidNumber {
                            text: num_text.to_string(),
                        },
                    ));
                },
            }
        };

        let kind = if is_float {
            GraphQLTokenKind::FloatValue
        } else {
            GraphQLTokenKind::IntValue
        };
        Ok(GraphQLToken::with_value(kind, value, span))
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
    }

    /// Creates an error for a malformed number, pointing at the character
    /// where scanning stopped.
    fn number_error(&self, num_start: usize, message: &str, spec_url: &str) -> GraphQLLexError {
        let scanned = &self.source[num_start..self.curr_byte_offset];
        GraphQLLexError::with_notes(
            format!("{message}, found {}", self.describe_next_char()),
            self.next_char_span(),
            GraphQLLexErrorKind::InvalidNumber {
                text: scanned.to_string(),
            },
            smallvec![GraphQLErrorNote::spec(spec_url)],
        )
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a string literal (simple or block string).
    fn lex_string(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        if self.remaining().starts_with("\"\"\"") {
            return self.lex_block_string(start);
        }

        let open_quote_span = self.next_char_span();
        self.consume();
        let content_start = self.curr_byte_offset;

        // Stays borrowed until the first escape sequence.
        let mut unescaped: Option<String> = None;

        loop {
            match self.peek_char() {
                None => {
                    return Err(GraphQLLexError::with_notes(
                        "missing end of string",
                        self.next_char_span(),
                        GraphQLLexErrorKind::UnterminatedString,
                        smallvec![
                            GraphQLErrorNote::general_with_span(
                                "String started here",
                                open_quote_span,
                            ),
                            GraphQLErrorNote::help("Add closing `\"`"),
                        ],
                    ));
                },
                Some('\n' | '\r') => {
                    return Err(GraphQLLexError::with_notes(
                        "unexpected newline in string",
                        self.next_char_span(),
                        GraphQLLexErrorKind::UnexpectedNewlineInString,
                        smallvec![GraphQLErrorNote::help(
                            "Use a block string (triple quotes) for multi-line strings, \
                             or escape the newline with `\\n`"
                        )],
                    ));
                },
                Some('"') => {
                    let content = &self.source[content_start..self.curr_byte_offset];
                    self.consume();
                    let value = match unescaped {
                        Some(s) => Cow::Owned(s),
                        None => Cow::Borrowed(content),
                    };
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::StringValue,
                        GraphQLTokenValue::Text(value),
                        self.make_span(start),
                    ));
                },
                Some('\\') => {
                    let buf = unescaped.get_or_insert_with(|| {
                        self.source[content_start..self.curr_byte_offset].to_string()
                    });
                    let ch = self.lex_escape_sequence()?;
                    buf.push(ch);
                },
                Some(ch) => {
                    self.consume();
                    if let Some(buf) = unescaped.as_mut() {
                        buf.push(ch);
                    }
                },
            }
        }
    }

    /// Decodes one escape sequence starting at the `\`.
    fn lex_escape_sequence(&mut self) -> Result<char, GraphQLLexError> {
        let escape_start = self.curr_position();
        self.consume();

        let decoded = match self.peek_char() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                self.consume();
                return self.lex_unicode_escape(escape_start);
            },
            Some(ch) if ch != '\n' && ch != '\r' => {
                self.consume();
                return Err(self.invalid_escape(escape_start, &format!("\\{ch}")));
            },
            _ => return Err(self.invalid_escape(escape_start, "\\")),
        };

        self.consume();
        Ok(decoded)
    }

    /// Decodes the `XXXX` of a `\uXXXX` escape (the `\u` is already
    /// consumed). A high surrogate must be followed by a `\uXXXX` low
    /// surrogate; the pair decodes to one scalar value.
    fn lex_unicode_escape(&mut self, escape_start: SourcePosition) -> Result<char, GraphQLLexError> {
        let code_unit = self.lex_hex4(escape_start)?;

        let code_point = match code_unit {
            0xD800..=0xDBFF => {
                let low = self
                    .remaining()
                    .strip_prefix("\\u")
                    .and_then(parse_hex4)
                    .filter(|low| (0xDC00..=0xDFFF).contains(low));
                let Some(low) = low else {
                    return Err(self.invalid_escape(
                        escape_start,
                        &format!("\\u{code_unit:04X}"),
                    ));
                };
                self.consume_within_line(&self.remaining()[..6]);
                0x10000 + ((code_unit - 0xD800) << 10) + (low - 0xDC00)
            },
            other => other,
        };

        char::from_u32(code_point).ok_or_else(|| {
            self.invalid_escape(escape_start, &format!("\\u{code_unit:04X}"))
        })
    }

    /// Consumes exactly four hex digits.
    fn lex_hex4(&mut self, escape_start: SourcePosition) -> Result<u32, GraphQLLexError> {
        let mut value = 0;
        let mut seen = String::from("\\u");
        for _ in 0..4 {
            match self.peek_char() {
                Some(ch) if ch.is_ascii_hexdigit() => {
                    self.consume();
                    seen.push(ch);
                    value = value * 16 + ch.to_digit(16).unwrap_or_default();
                },
                Some(ch) if ch != '"' && ch != '\n' && ch != '\r' => {
                    self.consume();
                    seen.push(ch);
                    return Err(self.invalid_escape(escape_start, &seen));
                },
                _ => return Err(self.invalid_escape(escape_start, &seen)),
            }
        }
        Ok(value)
    }

    fn invalid_escape(&self, escape_start: SourcePosition, sequence: &str) -> GraphQLLexError {
        GraphQLLexError::new(
            format!("invalid escape sequence `{sequence}`"),
            self.make_span(escape_start),
            GraphQLLexErrorKind::InvalidEscapeSequence(sequence.to_string()),
        )
    }

    /// Lexes a block string literal and applies indentation normalization.
    fn lex_block_string(&mut self, start: SourcePosition) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        let open_quotes_span = GraphQLTokenSpan::new(
            start,
            SourcePosition::new(start.line(), start.column() + 3, start.byte_offset() + 3),
        );
        self.consume_within_line("\"\"\"");
        let raw_start = self.curr_byte_offset;

        loop {
            let remaining = self.remaining();
            if remaining.is_empty() {
                return Err(GraphQLLexError::with_notes(
                    "missing end of block string",
                    self.next_char_span(),
                    GraphQLLexErrorKind::UnterminatedBlockString,
                    smallvec![
                        GraphQLErrorNote::general_with_span(
                            "Block string started here",
                            open_quotes_span,
                        ),
                        GraphQLErrorNote::help("Add closing `\"\"\"`"),
                    ],
                ));
            }
            if remaining.starts_with("\\\"\"\"") {
                self.consume_within_line("\\\"\"\"");
            } else if remaining.starts_with("\"\"\"") {
                let raw = &self.source[raw_start..self.curr_byte_offset];
                self.consume_within_line("\"\"\"");
                return Ok(GraphQLToken::with_value(
                    GraphQLTokenKind::StringValue,
                    GraphQLTokenValue::text_owned(block_string_value(raw)),
                    self.make_span(start),
                ));
            } else {
                self.consume();
            }
        }
    }

    // =========================================================================
    // Invalid character handling
    // =========================================================================

    fn lex_unknown_character(&self, ch: char) -> GraphQLLexError {
        GraphQLLexError::new(
            format!("unknown character {}", describe_char(ch)),
            self.next_char_span(),
            GraphQLLexErrorKind::UnknownCharacter(ch),
        )
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLLexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if !matches!(result, Some(Ok(_))) {
            self.finished = true;
        }
        result
    }
}

impl FusedIterator for StrGraphQLTokenSource<'_> {}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start a GraphQL name.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}

/// Parses four leading ASCII hex digits of `s`.
fn parse_hex4(s: &str) -> Option<u32> {
    let digits = s.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks; invisible and control
/// characters also get their code point.
fn describe_char(ch: char) -> String {
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || ch == '\u{FEFF}' {
        format!("`{}` (U+{:04X})", ch.escape_debug(), ch as u32)
    } else {
        format!("`{ch}`")
    }
}

/// Computes the value of a block string from its raw content (the text
/// between the delimiting `"""`).
///
/// - `\"""` becomes `"""`.
/// - The common indentation of all non-blank lines after the first is
///   removed from every line after the first.
/// - Leading and trailing blank lines are dropped; interior blank lines are
///   kept.
/// - Lines are joined with `\n` regardless of the source line terminators.
pub(crate) fn block_string_value(raw: &str) -> String {
    let raw = raw.replace("\\\"\"\"", "\"\"\"");
    let lines = split_lines(&raw);

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| indent_len(line))
        .min()
        .unwrap_or(0);

    // Trim by index; removing from the front of a Vec is quadratic.
    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let last = lines.iter().rposition(|line| !is_blank(line)).unwrap_or(first);

    let mut value = String::with_capacity(raw.len());
    for (i, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        if i > first {
            value.push('\n');
        }
        if i == 0 {
            value.push_str(line);
        } else {
            value.push_str(&line[common_indent.min(indent_len(line))..]);
        }
    }
    value
}

/// Splits on `\r\n`, `\r`, and `\n`.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut remaining = text;
    while let Some(end) = memchr::memchr2(b'\n', b'\r', remaining.as_bytes()) {
        lines.push(&remaining[..end]);
        let terminator_len = if remaining[end..].starts_with("\r\n") { 2 } else { 1 };
        remaining = &remaining[end + terminator_len..];
    }
    lines.push(remaining);
    lines
}

fn indent_len(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn is_blank(line: &str) -> bool {
    indent_len(line) == line.len()
}
