//! Filtering token stream over some [`GraphQLTokenSource`] with a bounded
//! lookahead buffer.

use std::collections::VecDeque;

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLLexError;
use crate::SourcePosition;

/// Filtering token stream over some [`GraphQLTokenSource`] with a bounded
/// lookahead buffer.
///
/// The stream hides insignificant tokens (whitespace, line terminators,
/// comments, commas) so grammar productions only ever see significant ones.
/// Once the source is exhausted it yields a zero-width `Eof` token positioned
/// at the end of the last source token, and keeps yielding it.
///
/// Lexer errors are returned from whichever `peek`/`consume` call first pulls
/// the failing token from the source.
///
/// # Internal Buffer Management
///
/// Tokens are stored in a [`VecDeque`] ring buffer. `consume()` pops from the
/// front; the final `Eof` token is never popped, so the buffer is non-empty
/// after any successful fill.
pub struct GraphQLTokenStream<
    'src,
    TTokenSource: GraphQLTokenSource<'src>,
> {
    token_source: TTokenSource,
    /// Unconsumed significant tokens.
    buffer: VecDeque<GraphQLToken<'src>>,
    /// End of the most recent token pulled from the source, significant or
    /// not. This is where the synthesized `Eof` token sits.
    last_end_position: SourcePosition,
    /// Set once the source returned `None` and `Eof` was buffered.
    exhausted: bool,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>>
    GraphQLTokenStream<'src, TTokenSource>
{
    /// Creates a new token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            buffer: VecDeque::new(),
            last_end_position: SourcePosition::START,
            exhausted: false,
        }
    }

    /// Advance to the next significant token and return it as an owned value.
    ///
    /// At end of input this returns the `Eof` token without removing it.
    pub fn consume(&mut self) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        self.ensure_buffer_has(1)?;
        if self.exhausted && self.buffer.len() == 1 {
            return Ok(self.buffer[0].clone());
        }
        Ok(self
            .buffer
            .pop_front()
            .unwrap_or_else(|| GraphQLToken::eof(self.last_end_position)))
    }

    /// Returns the number of significant [`GraphQLToken`]s currently buffered
    /// (unconsumed).
    pub fn current_buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Fill the buffer to ensure it has at least `count` unconsumed
    /// significant tokens, or ends with `Eof`.
    fn ensure_buffer_has(&mut self, count: usize) -> Result<(), GraphQLLexError> {
        while self.buffer.len() < count && !self.exhausted {
            match self.token_source.next() {
                Some(Ok(token)) => {
                    self.last_end_position = token.span.end_exclusive;
                    if !token.kind.is_insignificant() {
                        self.buffer.push_back(token);
                    }
                },
                Some(Err(error)) => return Err(error),
                None => {
                    self.exhausted = true;
                    self.buffer.push_back(GraphQLToken::eof(self.last_end_position));
                },
            }
        }
        Ok(())
    }

    /// Check if we've reached the end of the stream.
    pub fn is_at_end(&mut self) -> Result<bool, GraphQLLexError> {
        Ok(self.peek()?.kind == GraphQLTokenKind::Eof)
    }

    /// Peek at the next significant token without consuming it.
    #[inline]
    pub fn peek(&mut self) -> Result<&GraphQLToken<'src>, GraphQLLexError> {
        self.peek_nth(0)
    }

    /// Peek at the nth significant token ahead (0-indexed from next
    /// unconsumed token).
    ///
    /// `peek_nth(0)` is equivalent to `peek()`. Positions past the end of
    /// input all yield the `Eof` token.
    pub fn peek_nth(
        &mut self,
        n: usize,
    ) -> Result<&GraphQLToken<'src>, GraphQLLexError> {
        self.ensure_buffer_has(n + 1)?;
        // Non-empty: either `n + 1` tokens were buffered or `Eof` was.
        let index = n.min(self.buffer.len().saturating_sub(1));
        Ok(&self.buffer[index])
    }
}
