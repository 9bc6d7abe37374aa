/// A location within a GraphQL source text.
///
/// This is a pure data struct with no mutation methods. Lexers are responsible
/// for computing position values as they scan input.
///
/// # Indexing Convention
///
/// - `line`: 1 = first line of the document (1-based)
/// - `column`: 1 = first character of the line (1-based). Columns count
///   Unicode scalar values, so `'a'` and `'🎉'` each advance the column by 1.
/// - `byte_offset`: byte offset within the whole document (0-based)
///
/// `\n`, `\r`, and `\r\n` each end exactly one line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// The position of the first character of any document.
    pub const START: SourcePosition = SourcePosition {
        line: 1,
        column: 1,
        byte_offset: 0,
    };

    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `line`: 1-based line number (1 = first line)
    /// - `column`: 1-based character column within the line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based character column within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::START
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
