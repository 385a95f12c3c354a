//! Cursor positions in a text view.

use std::fmt;

use crate::error::{GlyphError, GlyphResult};

/// 0-based position of the cursor: line number and offset within that line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CursorPosition
{
    /// 0-based line number
    pub line: usize,
    /// 0-based character offset from the start of the line
    pub column: usize,
}

impl CursorPosition
{
    /// Create a position from 0-based coordinates.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self
    {
        Self { line, column }
    }

    /// Convert to the 1-based coordinates shown to users.
    #[must_use]
    pub const fn to_display(self) -> DisplayPosition
    {
        DisplayPosition {
            line: self.line + 1,
            character: self.column + 1,
        }
    }
}

/// 1-based line and character, as shown in a tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayPosition
{
    /// 1-based line number
    pub line: usize,
    /// 1-based character within the line
    pub character: usize,
}

impl fmt::Display for DisplayPosition
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "line {}, character {}", self.line, self.character)
    }
}

/// Immutable view of a text buffer that can locate the line containing an offset
///
/// Offsets count characters, not bytes. `\n`, `\r\n` and a lone `\r` all end
/// a line; the break belongs to the line it terminates.
///
/// ```rust
/// use glyphfmt_core::types::{CursorPosition, TextSnapshot};
///
/// let snapshot = TextSnapshot::new("fn main()\n{\n    run();\n}\n");
/// assert_eq!(snapshot.position_at(16).unwrap(), CursorPosition::new(2, 4));
/// ```
#[derive(Debug, Clone)]
pub struct TextSnapshot
{
    len: usize,
    line_starts: Vec<usize>,
}

impl TextSnapshot
{
    /// Index the line starts of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self
    {
        let mut line_starts = vec![0];
        let mut len = 0;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            len += 1;
            match c {
                '\r' if chars.peek() == Some(&'\n') => {
                    chars.next();
                    len += 1;
                    line_starts.push(len);
                }
                '\r' | '\n' => line_starts.push(len),
                _ => {}
            }
        }
        Self { len, line_starts }
    }

    /// Length in characters
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Whether the snapshot holds no text
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// Number of lines (a trailing line break starts an empty last line)
    #[must_use]
    pub fn line_count(&self) -> usize
    {
        self.line_starts.len()
    }

    /// Find the containing line of `offset` and the offset within it.
    ///
    /// `offset == len()` (the end of the buffer) is valid.
    ///
    /// ## Errors
    ///
    /// Returns [`GlyphError::OffsetOutOfRange`] when `offset > len()`.
    pub fn position_at(&self, offset: usize) -> GlyphResult<CursorPosition>
    {
        if offset > self.len {
            return Err(GlyphError::OffsetOutOfRange { offset, len: self.len });
        }
        // line_starts is sorted and starts with 0, so the index is at least 1
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        Ok(CursorPosition::new(line, offset - self.line_starts[line]))
    }
}
