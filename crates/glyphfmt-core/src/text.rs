//! Classified text output.
//!
//! Formatters never build plain strings. They write `(color, text)` pairs to
//! a [`TextColorWriter`] and the host decides how each classification is
//! rendered (tooltip, glyph label, terminal).

use std::fmt;

/// Classification tag attached to each written fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor
{
    /// Plain text
    Text,
    /// Punctuation (`.`, `,`, `(`, `)`)
    Punctuation,
    /// Language keyword (`int`, `string`, `void`)
    Keyword,
    /// Namespace name
    Namespace,
    /// Type name
    Type,
    /// Method name
    Method,
    /// Parameter name
    Parameter,
    /// Numeric literal
    Number,
    /// Operator
    Operator,
}

impl fmt::Display for TextColor
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            Self::Text => "text",
            Self::Punctuation => "punctuation",
            Self::Keyword => "keyword",
            Self::Namespace => "namespace",
            Self::Type => "type",
            Self::Method => "method",
            Self::Parameter => "parameter",
            Self::Number => "number",
            Self::Operator => "operator",
        };
        f.pad(name)
    }
}

/// Sink for classified text
pub trait TextColorWriter
{
    /// Append `text` classified as `color`.
    fn write(&mut self, color: TextColor, text: &str);

    /// Append a single space.
    fn write_space(&mut self)
    {
        self.write(TextColor::Text, " ");
    }
}

/// In-memory [`TextColorWriter`] that keeps every fragment in order
///
/// Fragments are stored exactly as written (no merging), so callers can see
/// the segment sequence a formatter produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedText
{
    segments: Vec<(TextColor, String)>,
}

impl ClassifiedText
{
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Written fragments in order
    #[must_use]
    pub fn segments(&self) -> &[(TextColor, String)]
    {
        &self.segments
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.segments.is_empty()
    }

    /// All fragments concatenated, classification dropped
    #[must_use]
    pub fn text(&self) -> String
    {
        self.segments.iter().map(|(_, text)| text.as_str()).collect()
    }

    /// Drop everything written so far.
    pub fn clear(&mut self)
    {
        self.segments.clear();
    }
}

impl TextColorWriter for ClassifiedText
{
    fn write(&mut self, color: TextColor, text: &str)
    {
        self.segments.push((color, text.to_string()));
    }
}

impl fmt::Display for ClassifiedText
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for (_, text) in &self.segments {
            f.write_str(text)?;
        }
        Ok(())
    }
}
