//! # Error Types
//!
//! Error handling for location decoding and formatting.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Note that formatting itself never fails: a location the formatter does not
//! understand is reported through its `bool` return, and missing optional
//! collaborators simply drop the optional output. Errors only come from the
//! boundaries where raw host data is turned into typed values.

use thiserror::Error;

/// Main error type for glyph formatting operations
///
/// ## Error Categories
///
/// 1. **Contract violations**: UnknownMapping
/// 2. **Input errors**: InvalidMappingName, OffsetOutOfRange, InvalidArgument, InvalidNumber
/// 3. **I/O errors**: Io (reading source text for a snapshot)
#[derive(Error, Debug)]
pub enum GlyphError
{
    /// A raw IL offset mapping code is outside the closed set of known kinds
    ///
    /// The mapping set is fixed by the debugger engine, so an unknown code
    /// means the producer and this crate disagree about the protocol. This is
    /// a programming error and is never rendered as a best guess.
    #[error("Unknown IL offset mapping code: {0}")]
    UnknownMapping(u32),

    /// A mapping name could not be parsed
    #[error("Invalid IL offset mapping: {0}")]
    InvalidMappingName(String),

    /// A character offset lies past the end of the text snapshot
    #[error("Offset {offset} is outside the snapshot (length {len})")]
    OffsetOutOfRange
    {
        /// Requested character offset
        offset: usize,
        /// Length of the snapshot in characters
        len: usize,
    },

    /// Invalid argument passed by a caller
    ///
    /// Examples:
    /// - A parameter description with no type name
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument (address, token, offset) could not be parsed
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// I/O error (reading a source file, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, GlyphError>`
///
/// ```rust
/// use glyphfmt_core::error::GlyphResult;
/// fn foo() -> GlyphResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type GlyphResult<T> = std::result::Result<T, GlyphError>;

/// Parse an unsigned integer written either in hex (`0x` prefix) or decimal.
///
/// ```rust
/// use glyphfmt_core::error::parse_u64;
///
/// assert_eq!(parse_u64("0x400000").unwrap(), 0x40_0000);
/// assert_eq!(parse_u64("42").unwrap(), 42);
/// ```
///
/// ## Errors
///
/// Returns [`GlyphError::InvalidNumber`] when the text is not a valid number.
pub fn parse_u64(text: &str) -> GlyphResult<u64>
{
    let trimmed = text.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        trimmed.parse::<u64>()
    };
    parsed.map_err(|_| GlyphError::InvalidNumber(text.to_string()))
}

/// Same as [`parse_u64`] but for 32-bit values (IL offsets, tokens).
///
/// ## Errors
///
/// Returns [`GlyphError::InvalidNumber`] when the text is not a valid number
/// or does not fit in 32 bits.
pub fn parse_u32(text: &str) -> GlyphResult<u32>
{
    let value = parse_u64(text)?;
    u32::try_from(value).map_err(|_| GlyphError::InvalidNumber(text.to_string()))
}
