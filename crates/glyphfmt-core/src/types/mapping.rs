//! IL offset mapping kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::{GlyphError, GlyphResult};

/// How a native code address maps back to an IL offset
///
/// The set is closed: the debugger engine only ever produces these seven
/// kinds, and every consumer matches on them exhaustively. Raw codes coming
/// from the engine are decoded with [`IlOffsetMapping::from_raw`], which
/// rejects anything outside the set.
///
/// `Unknown`, `NoInfo` and `UnmappedAddress` display the same way but stay
/// distinct because they come from different failures upstream: the mapping
/// was not computed yet, the module has no debug info, or the address is
/// outside any known method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IlOffsetMapping
{
    /// The mapping has not been computed
    Unknown,
    /// The address is in the method's prolog
    Prolog,
    /// The address is in the method's epilog
    Epilog,
    /// The IL offset is exact
    Exact,
    /// The IL offset is the closest known one
    Approximate,
    /// No debug info is available for the method
    NoInfo,
    /// The address is not inside any known method
    UnmappedAddress,
}

impl IlOffsetMapping
{
    /// All kinds, in raw code order.
    pub const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Prolog,
        Self::Epilog,
        Self::Exact,
        Self::Approximate,
        Self::NoInfo,
        Self::UnmappedAddress,
    ];

    /// Decode the engine's raw mapping code.
    ///
    /// ## Errors
    ///
    /// Returns [`GlyphError::UnknownMapping`] for codes outside `0..=6`.
    pub fn from_raw(code: u32) -> GlyphResult<Self>
    {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or(GlyphError::UnknownMapping(code))
    }

    /// The engine's raw code for this kind.
    #[must_use]
    pub const fn raw(self) -> u32
    {
        match self {
            Self::Unknown => 0,
            Self::Prolog => 1,
            Self::Epilog => 2,
            Self::Exact => 3,
            Self::Approximate => 4,
            Self::NoInfo => 5,
            Self::UnmappedAddress => 6,
        }
    }

    /// Whether the location's IL offset carries meaning.
    #[must_use]
    pub const fn has_il_offset(self) -> bool
    {
        matches!(self, Self::Exact | Self::Approximate)
    }
}

impl TryFrom<u32> for IlOffsetMapping
{
    type Error = GlyphError;

    fn try_from(code: u32) -> GlyphResult<Self>
    {
        Self::from_raw(code)
    }
}

impl FromStr for IlOffsetMapping
{
    type Err = GlyphError;

    /// Accepts a kind name (case-insensitive, `-`/`_` ignored) or a raw code.
    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "unknown" => Ok(Self::Unknown),
            "prolog" => Ok(Self::Prolog),
            "epilog" => Ok(Self::Epilog),
            "exact" => Ok(Self::Exact),
            "approximate" | "approx" => Ok(Self::Approximate),
            "noinfo" => Ok(Self::NoInfo),
            "unmappedaddress" | "unmapped" => Ok(Self::UnmappedAddress),
            _ => match normalized.parse::<u32>() {
                Ok(code) => Self::from_raw(code),
                Err(_) => Err(GlyphError::InvalidMappingName(s.to_string())),
            },
        }
    }
}

impl fmt::Display for IlOffsetMapping
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Prolog => "prolog",
            Self::Epilog => "epilog",
            Self::Exact => "exact",
            Self::Approximate => "approximate",
            Self::NoInfo => "no-info",
            Self::UnmappedAddress => "unmapped-address",
        };
        f.pad(name)
    }
}
