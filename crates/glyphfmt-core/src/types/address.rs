//! Native memory address type.

use std::fmt;
use std::ops::Add;

/// Strongly typed native code address
///
/// This wrapper around `u64` keeps absolute addresses apart from the relative
/// offsets they are combined with. A native breakpoint is described by a
/// method base address plus an offset into the method; only the base is an
/// `Address`, the offset stays a plain `u64`.
///
/// ## Display
///
/// Addresses display as `0x` followed by at least 8 upper-case hex digits,
/// the format used in breakpoint tooltips. Wider values print all of their
/// digits.
///
/// ## Example
///
/// ```rust
/// use glyphfmt_core::types::Address;
///
/// let base = Address::from(0x0040_0000);
/// let addr = base + 0x10;
/// assert_eq!(addr.to_string(), "0x00400010");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u64);

impl Address
{
    /// The null address (0x0)
    pub const ZERO: Self = Address(0);

    /// Create a new address from a `u64` value
    ///
    /// This is equivalent to `Address::from(value)` but can be used in const contexts.
    pub const fn new(value: u64) -> Self
    {
        Address(value)
    }

    /// Get the raw `u64` value of this address
    pub const fn value(self) -> u64
    {
        self.0
    }

    /// Add an offset to this address, checking for overflow
    ///
    /// ```rust
    /// use glyphfmt_core::types::Address;
    ///
    /// let addr = Address::from(0x1000);
    /// assert_eq!(addr.checked_add(0x100), Some(Address::from(0x1100)));
    /// assert_eq!(addr.checked_add(u64::MAX), None);
    /// ```
    pub fn checked_add(self, offset: u64) -> Option<Self>
    {
        self.0.checked_add(offset).map(Address)
    }
}

impl From<u64> for Address
{
    fn from(value: u64) -> Self
    {
        Address(value)
    }
}

impl From<Address> for u64
{
    fn from(address: Address) -> Self
    {
        address.0
    }
}

impl fmt::Display for Address
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Wrapping add, matching how the runtime computes `base + offset`.
impl Add<u64> for Address
{
    type Output = Address;

    fn add(self, rhs: u64) -> Self::Output
    {
        Address(self.0.wrapping_add(rhs))
    }
}
