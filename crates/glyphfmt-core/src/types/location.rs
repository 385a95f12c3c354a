//! Breakpoint locations.

use crate::types::{Address, IlOffsetMapping, MethodToken, ModuleId, ModuleTokenId};

/// A breakpoint bound to compiled native code, plus its mapping back to IL
///
/// The native base address belongs to the current compilation of the method.
/// The runtime may recompile the method (tiered JIT, rejit), so callers build
/// a fresh value from the live debuggee for every format request and the
/// effective address is derived on demand by [`NativeCodeLocation::native_address`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCodeLocation
{
    /// Module defining the method
    pub module: ModuleId,
    /// Method token
    pub token: MethodToken,
    /// IL offset; only meaningful when `il_offset_mapping.has_il_offset()`
    pub il_offset: u32,
    /// How `il_offset` relates to the native code
    pub il_offset_mapping: IlOffsetMapping,
    /// Start of the method's native code
    pub native_method_address: Address,
    /// Offset of the breakpoint from `native_method_address`
    pub native_method_offset: u64,
}

impl NativeCodeLocation
{
    /// Absolute address of the breakpoint: base + offset.
    #[must_use]
    pub fn native_address(&self) -> Address
    {
        self.native_method_address + self.native_method_offset
    }

    /// The method this location belongs to.
    #[must_use]
    pub fn method_id(&self) -> ModuleTokenId
    {
        ModuleTokenId::new(self.module.clone(), self.token)
    }
}

/// A breakpoint bound to an IL offset, not yet resolved to native code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IlCodeLocation
{
    /// Module defining the method
    pub module: ModuleId,
    /// Method token
    pub token: MethodToken,
    /// IL offset within the method body
    pub il_offset: u32,
}

/// Any kind of breakpoint location a host may hand to a glyph formatter
///
/// Each formatter handles the kinds it knows and declines the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakpointLocation
{
    /// Breakpoint in JIT-compiled code
    NativeCode(NativeCodeLocation),
    /// Breakpoint on an IL instruction
    Il(IlCodeLocation),
    /// Breakpoint on a raw address with no managed context
    Address(Address),
}

impl From<NativeCodeLocation> for BreakpointLocation
{
    fn from(location: NativeCodeLocation) -> Self
    {
        Self::NativeCode(location)
    }
}

impl From<IlCodeLocation> for BreakpointLocation
{
    fn from(location: IlCodeLocation) -> Self
    {
        Self::Il(location)
    }
}

impl From<Address> for BreakpointLocation
{
    fn from(address: Address) -> Self
    {
        Self::Address(address)
    }
}
