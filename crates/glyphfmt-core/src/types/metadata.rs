//! Module and method identity.
//!
//! A breakpoint in managed code is anchored to a method, which is identified
//! by the module that defines it plus the method's metadata token. The
//! decompiled-view lookups key on the same pair ([`ModuleTokenId`]).

use std::fmt;
use std::sync::Arc;

/// Identity of a loaded module (assembly file, dynamic module, in-memory image)
///
/// Cheap to clone; the name is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId
{
    name: Arc<str>,
    dynamic: bool,
    in_memory: bool,
}

impl ModuleId
{
    /// Module loaded from a file on disk.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self
    {
        Self {
            name: name.into(),
            dynamic: false,
            in_memory: false,
        }
    }

    /// Module created at runtime (e.g. `AssemblyBuilder`).
    #[must_use]
    pub fn dynamic(name: impl Into<Arc<str>>) -> Self
    {
        Self {
            name: name.into(),
            dynamic: true,
            in_memory: true,
        }
    }

    /// Module loaded from a byte array rather than a file.
    #[must_use]
    pub fn in_memory(name: impl Into<Arc<str>>) -> Self
    {
        Self {
            name: name.into(),
            dynamic: false,
            in_memory: true,
        }
    }

    /// Module name (usually the file name or full path)
    #[must_use]
    pub fn name(&self) -> &str
    {
        &self.name
    }

    /// Whether the module was emitted at runtime
    #[must_use]
    pub const fn is_dynamic(&self) -> bool
    {
        self.dynamic
    }

    /// Whether the module has no backing file
    #[must_use]
    pub const fn is_in_memory(&self) -> bool
    {
        self.in_memory
    }
}

impl fmt::Display for ModuleId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(&self.name)
    }
}

/// Metadata token of a method (`0x06xxxxxx` for `MethodDef` rows)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodToken(u32);

impl MethodToken
{
    /// Create a token from its raw 32-bit value.
    #[must_use]
    pub const fn new(value: u32) -> Self
    {
        Self(value)
    }

    /// Raw token value
    #[must_use]
    pub const fn value(self) -> u32
    {
        self.0
    }

    /// Metadata table number (high byte)
    #[must_use]
    pub const fn table(self) -> u8
    {
        (self.0 >> 24) as u8
    }

    /// Row index within the table (low 24 bits)
    #[must_use]
    pub const fn row(self) -> u32
    {
        self.0 & 0x00FF_FFFF
    }
}

impl From<u32> for MethodToken
{
    fn from(value: u32) -> Self
    {
        Self(value)
    }
}

impl fmt::Display for MethodToken
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "0x{:08X}", self.0)
    }
}

/// Module + token pair identifying one method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleTokenId
{
    /// Defining module
    pub module: ModuleId,
    /// Method token within `module`
    pub token: MethodToken,
}

impl ModuleTokenId
{
    /// Pair a module with a token.
    #[must_use]
    pub fn new(module: ModuleId, token: MethodToken) -> Self
    {
        Self { module, token }
    }
}

impl fmt::Display for ModuleTokenId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}!{}", self.module, self.token)
    }
}

/// One parameter of a [`MethodRef`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterRef
{
    /// Full type name (`System.Int32`, `MyApp.Widget`)
    pub type_name: String,
    /// Parameter name, if known from metadata
    pub name: Option<String>,
}

impl ParameterRef
{
    /// Create a parameter with a type and an optional name.
    #[must_use]
    pub fn new(type_name: impl Into<String>, name: Option<String>) -> Self
    {
        Self {
            type_name: type_name.into(),
            name,
        }
    }
}

/// Enough of a method's signature to print a short description of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRef
{
    /// Where the method lives
    pub id: ModuleTokenId,
    /// Namespace of the declaring type (may be empty)
    pub namespace: String,
    /// Declaring type name, nested types joined with `.`
    pub declaring_type: String,
    /// Method name (`.ctor`, `Main`, `get_Count`)
    pub name: String,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterRef>,
    /// Full return type name, `None` for constructors
    pub return_type: Option<String>,
}

impl MethodRef
{
    /// Create a method with no parameters and no return type.
    #[must_use]
    pub fn new(id: ModuleTokenId, namespace: impl Into<String>, declaring_type: impl Into<String>, name: impl Into<String>) -> Self
    {
        Self {
            id,
            namespace: namespace.into(),
            declaring_type: declaring_type.into(),
            name: name.into(),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Append a parameter.
    #[must_use]
    pub fn with_parameter(mut self, parameter: ParameterRef) -> Self
    {
        self.parameters.push(parameter);
        self
    }

    /// Set the return type.
    #[must_use]
    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self
    {
        self.return_type = Some(return_type.into());
        self
    }

    /// Whether this is an instance or static constructor
    #[must_use]
    pub fn is_constructor(&self) -> bool
    {
        self.name == ".ctor" || self.name == ".cctor"
    }
}
