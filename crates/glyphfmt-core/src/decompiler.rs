//! # Decompiler Collaborators
//!
//! The glyph formatter does not decompile anything. When a breakpoint maps to
//! a statement in an open decompiled view, it asks a [`Decompiler`] to print a
//! short description of the statement's method.
//!
//! Which decompiler prints is an ordered fallback: the decompiler bound to the
//! open tab, and if the tab has none, the service-wide default. The order
//! lives in one place, [`select_decompiler`].

use bitflags::bitflags;

use crate::text::{TextColor, TextColorWriter};
use crate::types::MethodRef;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Controls how much of a method signature is printed
    pub struct SimplePrinterFlags: u32 {
        /// Print parameter types
        const SHOW_PARAMETER_TYPES = 0x0001;
        /// Print parameter names
        const SHOW_PARAMETER_NAMES = 0x0002;
        /// Print the declaring type before the method name
        const SHOW_OWNER_TYPES = 0x0004;
        /// Print the return type
        const SHOW_RETURN_TYPES = 0x0008;
        /// Print namespaces of type names
        const SHOW_NAMESPACES = 0x0010;
        /// Print `int` rather than `System.Int32`
        const SHOW_TYPE_KEYWORDS = 0x0020;

        /// Flags used for breakpoint tooltips
        const DEFAULT = Self::SHOW_PARAMETER_TYPES.bits()
            | Self::SHOW_PARAMETER_NAMES.bits()
            | Self::SHOW_OWNER_TYPES.bits()
            | Self::SHOW_RETURN_TYPES.bits()
            | Self::SHOW_NAMESPACES.bits()
            | Self::SHOW_TYPE_KEYWORDS.bits();
    }
}

impl Default for SimplePrinterFlags
{
    fn default() -> Self
    {
        Self::DEFAULT
    }
}

/// Something that can print a short, classified description of a method
pub trait Decompiler
{
    /// Display name of the decompiler's language ("C#", "IL", ...)
    fn name(&self) -> &str;

    /// Write `method` to `output`, honoring `flags`.
    fn write_method(&self, output: &mut dyn TextColorWriter, method: &MethodRef, flags: SimplePrinterFlags);
}

/// Host service that owns the user's preferred decompiler
pub trait DecompilerService
{
    /// Decompiler used when no view-specific one is available
    fn default_decompiler(&self) -> &dyn Decompiler;
}

/// Which tier of the fallback chain supplied the decompiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecompilerSource
{
    /// The decompiler bound to the open document tab
    Tab,
    /// The service-wide default
    ServiceDefault,
}

/// Pick the tab's decompiler if there is one, otherwise the service default.
#[must_use]
pub fn select_decompiler<'a>(tab: Option<&'a dyn Decompiler>, service: &'a dyn DecompilerService) -> (&'a dyn Decompiler, DecompilerSource)
{
    match tab {
        Some(decompiler) => (decompiler, DecompilerSource::Tab),
        None => (service.default_decompiler(), DecompilerSource::ServiceDefault),
    }
}

/// [`DecompilerService`] that always hands out the same decompiler
pub struct StaticDecompilerService
{
    decompiler: Box<dyn Decompiler>,
}

impl StaticDecompilerService
{
    /// Wrap `decompiler` as the service default.
    pub fn new(decompiler: impl Decompiler + 'static) -> Self
    {
        Self {
            decompiler: Box::new(decompiler),
        }
    }
}

impl Default for StaticDecompilerService
{
    fn default() -> Self
    {
        Self::new(SignaturePrinter)
    }
}

impl std::fmt::Debug for StaticDecompilerService
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("StaticDecompilerService")
            .field("decompiler", &self.decompiler.name())
            .finish()
    }
}

impl DecompilerService for StaticDecompilerService
{
    fn default_decompiler(&self) -> &dyn Decompiler
    {
        self.decompiler.as_ref()
    }
}

/// Prints C#-style method signatures from metadata alone
///
/// With [`SimplePrinterFlags::DEFAULT`]:
///
/// ```rust
/// use glyphfmt_core::decompiler::{Decompiler, SignaturePrinter, SimplePrinterFlags};
/// use glyphfmt_core::text::ClassifiedText;
/// use glyphfmt_core::types::{MethodRef, MethodToken, ModuleId, ModuleTokenId, ParameterRef};
///
/// let id = ModuleTokenId::new(ModuleId::new("App.dll"), MethodToken::new(0x0600_0001));
/// let method = MethodRef::new(id, "App", "Program", "Main")
///     .with_parameter(ParameterRef::new("System.String[]", Some("args".into())))
///     .with_return_type("System.Void");
///
/// let mut out = ClassifiedText::new();
/// SignaturePrinter.write_method(&mut out, &method, SimplePrinterFlags::DEFAULT);
/// assert_eq!(out.text(), "void App.Program.Main(string[] args)");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SignaturePrinter;

impl SignaturePrinter
{
    fn write_dotted(output: &mut dyn TextColorWriter, dotted: &str, color: TextColor)
    {
        for (i, part) in dotted.split('.').enumerate() {
            if i > 0 {
                output.write(TextColor::Punctuation, ".");
            }
            output.write(color, part);
        }
    }

    /// Write a CLR type name such as ``System.Collections.Generic.List`1<System.Int32>[,]``.
    ///
    /// The namespace is only split off the element name; generic arguments are
    /// printed recursively and array, pointer and by-ref suffixes are kept as written.
    fn write_type(output: &mut dyn TextColorWriter, full_name: &str, flags: SimplePrinterFlags)
    {
        let full_name = full_name.trim();
        let (element, generic_args, suffix) = split_type_name(full_name);

        if generic_args.is_none() && flags.contains(SimplePrinterFlags::SHOW_TYPE_KEYWORDS) {
            if let Some(keyword) = type_keyword(element) {
                output.write(TextColor::Keyword, keyword);
                if !suffix.is_empty() {
                    output.write(TextColor::Punctuation, suffix);
                }
                return;
            }
        }

        match element.rsplit_once('.') {
            Some((namespace, name)) if flags.contains(SimplePrinterFlags::SHOW_NAMESPACES) => {
                Self::write_dotted(output, namespace, TextColor::Namespace);
                output.write(TextColor::Punctuation, ".");
                output.write(TextColor::Type, strip_arity(name));
            }
            Some((_, name)) => output.write(TextColor::Type, strip_arity(name)),
            None => output.write(TextColor::Type, strip_arity(element)),
        }

        if let Some(args) = generic_args {
            output.write(TextColor::Punctuation, "<");
            for (i, arg) in split_generic_args(args).enumerate() {
                if i > 0 {
                    output.write(TextColor::Punctuation, ",");
                    output.write_space();
                }
                Self::write_type(output, arg, flags);
            }
            output.write(TextColor::Punctuation, ">");
        }
        if !suffix.is_empty() {
            output.write(TextColor::Punctuation, suffix);
        }
    }
}

/// Split a type name into element name, generic argument list and suffix.
fn split_type_name(full_name: &str) -> (&str, Option<&str>, &str)
{
    let Some(open) = full_name.find(['<', '[', '*', '&']) else {
        return (full_name, None, "");
    };
    let (element, rest) = full_name.split_at(open);
    if !rest.starts_with('<') {
        return (element, None, rest);
    }

    let mut depth = 0usize;
    for (i, c) in rest.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return (element, Some(&rest[1..i]), &rest[i + 1..]);
                }
            }
            _ => {}
        }
    }
    // Unbalanced brackets: print the name as written
    (full_name, None, "")
}

/// Top-level comma separated generic arguments
fn split_generic_args(args: &str) -> impl Iterator<Item = &str>
{
    let mut depth = 0usize;
    let mut start = 0;
    let mut parts = Vec::new();
    for (i, c) in args.char_indices() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(args[start..].trim());
    parts.into_iter().filter(|part| !part.is_empty())
}

/// ``List`1`` -> `List`
fn strip_arity(name: &str) -> &str
{
    name.split_once('`').map_or(name, |(name, _)| name)
}

impl Decompiler for SignaturePrinter
{
    fn name(&self) -> &str
    {
        "C#"
    }

    fn write_method(&self, output: &mut dyn TextColorWriter, method: &MethodRef, flags: SimplePrinterFlags)
    {
        if flags.contains(SimplePrinterFlags::SHOW_RETURN_TYPES) {
            if let Some(return_type) = &method.return_type {
                Self::write_type(output, return_type, flags);
                output.write_space();
            }
        }

        let type_name = method.declaring_type.rsplit('.').next().unwrap_or(&method.declaring_type);
        if flags.contains(SimplePrinterFlags::SHOW_OWNER_TYPES) {
            if flags.contains(SimplePrinterFlags::SHOW_NAMESPACES) && !method.namespace.is_empty() {
                Self::write_dotted(output, &method.namespace, TextColor::Namespace);
                output.write(TextColor::Punctuation, ".");
            }
            Self::write_dotted(output, &method.declaring_type, TextColor::Type);
            output.write(TextColor::Punctuation, ".");
        }

        if method.is_constructor() {
            output.write(TextColor::Type, type_name);
        } else {
            output.write(TextColor::Method, &method.name);
        }

        output.write(TextColor::Punctuation, "(");
        let show_types = flags.contains(SimplePrinterFlags::SHOW_PARAMETER_TYPES);
        let show_names = flags.contains(SimplePrinterFlags::SHOW_PARAMETER_NAMES);
        for (i, parameter) in method.parameters.iter().enumerate() {
            if i > 0 {
                output.write(TextColor::Punctuation, ",");
                output.write_space();
            }
            if show_types {
                Self::write_type(output, &parameter.type_name, flags);
            }
            if let (true, Some(name)) = (show_names, &parameter.name) {
                if show_types {
                    output.write_space();
                }
                output.write(TextColor::Parameter, name);
            }
        }
        output.write(TextColor::Punctuation, ")");
    }
}

/// C# keyword for a well-known system type
fn type_keyword(full_name: &str) -> Option<&'static str>
{
    let keyword = match full_name {
        "System.Void" => "void",
        "System.Boolean" => "bool",
        "System.Char" => "char",
        "System.SByte" => "sbyte",
        "System.Byte" => "byte",
        "System.Int16" => "short",
        "System.UInt16" => "ushort",
        "System.Int32" => "int",
        "System.UInt32" => "uint",
        "System.Int64" => "long",
        "System.UInt64" => "ulong",
        "System.Single" => "float",
        "System.Double" => "double",
        "System.Decimal" => "decimal",
        "System.String" => "string",
        "System.Object" => "object",
        _ => return None,
    };
    Some(keyword)
}
