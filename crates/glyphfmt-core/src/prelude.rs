//! Common module for library exports

pub use crate::decompiler::{Decompiler, DecompilerService, SignaturePrinter, SimplePrinterFlags, StaticDecompilerService};
pub use crate::error::{GlyphError, GlyphResult};
pub use crate::glyph::{BreakpointGlyphFormatter, GlyphFormatterRegistry, GlyphLabels, NativeCodeGlyphFormatter};
pub use crate::text::{ClassifiedText, TextColor, TextColorWriter};
pub use crate::types::{
    Address, BreakpointLocation, CursorPosition, IlCodeLocation, IlOffsetMapping, MethodRef, MethodToken, ModuleId, ModuleTokenId,
    NativeCodeLocation, ParameterRef, TextSnapshot,
};
pub use crate::viewer::{DecompiledTextView, DocumentViewer, MethodStatement, PlainTextView, StatementMap, TextView};
