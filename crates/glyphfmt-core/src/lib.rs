//! # glyphfmt-core
//!
//! Breakpoint glyph location formatting for native code breakpoints.
//!
//! When a breakpoint in managed code has been bound to JIT-compiled native
//! code, the editor's breakpoint glyph shows a tooltip such as:
//!
//! ```text
//! line 12, character 9 ~0x002A 0x7FFA1C40 ('void App.Program.Main(string[] args)')
//! ```
//!
//! This crate produces that description:
//! - the 1-based line and character of the glyph,
//! - the IL offset, or the phase (prolog/epilog) when there is no IL offset,
//! - the native address (method base + offset),
//! - and, when the view shows decompiled code, the method owning the statement.
//!
//! ## Collaborators
//!
//! The formatter only consumes narrow traits: [`text::TextColorWriter`] for
//! output, [`viewer::TextView`] / [`viewer::DocumentViewer`] for statement
//! lookup, and [`decompiler::DecompilerService`] for printing methods. Hosts
//! implement them; simple in-memory versions are provided for tools and tests.
//!
//! ## Threading
//!
//! Formatting is synchronous and meant to run on the thread that owns the
//! view. Nothing is cached between calls.

pub mod decompiler;
pub mod error;
pub mod glyph;
pub mod prelude;
pub mod text;
pub mod types;
pub mod viewer;

pub use error::{GlyphError, GlyphResult};
pub use glyph::{BreakpointGlyphFormatter, GlyphFormatterRegistry, NativeCodeGlyphFormatter};
pub use types::{BreakpointLocation, IlOffsetMapping, NativeCodeLocation};
