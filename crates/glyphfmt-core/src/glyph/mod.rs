//! # Breakpoint Glyph Formatters
//!
//! A glyph formatter turns a breakpoint location into the short description
//! shown in the breakpoint glyph's tooltip. Each formatter understands some
//! location kinds; the [`GlyphFormatterRegistry`] asks them in turn until one
//! handles the location.
//!
//! ## Contract
//!
//! - Return `false` without writing anything for a location you don't handle.
//! - Return `true` once the location is described, even if optional parts
//!   (like the decompiled statement) were unavailable.
//! - Don't mutate the location, the view, or any host state.

pub mod labels;
pub mod native;

use tracing::debug;

pub use labels::GlyphLabels;
pub use native::NativeCodeGlyphFormatter;

use crate::text::TextColorWriter;
use crate::types::{BreakpointLocation, CursorPosition};
use crate::viewer::TextView;

/// Writes a description of a breakpoint location
pub trait BreakpointGlyphFormatter
{
    /// Describe `location` for the glyph at `position` in `view`.
    ///
    /// Returns `false` if this formatter does not handle the location kind.
    fn write_location(&self, output: &mut dyn TextColorWriter, location: &BreakpointLocation, view: &dyn TextView, position: CursorPosition) -> bool;
}

/// Ordered list of glyph formatters, tried first to last
#[derive(Default)]
pub struct GlyphFormatterRegistry
{
    formatters: Vec<Box<dyn BreakpointGlyphFormatter>>,
}

impl GlyphFormatterRegistry
{
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Append a formatter; it is tried after every formatter registered before it.
    pub fn register(&mut self, formatter: impl BreakpointGlyphFormatter + 'static)
    {
        self.formatters.push(Box::new(formatter));
    }

    /// Number of registered formatters
    #[must_use]
    pub fn len(&self) -> usize
    {
        self.formatters.len()
    }

    /// Whether no formatter is registered
    #[must_use]
    pub fn is_empty(&self) -> bool
    {
        self.formatters.is_empty()
    }
}

impl std::fmt::Debug for GlyphFormatterRegistry
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.debug_struct("GlyphFormatterRegistry")
            .field("formatters", &self.formatters.len())
            .finish()
    }
}

impl BreakpointGlyphFormatter for GlyphFormatterRegistry
{
    fn write_location(&self, output: &mut dyn TextColorWriter, location: &BreakpointLocation, view: &dyn TextView, position: CursorPosition) -> bool
    {
        for (index, formatter) in self.formatters.iter().enumerate() {
            if formatter.write_location(output, location, view, position) {
                debug!(index, "Breakpoint location handled by glyph formatter");
                return true;
            }
        }
        debug!(formatters = self.formatters.len(), "No glyph formatter handled the breakpoint location");
        false
    }
}
