//! Glyph formatter for breakpoints in JIT-compiled code.

use tracing::trace;

use crate::decompiler::{select_decompiler, DecompilerService, SimplePrinterFlags};
use crate::glyph::labels::{format_template, GlyphLabels};
use crate::glyph::BreakpointGlyphFormatter;
use crate::text::{TextColor, TextColorWriter};
use crate::types::{BreakpointLocation, CursorPosition, IlOffsetMapping, NativeCodeLocation};
use crate::viewer::TextView;

/// Describes a [`NativeCodeLocation`] as
/// `line L, character C <il offset> <native address>[ ('<method>')]`
///
/// ```rust
/// use glyphfmt_core::decompiler::StaticDecompilerService;
/// use glyphfmt_core::glyph::{BreakpointGlyphFormatter, NativeCodeGlyphFormatter};
/// use glyphfmt_core::text::ClassifiedText;
/// use glyphfmt_core::types::*;
/// use glyphfmt_core::viewer::PlainTextView;
///
/// let location = NativeCodeLocation {
///     module: ModuleId::new("App.dll"),
///     token: MethodToken::new(0x0600_0001),
///     il_offset: 0x2A,
///     il_offset_mapping: IlOffsetMapping::Exact,
///     native_method_address: Address::new(0x0040_0000),
///     native_method_offset: 0x10,
/// };
/// let formatter = NativeCodeGlyphFormatter::new(StaticDecompilerService::default());
/// let mut out = ClassifiedText::new();
///
/// let handled = formatter.write_location(&mut out, &location.into(), &PlainTextView, CursorPosition::new(4, 8));
/// assert!(handled);
/// assert_eq!(out.text(), "line 5, character 9 0x002A 0x00400010");
/// ```
#[derive(Debug)]
pub struct NativeCodeGlyphFormatter<S>
{
    decompiler_service: S,
    labels: GlyphLabels,
}

impl<S: DecompilerService> NativeCodeGlyphFormatter<S>
{
    /// Create a formatter with the default labels.
    pub fn new(decompiler_service: S) -> Self
    {
        Self {
            decompiler_service,
            labels: GlyphLabels::default(),
        }
    }

    /// Replace the segment label templates.
    #[must_use]
    pub fn with_labels(mut self, labels: GlyphLabels) -> Self
    {
        self.labels = labels;
        self
    }

    /// Label templates in use
    pub fn labels(&self) -> &GlyphLabels
    {
        &self.labels
    }

    fn write_native_location(&self, output: &mut dyn TextColorWriter, location: &NativeCodeLocation, view: &dyn TextView, position: CursorPosition)
    {
        let display = position.to_display();
        let line = display.line.to_string();
        let character = display.character.to_string();
        output.write(TextColor::Text, &format_template(&self.labels.line_character, &[&line, &character]));
        output.write_space();

        let il_offset = il_offset_text(location.il_offset_mapping, location.il_offset);
        output.write(TextColor::Text, &format_template(&self.labels.il_offset, &[&il_offset]));
        output.write_space();

        // Recomputed on every call: the method may have been rejitted since the last one
        let address = location.native_address().to_string();
        output.write(TextColor::Text, &format_template(&self.labels.native_address, &[&address]));

        let Some(viewer) = view.document_viewer() else {
            trace!("No document viewer bound to the view, skipping statement");
            return;
        };
        let method_id = location.method_id();
        let Some(statement) = viewer.find_by_code_offset(&method_id, location.il_offset) else {
            trace!(method = %method_id, il_offset = location.il_offset, "No statement at IL offset");
            return;
        };

        output.write(TextColor::Text, " ('");
        let (decompiler, source) = select_decompiler(viewer.decompiler(), &self.decompiler_service);
        trace!(decompiler = decompiler.name(), ?source, "Writing statement method");
        decompiler.write_method(output, &statement.method, SimplePrinterFlags::DEFAULT);
        output.write(TextColor::Text, "')");
    }
}

impl<S: DecompilerService> BreakpointGlyphFormatter for NativeCodeGlyphFormatter<S>
{
    fn write_location(&self, output: &mut dyn TextColorWriter, location: &BreakpointLocation, view: &dyn TextView, position: CursorPosition) -> bool
    {
        let BreakpointLocation::NativeCode(location) = location else {
            return false;
        };
        self.write_native_location(output, location, view, position);
        true
    }
}

/// Text for the IL offset segment of a native location.
///
/// ```rust
/// use glyphfmt_core::glyph::native::il_offset_text;
/// use glyphfmt_core::types::IlOffsetMapping;
///
/// assert_eq!(il_offset_text(IlOffsetMapping::Exact, 0x2A), "0x002A");
/// assert_eq!(il_offset_text(IlOffsetMapping::Approximate, 0x2A), "~0x002A");
/// assert_eq!(il_offset_text(IlOffsetMapping::NoInfo, 0x2A), "(???)");
/// ```
#[must_use]
pub fn il_offset_text(mapping: IlOffsetMapping, il_offset: u32) -> String
{
    match mapping {
        IlOffsetMapping::Exact => format!("0x{il_offset:04X}"),
        IlOffsetMapping::Approximate => format!("~0x{il_offset:04X}"),
        IlOffsetMapping::Prolog => "(prolog)".to_string(),
        IlOffsetMapping::Epilog => "(epilog)".to_string(),
        IlOffsetMapping::Unknown | IlOffsetMapping::NoInfo | IlOffsetMapping::UnmappedAddress => "(???)".to_string(),
    }
}
