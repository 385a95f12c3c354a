//! Tests for glyph formatter dispatch

use std::cell::Cell;
use std::rc::Rc;

use glyphfmt_core::decompiler::StaticDecompilerService;
use glyphfmt_core::glyph::{BreakpointGlyphFormatter, GlyphFormatterRegistry, NativeCodeGlyphFormatter};
use glyphfmt_core::text::{ClassifiedText, TextColor, TextColorWriter};
use glyphfmt_core::types::{Address, BreakpointLocation, CursorPosition, IlOffsetMapping, MethodToken, ModuleId, NativeCodeLocation};
use glyphfmt_core::viewer::{PlainTextView, TextView};

/// Handles raw address locations only
struct AddressFormatter
{
    calls: Rc<Cell<usize>>,
}

impl BreakpointGlyphFormatter for AddressFormatter
{
    fn write_location(&self, output: &mut dyn TextColorWriter, location: &BreakpointLocation, _view: &dyn TextView, _position: CursorPosition) -> bool
    {
        self.calls.set(self.calls.get() + 1);
        let BreakpointLocation::Address(address) = location else {
            return false;
        };
        output.write(TextColor::Number, &address.to_string());
        true
    }
}

fn native() -> BreakpointLocation
{
    NativeCodeLocation {
        module: ModuleId::new("App.dll"),
        token: MethodToken::new(0x0600_0001),
        il_offset: 0,
        il_offset_mapping: IlOffsetMapping::Prolog,
        native_method_address: Address::new(0x1000),
        native_method_offset: 0,
    }
    .into()
}

fn registry(calls: &Rc<Cell<usize>>) -> GlyphFormatterRegistry
{
    let mut registry = GlyphFormatterRegistry::new();
    registry.register(AddressFormatter { calls: Rc::clone(calls) });
    registry.register(NativeCodeGlyphFormatter::new(StaticDecompilerService::default()));
    registry
}

#[test]
fn test_empty_registry_handles_nothing()
{
    let registry = GlyphFormatterRegistry::new();
    let mut out = ClassifiedText::new();
    assert!(registry.is_empty());
    assert!(!registry.write_location(&mut out, &native(), &PlainTextView, CursorPosition::default()));
    assert!(out.is_empty());
}

#[test]
fn test_falls_through_to_native_formatter()
{
    let calls = Rc::new(Cell::new(0));
    let registry = registry(&calls);
    let mut out = ClassifiedText::new();

    assert!(registry.write_location(&mut out, &native(), &PlainTextView, CursorPosition::default()));
    assert_eq!(out.text(), "line 1, character 1 (prolog) 0x00001000");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_stops_at_first_handler()
{
    let calls = Rc::new(Cell::new(0));
    let registry = registry(&calls);
    let mut out = ClassifiedText::new();

    assert!(registry.write_location(&mut out, &Address::new(0xABCD).into(), &PlainTextView, CursorPosition::default()));
    assert_eq!(out.text(), "0x0000ABCD");
    assert_eq!(out.segments().len(), 1);
    assert_eq!(registry.len(), 2);
}
