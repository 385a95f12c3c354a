//! Example showing how a host wires the glyph formatter
//!
//! 1. Register formatters in a registry
//! 2. Build the location from live debuggee state
//! 3. Format it for a view with and without a decompiled document
//!
//! Run with `RUST_LOG=trace` to see skipped statement lookups.

use glyphfmt_core::prelude::*;
use glyphfmt_utils::init_logging;

fn main()
{
    let _guard = init_logging().expect("Failed to initialize logging");

    let mut registry = GlyphFormatterRegistry::new();
    registry.register(NativeCodeGlyphFormatter::new(StaticDecompilerService::default()));

    let module = ModuleId::new("HelloWorld.dll");
    let token = MethodToken::new(0x0600_0001);
    let location = BreakpointLocation::NativeCode(NativeCodeLocation {
        module: module.clone(),
        token,
        il_offset: 0x0C,
        il_offset_mapping: IlOffsetMapping::Approximate,
        native_method_address: Address::new(0x7FFA_1C40_0000),
        native_method_offset: 0x3B,
    });
    let position = CursorPosition::new(11, 8);

    // Plain source view: no statement annotation
    let mut output = ClassifiedText::new();
    registry.write_location(&mut output, &location, &PlainTextView, position);
    println!("{output}");

    // Decompiled view of the same method
    let method = MethodRef::new(ModuleTokenId::new(module, token), "HelloWorld", "Program", "Main")
        .with_parameter(ParameterRef::new("System.String[]", Some("args".to_string())))
        .with_return_type("System.Void");
    let mut document = StatementMap::new().with_decompiler(SignaturePrinter);
    document.insert(MethodStatement { method, il_span: 0x0A..=0x13 });
    let view = DecompiledTextView::new(document);

    output.clear();
    registry.write_location(&mut output, &location, &view, position);
    println!("{output}");

    for (color, text) in output.segments() {
        println!("  {color:<12} {text:?}");
    }
}
