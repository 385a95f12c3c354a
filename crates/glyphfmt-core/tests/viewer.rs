//! Tests for the in-memory views and statement lookup

use glyphfmt_core::decompiler::SignaturePrinter;
use glyphfmt_core::types::{MethodRef, MethodToken, ModuleId, ModuleTokenId};
use glyphfmt_core::viewer::{DecompiledTextView, DocumentViewer, MethodStatement, PlainTextView, StatementMap, TextView};

fn id(token: u32) -> ModuleTokenId
{
    ModuleTokenId::new(ModuleId::new("App.dll"), MethodToken::new(token))
}

fn statement(token: u32, name: &str, il_span: std::ops::RangeInclusive<u32>) -> MethodStatement
{
    MethodStatement {
        method: MethodRef::new(id(token), "App", "Program", name),
        il_span,
    }
}

#[test]
fn test_statement_span_is_inclusive()
{
    let stmt = statement(0x0600_0001, "Run", 0x10..=0x1F);
    assert!(!stmt.contains(0x0F));
    assert!(stmt.contains(0x10));
    assert!(stmt.contains(0x1F));
    assert!(!stmt.contains(0x20));

    let whole = statement(0x0600_0001, "Run", 0..=u32::MAX);
    assert!(whole.contains(0));
    assert!(whole.contains(u32::MAX));
}

#[test]
fn test_statement_map_len()
{
    let mut map = StatementMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);

    map.insert(statement(0x0600_0001, "Run", 0..=0x0F));
    map.insert(statement(0x0600_0001, "Run", 0x10..=0x1F));
    assert!(!map.is_empty());
    assert_eq!(map.len(), 2);
}

#[test]
fn test_statement_map_lookup()
{
    let mut map = StatementMap::new();
    map.insert(statement(0x0600_0001, "Run", 0..=0x0F));
    map.insert(statement(0x0600_0002, "Stop", 0..=0x0F));

    let found = map.find_by_code_offset(&id(0x0600_0002), 0x0F).unwrap();
    assert_eq!(found.method.name, "Stop");
    assert!(map.find_by_code_offset(&id(0x0600_0002), 0x10).is_none());
    assert!(map.find_by_code_offset(&id(0x0600_0003), 0).is_none());
}

#[test]
fn test_statement_map_decompiler()
{
    assert!(StatementMap::new().decompiler().is_none());

    let map = StatementMap::new().with_decompiler(SignaturePrinter);
    assert_eq!(map.decompiler().map(|d| d.name()), Some("C#"));
}

#[test]
fn test_views()
{
    assert!(PlainTextView.document_viewer().is_none());

    let mut map = StatementMap::new();
    map.insert(statement(0x0600_0001, "Run", 0..=u32::MAX));
    let view = DecompiledTextView::new(map);
    assert_eq!(view.document().len(), 1);

    let viewer = view.document_viewer().unwrap();
    let found = viewer.find_by_code_offset(&id(0x0600_0001), u32::MAX).unwrap();
    assert_eq!(found.method.name, "Run");
}
