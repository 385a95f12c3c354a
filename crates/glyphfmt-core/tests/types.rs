//! Tests for location and position types

use std::str::FromStr;

use glyphfmt_core::error::GlyphError;
use glyphfmt_core::types::{
    Address, CursorPosition, IlOffsetMapping, MethodToken, ModuleId, ModuleTokenId, NativeCodeLocation, TextSnapshot,
};

#[test]
fn test_mapping_raw_codes()
{
    for mapping in IlOffsetMapping::ALL {
        assert_eq!(IlOffsetMapping::from_raw(mapping.raw()).unwrap(), mapping);
    }
    assert_eq!(IlOffsetMapping::from_raw(0).unwrap(), IlOffsetMapping::Unknown);
    assert_eq!(IlOffsetMapping::from_raw(3).unwrap(), IlOffsetMapping::Exact);
    assert_eq!(IlOffsetMapping::from_raw(6).unwrap(), IlOffsetMapping::UnmappedAddress);
}

#[test]
fn test_mapping_unknown_code_is_rejected()
{
    match IlOffsetMapping::from_raw(7) {
        Err(GlyphError::UnknownMapping(7)) => {}
        other => panic!("Expected UnknownMapping(7), got {other:?}"),
    }
    assert!(IlOffsetMapping::try_from(u32::MAX).is_err());
}

#[test]
fn test_mapping_from_str()
{
    assert_eq!(IlOffsetMapping::from_str("exact").unwrap(), IlOffsetMapping::Exact);
    assert_eq!(IlOffsetMapping::from_str("Approximate").unwrap(), IlOffsetMapping::Approximate);
    assert_eq!(IlOffsetMapping::from_str("no-info").unwrap(), IlOffsetMapping::NoInfo);
    assert_eq!(IlOffsetMapping::from_str("unmapped_address").unwrap(), IlOffsetMapping::UnmappedAddress);
    assert_eq!(IlOffsetMapping::from_str("2").unwrap(), IlOffsetMapping::Epilog);
    assert!(matches!(IlOffsetMapping::from_str("42"), Err(GlyphError::UnknownMapping(42))));
    assert!(matches!(IlOffsetMapping::from_str("sideways"), Err(GlyphError::InvalidMappingName(_))));
}

#[test]
fn test_mapping_display_round_trips()
{
    for mapping in IlOffsetMapping::ALL {
        assert_eq!(IlOffsetMapping::from_str(&mapping.to_string()).unwrap(), mapping);
    }
}

#[test]
fn test_mapping_has_il_offset()
{
    assert!(IlOffsetMapping::Exact.has_il_offset());
    assert!(IlOffsetMapping::Approximate.has_il_offset());
    assert!(!IlOffsetMapping::Prolog.has_il_offset());
    assert!(!IlOffsetMapping::NoInfo.has_il_offset());
}

#[test]
fn test_address_display()
{
    assert_eq!(Address::new(0x0040_0010).to_string(), "0x00400010");
    assert_eq!(Address::ZERO.to_string(), "0x00000000");
    assert_eq!(Address::new(0xDEAD_BEEF_CAFE).to_string(), "0xDEADBEEFCAFE");
}

#[test]
fn test_address_add_wraps()
{
    assert_eq!(Address::new(0x1000) + 0x10, Address::new(0x1010));
    assert_eq!(Address::new(u64::MAX) + 2, Address::new(1));
    assert_eq!(Address::new(u64::MAX).checked_add(1), None);
}

#[test]
fn test_native_location_address_and_id()
{
    let location = NativeCodeLocation {
        module: ModuleId::new("App.dll"),
        token: MethodToken::new(0x0600_0001),
        il_offset: 4,
        il_offset_mapping: IlOffsetMapping::Exact,
        native_method_address: Address::new(0x0040_0000),
        native_method_offset: 0x10,
    };
    assert_eq!(location.native_address(), Address::new(0x0040_0010));
    assert_eq!(location.method_id(), ModuleTokenId::new(ModuleId::new("App.dll"), MethodToken::new(0x0600_0001)));
}

#[test]
fn test_method_token_parts()
{
    let token = MethodToken::new(0x0600_0012);
    assert_eq!(token.table(), 0x06);
    assert_eq!(token.row(), 0x12);
    assert_eq!(token.to_string(), "0x06000012");
}

#[test]
fn test_module_kinds()
{
    assert!(!ModuleId::new("a.dll").is_dynamic());
    assert!(ModuleId::dynamic("gen").is_dynamic());
    assert!(ModuleId::in_memory("blob").is_in_memory());
    assert_ne!(ModuleId::new("a.dll"), ModuleId::in_memory("a.dll"));
}

#[test]
fn test_cursor_position_to_display()
{
    let display = CursorPosition::new(0, 0).to_display();
    assert_eq!((display.line, display.character), (1, 1));
    assert_eq!(CursorPosition::new(9, 3).to_display().to_string(), "line 10, character 4");
}

#[test]
fn test_snapshot_positions()
{
    let snapshot = TextSnapshot::new("abc\ndef\n\nghi");
    assert_eq!(snapshot.len(), 12);
    assert_eq!(snapshot.line_count(), 4);
    assert_eq!(snapshot.position_at(0).unwrap(), CursorPosition::new(0, 0));
    assert_eq!(snapshot.position_at(3).unwrap(), CursorPosition::new(0, 3));
    assert_eq!(snapshot.position_at(4).unwrap(), CursorPosition::new(1, 0));
    assert_eq!(snapshot.position_at(8).unwrap(), CursorPosition::new(2, 0));
    assert_eq!(snapshot.position_at(11).unwrap(), CursorPosition::new(3, 2));
    assert_eq!(snapshot.position_at(12).unwrap(), CursorPosition::new(3, 3));
}

#[test]
fn test_snapshot_line_breaks()
{
    let snapshot = TextSnapshot::new("a\r\nb\rc");
    assert_eq!(snapshot.line_count(), 3);
    assert_eq!(snapshot.position_at(2).unwrap(), CursorPosition::new(0, 2));
    assert_eq!(snapshot.position_at(3).unwrap(), CursorPosition::new(1, 0));
    assert_eq!(snapshot.position_at(5).unwrap(), CursorPosition::new(2, 0));
}

#[test]
fn test_snapshot_counts_characters()
{
    let snapshot = TextSnapshot::new("é\nü");
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.position_at(2).unwrap(), CursorPosition::new(1, 0));
}

#[test]
fn test_snapshot_offset_out_of_range()
{
    let snapshot = TextSnapshot::new("abc");
    match snapshot.position_at(4) {
        Err(GlyphError::OffsetOutOfRange { offset: 4, len: 3 }) => {}
        other => panic!("Expected OffsetOutOfRange, got {other:?}"),
    }
    assert!(TextSnapshot::new("").is_empty());
    assert_eq!(TextSnapshot::new("").position_at(0).unwrap(), CursorPosition::new(0, 0));
}
