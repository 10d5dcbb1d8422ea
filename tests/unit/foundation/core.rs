use super::*;
use serde_json::json;

#[test]
fn month_index_and_label_agree() {
    for (i, m) in Month::ALL.iter().enumerate() {
        assert_eq!(usize::from(m.index()), i);
        assert_eq!(Month::from_index(m.index()), Some(*m));
    }
    assert_eq!(Month::Mar.label(), "Mar");
    assert_eq!(Month::from_index(12), None);
}

#[test]
fn month_serializes_as_label() {
    assert_eq!(serde_json::to_value(Month::Sep).unwrap(), json!("Sep"));
    let m: Month = serde_json::from_value(json!("Dec")).unwrap();
    assert_eq!(m, Month::Dec);
}

#[test]
fn hex_colors_parse_and_print() {
    let c = Rgba8::from_hex("#EF4444").unwrap();
    assert_eq!(c, Rgba8::rgb(0xef, 0x44, 0x44));
    assert_eq!(c.to_hex(), "#ef4444");

    let c = Rgba8::from_hex("0000ff80").unwrap();
    assert_eq!(c.a, 0x80);
    assert_eq!(c.to_hex(), "#0000ff80");

    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#gg0000").is_err());
}

#[test]
fn color_deserializes_from_hex_or_object() {
    let c: Rgba8 = serde_json::from_value(json!("#10b981")).unwrap();
    assert_eq!(c, Rgba8::rgb(0x10, 0xb9, 0x81));
    let c: Rgba8 = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Rgba8::rgb(1, 2, 3));
}

#[test]
fn layout_ranges_follow_margins() {
    let l = ChartLayout::new(600.0, 250.0, Margin::new(20.0, 80.0, 60.0, 80.0));
    assert_eq!(l.x_range(), (80.0, 520.0));
    assert_eq!(l.y_range(), (20.0, 190.0));
    assert!(l.validate("heatmap").is_ok());

    let bad = ChartLayout::new(100.0, 100.0, Margin::new(0.0, 60.0, 0.0, 60.0));
    assert!(bad.validate("bad").is_err());
}
