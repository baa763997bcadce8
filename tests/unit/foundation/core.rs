use super::*;

#[test]
fn from_hex_parses_palette_entries() {
    assert_eq!(Rgb8::from_hex("#667eea").unwrap(), Rgb8::new(102, 126, 234));
    assert_eq!(Rgb8::from_hex("764ba2").unwrap(), Rgb8::new(118, 75, 162));
    assert_eq!(Rgb8::from_hex("#F5576C").unwrap(), Rgb8::new(245, 87, 108));
}

#[test]
fn from_hex_rejects_malformed_input() {
    for bad in ["", "#fff", "#12345g", "#1234567", "zzzzzz"] {
        assert!(Rgb8::from_hex(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn hex_round_trips_through_to_hex() {
    let c = Rgb8::from_hex("#43e97b").unwrap();
    assert_eq!(c.to_hex(), "#43e97b");
}

#[test]
fn canvas_validation_rejects_empty_and_oversized() {
    assert!(Canvas::new(0, 10).validate().is_err());
    assert!(Canvas::new(10, 0).validate().is_err());
    assert!(Canvas::new(70_000, 10).validate().is_err());
    assert_eq!(Canvas::square(1024).validate().unwrap().pixel_count(), 1024 * 1024);
}

#[test]
fn premultiplied_scales_channels_by_alpha() {
    assert_eq!(Rgba8::new(255, 255, 255, 255).premultiplied(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::new(255, 255, 255, 0).premultiplied(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::new(255, 0, 0, 128).premultiplied(), [128, 0, 0, 128]);
}

#[test]
fn canvas_serializes_as_plain_dimensions() {
    let json = serde_json::to_string(&Canvas::new(1080, 1920)).unwrap();
    assert_eq!(json, r#"{"width":1080,"height":1920}"#);
    let back: Canvas = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Canvas::new(1080, 1920));
}
