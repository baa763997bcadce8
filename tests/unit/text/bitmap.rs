use super::*;
use crate::foundation::core::Canvas;

#[test]
fn cell_scales_with_requested_size() {
    assert_eq!(BitmapFace::new(8.0).cell(), 1);
    assert_eq!(BitmapFace::new(32.0).cell(), 4);
    assert_eq!(BitmapFace::new(48.0).cell(), 6);
    assert_eq!(BitmapFace::new(2.0).cell(), 1);
    assert_eq!(BitmapFace::new(f32::NAN).cell(), 1);
}

#[test]
fn extent_counts_advance_without_trailing_gap() {
    let face = BitmapFace::new(8.0);
    assert_eq!(face.extent(""), TextExtent::new(0, 7));
    assert_eq!(face.extent("A"), TextExtent::new(5, 7));
    assert_eq!(face.extent("AB"), TextExtent::new(11, 7));

    let big = BitmapFace::new(48.0);
    assert_eq!(big.extent("Share"), TextExtent::new(29 * 6, 42));
}

#[test]
fn extent_counts_chars_not_bytes() {
    let face = BitmapFace::new(8.0);
    assert_eq!(face.extent("— Buddha").width, face.extent("- Buddha").width);
}

#[test]
fn lowercase_and_typographic_marks_reuse_ascii_glyphs() {
    assert_eq!(glyph(normalize('a')), glyph('A'));
    assert_eq!(glyph(normalize('\u{2014}')), glyph('-'));
    assert_eq!(glyph(normalize('\u{2019}')), glyph('\''));
    assert_eq!(glyph(normalize('✨')), MISSING);
}

#[test]
fn draw_lights_glyph_pixels() {
    let mut surface = Surface::transparent(Canvas::new(16, 16)).unwrap();
    let face = BitmapFace::new(8.0);
    face.draw(&mut surface, "I", 0.0, 0.0, Rgba8::new(255, 255, 255, 255));
    let img = surface.finish_rgba().unwrap();
    // Top row of 'I' is 01110.
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(2, 0).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(4, 0).0[3], 0);
    // Stem.
    assert_eq!(img.get_pixel(2, 3).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(1, 3).0[3], 0);
    // Nothing below the glyph.
    assert_eq!(img.get_pixel(2, 9).0[3], 0);
}
