use super::*;

const PURPLE: Rgb8 = Rgb8::new(102, 126, 234);
const VIOLET: Rgb8 = Rgb8::new(118, 75, 162);

fn within_one(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 1
}

#[test]
fn endpoints_match_colors_for_many_heights() {
    for ease in [GradientEase::Linear, GradientEase::Smoothstep] {
        for h in [2u32, 3, 7, 64, 500, 1024, 1920] {
            let first = gradient_row_color(PURPLE, VIOLET, 0, h, ease);
            assert_eq!(first, PURPLE, "row 0 for h={h} {ease:?}");

            let last = gradient_row_color(PURPLE, VIOLET, h - 1, h, ease);
            assert!(within_one(last.r, VIOLET.r), "h={h} {ease:?}: {last:?}");
            assert!(within_one(last.g, VIOLET.g), "h={h} {ease:?}: {last:?}");
            assert!(within_one(last.b, VIOLET.b), "h={h} {ease:?}: {last:?}");
        }
    }
}

#[test]
fn single_row_gradient_is_top_color() {
    assert_eq!(
        gradient_row_color(PURPLE, VIOLET, 0, 1, GradientEase::Smoothstep),
        PURPLE
    );
}

#[test]
fn smoothstep_rows_lag_linear_rows_in_first_half() {
    let h = 1024;
    let y = 200;
    let linear = gradient_row_color(PURPLE, VIOLET, y, h, GradientEase::Linear);
    let eased = gradient_row_color(PURPLE, VIOLET, y, h, GradientEase::Smoothstep);
    // Blue falls from 234 to 162; the eased curve is still closer to the top color.
    assert!(eased.b > linear.b);
}

#[test]
fn channels_move_monotonically_down_the_canvas() {
    let h = 500;
    let mut prev = gradient_row_color(PURPLE, VIOLET, 0, h, GradientEase::Smoothstep);
    for y in 1..h {
        let c = gradient_row_color(PURPLE, VIOLET, y, h, GradientEase::Smoothstep);
        assert!(c.r >= prev.r);
        assert!(c.g <= prev.g);
        assert!(c.b <= prev.b);
        prev = c;
    }
}

#[test]
fn vertical_gradient_fills_every_column_of_a_row() {
    let img = vertical_gradient(Canvas::new(16, 9), PURPLE, VIOLET, GradientEase::Linear).unwrap();
    assert_eq!(img.dimensions(), (16, 9));
    for y in 0..9 {
        let first = *img.get_pixel(0, y);
        for x in 1..16 {
            assert_eq!(*img.get_pixel(x, y), first);
        }
    }
    assert_eq!(img.get_pixel(3, 0).0, [102, 126, 234]);
    assert_eq!(img.get_pixel(3, 8).0, [118, 75, 162]);
}

#[test]
fn vertical_gradient_rejects_empty_canvas() {
    assert!(vertical_gradient(Canvas::new(0, 4), PURPLE, VIOLET, GradientEase::Linear).is_err());
}

#[test]
fn fill_rgba8_matches_row_colors() {
    let canvas = Canvas::new(3, 5);
    let mut data = vec![0u8; canvas.pixel_count() * 4];
    fill_rgba8(&mut data, canvas, PURPLE, VIOLET, GradientEase::Smoothstep);
    for y in 0..5u32 {
        let c = gradient_row_color(PURPLE, VIOLET, y, 5, GradientEase::Smoothstep);
        let i = (y as usize * 3 + 2) * 4;
        assert_eq!(&data[i..i + 4], &[c.r, c.g, c.b, 255]);
    }
}
