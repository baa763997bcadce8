use super::*;
use crate::foundation::core::Canvas;

#[test]
fn icon_geometry_for_1024() {
    let mark = QuoteMark::icon(1024);
    assert_eq!(mark.center, Point::new(512.0, 472.0));
    assert_eq!(mark.centers(), [Point::new(422.0, 472.0), Point::new(602.0, 472.0)]);
    let expected = [
        Point::new(-27.0, 45.0),
        Point::new(-72.0, 198.0),
        Point::new(9.0, 108.0),
    ];
    for (got, want) in mark.tail(Point::new(0.0, 0.0)).into_iter().zip(expected) {
        assert_close(got, want);
    }
}

fn assert_close(got: Point, want: Point) {
    assert!(
        (got.x - want.x).abs() < 1e-9 && (got.y - want.y).abs() < 1e-9,
        "{got:?} != {want:?}"
    );
}

#[test]
fn tail_scales_with_radius_and_follows_circle() {
    let mark = QuoteMark::splash(1024);
    let [left, right] = mark.centers();
    // 2.2 * 54 is not exact in f64.
    assert_close(mark.tail(left)[1], Point::new(left.x - 43.2, left.y + 118.8));
    assert_close(mark.tail(right)[2], Point::new(right.x + 5.4, right.y + 64.8));
}

#[test]
fn splash_is_truncated_to_whole_pixels() {
    let mark = QuoteMark::splash(1024);
    assert_eq!(mark.center, Point::new(512.0, 482.0));
    assert_eq!(mark.radius, 54.0);
    assert_eq!(mark.spacing, 108.0);

    let odd = QuoteMark::icon(1024).scaled(0.55);
    assert_eq!(odd.radius, 49.0);
    assert_eq!(odd.spacing, 99.0);
}

#[test]
fn mark_stays_inside_icon_canvas() {
    for mark in [QuoteMark::icon(1024), QuoteMark::splash(1024)] {
        let b = mark.bounds();
        assert!(b.x0 > 0.0 && b.y0 > 0.0, "{b:?}");
        assert!(b.x1 < 1024.0 && b.y1 < 1024.0, "{b:?}");
    }
    assert_eq!(QuoteMark::icon(1024).paths().len(), 4);
}

#[test]
fn draws_white_circles_on_transparent_surface() {
    let mark = QuoteMark::icon(1024);
    let mut surface = Surface::transparent(Canvas::square(1024)).unwrap();
    mark.draw(&mut surface, Rgba8::new(255, 255, 255, 255));
    let img = surface.finish_rgba().unwrap();

    assert_eq!(img.get_pixel(422, 472).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(602, 472).0, [255, 255, 255, 255]);
    // Inside the left tail, below its circle.
    assert_eq!(img.get_pixel(395, 600).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(512, 380).0, [0, 0, 0, 0], "gap above the touching circles");
    assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 0]);
}
