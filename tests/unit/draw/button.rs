use super::*;
use crate::foundation::core::{Canvas, Rgb8};

fn share_button() -> Button {
    Button {
        rect: Rect::new(60.0, 60.0, 340.0, 140.0),
        radius: 40.0,
        fill: Rgb8::BLACK.with_alpha(255),
        outline: Rgb8::WHITE.with_alpha(255),
        outline_width: 2.0,
        label: "Share".to_string(),
        label_color: Rgb8::WHITE.opaque(),
    }
}

#[test]
fn label_is_centered_in_the_box() {
    let mut engine = TextEngine::new();
    let face = Face::builtin(32.0);
    let mut surface = Surface::transparent(Canvas::new(400, 200)).unwrap();
    let origin = share_button().draw(&mut engine, &mut surface, &face).unwrap();
    // Builtin face at 32 px: cell 4, "Share" is 116x28.
    assert_eq!(origin, (142, 86));
}

#[test]
fn fill_stays_inside_rounded_corners() {
    let mut engine = TextEngine::new();
    let face = Face::builtin(32.0);
    let mut surface = Surface::transparent(Canvas::new(400, 200)).unwrap();
    share_button().draw(&mut engine, &mut surface, &face).unwrap();
    let img = surface.finish_rgba().unwrap();

    assert_eq!(img.get_pixel(61, 61).0[3], 0, "corner outside the radius");
    assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(100, 100).0, [0, 0, 0, 255], "body fill");
    // The outline sits on the edge of the box.
    let edge = img.get_pixel(200, 60).0;
    assert!(edge[0] > 0 && edge[3] > 0, "{edge:?}");
}

#[test]
fn invalid_radius_is_reported() {
    let mut engine = TextEngine::new();
    let face = Face::builtin(32.0);
    let mut surface = Surface::transparent(Canvas::new(400, 200)).unwrap();
    let button = Button {
        radius: 50.0,
        ..share_button()
    };
    assert!(button.draw(&mut engine, &mut surface, &face).is_err());
}
