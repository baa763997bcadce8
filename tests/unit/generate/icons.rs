use super::*;

#[test]
fn icon_corners_follow_the_brand_gradient() {
    let img = render_icon(ICON_SIZE).unwrap();
    assert_eq!(img.dimensions(), (1024, 1024));
    assert_eq!(img.get_pixel(0, 0).0, [0x66, 0x7e, 0xea]);
    assert_eq!(img.get_pixel(1023, 1023).0, [0x76, 0x4b, 0xa2]);
}

#[test]
fn icon_mark_is_white_at_circle_centers() {
    let img = render_icon(ICON_SIZE).unwrap();
    for c in QuoteMark::icon(ICON_SIZE).centers() {
        assert_eq!(img.get_pixel(c.x as u32, c.y as u32).0, [255, 255, 255]);
    }
}

#[test]
fn adaptive_icon_is_transparent_outside_the_mark() {
    let img = render_adaptive_icon(ICON_SIZE).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(1023, 1023).0, [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(422, 472).0, [255, 255, 255, 255]);
}

#[test]
fn splash_mark_is_smaller_than_icon_mark() {
    let icon = QuoteMark::icon(ICON_SIZE).bounds();
    let splash = QuoteMark::splash(ICON_SIZE).bounds();
    assert!(splash.width() < icon.width());

    let img = render_splash_icon(ICON_SIZE).unwrap();
    // Inside the icon's left circle but outside the splash mark.
    let px = img.get_pixel(350, 472).0;
    assert_ne!(px, [255, 255, 255]);
    assert_eq!(img.get_pixel(458, 482).0, [255, 255, 255]);
}

#[test]
fn favicon_is_resized() {
    let icon = render_icon(ICON_SIZE).unwrap();
    let fav = render_favicon(&icon, FAVICON_SIZE).unwrap();
    assert_eq!(fav.dimensions(), (196, 196));
    assert!(render_favicon(&icon, 0).is_err());
}
