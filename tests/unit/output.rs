use super::*;

fn unique_dir(tag: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "dailylift_output_{tag}_{}_{nanos}",
        std::process::id()
    ))
}

#[test]
fn write_png_creates_missing_parents() {
    let dir = unique_dir("parents");
    let path = dir.join("a").join("b").join("px.png");
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        3,
        2,
        image::Rgb([1, 2, 3]),
    ));

    let written = write_png(&img, &path).unwrap();
    assert_eq!(written.path, path);
    assert_eq!((written.width, written.height), (3, 2));

    let back = image::open(&path).unwrap();
    assert_eq!(back.color(), image::ColorType::Rgb8);
    assert_eq!(back.to_rgb8().get_pixel(2, 1).0, [1, 2, 3]);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn bare_file_name_needs_no_parent() {
    assert!(ensure_parent_dir(Path::new("icon.png")).is_ok());
}

#[test]
fn unwritable_target_is_an_error() {
    let dir = unique_dir("blocked");
    std::fs::create_dir_all(&dir).unwrap();
    // A regular file where a directory is expected.
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"x").unwrap();

    let img = image::DynamicImage::ImageRgb8(image::RgbImage::new(1, 1));
    assert!(write_png(&img, &blocker.join("out.png")).is_err());
    std::fs::remove_dir_all(&dir).unwrap();
}
