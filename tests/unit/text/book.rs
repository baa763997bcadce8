use super::*;
use std::path::PathBuf;

fn missing_fonts() -> FontConfig {
    FontConfig {
        dir: PathBuf::from("/nonexistent/fonts"),
        ..FontConfig::default()
    }
}

#[test]
fn screenshot_roles_fall_back_to_builtin_sizes() {
    let mut engine = TextEngine::new();
    let book = FontBook::screenshot(&mut engine, &missing_fonts());
    let sizes: Vec<f32> = book.iter().map(|(_, f)| f.size_px()).collect();
    // The mark falls back to the quote face when the serif font is missing.
    assert_eq!(sizes, vec![64.0, 32.0, 48.0, 36.0, 48.0]);
    assert!(book.iter().all(|(_, f)| f.is_builtin()));
}

#[test]
fn feature_graphic_mark_falls_back_to_title_face() {
    let mut engine = TextEngine::new();
    let book = FontBook::feature_graphic(&mut engine, &missing_fonts());
    assert_eq!(book.face(FontRole::Title).size_px(), 72.0);
    assert_eq!(book.face(FontRole::Subtitle).size_px(), 36.0);
    assert_eq!(book.face(FontRole::Mark).size_px(), 72.0);
}

#[test]
fn role_names_are_stable() {
    let names: Vec<&str> = FontRole::ALL.iter().map(|r| r.name()).collect();
    assert_eq!(names, ["title", "subtitle", "quote", "author", "mark"]);
}
