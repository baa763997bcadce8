//! Play Store listing artwork: phone screenshots and the feature graphic.

use std::path::Path;

use rayon::prelude::*;

use crate::{
    config::{FontConfig, GeneratorConfig},
    draw::button::Button,
    foundation::{
        core::{Canvas, Rect, Rgb8, Rgba8},
        error::{AssetError, AssetResult},
    },
    generate::{
        catalog::{Palette, Quote, app_palettes, app_quotes},
        icons::{BRAND_BOTTOM, BRAND_TOP},
    },
    output::{WrittenFile, write_png},
    raster::{gradient::GradientEase, surface::Surface},
    text::{
        book::{FontBook, FontRole},
        font::TextEngine,
        place::draw_centered,
        wrap::wrap_lines,
    },
};

pub const SCREENSHOT_CANVAS: Canvas = Canvas::new(1080, 1920);
pub const FEATURE_GRAPHIC_CANVAS: Canvas = Canvas::new(1024, 500);
pub const FEATURE_GRAPHIC_FILE: &str = "feature_graphic.png";

pub const APP_TITLE: &str = "DailyLift";
pub const TAGLINE: &str = "Your Daily Dose of Motivation";
const FOOTER: &str = "Tap for inspiration \u{2728}";
const MARK: &str = "\"";

const TITLE_Y: i32 = 200;
const SUBTITLE_Y: i32 = 280;
const MARK_Y: i32 = 500;
const QUOTE_Y: i32 = 750;
const QUOTE_LINE_HEIGHT: i32 = 70;
const QUOTE_SIDE_MARGIN: i32 = 120;
const AUTHOR_GAP: i32 = 40;
const BUTTON_Y: f64 = 1500.0;
const BUTTON_W: f64 = 280.0;
const BUTTON_H: f64 = 80.0;
const BUTTON_GAP: f64 = 20.0;
const FOOTER_Y: i32 = 1700;

const FEATURE_TITLE_Y: i32 = 160;
const FEATURE_TAGLINE_Y: i32 = 260;
const FEATURE_MARKS: [(i32, i32); 2] = [(100, 100), (824, 250)];

const WHITE: Rgba8 = Rgb8::WHITE.opaque();
const WHITE_80: Rgba8 = Rgb8::WHITE.with_alpha(204);

pub fn screenshot_file_name(index: usize) -> String {
    format!("screenshot_{index}.png")
}

/// Palette for the 1-based screenshot `index`, cycling through `palettes`.
pub fn screenshot_palette(palettes: &[Palette], index: usize) -> AssetResult<&Palette> {
    if palettes.is_empty() {
        return Err(AssetError::validation("no palettes to choose from"));
    }
    if index == 0 {
        return Err(AssetError::validation("screenshot index is 1-based"));
    }
    Ok(&palettes[(index - 1) % palettes.len()])
}

/// Lay out one quote card on a 1080×1920 phone screen.
pub fn render_screenshot(
    engine: &mut TextEngine,
    book: &FontBook,
    quote: &Quote,
    palette: &Palette,
) -> AssetResult<image::RgbImage> {
    let (top, bottom) = palette.colors()?;
    let mut surface = Surface::gradient(SCREENSHOT_CANVAS, top, bottom, GradientEase::Linear)?;
    let width = SCREENSHOT_CANVAS.width as i32;

    let title = book.face(FontRole::Title);
    let subtitle = book.face(FontRole::Subtitle);
    draw_centered(engine, &mut surface, title, APP_TITLE, TITLE_Y, WHITE)?;
    draw_centered(engine, &mut surface, subtitle, TAGLINE, SUBTITLE_Y, WHITE_80)?;
    draw_centered(
        engine,
        &mut surface,
        book.face(FontRole::Mark),
        MARK,
        MARK_Y,
        Rgb8::WHITE.with_alpha(80),
    )?;

    let body = book.face(FontRole::Quote);
    let lines = wrap_lines(
        &quote.text,
        &mut engine.metrics(body),
        width - QUOTE_SIDE_MARGIN,
    );
    tracing::debug!(lines = lines.len(), author = %quote.author, "wrapped quote");
    let mut y = QUOTE_Y;
    for line in &lines {
        draw_centered(engine, &mut surface, body, line, y, WHITE)?;
        y += QUOTE_LINE_HEIGHT;
    }
    draw_centered(
        engine,
        &mut surface,
        book.face(FontRole::Author),
        &quote.attribution(),
        y + AUTHOR_GAP,
        WHITE_80,
    )?;

    let center = f64::from(width / 2);
    for (x, label, fill) in [
        (center - BUTTON_W - BUTTON_GAP, "New Quote", Rgb8::WHITE.with_alpha(60)),
        (center + BUTTON_GAP, "Share", Rgb8::BLACK.with_alpha(50)),
    ] {
        let button = Button {
            rect: Rect::new(x, BUTTON_Y, x + BUTTON_W, BUTTON_Y + BUTTON_H),
            radius: BUTTON_H / 2.0,
            fill,
            outline: Rgb8::WHITE.with_alpha(80),
            outline_width: 2.0,
            label: label.to_string(),
            label_color: WHITE,
        };
        button.draw(engine, &mut surface, subtitle)?;
    }

    draw_centered(engine, &mut surface, subtitle, FOOTER, FOOTER_Y, WHITE_80)?;
    surface.finish_rgb()
}

/// The 1024×500 banner shown at the top of the listing.
pub fn render_feature_graphic(
    engine: &mut TextEngine,
    book: &FontBook,
) -> AssetResult<image::RgbImage> {
    let mut surface = Surface::gradient(
        FEATURE_GRAPHIC_CANVAS,
        BRAND_TOP,
        BRAND_BOTTOM,
        GradientEase::Linear,
    )?;

    draw_centered(
        engine,
        &mut surface,
        book.face(FontRole::Title),
        APP_TITLE,
        FEATURE_TITLE_Y,
        WHITE,
    )?;
    draw_centered(
        engine,
        &mut surface,
        book.face(FontRole::Subtitle),
        TAGLINE,
        FEATURE_TAGLINE_Y,
        WHITE,
    )?;
    let mark = book.face(FontRole::Mark);
    for origin in FEATURE_MARKS {
        engine.draw(&mut surface, mark, MARK, origin, Rgb8::WHITE.with_alpha(50))?;
    }
    surface.finish_rgb()
}

fn write_screenshot(
    engine: &mut TextEngine,
    book: &FontBook,
    cfg: &GeneratorConfig,
    index: usize,
    quote: &Quote,
) -> AssetResult<WrittenFile> {
    let palette = screenshot_palette(&cfg.palettes, index)?;
    let img = render_screenshot(engine, book, quote, palette)?;
    write_png(
        &image::DynamicImage::ImageRgb8(img),
        &cfg.screenshots_dir.join(screenshot_file_name(index)),
    )
}

/// Write `screenshot_1.png..` for every showcase quote, then the feature graphic.
#[tracing::instrument(skip_all, fields(screenshots = cfg.showcase.len(), parallel = cfg.parallel))]
pub fn generate_store_listing(cfg: &GeneratorConfig) -> AssetResult<Vec<WrittenFile>> {
    cfg.validate()?;

    let mut written = if cfg.parallel {
        // Text engines are not shareable; each task shapes with its own.
        cfg.showcase
            .par_iter()
            .enumerate()
            .map(|(i, quote)| {
                let mut engine = TextEngine::new();
                let book = FontBook::screenshot(&mut engine, &cfg.fonts);
                write_screenshot(&mut engine, &book, cfg, i + 1, quote)
            })
            .collect::<AssetResult<Vec<_>>>()?
    } else {
        let mut engine = TextEngine::new();
        let book = FontBook::screenshot(&mut engine, &cfg.fonts);
        cfg.showcase
            .iter()
            .enumerate()
            .map(|(i, quote)| write_screenshot(&mut engine, &book, cfg, i + 1, quote))
            .collect::<AssetResult<Vec<_>>>()?
    };

    let mut engine = TextEngine::new();
    let book = FontBook::feature_graphic(&mut engine, &cfg.fonts);
    let banner = render_feature_graphic(&mut engine, &book)?;
    written.push(write_png(
        &image::DynamicImage::ImageRgb8(banner),
        &cfg.listing_dir.join(FEATURE_GRAPHIC_FILE),
    )?);

    tracing::info!(count = written.len(), "store listing complete");
    Ok(written)
}

/// A shareable quote card: the screenshot layout for any library quote and palette.
pub fn render_card(
    fonts: &FontConfig,
    quote_index: usize,
    palette_index: usize,
) -> AssetResult<image::RgbImage> {
    let quotes = app_quotes();
    let palettes = app_palettes();
    let quote = quotes.get(quote_index).ok_or_else(|| {
        AssetError::validation(format!(
            "quote index {quote_index} out of range (0..{})",
            quotes.len()
        ))
    })?;
    let palette = palettes.get(palette_index).ok_or_else(|| {
        AssetError::validation(format!(
            "palette index {palette_index} out of range (0..{})",
            palettes.len()
        ))
    })?;

    let mut engine = TextEngine::new();
    let book = FontBook::screenshot(&mut engine, fonts);
    render_screenshot(&mut engine, &book, quote, palette)
}

#[tracing::instrument(skip(fonts, out), fields(out = %out.display()))]
pub fn generate_card(
    fonts: &FontConfig,
    quote_index: usize,
    palette_index: usize,
    out: &Path,
) -> AssetResult<WrittenFile> {
    let img = render_card(fonts, quote_index, palette_index)?;
    write_png(&image::DynamicImage::ImageRgb8(img), out)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/store_listing.rs"]
mod tests;
