//! The app icon set: launcher icon, Android adaptive foreground, splash mark and favicon.

use std::path::Path;

use crate::{
    draw::quote_mark::QuoteMark,
    foundation::{
        core::{Canvas, Rgb8},
        error::AssetResult,
    },
    output::{WrittenFile, write_png},
    raster::{gradient::GradientEase, surface::Surface},
};

pub const ICON_SIZE: u32 = 1024;
pub const FAVICON_SIZE: u32 = 196;

pub const ICON_FILE: &str = "icon.png";
pub const ADAPTIVE_ICON_FILE: &str = "adaptive-icon.png";
pub const SPLASH_ICON_FILE: &str = "splash-icon.png";
pub const FAVICON_FILE: &str = "favicon.png";

/// Brand gradient shared by the icons and the feature graphic.
pub const BRAND_TOP: Rgb8 = Rgb8::new(0x66, 0x7e, 0xea);
pub const BRAND_BOTTOM: Rgb8 = Rgb8::new(0x76, 0x4b, 0xa2);

fn brand_surface(size: u32) -> AssetResult<Surface> {
    Surface::gradient(
        Canvas::square(size),
        BRAND_TOP,
        BRAND_BOTTOM,
        GradientEase::Smoothstep,
    )
}

pub fn render_icon(size: u32) -> AssetResult<image::RgbImage> {
    let mut surface = brand_surface(size)?;
    QuoteMark::icon(size).draw(&mut surface, Rgb8::WHITE.opaque());
    surface.finish_rgb()
}

pub fn render_adaptive_icon(size: u32) -> AssetResult<image::RgbaImage> {
    let mut surface = Surface::transparent(Canvas::square(size))?;
    QuoteMark::icon(size).draw(&mut surface, Rgb8::WHITE.opaque());
    surface.finish_rgba()
}

pub fn render_splash_icon(size: u32) -> AssetResult<image::RgbImage> {
    let mut surface = brand_surface(size)?;
    QuoteMark::splash(size).draw(&mut surface, Rgb8::WHITE.opaque());
    surface.finish_rgb()
}

/// Downscale a rendered icon with a Lanczos3 filter.
pub fn render_favicon(icon: &image::RgbImage, size: u32) -> AssetResult<image::RgbImage> {
    Canvas::square(size).validate()?;
    Ok(image::imageops::resize(
        icon,
        size,
        size,
        image::imageops::FilterType::Lanczos3,
    ))
}

/// All four icon images, in output order.
pub struct IconSet {
    pub icon: image::RgbImage,
    pub adaptive: image::RgbaImage,
    pub splash: image::RgbImage,
    pub favicon: image::RgbImage,
}

pub fn render_icon_set() -> AssetResult<IconSet> {
    let icon = render_icon(ICON_SIZE)?;
    let favicon = render_favicon(&icon, FAVICON_SIZE)?;
    Ok(IconSet {
        adaptive: render_adaptive_icon(ICON_SIZE)?,
        splash: render_splash_icon(ICON_SIZE)?,
        icon,
        favicon,
    })
}

/// Render the icon set and write it to `out_dir`.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display()))]
pub fn generate_icons(out_dir: &Path) -> AssetResult<Vec<WrittenFile>> {
    let set = render_icon_set()?;
    let files = [
        (ICON_FILE, image::DynamicImage::ImageRgb8(set.icon)),
        (ADAPTIVE_ICON_FILE, image::DynamicImage::ImageRgba8(set.adaptive)),
        (SPLASH_ICON_FILE, image::DynamicImage::ImageRgb8(set.splash)),
        (FAVICON_FILE, image::DynamicImage::ImageRgb8(set.favicon)),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, img) in &files {
        written.push(write_png(img, &out_dir.join(name))?);
    }
    tracing::info!(count = written.len(), "icon set complete");
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/generate/icons.rs"]
mod tests;
