use crate::{
    foundation::core::{Rect, Rgba8},
    foundation::error::AssetResult,
    raster::surface::Surface,
    text::{
        font::{Face, TextEngine},
        metrics::TextExtent,
    },
};

/// Left offset that centers `text_width` in `container_width`, truncated toward zero.
pub fn centered_x(container_width: i32, text_width: i32) -> i32 {
    (container_width - text_width) / 2
}

/// Top-left position that centers `extent` inside `container` on both axes.
pub fn centered_in(container: Rect, extent: TextExtent) -> (i32, i32) {
    let x0 = container.x0 as i32;
    let y0 = container.y0 as i32;
    (
        x0 + centered_x(container.width() as i32, extent.width),
        y0 + centered_x(container.height() as i32, extent.height),
    )
}

/// Draw `text` horizontally centered on the surface with its top at `y`.
pub fn draw_centered(
    engine: &mut TextEngine,
    surface: &mut Surface,
    face: &Face,
    text: &str,
    y: i32,
    color: Rgba8,
) -> AssetResult<TextExtent> {
    let extent = engine.measure(face, text);
    let x = centered_x(surface.canvas().width as i32, extent.width);
    engine.draw(surface, face, text, (x, y), color)?;
    Ok(extent)
}

#[cfg(test)]
#[path = "../../tests/unit/text/place.rs"]
mod tests;
