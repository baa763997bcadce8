use crate::{
    draw::shapes::rounded_rect_path,
    foundation::{
        core::{Rect, Rgba8},
        error::AssetResult,
    },
    raster::surface::Surface,
    text::{
        font::{Face, TextEngine},
        place::centered_in,
    },
};

/// Pill-shaped button: rounded fill, outline and a centered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub radius: f64,
    pub fill: Rgba8,
    pub outline: Rgba8,
    pub outline_width: f64,
    pub label: String,
    pub label_color: Rgba8,
}

impl Button {
    /// Draw the button; returns the label's top-left corner.
    pub fn draw(
        &self,
        engine: &mut TextEngine,
        surface: &mut Surface,
        face: &Face,
    ) -> AssetResult<(i32, i32)> {
        let body = rounded_rect_path(self.rect, self.radius)?;
        surface.fill_path(&body, self.fill);

        if self.outline_width > 0.0 {
            // Stroke centered on an inset outline so it stays inside the box.
            let half = self.outline_width / 2.0;
            let inset = self.rect.inset(-half);
            let outline = rounded_rect_path(inset, (self.radius - half).max(0.0))?;
            surface.stroke_path(&outline, self.outline_width, self.outline);
        }

        let extent = engine.measure(face, &self.label);
        let origin = centered_in(self.rect, extent);
        engine.draw(surface, face, &self.label, origin, self.label_color)?;
        Ok(origin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/button.rs"]
mod tests;
