use crate::{
    foundation::core::{BezPath, Canvas, Point, Rect, Rgb8, Rgba8},
    foundation::error::{AssetError, AssetResult},
    raster::{composite, gradient, gradient::GradientEase},
};

/// A drawable raster.
///
/// The background is a premultiplied RGBA8 buffer written directly (gradient or transparent).
/// Shapes and glyphs are queued on a `vello_cpu` context in paint order and composited over the
/// background when the surface is finished.
pub struct Surface {
    canvas: Canvas,
    background: Vec<u8>,
    ctx: vello_cpu::RenderContext,
}

impl Surface {
    /// Opaque surface filled with a vertical gradient.
    pub fn gradient(canvas: Canvas, top: Rgb8, bottom: Rgb8, ease: GradientEase) -> AssetResult<Self> {
        let mut surface = Self::transparent(canvas)?;
        gradient::fill_rgba8(&mut surface.background, canvas, top, bottom, ease);
        Ok(surface)
    }

    /// Fully transparent surface.
    pub fn transparent(canvas: Canvas) -> AssetResult<Self> {
        let canvas = canvas.validate()?;
        let (w, h) = canvas_u16(canvas)?;
        Ok(Self {
            canvas,
            background: vec![0u8; canvas.pixel_count() * 4],
            ctx: vello_cpu::RenderContext::new(w, h),
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(paint(color));
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.reset_transform();
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Context for glyph runs; the caller sets its own transform.
    pub(crate) fn glyph_ctx(&mut self) -> &mut vello_cpu::RenderContext {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        &mut self.ctx
    }

    /// Flatten and return an opaque RGB image. Fails if any pixel is not opaque.
    pub fn finish_rgb(self) -> AssetResult<image::RgbImage> {
        let canvas = self.canvas;
        let data = self.flatten()?;
        let rgb = composite::rgba_to_rgb(&data)?;
        image::RgbImage::from_raw(canvas.width, canvas.height, rgb)
            .ok_or_else(|| AssetError::render("rgb buffer does not match canvas size"))
    }

    /// Flatten and return a straight-alpha RGBA image.
    pub fn finish_rgba(self) -> AssetResult<image::RgbaImage> {
        let canvas = self.canvas;
        let mut data = self.flatten()?;
        composite::unpremultiply_in_place(&mut data);
        image::RgbaImage::from_raw(canvas.width, canvas.height, data)
            .ok_or_else(|| AssetError::render("rgba buffer does not match canvas size"))
    }

    fn flatten(mut self) -> AssetResult<Vec<u8>> {
        let (w, h) = canvas_u16(self.canvas)?;
        let mut layer = vello_cpu::Pixmap::new(w, h);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut layer);
        composite::over_in_place(&mut self.background, layer.data_as_u8_slice())?;
        Ok(self.background)
    }

    fn reset_transform(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }
}

fn canvas_u16(canvas: Canvas) -> AssetResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| AssetError::render("surface width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| AssetError::render("surface height exceeds u16"))?;
    Ok((w, h))
}

pub(crate) fn paint(color: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
