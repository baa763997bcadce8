use crate::foundation::{
    core::{Canvas, Rgb8},
    error::AssetResult,
    math::{lerp_u8, smoothstep},
};

/// Blend curve applied to the row parameter of a vertical gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientEase {
    #[default]
    Linear,
    Smoothstep,
}

impl GradientEase {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Smoothstep => smoothstep(t),
        }
    }
}

/// Color of row `y` in a `height`-row gradient from `top` to `bottom`.
///
/// The row parameter runs over `[0, 1]` from the first to the last row, so the first row is
/// exactly `top` and the last row is exactly `bottom`.
pub fn gradient_row_color(top: Rgb8, bottom: Rgb8, y: u32, height: u32, ease: GradientEase) -> Rgb8 {
    let t = if height <= 1 {
        0.0
    } else {
        f64::from(y.min(height - 1)) / f64::from(height - 1)
    };
    let t = ease.apply(t);
    Rgb8::new(
        lerp_u8(top.r, bottom.r, t),
        lerp_u8(top.g, bottom.g, t),
        lerp_u8(top.b, bottom.b, t),
    )
}

/// Opaque vertical gradient image.
pub fn vertical_gradient(
    canvas: Canvas,
    top: Rgb8,
    bottom: Rgb8,
    ease: GradientEase,
) -> AssetResult<image::RgbImage> {
    let canvas = canvas.validate()?;
    let mut img = image::RgbImage::new(canvas.width, canvas.height);
    for y in 0..canvas.height {
        let c = gradient_row_color(top, bottom, y, canvas.height, ease);
        let px = image::Rgb([c.r, c.g, c.b]);
        for x in 0..canvas.width {
            img.put_pixel(x, y, px);
        }
    }
    Ok(img)
}

/// Fill an RGBA8 buffer (row-major, `canvas` sized) with an opaque vertical gradient.
pub(crate) fn fill_rgba8(
    data: &mut [u8],
    canvas: Canvas,
    top: Rgb8,
    bottom: Rgb8,
    ease: GradientEase,
) {
    let row_len = canvas.width as usize * 4;
    for (y, row) in data.chunks_exact_mut(row_len).enumerate() {
        let c = gradient_row_color(top, bottom, y as u32, canvas.height, ease);
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&[c.r, c.g, c.b, 255]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/gradient.rs"]
mod tests;
