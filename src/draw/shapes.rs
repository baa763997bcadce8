use crate::foundation::{
    core::{BezPath, Point, Rect},
    error::{AssetError, AssetResult},
};

const TOLERANCE: f64 = 0.1;

/// Outline of `rect` with quarter-circle corners of `radius`.
///
/// `radius` must lie in `0..=min(width, height) / 2`.
pub fn rounded_rect_path(rect: Rect, radius: f64) -> AssetResult<BezPath> {
    let rect = rect.abs();
    let max = rect.width().min(rect.height()) / 2.0;
    if !radius.is_finite() || radius < 0.0 || radius > max {
        return Err(AssetError::validation(format!(
            "rounded rect radius {radius} outside 0..={max} for {}x{} box",
            rect.width(),
            rect.height()
        )));
    }
    Ok(collect(kurbo::RoundedRect::from_rect(rect, radius)))
}

pub fn circle_path(center: Point, radius: f64) -> BezPath {
    collect(kurbo::Circle::new(center, radius))
}

pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut it = points.iter();
    if let Some(&first) = it.next() {
        p.move_to(first);
        for &pt in it {
            p.line_to(pt);
        }
        p.close_path();
    }
    p
}

fn collect(shape: impl kurbo::Shape) -> BezPath {
    let mut p = BezPath::new();
    for el in shape.path_elements(TOLERANCE) {
        p.push(el);
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/draw/shapes.rs"]
mod tests;
