use crate::{
    draw::shapes::{circle_path, polygon_path},
    foundation::core::{BezPath, Point, Rect, Rgba8},
    raster::surface::Surface,
};

/// Teardrop tail vertices relative to a circle center, in units of the radius.
const TAIL: [(f64, f64); 3] = [(-0.3, 0.5), (-0.8, 2.2), (0.1, 1.2)];

/// The app's logo: two filled circles, each with a downward tail, side by side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuoteMark {
    pub center: Point,
    pub radius: f64,
    pub spacing: f64,
}

impl QuoteMark {
    pub const ICON_RADIUS: f64 = 90.0;
    pub const ICON_SPACING: f64 = 180.0;
    pub const SPLASH_SCALE: f64 = 0.6;

    /// Full-size mark for a `size`×`size` icon.
    pub fn icon(size: u32) -> Self {
        let half = f64::from(size / 2);
        Self {
            center: Point::new(half, half - 40.0),
            radius: Self::ICON_RADIUS,
            spacing: Self::ICON_SPACING,
        }
    }

    /// Smaller mark for the splash screen.
    pub fn splash(size: u32) -> Self {
        let half = f64::from(size / 2);
        Self {
            center: Point::new(half, half - 30.0),
            ..Self::icon(size)
        }
        .scaled(Self::SPLASH_SCALE)
    }

    /// Scale radius and spacing to whole pixels, keeping the center.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            radius: (self.radius * factor).trunc(),
            spacing: (self.spacing * factor).trunc(),
            ..self
        }
    }

    /// Centers of the left and right circles.
    pub fn centers(&self) -> [Point; 2] {
        let dx = self.spacing / 2.0;
        [
            Point::new(self.center.x - dx, self.center.y),
            Point::new(self.center.x + dx, self.center.y),
        ]
    }

    pub fn tail(&self, circle: Point) -> [Point; 3] {
        TAIL.map(|(dx, dy)| Point::new(circle.x + dx * self.radius, circle.y + dy * self.radius))
    }

    /// Circle and tail outlines, in paint order.
    pub fn paths(&self) -> Vec<BezPath> {
        self.centers()
            .into_iter()
            .flat_map(|c| [circle_path(c, self.radius), polygon_path(&self.tail(c))])
            .collect()
    }

    pub fn draw(&self, surface: &mut Surface, color: Rgba8) {
        for path in self.paths() {
            surface.fill_path(&path, color);
        }
    }

    /// Bounding box of every circle and tail vertex.
    pub fn bounds(&self) -> Rect {
        let mut out: Option<Rect> = None;
        for c in self.centers() {
            let circle = Rect::from_center_size(c, (self.radius * 2.0, self.radius * 2.0));
            let r = self
                .tail(c)
                .iter()
                .fold(circle, |acc, &p| acc.union_pt(p));
            out = Some(out.map_or(r, |o| o.union(r)));
        }
        out.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/quote_mark.rs"]
mod tests;
