//! Procedural artwork for the DailyLift quote app.
//!
//! Everything is drawn from code, no source images:
//!
//! - the icon set ([`generate_icons`]): launcher icon, Android adaptive foreground, splash mark
//!   and favicon
//! - the store listing ([`generate_store_listing`]): phone screenshots of quote cards plus the
//!   feature graphic
//!
//! Text is shaped with the configured font files and falls back to a built-in bitmap face when
//! they are missing, so generation never depends on the host's fonts being installed.
#![forbid(unsafe_code)]

mod foundation;

/// Generator configuration loaded from JSON.
pub mod config;
pub(crate) mod draw;
/// Image generators.
pub mod generate;
/// PNG output helpers.
pub mod output;
pub(crate) mod raster;
pub(crate) mod text;

pub use crate::config::{FontConfig, GeneratorConfig};
pub use crate::draw::{button::Button, quote_mark::QuoteMark, shapes::rounded_rect_path};
pub use crate::foundation::core::{BezPath, Canvas, Point, Rect, Rgb8, Rgba8};
pub use crate::foundation::error::{AssetError, AssetResult};
pub use crate::foundation::math::smoothstep;
pub use crate::generate::icons::{IconSet, generate_icons, render_icon_set};
pub use crate::generate::store_listing::{generate_card, generate_store_listing, render_card};
pub use crate::output::{WrittenFile, write_png};
pub use crate::raster::{
    gradient::{GradientEase, gradient_row_color, vertical_gradient},
    surface::Surface,
};
pub use crate::text::{
    bitmap::BitmapFace,
    book::{FontBook, FontRole},
    font::{Face, FontSource, LoadedFont, TextEngine},
    metrics::{TextExtent, TextMetrics},
    place::{centered_in, centered_x, draw_centered},
    wrap::wrap_lines,
};
