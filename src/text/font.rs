use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context as _;

use crate::{
    foundation::core::Rgba8,
    foundation::error::{AssetError, AssetResult},
    raster::surface::{Surface, paint},
    text::{
        bitmap::BitmapFace,
        metrics::{TextExtent, TextMetrics},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Where a face's glyphs come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Builtin => f.write_str("builtin bitmap"),
        }
    }
}

/// Font file bytes plus the family name Parley registered them under.
pub struct LoadedFont {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("path", &self.path)
            .field("font_bytes_len", &self.bytes.len())
            .field("family", &self.family)
            .finish()
    }
}

#[derive(Clone, Debug)]
enum FaceKind {
    Outline(Arc<LoadedFont>),
    Bitmap(BitmapFace),
}

/// A font at a fixed pixel size.
#[derive(Clone, Debug)]
pub struct Face {
    kind: FaceKind,
    size_px: f32,
}

impl Face {
    pub fn builtin(size_px: f32) -> Self {
        Self {
            kind: FaceKind::Bitmap(BitmapFace::new(size_px)),
            size_px,
        }
    }

    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.kind, FaceKind::Bitmap(_))
    }

    pub fn source(&self) -> FontSource {
        match &self.kind {
            FaceKind::Outline(font) => FontSource::File(font.path.clone()),
            FaceKind::Bitmap(_) => FontSource::Builtin,
        }
    }

    pub fn family(&self) -> Option<&str> {
        match &self.kind {
            FaceKind::Outline(font) => Some(font.family.as_str()),
            FaceKind::Bitmap(_) => None,
        }
    }

    pub fn font_bytes(&self) -> Option<&[u8]> {
        match &self.kind {
            FaceKind::Outline(font) => Some(font.bytes.as_slice()),
            FaceKind::Bitmap(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
struct Registered {
    family: String,
    weight: parley::style::FontWeight,
    style: parley::style::FontStyle,
}

/// Stateful helper that loads fonts, measures and draws single-line text.
///
/// Outline faces are shaped with Parley and drawn as glyph runs; the builtin face is drawn as
/// filled cells. A face loaded by one engine can be used with another: the font bytes are
/// registered again on first use.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    registered: HashMap<PathBuf, Registered>,
    loaded: HashMap<PathBuf, Arc<LoadedFont>>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
            loaded: HashMap::new(),
        }
    }

    /// Load `path` at `size_px`, falling back to the builtin face when the file is missing,
    /// unreadable or not a usable font.
    pub fn load_face(&mut self, path: &Path, size_px: f32) -> Face {
        match self.try_load(path) {
            Ok(font) => Face {
                kind: FaceKind::Outline(font),
                size_px,
            },
            Err(err) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "font unavailable, using builtin bitmap face"
                );
                Face::builtin(size_px)
            }
        }
    }

    /// Load a font file without falling back.
    pub fn try_load(&mut self, path: &Path) -> AssetResult<Arc<LoadedFont>> {
        if let Some(font) = self.loaded.get(path) {
            return Ok(font.clone());
        }

        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let registered = self.register(path, &bytes)?;
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.clone()), 0);
        let font = Arc::new(LoadedFont {
            path: path.to_path_buf(),
            bytes: Arc::new(bytes),
            family: registered.family,
            data,
        });
        tracing::debug!(path = %path.display(), family = %font.family, "loaded font");
        self.loaded.insert(path.to_path_buf(), font.clone());
        Ok(font)
    }

    fn register(&mut self, path: &Path, bytes: &[u8]) -> AssetResult<Registered> {
        if let Some(r) = self.registered.get(path) {
            return Ok(r.clone());
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let (family_id, infos) = families.first().ok_or_else(|| {
            AssetError::font(format!("no font families in '{}'", path.display()))
        })?;
        let info = infos
            .first()
            .ok_or_else(|| AssetError::font(format!("no faces in '{}'", path.display())))?;

        let family = self
            .font_ctx
            .collection
            .family_name(*family_id)
            .ok_or_else(|| AssetError::font("registered font family has no name"))?
            .to_string();

        let registered = Registered {
            family,
            weight: info.weight(),
            style: info.style(),
        };
        self.registered
            .insert(path.to_path_buf(), registered.clone());
        Ok(registered)
    }

    fn layout(
        &mut self,
        font: &LoadedFont,
        size_px: f32,
        text: &str,
        brush: TextBrushRgba8,
    ) -> AssetResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(AssetError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let style = self.register(&font.path, &font.bytes)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(style.family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontWeight(style.weight));
        builder.push_default(parley::style::StyleProperty::FontStyle(style.style));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Measure one line of text.
    pub fn measure(&mut self, face: &Face, text: &str) -> TextExtent {
        match &face.kind {
            FaceKind::Bitmap(bitmap) => bitmap.extent(text),
            FaceKind::Outline(font) => {
                match self.layout(font, face.size_px, text, TextBrushRgba8::default()) {
                    Ok(layout) => TextExtent::from_f32(layout.width(), layout.height()),
                    Err(err) => {
                        tracing::debug!(error = %err, "text layout failed, measuring as builtin");
                        BitmapFace::new(face.size_px).extent(text)
                    }
                }
            }
        }
    }

    /// Draw one line of text with its top-left corner at `(x, y)`.
    pub fn draw(
        &mut self,
        surface: &mut Surface,
        face: &Face,
        text: &str,
        (x, y): (i32, i32),
        color: Rgba8,
    ) -> AssetResult<()> {
        let font = match &face.kind {
            FaceKind::Bitmap(bitmap) => {
                bitmap.draw(surface, text, f64::from(x), f64::from(y), color);
                return Ok(());
            }
            FaceKind::Outline(font) => font.clone(),
        };

        let layout = self.layout(&font, face.size_px, text, color.into())?;
        let ctx = surface.glyph_ctx();
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            f64::from(x),
            f64::from(y),
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(paint(Rgba8::new(brush.r, brush.g, brush.b, brush.a)));

                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    /// Bind a face so it can be handed to anything generic over [`TextMetrics`].
    pub fn metrics<'a>(&'a mut self, face: &'a Face) -> FaceMetrics<'a> {
        FaceMetrics { engine: self, face }
    }
}

/// A face bound to the engine that measures it.
pub struct FaceMetrics<'a> {
    engine: &'a mut TextEngine,
    face: &'a Face,
}

impl TextMetrics for FaceMetrics<'_> {
    fn measure(&mut self, text: &str) -> TextExtent {
        self.engine.measure(self.face, text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
