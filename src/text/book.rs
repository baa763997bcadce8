use crate::{
    config::FontConfig,
    text::font::{Face, TextEngine},
};

/// Typographic roles used by the store-listing artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Subtitle,
    Quote,
    Author,
    Mark,
}

impl FontRole {
    pub const ALL: [FontRole; 5] = [
        FontRole::Title,
        FontRole::Subtitle,
        FontRole::Quote,
        FontRole::Author,
        FontRole::Mark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Subtitle => "subtitle",
            Self::Quote => "quote",
            Self::Author => "author",
            Self::Mark => "mark",
        }
    }
}

/// One face per role, resolved against the configured font files.
#[derive(Clone, Debug)]
pub struct FontBook {
    title: Face,
    subtitle: Face,
    quote: Face,
    author: Face,
    mark: Face,
}

impl FontBook {
    /// Faces for a 1080×1920 screenshot.
    pub fn screenshot(engine: &mut TextEngine, fonts: &FontConfig) -> Self {
        let title = engine.load_face(&fonts.path(&fonts.bold), 64.0);
        let subtitle = engine.load_face(&fonts.path(&fonts.regular), 32.0);
        let quote = engine.load_face(&fonts.path(&fonts.regular), 48.0);
        let author = engine.load_face(&fonts.path(&fonts.oblique), 36.0);
        let mark = load_or(engine, fonts, 200.0, &quote);
        Self {
            title,
            subtitle,
            quote,
            author,
            mark,
        }
    }

    /// Faces for the 1024×500 feature graphic.
    pub fn feature_graphic(engine: &mut TextEngine, fonts: &FontConfig) -> Self {
        let title = engine.load_face(&fonts.path(&fonts.bold), 72.0);
        let subtitle = engine.load_face(&fonts.path(&fonts.regular), 36.0);
        let mark = load_or(engine, fonts, 120.0, &title);
        Self {
            quote: subtitle.clone(),
            author: subtitle.clone(),
            title,
            subtitle,
            mark,
        }
    }

    pub fn face(&self, role: FontRole) -> &Face {
        match role {
            FontRole::Title => &self.title,
            FontRole::Subtitle => &self.subtitle,
            FontRole::Quote => &self.quote,
            FontRole::Author => &self.author,
            FontRole::Mark => &self.mark,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &Face)> {
        FontRole::ALL.into_iter().map(|role| (role, self.face(role)))
    }
}

// The serif mark falls back to another outline face before the bitmap face.
fn load_or(engine: &mut TextEngine, fonts: &FontConfig, size_px: f32, fallback: &Face) -> Face {
    let face = engine.load_face(&fonts.path(&fonts.serif), size_px);
    if face.is_builtin() {
        fallback.clone()
    } else {
        face
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/book.rs"]
mod tests;
