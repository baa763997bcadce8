use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::{
    foundation::error::{AssetError, AssetResult},
    generate::catalog::{Palette, Quote, showcase_palettes, showcase_quotes},
};

/// Font files used by the store-listing artwork.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    pub dir: PathBuf,
    pub bold: String,
    pub regular: String,
    pub oblique: String,
    pub serif: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("/usr/share/fonts/truetype/dejavu"),
            bold: "DejaVuSans-Bold.ttf".to_string(),
            regular: "DejaVuSans.ttf".to_string(),
            oblique: "DejaVuSans-Oblique.ttf".to_string(),
            serif: "DejaVuSerif.ttf".to_string(),
        }
    }
}

impl FontConfig {
    pub fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

/// Generator settings. Every field has a default, so an empty JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub fonts: FontConfig,
    /// Output directory of the icon set.
    pub icons_dir: PathBuf,
    /// Output directory of `screenshot_N.png`.
    pub screenshots_dir: PathBuf,
    /// Output directory of `feature_graphic.png`.
    pub listing_dir: PathBuf,
    /// Screenshot `n` (1-based) uses palette `(n - 1) % palettes.len()`.
    pub palettes: Vec<Palette>,
    /// One screenshot per quote, in order.
    pub showcase: Vec<Quote>,
    /// Render screenshots on a rayon pool.
    pub parallel: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fonts: FontConfig::default(),
            icons_dir: PathBuf::from("assets"),
            screenshots_dir: PathBuf::from("store-listing/screenshots"),
            listing_dir: PathBuf::from("store-listing"),
            palettes: showcase_palettes(),
            showcase: showcase_quotes(),
            parallel: false,
        }
    }
}

impl GeneratorConfig {
    pub fn from_path(path: &Path) -> AssetResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| AssetError::config(format!("parse '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> AssetResult<Self> {
        let cfg: Self =
            serde_json::from_str(s).map_err(|e| AssetError::config(format!("parse config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AssetResult<()> {
        if self.palettes.is_empty() {
            return Err(AssetError::config("palettes must not be empty"));
        }
        if self.showcase.is_empty() {
            return Err(AssetError::config("showcase must contain at least one quote"));
        }
        for (i, p) in self.palettes.iter().enumerate() {
            p.colors()
                .map_err(|e| AssetError::config(format!("palette {i}: {e}")))?;
        }
        for (i, q) in self.showcase.iter().enumerate() {
            if q.text.trim().is_empty() {
                return Err(AssetError::config(format!("showcase quote {i} has no text")));
            }
        }
        Ok(())
    }

    /// Place every output directory under `root`.
    pub fn with_output_root(mut self, root: &Path) -> Self {
        self.icons_dir = root.join("assets");
        self.screenshots_dir = root.join("store-listing").join("screenshots");
        self.listing_dir = root.join("store-listing");
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
