use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::AssetResult;

/// A PNG written to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub fn ensure_dir(dir: &Path) -> AssetResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> AssetResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Encode `img` as PNG at `path`, replacing any existing file.
pub fn write_png(img: &image::DynamicImage, path: &Path) -> AssetResult<WrittenFile> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "wrote png"
    );
    Ok(WrittenFile {
        path: path.to_path_buf(),
        width: img.width(),
        height: img.height(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/output.rs"]
mod tests;
