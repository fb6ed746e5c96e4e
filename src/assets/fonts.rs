use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::foundation::config::{StyleSpec, default_fonts_dir};
use crate::foundation::error::{CarouselError, CarouselResult};

/// A single directory searched for font files.
///
/// There is no fallback to system fonts: a missing font is reported as
/// [`CarouselError::FontNotFound`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontDir {
    root: PathBuf,
}

impl Default for FontDir {
    fn default() -> Self {
        Self::new(default_fonts_dir())
    }
}

impl FontDir {
    /// Search `root` for fonts.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory being searched.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Return the path of the first candidate that exists as a file.
    pub fn resolve(&self, candidates: &[String]) -> CarouselResult<PathBuf> {
        for name in candidates {
            let path = self.root.join(name);
            if path.is_file() {
                tracing::debug!(font = %path.display(), "font found");
                return Ok(path);
            }
        }
        Err(CarouselError::font_not_found(candidates, &self.root))
    }

    /// Resolve and load the first existing candidate at `size_px`.
    pub fn load(&self, candidates: &[String], size_px: f32) -> CarouselResult<FontHandle> {
        let path = self.resolve(candidates)?;
        FontHandle::from_file(path, size_px)
    }

    /// Load the font a [`StyleSpec`] asks for.
    pub fn load_style(&self, style: &StyleSpec) -> CarouselResult<FontHandle> {
        self.load(&style.font_candidates, style.size_px)
    }
}

/// Font file bytes loaded for one point size.
///
/// Handles are loaded per render call and dropped with it; nothing is cached across calls.
#[derive(Clone)]
pub struct FontHandle {
    path: PathBuf,
    bytes: Arc<Vec<u8>>,
    size_px: f32,
}

impl std::fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle")
            .field("path", &self.path)
            .field("bytes_len", &self.bytes.len())
            .field("size_px", &self.size_px)
            .finish()
    }
}

impl FontHandle {
    /// Read a font file from disk.
    pub fn from_file(path: impl Into<PathBuf>, size_px: f32) -> CarouselResult<Self> {
        let path = path.into();
        let bytes =
            std::fs::read(&path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_bytes(path, bytes, size_px)
    }

    /// Wrap already-read font bytes. `path` is informational.
    pub fn from_bytes(path: PathBuf, bytes: Vec<u8>, size_px: f32) -> CarouselResult<Self> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CarouselError::validation(
                "font size_px must be finite and > 0",
            ));
        }
        if bytes.is_empty() {
            return Err(CarouselError::validation(format!(
                "font file '{}' is empty",
                path.display()
            )));
        }
        Ok(Self {
            path,
            bytes: Arc::new(bytes),
            size_px,
        })
    }

    /// File the font was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    /// Point size in pixels.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
