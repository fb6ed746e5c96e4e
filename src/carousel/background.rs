use std::path::{Path, PathBuf};

use crate::assets::decode::write_opaque_rgb8;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CarouselError, CarouselResult};

/// What a slide asks of the background producer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundRequest<'a> {
    /// 1-based index of the symbolic slide within its post.
    pub slide_number: usize,
    /// Image prompt from the content strategy.
    pub prompt: &'a str,
}

/// Producer of background rasters, such as an image generation service.
///
/// Implementations write one raster file to `path` or fail; a failure skips that slide only.
pub trait BackgroundSource {
    /// Write a background for `request` to `path`.
    fn produce(&mut self, request: BackgroundRequest<'_>, path: &Path) -> CarouselResult<()>;
}

/// Flat single-color backgrounds. Ignores the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolidBackground {
    /// Raster size.
    pub canvas: Canvas,
    /// Fill color; alpha is ignored.
    pub color: Rgba8,
}

impl Default for SolidBackground {
    fn default() -> Self {
        Self {
            canvas: Canvas::SQUARE_1024,
            color: Rgba8::rgb(128, 128, 128),
        }
    }
}

impl BackgroundSource for SolidBackground {
    fn produce(&mut self, _request: BackgroundRequest<'_>, path: &Path) -> CarouselResult<()> {
        self.canvas.validate()?;
        let px = [self.color.r, self.color.g, self.color.b];
        let n = self.canvas.width as usize * self.canvas.height as usize;
        let rgb = px.repeat(n);
        write_opaque_rgb8(path, &rgb, self.canvas.width, self.canvas.height)
    }
}

/// Pre-generated backgrounds named `bg_01.png`, `bg_02.png`, ... in one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryBackgrounds {
    dir: PathBuf,
}

impl DirectoryBackgrounds {
    /// Look up backgrounds in `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File used for the given 1-based slide number.
    pub fn path_for(&self, slide_number: usize) -> PathBuf {
        self.dir.join(format!("bg_{slide_number:02}.png"))
    }
}

impl BackgroundSource for DirectoryBackgrounds {
    fn produce(&mut self, request: BackgroundRequest<'_>, path: &Path) -> CarouselResult<()> {
        let src = self.path_for(request.slide_number);
        if !src.is_file() {
            return Err(CarouselError::background_load(format!(
                "no background '{}' for slide {}",
                src.display(),
                request.slide_number
            )));
        }
        std::fs::copy(&src, path).map_err(|e| {
            CarouselError::io(format!(
                "copy '{}' to '{}': {e}",
                src.display(),
                path.display()
            ))
        })?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/background.rs"]
mod tests;
