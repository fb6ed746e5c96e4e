use std::path::Path;

use anyhow::Context;

use crate::foundation::core::Canvas;
use crate::foundation::error::{CarouselError, CarouselResult};

/// Decoded raster in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

impl PreparedImage {
    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> CarouselResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul,
    })
}

/// Read and decode a background raster.
///
/// Both a missing file and undecodable contents are reported as
/// [`CarouselError::BackgroundLoad`]. The file handle is closed before this returns.
pub fn load_background(path: &Path) -> CarouselResult<PreparedImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        CarouselError::background_load(format!("read '{}': {e}", path.display()))
    })?;
    let image = decode_image(&bytes).map_err(|e| {
        CarouselError::background_load(format!("decode '{}': {e}", path.display()))
    })?;
    image.canvas().validate().map_err(|e| {
        CarouselError::background_load(format!("'{}': {e}", path.display()))
    })?;
    Ok(image)
}

/// Un-premultiply RGBA8 and drop alpha.
///
/// Translucent pixels keep their straight color. Fully transparent pixels become black.
pub fn premul_to_opaque_rgb8(rgba8_premul: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba8_premul.len() / 4 * 3);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3] as u16;
        match a {
            255 => out.extend_from_slice(&px[..3]),
            0 => out.extend_from_slice(&[0, 0, 0]),
            _ => out.extend(
                px[..3]
                    .iter()
                    .map(|&c| ((c as u16 * 255 + a / 2) / a).min(255) as u8),
            ),
        }
    }
    out
}

/// Encode opaque RGB8 pixels to `path`, creating parent directories.
///
/// The format follows the file extension and falls back to PNG.
pub fn write_opaque_rgb8(path: &Path, rgb8: &[u8], width: u32, height: u32) -> CarouselResult<()> {
    if rgb8.len() != width as usize * height as usize * 3 {
        return Err(CarouselError::validation("rgb8 byte length mismatch"));
    }
    ensure_parent_dir(path)?;
    let format = image::ImageFormat::from_path(path).unwrap_or(image::ImageFormat::Png);
    image::save_buffer_with_format(path, rgb8, width, height, image::ColorType::Rgb8, format)
        .map_err(|e| CarouselError::io(format!("write '{}': {e}", path.display())))
}

/// Create the parent directory of `path` when it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> CarouselResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            CarouselError::io(format!(
                "failed to create output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
