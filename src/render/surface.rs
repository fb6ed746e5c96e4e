use std::path::Path;

use crate::assets::decode::{PreparedImage, premul_to_opaque_rgb8, write_opaque_rgb8};
use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
use crate::foundation::error::{CarouselError, CarouselResult};
use crate::layout::measure::ShapedLine;
use crate::render::composite::over_in_place;

/// A single drawing command.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Solid rectangle.
    FillRect {
        /// Rectangle in canvas pixels.
        rect: Rect,
        /// Fill color, alpha respected.
        color: Rgba8,
    },
    /// One shaped line of text.
    Text {
        /// Glyphs, font and color.
        line: ShapedLine,
        /// Top-left corner of the line box.
        top_left: Point,
    },
}

/// Owned premultiplied RGBA8 raster backed by a `vello_cpu` pixmap.
pub struct Surface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(canvas: Canvas) -> CarouselResult<Self> {
        let (width, height) = dims_u16(canvas)?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Surface filled with one color.
    pub fn filled(canvas: Canvas, color: Rgba8) -> CarouselResult<Self> {
        let mut out = Self::new(canvas)?;
        let premul = color.to_premul();
        for px in out.pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
            px.copy_from_slice(&premul);
        }
        Ok(out)
    }

    /// Surface holding a copy of a decoded image.
    pub fn from_image(image: &PreparedImage) -> CarouselResult<Self> {
        let mut out = Self::new(image.canvas())?;
        let dst = out.pixmap.data_as_u8_slice_mut();
        if dst.len() != image.rgba8_premul.len() {
            return Err(CarouselError::validation(
                "prepared image byte length mismatch",
            ));
        }
        dst.copy_from_slice(&image.rgba8_premul);
        Ok(out)
    }

    /// Dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Premultiplied pixel bytes, row-major.
    pub fn rgba8_premul(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= u32::from(self.width) || y >= u32::from(self.height) {
            return None;
        }
        let i = (y as usize * usize::from(self.width) + x as usize) * 4;
        let d = self.rgba8_premul();
        Some([d[i], d[i + 1], d[i + 2], d[i + 3]])
    }

    /// Rasterize `ops` in order and composite the result over the current contents.
    pub fn draw(&mut self, ops: &[DrawOp]) -> CarouselResult<()> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        for op in ops {
            draw_op(&mut ctx, op);
        }
        ctx.flush();

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            layer.data_as_u8_slice(),
        )
    }

    /// Composite `src` over this surface. Both surfaces must have the same size.
    pub fn composite_over(&mut self, src: &Surface) -> CarouselResult<()> {
        if self.canvas() != src.canvas() {
            return Err(CarouselError::validation(format!(
                "cannot composite {}x{} over {}x{}",
                src.width, src.height, self.width, self.height
            )));
        }
        over_in_place(
            self.pixmap.data_as_u8_slice_mut(),
            src.pixmap.data_as_u8_slice(),
        )
    }

    /// Alpha-free RGB8 bytes with straight color.
    pub fn to_opaque_rgb8(&self) -> Vec<u8> {
        premul_to_opaque_rgb8(self.rgba8_premul())
    }

    /// Encode as an opaque raster at `path`.
    pub fn save_opaque(&self, path: &Path) -> CarouselResult<()> {
        let canvas = self.canvas();
        write_opaque_rgb8(path, &self.to_opaque_rgb8(), canvas.width, canvas.height)
    }
}

fn dims_u16(canvas: Canvas) -> CarouselResult<(u16, u16)> {
    canvas.validate()?;
    let width: u16 = canvas
        .width
        .try_into()
        .map_err(|_| CarouselError::validation("surface width exceeds u16"))?;
    let height: u16 = canvas
        .height
        .try_into()
        .map_err(|_| CarouselError::validation("surface height exceeds u16"))?;
    Ok((width, height))
}

fn draw_op(ctx: &mut vello_cpu::RenderContext, op: &DrawOp) {
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    match op {
        DrawOp::FillRect { rect, color } => {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_to_cpu(*color));
            ctx.fill_rect(&rect_to_cpu(*rect));
        }
        DrawOp::Text { line, top_left } => {
            if line.glyphs.is_empty() {
                return;
            }
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((top_left.x, top_left.y)));
            ctx.set_paint(color_to_cpu(line.color));
            let glyphs = line.glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(&line.font)
                .font_size(line.size_px)
                .fill_glyphs(glyphs);
        }
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
