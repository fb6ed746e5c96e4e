use std::path::Path;

use crate::assets::decode::load_background;
use crate::assets::fonts::FontDir;
use crate::foundation::config::{CompositorConfig, OverlayStyle};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::CarouselResult;
use crate::layout::measure::{FontMeasure, TextMeasure};
use crate::layout::stack::{LayoutResult, TextBlock, stack_blocks};
use crate::layout::wrap::wrap_width_for;
use crate::render::surface::{DrawOp, Surface};

/// Block index of the title in [`OverlayLayout::stack`].
pub const TITLE_BLOCK: usize = 0;
/// Block index of the body in [`OverlayLayout::stack`].
pub const BODY_BLOCK: usize = 1;

/// Geometry of a title/body overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Background dimensions.
    pub canvas: Canvas,
    /// Left and top margin of the text.
    pub margin: f64,
    /// Wrapped title.
    pub title: TextBlock,
    /// Wrapped body.
    pub body: TextBlock,
    /// Title lines followed by body lines.
    pub stack: LayoutResult,
    /// Backing rectangle behind both blocks.
    pub backing: Rect,
}

impl OverlayLayout {
    /// Box of every drawn line, top to bottom.
    pub fn line_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.stack.lines.iter().map(|l| l.rect(self.margin))
    }
}

/// Draws a title and body over a background raster behind one translucent backing rectangle.
#[derive(Clone, Debug)]
pub struct OverlayCompositor {
    fonts: FontDir,
    style: OverlayStyle,
}

impl OverlayCompositor {
    /// Construct a compositor.
    pub fn new(fonts: FontDir, style: OverlayStyle) -> Self {
        Self { fonts, style }
    }

    /// Construct from a validated [`CompositorConfig`].
    pub fn from_config(cfg: &CompositorConfig) -> Self {
        Self::new(FontDir::new(&cfg.fonts_dir), cfg.overlay.clone())
    }

    /// Style in use.
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// Compute overlay geometry on `canvas` with the given measurers.
    ///
    /// The backing rectangle spans the widest line of either block, even though the blocks use
    /// different fonts, and grows by the padding on every side.
    pub fn layout(
        &self,
        canvas: Canvas,
        title: &str,
        body: &str,
        title_text: &mut dyn TextMeasure,
        body_text: &mut dyn TextMeasure,
    ) -> OverlayLayout {
        let style = &self.style;
        let margin = canvas.margin_px(style.margin_frac);
        let usable = canvas.usable_width(margin);

        let title_wrap = wrap_width_for(
            title_text,
            &style.title.reference_glyph,
            usable,
            style.title.fallback_wrap_chars,
        );
        let body_wrap = wrap_width_for(
            body_text,
            &style.body.reference_glyph,
            usable,
            style.body.fallback_wrap_chars,
        );
        let title = TextBlock::build(title, title_text, title_wrap, style.title.line_spacing_px());
        let body = TextBlock::build(body, body_text, body_wrap, style.body.line_spacing_px());

        let stack = stack_blocks(&[&title, &body], margin, style.block_gap_px);
        let backing = stack
            .bounds(margin)
            .inflate(style.padding_px, style.padding_px);

        OverlayLayout {
            canvas,
            margin,
            title,
            body,
            stack,
            backing,
        }
    }

    /// Composite `title` and `body` onto the raster at `background` and write `output`.
    ///
    /// The output has the background's dimensions and no alpha channel.
    #[tracing::instrument(
        skip(self, background, title, body, output),
        fields(background = %background.display(), output = %output.display())
    )]
    pub fn try_render(
        &self,
        background: &Path,
        title: &str,
        body: &str,
        output: &Path,
    ) -> CarouselResult<OverlayLayout> {
        let style = &self.style;
        let image = load_background(background)?;
        let mut title_text = FontMeasure::new(self.fonts.load_style(&style.title)?)?;
        let mut body_text = FontMeasure::new(self.fonts.load_style(&style.body)?)?;

        let layout = self.layout(
            image.canvas(),
            title,
            body,
            &mut title_text,
            &mut body_text,
        );

        let mut ops = Vec::with_capacity(layout.stack.lines.len() + 1);
        ops.push(DrawOp::FillRect {
            rect: layout.backing,
            color: style.backing,
        });
        for placed in layout.stack.lines_of(TITLE_BLOCK) {
            ops.push(DrawOp::Text {
                line: title_text.shape(&layout.title.lines()[placed.line], style.title.color),
                top_left: Point::new(layout.margin, placed.top),
            });
        }
        for placed in layout.stack.lines_of(BODY_BLOCK) {
            ops.push(DrawOp::Text {
                line: body_text.shape(&layout.body.lines()[placed.line], style.body.color),
                top_left: Point::new(layout.margin, placed.top),
            });
        }

        let mut base = Surface::from_image(&image)?;
        let mut overlay = Surface::new(base.canvas())?;
        overlay.draw(&ops)?;
        base.composite_over(&overlay)?;
        base.save_opaque(output)?;

        tracing::info!(
            title_lines = layout.title.lines().len(),
            body_lines = layout.body.lines().len(),
            "overlay slide saved"
        );
        Ok(layout)
    }

    /// Render like [`OverlayCompositor::try_render`], reporting failure as `false` plus a logged
    /// diagnostic.
    pub fn render(&self, background: &Path, title: &str, body: &str, output: &Path) -> bool {
        match self.try_render(background, title, body, output) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(
                    kind = %err.kind(),
                    error = %err,
                    output = %output.display(),
                    "overlay slide failed"
                );
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/overlay.rs"]
mod tests;
