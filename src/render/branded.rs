use std::path::Path;

use crate::assets::fonts::FontDir;
use crate::foundation::config::{BrandedStyle, CompositorConfig};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::CarouselResult;
use crate::layout::anchor::Anchor;
use crate::layout::measure::{FontMeasure, TextMeasure};
use crate::layout::stack::{LayoutResult, TextBlock, stack_blocks};
use crate::layout::wrap::wrap_width_for;
use crate::render::surface::{DrawOp, Surface};

/// Geometry of a branded headline slide.
#[derive(Clone, Debug, PartialEq)]
pub struct BrandedLayout {
    /// Slide canvas.
    pub canvas: Canvas,
    /// Margin in pixels on every side.
    pub margin: f64,
    /// Badge rectangle.
    pub badge: Rect,
    /// Badge label box, centered in the badge.
    pub badge_label: Rect,
    /// Wrapped headline.
    pub headline: TextBlock,
    /// Headline lines, vertically centered as one block.
    pub stack: LayoutResult,
    /// Footer label box, right edge and baseline on the bottom-right margin corner.
    pub footer: Rect,
}

/// Renders the text-only first slide: badge, centered headline, footer.
#[derive(Clone, Debug)]
pub struct BrandedSlideRenderer {
    fonts: FontDir,
    canvas: Canvas,
    style: BrandedStyle,
}

impl BrandedSlideRenderer {
    /// Construct a renderer for `canvas`.
    pub fn new(fonts: FontDir, canvas: Canvas, style: BrandedStyle) -> CarouselResult<Self> {
        canvas.validate()?;
        Ok(Self {
            fonts,
            canvas,
            style,
        })
    }

    /// Construct from a validated [`CompositorConfig`].
    pub fn from_config(cfg: &CompositorConfig) -> CarouselResult<Self> {
        Self::new(
            FontDir::new(&cfg.fonts_dir),
            cfg.canvas,
            cfg.branded.clone(),
        )
    }

    /// Style in use.
    pub fn style(&self) -> &BrandedStyle {
        &self.style
    }

    /// Compute slide geometry with the given measurers.
    pub fn layout(
        &self,
        headline: &str,
        badge_text: &mut dyn TextMeasure,
        headline_text: &mut dyn TextMeasure,
        footer_text: &mut dyn TextMeasure,
    ) -> BrandedLayout {
        let style = &self.style;
        let canvas = self.canvas;
        let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
        let margin = canvas.margin_px(style.margin_frac);

        let badge = Rect::new(
            margin,
            margin,
            margin + style.badge.width_px,
            margin + style.badge.height_px,
        );
        let badge_label =
            Anchor::MiddleMiddle.rect(badge.center(), badge_text.extent(&style.badge.label));

        let wrap = wrap_width_for(
            headline_text,
            &style.headline.reference_glyph,
            canvas.usable_width(margin),
            style.headline.fallback_wrap_chars,
        );
        let block = TextBlock::build(
            headline,
            headline_text,
            wrap,
            style.headline.line_spacing_px(),
        );
        let top = (h - block.height()) / 2.0;
        let stack = stack_blocks(&[&block], top, 0.0);

        let footer = Anchor::RightBaseline.rect(
            Point::new(w - margin, h - margin),
            footer_text.extent(&style.footer_label),
        );

        BrandedLayout {
            canvas,
            margin,
            badge,
            badge_label,
            headline: block,
            stack,
            footer,
        }
    }

    /// Render `headline` to `output`.
    ///
    /// Fonts are resolved before anything is drawn, so a missing font never leaves a file behind.
    #[tracing::instrument(skip(self, headline, output), fields(output = %output.display()))]
    pub fn try_render(&self, headline: &str, output: &Path) -> CarouselResult<BrandedLayout> {
        let style = &self.style;
        let mut badge_text = FontMeasure::new(self.fonts.load_style(&style.badge.text)?)?;
        let mut headline_text = FontMeasure::new(self.fonts.load_style(&style.headline)?)?;
        let mut footer_text = FontMeasure::new(self.fonts.load_style(&style.footer)?)?;

        let layout = self.layout(
            headline,
            &mut badge_text,
            &mut headline_text,
            &mut footer_text,
        );

        let mut ops = Vec::with_capacity(layout.stack.lines.len() + 3);
        ops.push(DrawOp::FillRect {
            rect: layout.badge,
            color: style.badge.fill,
        });
        ops.push(DrawOp::Text {
            line: badge_text.shape(&style.badge.label, style.badge.text.color),
            top_left: layout.badge_label.origin(),
        });
        for placed in &layout.stack.lines {
            let text = &layout.headline.lines()[placed.line];
            ops.push(DrawOp::Text {
                line: headline_text.shape(text, style.headline.color),
                top_left: Point::new(layout.margin, placed.top),
            });
        }
        ops.push(DrawOp::Text {
            line: footer_text.shape(&style.footer_label, style.footer.color),
            top_left: layout.footer.origin(),
        });

        let mut surface = Surface::filled(self.canvas, style.background)?;
        surface.draw(&ops)?;
        surface.save_opaque(output)?;

        tracing::info!(lines = layout.stack.lines.len(), "branded headline slide saved");
        Ok(layout)
    }

    /// Render `headline` to `output`, reporting failure as `false` plus a logged diagnostic.
    pub fn render(&self, headline: &str, output: &Path) -> bool {
        match self.try_render(headline, output) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(
                    kind = %err.kind(),
                    error = %err,
                    output = %output.display(),
                    "branded headline slide failed"
                );
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/branded.rs"]
mod tests;
