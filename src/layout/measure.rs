//! Exact text measurement.
//!
//! Wrapping only estimates how many characters fit on a line; every wrapped line is then measured
//! here so that centering, stacking and backing rectangles use real glyph metrics.

use std::borrow::Cow;

use crate::assets::fonts::FontHandle;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{CarouselError, CarouselResult};

/// Measured box of one line of text, relative to its top-left corner.
///
/// The box spans the font's ascender to descender; text is drawn with its ascender line at the
/// top of the box. The ink range is where glyph outlines actually are, measured from the same
/// top edge, and sets the line pitch when lines are stacked.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineExtent {
    /// Advance width in pixels.
    pub width: f64,
    /// Distance from the top of the box to the baseline.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the box.
    pub descent: f64,
    /// Topmost ink, measured down from the top of the box.
    pub ink_top: f64,
    /// Bottommost ink, measured down from the top of the box.
    pub ink_bottom: f64,
}

impl LineExtent {
    /// Box of `width` whose ink fills it from ascender to descender.
    pub const fn solid(width: f64, ascent: f64, descent: f64) -> Self {
        Self {
            width,
            ascent,
            descent,
            ink_top: 0.0,
            ink_bottom: ascent + descent,
        }
    }

    /// Box height, ascender to descender.
    pub fn height(self) -> f64 {
        self.ascent + self.descent
    }

    /// Height of the inked part of the line.
    pub fn ink_height(self) -> f64 {
        (self.ink_bottom - self.ink_top).max(0.0)
    }
}

/// Source of per-line text metrics.
pub trait TextMeasure {
    /// Exact box of `text` laid out on a single line.
    fn extent(&mut self, text: &str) -> LineExtent;

    /// Pen advance of `text`; used for the reference glyph of wrap estimation.
    fn advance(&mut self, text: &str) -> f64 {
        self.extent(text).width
    }
}

/// One glyph positioned relative to the top-left of its line box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapedGlyph {
    /// Glyph id in the font.
    pub id: u32,
    /// Horizontal pen position.
    pub x: f32,
    /// Baseline position measured from the top of the line box.
    pub y: f32,
}

/// A shaped single line ready to be drawn.
#[derive(Clone)]
pub struct ShapedLine {
    /// Font data handed to the rasterizer.
    pub font: vello_cpu::peniko::FontData,
    /// Point size in pixels.
    pub size_px: f32,
    /// Fill color.
    pub color: Rgba8,
    /// Positioned glyphs.
    pub glyphs: Vec<ShapedGlyph>,
    /// Measured line box.
    pub extent: LineExtent,
}

impl std::fmt::Debug for ShapedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedLine")
            .field("size_px", &self.size_px)
            .field("color", &self.color)
            .field("glyphs", &self.glyphs.len())
            .field("extent", &self.extent)
            .finish()
    }
}

/// Parley-backed [`TextMeasure`] for one loaded font at one size.
///
/// Owns its font and layout contexts, so measurers are never shared between render calls.
pub struct FontMeasure {
    font: FontHandle,
    family: String,
    cpu_font: vello_cpu::peniko::FontData,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
}

impl FontMeasure {
    /// Register the font bytes and prepare layout contexts.
    pub fn new(font: FontHandle) -> CarouselResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes().as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            CarouselError::validation(format!(
                "no font families registered from '{}'",
                font.path().display()
            ))
        })?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CarouselError::validation("registered font family has no name"))?
            .to_string();

        skrifa::FontRef::new(font.bytes().as_slice()).map_err(|e| {
            CarouselError::validation(format!(
                "unreadable font tables in '{}': {e}",
                font.path().display()
            ))
        })?;

        let cpu_font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes().as_ref().clone()),
            0,
        );

        Ok(Self {
            font,
            family,
            cpu_font,
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
        })
    }

    /// Point size in pixels.
    pub fn size_px(&self) -> f32 {
        self.font.size_px()
    }

    /// Shape `text` as a single line painted with `color`.
    pub fn shape(&mut self, text: &str, color: Rgba8) -> ShapedLine {
        let (extent, glyphs) = self.measure_line(text, color);
        ShapedLine {
            font: self.cpu_font.clone(),
            size_px: self.font.size_px(),
            color,
            glyphs,
            extent,
        }
    }

    fn measure_line(&mut self, text: &str, brush: Rgba8) -> (LineExtent, Vec<ShapedGlyph>) {
        if text.is_empty() {
            return (LineExtent::default(), Vec::new());
        }

        let layout = self.layout(text, brush);
        let mut extent = LineExtent {
            width: f64::from(layout.width()),
            ..LineExtent::default()
        };
        for line in layout.lines() {
            let m = line.metrics();
            extent.ascent = extent.ascent.max(f64::from(m.ascent));
            extent.descent = extent.descent.max(f64::from(m.descent));
        }

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            let top = line.metrics().baseline - extent.ascent as f32;
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| ShapedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y - top,
                }));
            }
        }

        match self.ink_range(&glyphs) {
            Some((top, bottom)) => {
                extent.ink_top = top;
                extent.ink_bottom = bottom;
            }
            None => {
                extent.ink_top = 0.0;
                extent.ink_bottom = extent.height();
            }
        }
        (extent, glyphs)
    }

    /// Vertical span of the glyph outlines, measured down from the top of the line box.
    ///
    /// `None` when no glyph has an outline (blank text).
    fn ink_range(&self, glyphs: &[ShapedGlyph]) -> Option<(f64, f64)> {
        use skrifa::MetadataProvider as _;

        let font = skrifa::FontRef::new(self.font.bytes().as_slice()).ok()?;
        let metrics = font.glyph_metrics(
            skrifa::instance::Size::new(self.font.size_px()),
            skrifa::instance::LocationRef::default(),
        );

        let mut range: Option<(f64, f64)> = None;
        for g in glyphs {
            let Some(b) = metrics.bounds(skrifa::GlyphId::new(g.id)) else {
                continue;
            };
            if b.y_min == b.y_max {
                continue;
            }
            // Outline y grows upward from the baseline.
            let top = f64::from(g.y - b.y_max);
            let bottom = f64::from(g.y - b.y_min);
            range = Some(match range {
                Some((t, bt)) => (t.min(top), bt.max(bottom)),
                None => (top, bottom),
            });
        }
        range
    }

    fn layout(&mut self, text: &str, brush: Rgba8) -> parley::Layout<Rgba8> {
        let family = self.family.clone();
        let size_px = self.font.size_px();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        layout
    }
}

impl TextMeasure for FontMeasure {
    fn extent(&mut self, text: &str) -> LineExtent {
        self.measure_line(text, Rgba8::default()).0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
