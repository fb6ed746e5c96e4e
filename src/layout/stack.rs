use crate::foundation::core::Rect;
use crate::layout::measure::{LineExtent, TextMeasure};
use crate::layout::wrap::wrap_words;

/// Wrapped text with the exact extent of every line.
///
/// Blocks are rebuilt from their source whenever text or font changes; they are never edited in
/// place.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    source: String,
    lines: Vec<String>,
    extents: Vec<LineExtent>,
    line_spacing: f64,
}

impl TextBlock {
    /// Wrap `source` at `wrap_width` characters and measure each resulting line.
    pub fn build(
        source: &str,
        measure: &mut dyn TextMeasure,
        wrap_width: usize,
        line_spacing: f64,
    ) -> Self {
        let lines = wrap_words(source, wrap_width);
        let extents = lines.iter().map(|l| measure.extent(l)).collect();
        Self {
            source: source.to_string(),
            lines,
            extents,
            line_spacing,
        }
    }

    /// Source string the block was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Wrapped lines, top to bottom.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Measured extent of each line, parallel to [`TextBlock::lines`].
    pub fn extents(&self) -> &[LineExtent] {
        &self.extents
    }

    /// Spacing added between consecutive lines.
    pub fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    /// `true` when wrapping produced no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Stacked height: per-line ink heights plus spacing between lines. Zero for an empty block.
    pub fn height(&self) -> f64 {
        let lines: f64 = self.extents.iter().map(|e| e.ink_height()).sum();
        let gaps = self.extents.len().saturating_sub(1) as f64 * self.line_spacing;
        lines + gaps
    }

    /// Widest measured line. Zero for an empty block.
    pub fn max_width(&self) -> f64 {
        self.extents.iter().map(|e| e.width).fold(0.0, f64::max)
    }
}

/// A line placed by [`stack_blocks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedLine {
    /// Index of the block in the slice given to [`stack_blocks`].
    pub block: usize,
    /// Index of the line inside its block.
    pub line: usize,
    /// Top edge of the line box.
    pub top: f64,
    /// Measured extent.
    pub extent: LineExtent,
}

impl PlacedLine {
    /// Line box when the line starts at `left`.
    pub fn rect(&self, left: f64) -> Rect {
        Rect::new(
            left,
            self.top,
            left + self.extent.width,
            self.top + self.extent.height(),
        )
    }

    /// Inked part of the line when it starts at `left`.
    pub fn ink_rect(&self, left: f64) -> Rect {
        Rect::new(
            left,
            self.top + self.extent.ink_top,
            left + self.extent.width,
            self.top + self.extent.ink_bottom,
        )
    }
}

/// Geometry of vertically stacked blocks. Computed fresh for every render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
    /// Top edge of the stack.
    pub origin_y: f64,
    /// Sum of line heights, inter-line spacing and inter-block gaps.
    pub total_height: f64,
    /// Widest line across all blocks.
    pub max_line_width: f64,
    /// Every line, top to bottom.
    pub lines: Vec<PlacedLine>,
}

impl LayoutResult {
    /// Union box of all lines when they start at `left`; zero-sized at the origin when empty.
    pub fn bounds(&self, left: f64) -> Rect {
        Rect::new(
            left,
            self.origin_y,
            left + self.max_line_width,
            self.origin_y + self.total_height,
        )
    }

    /// Placed lines belonging to `block`.
    pub fn lines_of(&self, block: usize) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(move |l| l.block == block)
    }
}

/// Stack `blocks` top to bottom starting at `origin_y`.
///
/// Each line advances the pen by its ink height, and consecutive lines of a block are separated
/// by that block's line spacing. Lines are placed with their box top at the pen. `block_gap` is
/// inserted once between two non-empty blocks; empty blocks take no space and add no gap.
pub fn stack_blocks(blocks: &[&TextBlock], origin_y: f64, block_gap: f64) -> LayoutResult {
    let mut out = LayoutResult {
        origin_y,
        ..LayoutResult::default()
    };
    let mut y = origin_y;
    let mut placed_any = false;

    for (block_idx, block) in blocks.iter().enumerate() {
        if block.is_empty() {
            continue;
        }
        if placed_any {
            y += block_gap;
        }
        for (line_idx, extent) in block.extents().iter().enumerate() {
            if line_idx > 0 {
                y += block.line_spacing();
            }
            out.lines.push(PlacedLine {
                block: block_idx,
                line: line_idx,
                top: y,
                extent: *extent,
            });
            y += extent.ink_height();
            out.max_line_width = out.max_line_width.max(extent.width);
        }
        placed_any = true;
    }

    out.total_height = y - origin_y;
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/stack.rs"]
mod tests;
