use crate::layout::measure::{LineExtent, TextMeasure};

/// Monospace stand-in for a real font: every char advances by `advance`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FixedAdvance {
    pub advance: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl FixedAdvance {
    pub(crate) fn new(advance: f64, ascent: f64, descent: f64) -> Self {
        Self {
            advance,
            ascent,
            descent,
        }
    }
}

impl TextMeasure for FixedAdvance {
    fn extent(&mut self, text: &str) -> LineExtent {
        if text.is_empty() {
            return LineExtent::default();
        }
        LineExtent::solid(
            text.chars().count() as f64 * self.advance,
            self.ascent,
            self.descent,
        )
    }
}
