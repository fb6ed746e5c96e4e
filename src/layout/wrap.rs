use crate::layout::measure::TextMeasure;

/// Estimate how many characters fit in `usable_px`.
///
/// The estimate divides the usable width by the advance of one reference glyph. A non-positive
/// or non-finite advance yields `fallback_chars` instead. The result is always at least 1.
pub fn estimate_wrap_width(reference_advance: f64, usable_px: f64, fallback_chars: usize) -> usize {
    if !reference_advance.is_finite() || reference_advance <= 0.0 {
        return fallback_chars.max(1);
    }
    let chars = (usable_px / reference_advance).floor();
    if chars.is_finite() && chars >= 1.0 {
        chars as usize
    } else {
        1
    }
}

/// Measure `reference_glyph` with `measure` and estimate the wrap width from it.
pub fn wrap_width_for(
    measure: &mut dyn TextMeasure,
    reference_glyph: &str,
    usable_px: f64,
    fallback_chars: usize,
) -> usize {
    let advance = measure.advance(reference_glyph);
    let width = estimate_wrap_width(advance, usable_px, fallback_chars);
    tracing::debug!(reference_glyph, advance, usable_px, width, "estimated wrap width");
    width
}

/// Greedily wrap `text` into lines of at most `width` characters.
///
/// Lines break only at whitespace; runs of whitespace collapse to a single space and leading or
/// trailing whitespace is dropped. A word longer than `width` is kept whole on its own line.
/// Empty or all-whitespace input produces no lines.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
