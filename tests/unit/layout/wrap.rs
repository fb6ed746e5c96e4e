use super::*;
use crate::layout::testing::FixedAdvance;

#[test]
fn estimate_divides_usable_width_by_reference_advance() {
    assert_eq!(estimate_wrap_width(41.0, 820.0, 20), 20);
    assert_eq!(estimate_wrap_width(40.0, 820.0, 20), 20);
    assert_eq!(estimate_wrap_width(39.0, 820.0, 20), 21);
}

#[test]
fn degenerate_reference_width_uses_fallback() {
    assert_eq!(estimate_wrap_width(0.0, 820.0, 20), 20);
    assert_eq!(estimate_wrap_width(-3.0, 820.0, 30), 30);
    assert_eq!(estimate_wrap_width(f64::NAN, 820.0, 50), 50);
    assert_eq!(estimate_wrap_width(0.0, 820.0, 0), 1);
}

#[test]
fn wrap_width_is_never_below_one() {
    assert_eq!(estimate_wrap_width(500.0, 100.0, 20), 1);
    assert_eq!(estimate_wrap_width(10.0, 0.0, 20), 1);
    assert_eq!(estimate_wrap_width(10.0, -50.0, 20), 1);
}

#[test]
fn wrap_width_for_uses_measured_reference_glyph() {
    let mut m = FixedAdvance::new(10.0, 8.0, 2.0);
    assert_eq!(wrap_width_for(&mut m, "a", 95.0, 30), 9);

    let mut zero = FixedAdvance::new(0.0, 8.0, 2.0);
    assert_eq!(wrap_width_for(&mut zero, "a", 95.0, 30), 30);
}

#[test]
fn wraps_at_whitespace_only() {
    let lines = wrap_words("Central Bank Signals Potential Rate Hike", 16);
    assert_eq!(
        lines,
        vec!["Central Bank", "Signals", "Potential Rate", "Hike"]
    );
}

#[test]
fn collapses_whitespace_and_drops_empty_input() {
    assert_eq!(wrap_words("  a \n\t b  ", 10), vec!["a b"]);
    assert!(wrap_words("", 10).is_empty());
    assert!(wrap_words(" \n\t ", 10).is_empty());
}

#[test]
fn long_words_are_kept_whole() {
    let lines = wrap_words("a supercalifragilistic b", 5);
    assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
}

#[test]
fn lines_never_exceed_width_unless_single_word() {
    let text = "Investors are cautiously optimistic following the announcement of a \
                surprisingly hawkish policy statement from the central bank";
    for width in 1..40 {
        let lines = wrap_words(text, width);
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text.split_whitespace().collect::<Vec<_>>().join(" "));
        for line in &lines {
            let len = line.chars().count();
            assert!(
                len <= width || !line.contains(' '),
                "line {line:?} exceeds {width}"
            );
        }
    }
}

#[test]
fn counts_chars_not_bytes() {
    let lines = wrap_words("café café café", 9);
    assert_eq!(lines, vec!["café café", "café"]);
}
