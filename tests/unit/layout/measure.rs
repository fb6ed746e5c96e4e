use super::*;

fn fixture(name: &str, size_px: f32) -> FontMeasure {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data/fonts")
        .join(name);
    FontMeasure::new(FontHandle::from_file(path, size_px).unwrap()).unwrap()
}

#[test]
fn ink_is_tighter_than_the_font_box() {
    let mut m = fixture("DejaVuSans-Bold.ttf", 80.0);
    let e = m.extent("W");
    assert!(e.width > 0.0);
    assert!(e.ascent > 0.0 && e.descent > 0.0);
    assert!(e.ink_top > 0.0, "{e:?}");
    assert!(e.ink_height() < e.height(), "{e:?}");
    // Capital W sits on the baseline.
    assert!((e.ink_bottom - e.ascent).abs() < 1.0, "{e:?}");
}

#[test]
fn descenders_extend_ink_below_baseline() {
    let mut m = fixture("DejaVuSans.ttf", 45.0);
    let caps = m.extent("WAVE");
    let desc = m.extent("Wage");
    assert!(desc.ink_bottom > desc.ascent + 1.0, "{desc:?}");
    assert!(desc.ink_height() > caps.ink_height());
    assert_eq!(caps.height(), desc.height());
}

#[test]
fn advance_grows_with_text() {
    let mut m = fixture("DejaVuSans.ttf", 45.0);
    let one = m.advance("a");
    let two = m.advance("aa");
    assert!(one > 0.0);
    assert!((two - 2.0 * one).abs() < 0.5);
    assert_eq!(m.extent(""), LineExtent::default());
}

#[test]
fn shaped_glyphs_sit_on_the_baseline() {
    let mut m = fixture("DejaVuSerif-Bold.ttf", 80.0);
    let line = m.shape("Rates", Rgba8::BLACK);
    assert_eq!(line.glyphs.len(), 5);
    assert_eq!(line.size_px, 80.0);
    assert_eq!(line.color, Rgba8::BLACK);
    assert!(line.glyphs[0].x.abs() < 1.0);
    for g in &line.glyphs {
        assert!((f64::from(g.y) - line.extent.ascent).abs() < 0.5, "{g:?}");
    }
    assert!(line.glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert_eq!(line.extent, m.extent("Rates"));
}

#[test]
fn invalid_font_bytes_are_rejected() {
    let handle =
        FontHandle::from_bytes("junk.ttf".into(), b"not a font".to_vec(), 20.0).unwrap();
    assert!(FontMeasure::new(handle).is_err());
}
