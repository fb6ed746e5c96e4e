use super::*;

#[test]
fn canvas_rejects_zero_and_oversized() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    assert_eq!(Canvas::new(1024, 1024).unwrap(), Canvas::SQUARE_1024);
}

#[test]
fn margin_is_truncated_fraction_of_width() {
    let c = Canvas::SQUARE_1024;
    assert_eq!(c.margin_px(0.1), 102.0);
    assert_eq!(c.margin_px(0.08), 81.0);
    assert_eq!(c.usable_width(102.0), 820.0);
    assert_eq!(c.usable_width(600.0), 0.0);
}

#[test]
fn parses_hex_rgb_and_rgba() {
    assert_eq!(Rgba8::parse_hex("#F8F9FA").unwrap(), Rgba8::rgb(248, 249, 250));
    assert_eq!(
        Rgba8::parse_hex("00000099").unwrap(),
        Rgba8::rgba(0, 0, 0, 153)
    );
    assert!(Rgba8::parse_hex("#fff").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_value(serde_json::json!("#d92d20")).unwrap();
    assert_eq!(c, Rgba8::rgb(0xd9, 0x2d, 0x20));
    assert_eq!(
        serde_json::to_value(Rgba8::rgba(0, 0, 0, 153)).unwrap(),
        serde_json::json!("#00000099")
    );
}

#[test]
fn premul_scales_color_channels() {
    assert_eq!(Rgba8::WHITE.to_premul(), [255, 255, 255, 255]);
    assert_eq!(Rgba8::TRANSPARENT.to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(255, 0, 0, 153).to_premul(), [153, 0, 0, 153]);
}
