use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn new_surface_is_transparent() {
    let s = Surface::new(canvas(8, 4)).unwrap();
    assert_eq!(s.canvas(), canvas(8, 4));
    assert!(s.rgba8_premul().iter().all(|&b| b == 0));
    assert_eq!(s.pixel(8, 0), None);
}

#[test]
fn filled_surface_is_uniform() {
    let s = Surface::filled(canvas(4, 4), Rgba8::rgb(0xF8, 0xF9, 0xFA)).unwrap();
    assert_eq!(s.pixel(0, 0), Some([0xF8, 0xF9, 0xFA, 255]));
    assert_eq!(s.pixel(3, 3), Some([0xF8, 0xF9, 0xFA, 255]));
}

#[test]
fn fill_rect_covers_only_its_area() {
    let mut s = Surface::filled(canvas(16, 16), Rgba8::WHITE).unwrap();
    s.draw(&[DrawOp::FillRect {
        rect: Rect::new(4.0, 4.0, 12.0, 12.0),
        color: Rgba8::rgb(0xD9, 0x2D, 0x20),
    }])
    .unwrap();
    assert_eq!(s.pixel(8, 8), Some([0xD9, 0x2D, 0x20, 255]));
    assert_eq!(s.pixel(1, 1), Some([255, 255, 255, 255]));
    assert_eq!(s.pixel(14, 14), Some([255, 255, 255, 255]));
}

#[test]
fn translucent_rect_darkens_and_stays_opaque() {
    let mut s = Surface::filled(canvas(8, 8), Rgba8::rgb(128, 128, 128)).unwrap();
    let mut overlay = Surface::new(canvas(8, 8)).unwrap();
    overlay
        .draw(&[DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 8.0, 8.0),
            color: Rgba8::rgba(0, 0, 0, 153),
        }])
        .unwrap();
    s.composite_over(&overlay).unwrap();
    let px = s.pixel(4, 4).unwrap();
    assert_eq!(px[3], 255);
    assert!(px[0] < 128 && px[0] > 0);
}

#[test]
fn composite_rejects_size_mismatch() {
    let mut a = Surface::new(canvas(4, 4)).unwrap();
    let b = Surface::new(canvas(4, 5)).unwrap();
    assert!(a.composite_over(&b).is_err());
}

#[test]
fn from_image_copies_pixels() {
    let img = PreparedImage {
        width: 2,
        height: 1,
        rgba8_premul: vec![1, 2, 3, 255, 4, 5, 6, 255],
    };
    let s = Surface::from_image(&img).unwrap();
    assert_eq!(s.rgba8_premul(), img.rgba8_premul.as_slice());
    assert_eq!(s.to_opaque_rgb8(), vec![1, 2, 3, 4, 5, 6]);
}
