use super::*;
use kurbo::Shape as _;

fn res(w: u32, h: u32) -> Resolution {
    Resolution::new(w, h).unwrap()
}

#[test]
fn background_fill_is_opaque() {
    let mut layer = VectorLayer::new(res(8, 6)).unwrap();
    layer.fill_background(Rgb::new(12, 10, 24));
    let rgba = layer.finish();
    assert_eq!(rgba.len(), 8 * 6 * 4);
    for px in rgba.chunks_exact(4) {
        assert_eq!(px, &[12, 10, 24, 255]);
    }
}

#[test]
fn translucent_fill_leaves_outside_transparent() {
    let mut layer = VectorLayer::new(res(32, 32)).unwrap();
    let circle = kurbo::Circle::new((16.0, 16.0), 6.0).to_path(0.1);
    layer.fill_path(&circle, Rgb::new(255, 0, 0), 128);
    let rgba = layer.finish();

    let at = |x: usize, y: usize| &rgba[(y * 32 + x) * 4..(y * 32 + x) * 4 + 4];
    assert_eq!(at(0, 0)[3], 0);
    let center = at(16, 16);
    assert!((i32::from(center[3]) - 128).abs() <= 2);
    assert!(center[1] == 0 && center[2] == 0);
}

#[test]
fn stroke_polyline_covers_its_path() {
    let mut layer = VectorLayer::new(res(64, 32)).unwrap();
    let points = [Point::new(4.0, 16.0), Point::new(60.0, 16.0)];
    layer.stroke_polyline(&points, 8.0, Rgb::new(0, 0, 255), 255);
    let rgba = layer.finish();
    let idx = (16 * 64 + 32) * 4;
    assert_eq!(rgba[idx + 3], 255);
    assert_eq!(rgba[idx + 2], 255);
    assert_eq!(rgba[3], 0);
}

#[test]
fn composite_over_respects_alpha() {
    let mut canvas = Canvas::new(res(2, 1), Rgb::new(100, 100, 100)).unwrap();
    // px0: transparent, px1: premultiplied 50% white.
    let layer = [0u8, 0, 0, 0, 128, 128, 128, 128];
    composite_over(&mut canvas, &layer).unwrap();
    assert_eq!(canvas.pixel(0, 0), Some(Rgb::new(100, 100, 100)));
    let px = canvas.pixel(1, 0).unwrap();
    assert!((i32::from(px.r) - 178).abs() <= 1);
}

#[test]
fn composite_over_rejects_size_mismatch() {
    let mut canvas = Canvas::new(res(2, 2), Rgb::BLACK).unwrap();
    assert!(composite_over(&mut canvas, &[0u8; 4]).is_err());
}
