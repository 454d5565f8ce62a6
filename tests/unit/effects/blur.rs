use super::*;
use crate::foundation::core::{Resolution, Rgb};
use crate::render::exec::CancelToken;

fn exec() -> RenderExec<'static> {
    RenderExec::new(None, CancelToken::new())
}

#[test]
fn blur_sigma_0_is_identity() {
    let mut canvas = Canvas::from_raw(1, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
    gaussian_blur(&mut canvas, 0.0, &exec()).unwrap();
    assert_eq!(canvas.as_raw(), &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn blur_constant_image_is_identity() {
    let mut canvas = Canvas::new(Resolution::new(4, 3).unwrap(), Rgb::new(10, 20, 30)).unwrap();
    let before = canvas.clone();
    gaussian_blur(&mut canvas, 2.0, &exec()).unwrap();
    assert_eq!(canvas, before);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let mut canvas = Canvas::new(Resolution::new(9, 9).unwrap(), Rgb::BLACK).unwrap();
    canvas.set_pixel(4, 4, Rgb::new(255, 255, 255));

    gaussian_blur(&mut canvas, 1.0, &exec()).unwrap();

    let lit = canvas.pixels().filter(|px| px.r != 0).count();
    assert!(lit > 1);
    let sum_r: i32 = canvas.pixels().map(|px| i32::from(px.r)).sum();
    assert!((sum_r - 255).abs() <= 30);
    assert!(canvas.pixel(4, 4).unwrap().r < 255);
}

#[test]
fn kernel_sums_to_one_q16() {
    for sigma in [0.5, 1.0, 4.0, 25.0] {
        let k = gaussian_kernel_q16(kernel_radius(sigma), sigma).unwrap();
        assert_eq!(k.iter().map(|v| u64::from(*v)).sum::<u64>(), 65536);
        assert_eq!(k.len() as u32, 2 * kernel_radius(sigma) + 1);
    }
}

#[test]
fn blur_honours_cancellation() {
    let token = CancelToken::new();
    token.cancel();
    let exec = RenderExec::new(None, token);
    let mut canvas = Canvas::new(Resolution::new(8, 8).unwrap(), Rgb::BLACK).unwrap();
    assert!(matches!(
        gaussian_blur(&mut canvas, 2.0, &exec),
        Err(EmocanvasError::Cancelled)
    ));
}

#[test]
fn kernel_rejects_non_finite_sigma_and_peaks_at_center() {
    assert!(gaussian_kernel_q16(3, f64::NAN).is_err());
    assert!(gaussian_kernel_q16(3, f64::INFINITY).is_err());
    let k = gaussian_kernel_q16(6, 2.0).unwrap();
    assert!(k.windows(2).take(6).all(|w| w[0] <= w[1]));
    assert_eq!(k[..6].iter().rev().collect::<Vec<_>>(), k[7..].iter().collect::<Vec<_>>());
}
