use super::*;
use crate::render::place::{FitPolicy, place};

#[test]
fn fill_rect_covers_exact_pixels() {
    let target = RenderTarget::new(8, 8);
    let rect = kurbo::Rect::new(2.0, 2.0, 6.0, 6.0);
    let bmp = fill_shape(target, &rect, Rgba8Premul::from_straight_rgba(0, 0, 0, 255)).unwrap();
    assert_eq!(bmp.alpha_at(3, 3), 255);
    assert_eq!(bmp.alpha_at(2, 2), 255);
    assert_eq!(bmp.alpha_at(1, 1), 0);
    assert_eq!(bmp.alpha_at(6, 6), 0);
}

#[test]
fn scaled_image_fills_placement_and_leaves_rest_transparent() {
    let src = SourceImage::solid(4, 4, Rgba8Premul::from_straight_rgba(255, 0, 0, 255)).unwrap();
    let target = RenderTarget::new(10, 10);
    let placement = Placement {
        scale: 2.0,
        draw_width: 8,
        draw_height: 8,
    };
    let bmp = draw_scaled_image(target, &src, placement).unwrap();
    for (x, y) in [(0, 0), (7, 7), (3, 5)] {
        let px = bmp.pixel(x, y).unwrap();
        assert_eq!(px.a, 255);
        assert!(px.r >= 250 && px.g <= 5 && px.b <= 5, "{px:?}");
    }
    assert_eq!(bmp.alpha_at(9, 9), 0);
    assert_eq!(bmp.alpha_at(8, 0), 0);
}

#[test]
fn cover_placement_fills_every_pixel() {
    let src = SourceImage::solid(30, 10, Rgba8Premul::from_straight_rgba(0, 0, 255, 255)).unwrap();
    let target = RenderTarget::new(20, 20);
    let p = place(target, src.width(), src.height(), FitPolicy::Cover).unwrap();
    let bmp = draw_scaled_image(target, &src, p).unwrap();
    assert!(bmp.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn oversized_target_is_rejected() {
    let rect = kurbo::Rect::new(0.0, 0.0, 1.0, 1.0);
    let err = fill_shape(
        RenderTarget::new(70_000, 1),
        &rect,
        Rgba8Premul::transparent(),
    )
    .unwrap_err();
    assert!(matches!(err, MaskError::InvalidDimension(_)));
}
