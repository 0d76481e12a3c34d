use super::*;

fn filled(w: u32, h: u32, px: [u8; 4]) -> Bitmap {
    let data = px.repeat((w * h) as usize);
    Bitmap::from_premul_rgba8(w, h, data).unwrap()
}

#[test]
fn blit_source_overs_onto_existing_pixels() {
    let mut surface = PixelSurface::new(RenderTarget::new(2, 2));
    surface.blit(&filled(2, 2, [0, 0, 255, 255]));
    surface.blit(&filled(2, 2, [128, 0, 0, 128]));

    let px = surface.pixels().pixel(1, 1).unwrap().to_array();
    assert_eq!(px[0], 128);
    assert_eq!(px[3], 255);
    assert!(px[2].abs_diff(127) <= 1, "{px:?}");
    assert_eq!(surface.blit_count(), 2);
}

#[test]
fn transparent_bitmap_leaves_surface_untouched() {
    let mut surface = PixelSurface::new(RenderTarget::new(3, 3));
    surface.blit(&filled(3, 3, [10, 20, 30, 255]));
    let before = surface.pixels().clone();
    surface.blit(&Bitmap::transparent(RenderTarget::new(3, 3)));
    assert_eq!(surface.pixels(), &before);
}

#[test]
fn larger_bitmap_is_clipped_at_surface_edge() {
    let mut surface = PixelSurface::new(RenderTarget::new(2, 3));
    surface.blit(&filled(4, 2, [255, 255, 255, 255]));

    assert_eq!(surface.pixels().pixel(1, 1).unwrap().a, 255);
    assert_eq!(surface.pixels().pixel(1, 2).unwrap().a, 0);

    surface.clear();
    assert!(surface.pixels().data().iter().all(|&b| b == 0));
}
