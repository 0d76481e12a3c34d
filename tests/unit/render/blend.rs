use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_dst_transparent_returns_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_half_alpha_mixes() {
    let dst = [0, 0, 255, 255];
    let src = [128, 0, 0, 128];
    let out = over(dst, src);
    assert_eq!(out[3], 255);
    assert_eq!(out[0], 128);
    assert_eq!(out[2], mul_div255_u8(255, 127));
}

#[test]
fn dst_in_keeps_dst_scaled_by_src_alpha() {
    let dst = [200, 100, 50, 255];
    assert_eq!(dst_in(dst, [9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(dst_in(dst, [0, 0, 0, 255]), dst);
    let half = dst_in(dst, [0, 0, 0, 128]);
    assert_eq!(half[3], mul_div255_u8(255, 128));
    assert_eq!(half[0], mul_div255_u8(200, 128));
}

#[test]
fn dst_in_ignores_src_color() {
    let dst = [10, 20, 30, 40];
    assert_eq!(dst_in(dst, [255, 0, 0, 255]), dst_in(dst, [0, 0, 255, 255]));
}

#[test]
fn src_in_keeps_src_scaled_by_dst_alpha() {
    let src = [255, 255, 255, 255];
    assert_eq!(src_in([0, 0, 0, 0], src), [0, 0, 0, 0]);
    assert_eq!(src_in([1, 2, 3, 255], src), src);
    assert_eq!(src_in([0, 0, 0, 64], src)[3], 64);
}

#[test]
fn blend_in_place_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    let src = vec![0u8; 4];
    assert!(matches!(
        blend_in_place(&mut dst, &src, BlendRule::SrcOver),
        Err(MaskError::DimensionMismatch(_))
    ));
}

#[test]
fn blend_in_place_applies_rule_per_pixel() {
    let mut dst = vec![10, 20, 30, 255, 40, 50, 60, 255];
    let mask = vec![0, 0, 0, 255, 0, 0, 0, 0];
    blend_in_place(&mut dst, &mask, BlendRule::DstIn).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255, 0, 0, 0, 0]);
}
