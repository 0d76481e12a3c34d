use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn mul_div255_identity_and_zero() {
    for x in 0u16..=255 {
        assert_eq!(mul_div255_u16(x, 255), x);
        assert_eq!(mul_div255_u16(x, 0), 0);
    }
}

#[test]
fn dither_offsets_stay_inside_half_step() {
    for y in 0..4 {
        for x in 0..4 {
            let o = bayer_offset(x, y);
            assert!(o > -0.5 && o < 0.5, "offset {o} at ({x},{y})");
        }
    }
}

#[test]
fn dithered_quantize_preserves_endpoints() {
    for y in 0..4 {
        for x in 0..4 {
            let o = bayer_offset(x, y);
            assert_eq!(quantize_dithered(0.0, o), 0);
            assert_eq!(quantize_dithered(1.0, o), 255);
        }
    }
}

#[test]
fn lerp_hits_endpoints() {
    assert_eq!(lerp_f32(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp_f32(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp_f32(2.0, 6.0, 0.5), 4.0);
}
