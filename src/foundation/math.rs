pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Quantize a `[0, 1]` channel value to `u8`, nudged by an ordered-dither offset in `(-0.5, 0.5)`.
///
/// Exact endpoints survive any offset: `0.0 -> 0` and `1.0 -> 255`.
pub(crate) fn quantize_dithered(v: f32, offset: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + offset)
        .round()
        .clamp(0.0, 255.0) as u8
}

const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Ordered-dither offset for pixel `(x, y)`, in `[-15/32, 15/32]`.
pub(crate) fn bayer_offset(x: u32, y: u32) -> f32 {
    let v = BAYER_4X4[(y & 3) as usize][(x & 3) as usize];
    (f32::from(v) + 0.5) / 16.0 - 0.5
}

pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
