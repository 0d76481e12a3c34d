use crate::foundation::error::{MaskError, MaskResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff rules used by the compositor, on premultiplied pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BlendRule {
    /// `D' = S + D * (1 - Sa)`.
    #[default]
    SrcOver,
    /// `D' = D * Sa`. Clips the destination to the source's coverage.
    DstIn,
    /// `D' = S * Da`. Confines the source to the destination's coverage.
    SrcIn,
}

pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn dst_in(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    scale(dst, src[3])
}

pub fn src_in(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    scale(src, dst[3])
}

fn scale(px: PremulRgba8, w: u8) -> PremulRgba8 {
    match w {
        0 => [0; 4],
        255 => px,
        _ => {
            let w16 = u16::from(w);
            [
                mul_div255_u8(u16::from(px[0]), w16),
                mul_div255_u8(u16::from(px[1]), w16),
                mul_div255_u8(u16::from(px[2]), w16),
                mul_div255_u8(u16::from(px[3]), w16),
            ]
        }
    }
}

/// Apply `rule` to one premultiplied pixel pair.
pub fn blend_pixel(dst: PremulRgba8, src: PremulRgba8, rule: BlendRule) -> PremulRgba8 {
    match rule {
        BlendRule::SrcOver => over(dst, src),
        BlendRule::DstIn => dst_in(dst, src),
        BlendRule::SrcIn => src_in(dst, src),
    }
}

/// Blend `src` onto `dst` pixel-for-pixel. Both buffers must have the same length.
pub fn blend_in_place(dst: &mut [u8], src: &[u8], rule: BlendRule) -> MaskResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(MaskError::dimension_mismatch(
            "blend_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = blend_pixel([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], rule);
        d.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/blend.rs"]
mod tests;
