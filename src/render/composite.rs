use std::f64::consts::TAU;

use crate::assets::source::SourceImage;
use crate::foundation::core::{Argb, RenderTarget, Rgba8Premul};
use crate::foundation::error::MaskResult;
use crate::render::bitmap::Bitmap;
use crate::render::blend::{BlendRule, blend_in_place};
use crate::render::mask::MaskBitmap;
use crate::render::place::Placement;
use crate::render::raster::{draw_scaled_image, fill_shape};

/// Solid ring drawn over the masked image, confined to the mask's coverage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RingSpec {
    /// Ring color.
    pub color: Argb,
    /// Stroke width in pixels. Zero disables the ring.
    pub stroke_width: u32,
    /// Distance between the target's inscribed circle and the ring's center line.
    pub inset_gap: u32,
}

impl RingSpec {
    /// Radius of the ring's center line for `target`.
    pub fn center_radius(&self, target: RenderTarget) -> f64 {
        f64::from(target.short_side()) / 2.0 - f64::from(self.inset_gap)
    }
}

/// Draw the DST layer: `source` scaled per `placement` onto a transparent `target` surface.
pub fn draw_scaled_source(
    target: RenderTarget,
    source: &SourceImage,
    placement: Placement,
) -> MaskResult<Bitmap> {
    draw_scaled_image(target, source, placement)
}

/// Clip `scaled_source` to `mask` (destination-in), then lay an optional ring on top.
///
/// Both inputs must be exactly `target` sized; otherwise nothing is composited and
/// [`crate::MaskError::DimensionMismatch`] is returned.
#[tracing::instrument(level = "debug", skip(scaled_source, mask))]
pub fn composite(
    target: RenderTarget,
    scaled_source: Bitmap,
    mask: &MaskBitmap,
    ring: Option<&RingSpec>,
) -> MaskResult<Bitmap> {
    scaled_source.ensure_size(target, "scaled source")?;
    mask.bitmap().ensure_size(target, "mask")?;

    let mut out = scaled_source;
    blend_in_place(out.data_mut(), mask.bitmap().data(), BlendRule::DstIn)?;

    if let Some(ring) = ring
        && let Some(layer) = ring_layer(target, ring, mask)?
    {
        blend_in_place(out.data_mut(), layer.data(), BlendRule::SrcOver)?;
    }

    Ok(out)
}

/// Rasterize the ring alone, then keep only the part inside the mask (source-in).
fn ring_layer(
    target: RenderTarget,
    ring: &RingSpec,
    mask: &MaskBitmap,
) -> MaskResult<Option<Bitmap>> {
    let center_r = ring.center_radius(target);
    let half = f64::from(ring.stroke_width) / 2.0;
    if ring.stroke_width == 0 || center_r + half <= 0.0 || ring.color.alpha() == 0 {
        return Ok(None);
    }

    let outer = center_r + half;
    let inner = (center_r - half).max(0.0);
    let annulus = kurbo::CircleSegment::new(target.center(), outer, inner, 0.0, TAU);
    let stroke = fill_shape(target, &annulus, Rgba8Premul::from_argb(ring.color))?;

    // Mask coverage is the destination, the stroke the source: S * Da.
    let mut layer = mask.bitmap().clone();
    blend_in_place(layer.data_mut(), stroke.data(), BlendRule::SrcIn)?;
    Ok(Some(layer))
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
