use crate::foundation::core::RenderTarget;
use crate::foundation::error::{MaskError, MaskResult};

/// How a source image is scaled to fill the render target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FitPolicy {
    /// `scale = max(tw / sw, th / sh)`: covers both axes, overflowing at most one.
    #[default]
    Cover,
    /// `scale = tw / min(sw, sh)`: the shorter source side is stretched to the target width.
    FillWidthByShortSide,
}

/// Where and how large the scaled source is drawn. The image is always anchored at `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Uniform scale applied to the source image.
    pub scale: f64,
    /// Drawn width in pixels (`floor(scale * src_w)`).
    pub draw_width: u32,
    /// Drawn height in pixels (`floor(scale * src_h)`).
    pub draw_height: u32,
}

// Absorbs float error so that e.g. (200/300)*300 lands on 200, not 199.
const TRUNC_EPS: f64 = 1e-6;

/// Compute the placement of a `src_w` x `src_h` image inside `target` under `policy`.
pub fn place(
    target: RenderTarget,
    src_w: u32,
    src_h: u32,
    policy: FitPolicy,
) -> MaskResult<Placement> {
    let target = target.validate()?;
    if src_w == 0 || src_h == 0 {
        return Err(MaskError::invalid_dimension(format!(
            "source image must be non-empty, got {src_w}x{src_h}"
        )));
    }
    ensure_rasterizable("render target", target.width, target.height)?;
    ensure_rasterizable("source image", src_w, src_h)?;

    let (tw, th) = (f64::from(target.width), f64::from(target.height));
    let (sw, sh) = (f64::from(src_w), f64::from(src_h));
    let scale = match policy {
        FitPolicy::Cover => (tw / sw).max(th / sh),
        FitPolicy::FillWidthByShortSide => tw / sw.min(sh),
    };

    Ok(Placement {
        scale,
        draw_width: truncate_px(scale * sw),
        draw_height: truncate_px(scale * sh),
    })
}

// vello_cpu addresses surfaces and image paints with u16 sides.
const MAX_RASTER_SIDE: u32 = u16::MAX as u32;

fn ensure_rasterizable(what: &str, w: u32, h: u32) -> MaskResult<()> {
    if w > MAX_RASTER_SIDE || h > MAX_RASTER_SIDE {
        return Err(MaskError::invalid_dimension(format!(
            "{what} {w}x{h} exceeds the rasterizer limit of {MAX_RASTER_SIDE} per side"
        )));
    }
    Ok(())
}

fn truncate_px(v: f64) -> u32 {
    (v + TRUNC_EPS).floor().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/render/place.rs"]
mod tests;
