use crate::foundation::core::{Argb, RenderTarget, Rgba8Premul};
use crate::foundation::error::MaskResult;
use crate::foundation::math::{bayer_offset, lerp_f32, quantize_dithered};
use crate::render::bitmap::Bitmap;
use crate::render::place::FitPolicy;
use crate::render::raster::fill_shape;

/// Geometry the source image is clipped to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaskShape {
    /// Solid disk of radius `short_side / 2`, centered.
    Circle,
    /// Solid rounded rectangle spanning the full target.
    RoundedRect {
        /// Corner radius in pixels; clamped to half the shorter side when generated.
        corner_radius: u32,
    },
    /// Radial soft-edge disk.
    GradientCircle(GradientSpec),
}

impl MaskShape {
    /// Scale policy used to place the source image under this mask.
    pub fn fit_policy(&self) -> FitPolicy {
        match self {
            Self::Circle | Self::GradientCircle(_) => FitPolicy::Cover,
            Self::RoundedRect { .. } => FitPolicy::FillWidthByShortSide,
        }
    }
}

/// Which target dimension the gradient radius is derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusBasis {
    /// `min(width, height) / 2`.
    #[default]
    ShortSide,
    /// `width / 2`.
    HalfWidth,
}

/// Three-stop radial ramp: `inner` on `[0, stop_inner]`, linear fade to `outer` on
/// `[stop_inner, stop_outer]`, `outer` beyond.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    /// Center color.
    #[serde(default = "default_inner_color")]
    pub inner_color: Argb,
    /// Edge color.
    #[serde(default = "default_outer_color")]
    pub outer_color: Argb,
    /// End of the solid inner band, as a fraction of the radius.
    #[serde(default = "default_stop_inner")]
    pub stop_inner: f32,
    /// End of the fade, as a fraction of the radius.
    #[serde(default = "default_stop_outer")]
    pub stop_outer: f32,
    /// Radius basis.
    #[serde(default)]
    pub radius_basis: RadiusBasis,
}

fn default_inner_color() -> Argb {
    Argb(0xFF5D_5D5D)
}

fn default_outer_color() -> Argb {
    Argb(0x00FF_FFFF)
}

fn default_stop_inner() -> f32 {
    0.9
}

fn default_stop_outer() -> f32 {
    1.0
}

impl Default for GradientSpec {
    fn default() -> Self {
        Self {
            inner_color: default_inner_color(),
            outer_color: default_outer_color(),
            stop_inner: default_stop_inner(),
            stop_outer: default_stop_outer(),
            radius_basis: RadiusBasis::default(),
        }
    }
}

impl GradientSpec {
    /// Straight-alpha `[r, g, b, a]` at normalized radius `t`.
    pub(crate) fn ramp(&self, t: f32) -> [f32; 4] {
        let inner = self.inner_color.to_unit_rgba();
        let outer = self.outer_color.to_unit_rgba();
        if t <= self.stop_inner {
            return inner;
        }
        if t >= self.stop_outer {
            return outer;
        }
        let u = (t - self.stop_inner) / (self.stop_outer - self.stop_inner);
        [
            lerp_f32(inner[0], outer[0], u),
            lerp_f32(inner[1], outer[1], u),
            lerp_f32(inner[2], outer[2], u),
            lerp_f32(inner[3], outer[3], u),
        ]
    }

    /// Premultiplied ramp color at normalized radius `t` (no dithering).
    pub fn sample(&self, t: f32) -> Rgba8Premul {
        let [r, g, b, a] = self.ramp(t);
        premul_quantize([r, g, b, a], 1.0, 0.0)
    }

    fn radius(&self, target: RenderTarget) -> f64 {
        match self.radius_basis {
            RadiusBasis::ShortSide => f64::from(target.short_side()) / 2.0,
            RadiusBasis::HalfWidth => f64::from(target.width) / 2.0,
        }
    }
}

/// A generated mask: per-pixel coverage for one `(target, shape)` pair.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskBitmap {
    shape: MaskShape,
    bitmap: Bitmap,
}

impl MaskBitmap {
    /// Shape this mask was generated from.
    pub fn shape(&self) -> &MaskShape {
        &self.shape
    }

    /// Underlying premultiplied pixels.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Target size this mask was generated for.
    pub fn target(&self) -> RenderTarget {
        self.bitmap.target()
    }

    /// Coverage at `(x, y)`.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.bitmap.alpha_at(x, y)
    }
}

/// Corner radius actually used for `target`: at most half the shorter side.
pub fn effective_corner_radius(target: RenderTarget, corner_radius: u32) -> f64 {
    f64::from(corner_radius).min(f64::from(target.short_side()) / 2.0)
}

/// Render the mask bitmap for `shape` at `target` size. Pure and deterministic.
#[tracing::instrument(level = "debug", skip(shape))]
pub fn generate_mask(target: RenderTarget, shape: &MaskShape) -> MaskResult<MaskBitmap> {
    let target = target.validate()?;
    // Only alpha matters to the compositor; solid masks are painted opaque black.
    let solid = Rgba8Premul::from_straight_rgba(0, 0, 0, 255);

    let bitmap = match shape {
        MaskShape::Circle => {
            let r = f64::from(target.short_side()) / 2.0;
            fill_shape(target, &kurbo::Circle::new(target.center(), r), solid)?
        }
        MaskShape::RoundedRect { corner_radius } => {
            let r = effective_corner_radius(target, *corner_radius);
            fill_shape(target, &target.bounds().to_rounded_rect(r), solid)?
        }
        MaskShape::GradientCircle(spec) => radial_gradient_disk(target, spec),
    };

    Ok(MaskBitmap {
        shape: *shape,
        bitmap,
    })
}

fn radial_gradient_disk(target: RenderTarget, spec: &GradientSpec) -> Bitmap {
    let mut out = Bitmap::transparent(target);
    let radius = spec.radius(target);
    if radius <= 0.0 {
        return out;
    }

    let center = target.center();
    let w = target.width as usize;
    let data = out.data_mut();
    for y in 0..target.height {
        let dy = f64::from(y) + 0.5 - center.y;
        for x in 0..target.width {
            let dx = f64::from(x) + 0.5 - center.x;
            let d = dx.hypot(dy);
            // Analytic edge coverage of the disk boundary.
            let coverage = (radius - d + 0.5).clamp(0.0, 1.0) as f32;
            if coverage <= 0.0 {
                continue;
            }
            let color = spec.ramp((d / radius) as f32);
            let px = premul_quantize(color, coverage, bayer_offset(x, y));
            let idx = ((y as usize) * w + (x as usize)) * 4;
            data[idx..idx + 4].copy_from_slice(&px.to_array());
        }
    }
    out
}

fn premul_quantize(straight: [f32; 4], coverage: f32, dither: f32) -> Rgba8Premul {
    let a = (straight[3] * coverage).clamp(0.0, 1.0);
    Rgba8Premul {
        r: quantize_dithered(straight[0] * a, dither),
        g: quantize_dithered(straight[1] * a, dither),
        b: quantize_dithered(straight[2] * a, dither),
        a: quantize_dithered(a, dither),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mask.rs"]
mod tests;
