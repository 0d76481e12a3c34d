use crate::foundation::core::Argb;
use crate::foundation::error::{MaskError, MaskResult};
use crate::render::composite::RingSpec;
use crate::render::mask::{GradientSpec, MaskShape};

/// Mask geometry selector as it appears in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Inscribed solid circle.
    #[default]
    Circle,
    /// Full-target rounded rectangle.
    RoundedRect,
    /// Radial soft-edge circle with an optional ring border.
    GradientCircle,
}

/// Host-facing view configuration.
///
/// Every field has a default, so `{}` is a valid configuration. Colors are `0xAARRGGBB`
/// straight-alpha integers.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "snake_case")]
pub struct MaskViewConfig {
    /// Mask geometry.
    #[serde(default)]
    pub shape: ShapeKind,
    /// Corner radius for [`ShapeKind::RoundedRect`], in pixels.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: u32,
    /// Ring stroke width for [`ShapeKind::GradientCircle`]. Zero disables the ring.
    #[serde(default = "default_border_ring_width")]
    pub border_ring_width: u32,
    /// Inset of the ring's center line from the inscribed circle.
    #[serde(default = "default_border_ring_gap")]
    pub border_ring_gap: u32,
    /// Ring color.
    #[serde(default = "default_ring_color")]
    pub ring_color: Argb,
    /// Gradient parameters for [`ShapeKind::GradientCircle`].
    #[serde(default)]
    pub gradient: GradientSpec,
}

fn default_corner_radius() -> u32 {
    10
}

fn default_border_ring_width() -> u32 {
    7
}

fn default_border_ring_gap() -> u32 {
    5
}

fn default_ring_color() -> Argb {
    Argb::WHITE
}

impl Default for MaskViewConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::default(),
            corner_radius: default_corner_radius(),
            border_ring_width: default_border_ring_width(),
            border_ring_gap: default_border_ring_gap(),
            ring_color: default_ring_color(),
            gradient: GradientSpec::default(),
        }
    }
}

impl MaskViewConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(s: &str) -> MaskResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| MaskError::serde(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> MaskResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MaskError::serde(e.to_string()))
    }

    /// Check gradient stops: finite, within `[0, 1]`, and ordered.
    pub fn validate(&self) -> MaskResult<()> {
        let g = &self.gradient;
        for (name, v) in [("stop_inner", g.stop_inner), ("stop_outer", g.stop_outer)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(MaskError::validation(format!(
                    "gradient.{name} must be within [0, 1], got {v}"
                )));
            }
        }
        if g.stop_inner > g.stop_outer {
            return Err(MaskError::validation(format!(
                "gradient.stop_inner ({}) must not exceed gradient.stop_outer ({})",
                g.stop_inner, g.stop_outer
            )));
        }
        Ok(())
    }

    /// Mask shape this configuration renders.
    pub fn mask_shape(&self) -> MaskShape {
        match self.shape {
            ShapeKind::Circle => MaskShape::Circle,
            ShapeKind::RoundedRect => MaskShape::RoundedRect {
                corner_radius: self.corner_radius,
            },
            ShapeKind::GradientCircle => MaskShape::GradientCircle(self.gradient),
        }
    }

    /// Ring border, present only for gradient circles with a positive width.
    pub fn ring(&self) -> Option<RingSpec> {
        (self.shape == ShapeKind::GradientCircle && self.border_ring_width > 0).then_some(
            RingSpec {
                color: self.ring_color,
                stroke_width: self.border_ring_width,
                inset_gap: self.border_ring_gap,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/config.rs"]
mod tests;
