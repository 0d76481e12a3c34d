use crate::foundation::error::{MaskError, MaskResult};

pub use kurbo::{Point, Rect};

/// Pixel size of the surface a frame is composited for.
///
/// Produced by the host on every layout pass. Zero-sized targets are representable so that the
/// host can report them, but the pipeline refuses to composite them (see [`RenderTarget::validate`]).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub struct RenderTarget {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RenderTarget {
    /// Create a target without validation.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `self` when both dimensions are positive.
    pub fn validate(self) -> MaskResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(MaskError::invalid_dimension(format!(
                "render target must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(self)
    }

    /// Length of the shorter side in pixels.
    pub fn short_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Geometric center in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Full bounds `(0, 0, width, height)`.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }

    pub(crate) fn width_u16(self) -> MaskResult<u16> {
        self.width
            .try_into()
            .map_err(|_| MaskError::invalid_dimension("target width exceeds u16"))
    }

    pub(crate) fn height_u16(self) -> MaskResult<u16> {
        self.height
            .try_into()
            .map_err(|_| MaskError::invalid_dimension("target height exceeds u16"))
    }
}

/// Straight-alpha color packed as `0xAARRGGBB`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Alpha channel.
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels as straight `[r, g, b, a]` floats in `[0, 1]`.
    pub(crate) fn to_unit_rgba(self) -> [f32; 4] {
        [
            f32::from(self.red()) / 255.0,
            f32::from(self.green()) / 255.0,
            f32::from(self.blue()) / 255.0,
            f32::from(self.alpha()) / 255.0,
        ]
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Convert a straight `0xAARRGGBB` color.
    pub fn from_argb(c: Argb) -> Self {
        Self::from_straight_rgba(c.red(), c.green(), c.blue(), c.alpha())
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
