use crate::foundation::core::{RenderTarget, Rgba8Premul};
use crate::foundation::error::{MaskError, MaskResult};

/// A premultiplied RGBA8 pixel buffer (row-major, tightly packed).
///
/// This is both the working surface type of the compositor and the type of a finished
/// composite handed to the host for blitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// A fully transparent bitmap of `target` size.
    pub fn transparent(target: RenderTarget) -> Self {
        Self {
            width: target.width,
            height: target.height,
            data: vec![0; target.byte_len()],
        }
    }

    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul_rgba8(width: u32, height: u32, data: Vec<u8>) -> MaskResult<Self> {
        let expected = RenderTarget::new(width, height).byte_len();
        if data.len() != expected {
            return Err(MaskError::dimension_mismatch(format!(
                "bitmap {width}x{height} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size as a [`RenderTarget`].
    pub fn target(&self) -> RenderTarget {
        RenderTarget::new(self.width, self.height)
    }

    /// Premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.data[idx..idx + 4];
        Some(Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    /// Alpha at `(x, y)`; out-of-bounds reads are transparent.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.pixel(x, y).map_or(0, |p| p.a)
    }

    /// Fail with [`MaskError::DimensionMismatch`] unless this bitmap is exactly `target` sized.
    pub(crate) fn ensure_size(&self, target: RenderTarget, what: &str) -> MaskResult<()> {
        if self.target() != target || self.data.len() != target.byte_len() {
            return Err(MaskError::dimension_mismatch(format!(
                "{what} is {}x{}, target is {}x{}",
                self.width, self.height, target.width, target.height
            )));
        }
        Ok(())
    }

    /// Convert to a straight-alpha `image::RgbaImage` for saving or inspection.
    pub fn to_rgba_image(&self) -> MaskResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        for px in straight.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| MaskError::dimension_mismatch("bitmap buffer does not fit image"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/bitmap.rs"]
mod tests;
