use crate::foundation::core::RenderTarget;
use crate::render::bitmap::Bitmap;
use crate::render::blend::over;

/// Where a finished frame is drawn.
///
/// Implemented by the host (a canvas, a window buffer, a test fixture). The bitmap is borrowed
/// for the duration of the call only.
pub trait DrawingSurface {
    /// Draw `bitmap` at the origin with source-over.
    fn blit(&mut self, bitmap: &Bitmap);
}

/// In-memory premultiplied RGBA8 surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    pixels: Bitmap,
    blits: u64,
}

impl PixelSurface {
    /// Transparent surface of `target` size.
    pub fn new(target: RenderTarget) -> Self {
        Self {
            pixels: Bitmap::transparent(target),
            blits: 0,
        }
    }

    /// Current contents.
    pub fn pixels(&self) -> &Bitmap {
        &self.pixels
    }

    /// Number of bitmaps drawn so far.
    pub fn blit_count(&self) -> u64 {
        self.blits
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.data_mut().fill(0);
    }
}

impl DrawingSurface for PixelSurface {
    fn blit(&mut self, bitmap: &Bitmap) {
        self.blits += 1;
        let w = self.pixels.width().min(bitmap.width()) as usize;
        let h = self.pixels.height().min(bitmap.height()) as usize;
        let dst_stride = self.pixels.width() as usize * 4;
        let src_stride = bitmap.width() as usize * 4;

        let src = bitmap.data();
        let dst = self.pixels.data_mut();
        for y in 0..h {
            let d = &mut dst[y * dst_stride..y * dst_stride + w * 4];
            let s = &src[y * src_stride..y * src_stride + w * 4];
            for (dp, sp) in d.chunks_exact_mut(4).zip(s.chunks_exact(4)) {
                let out = over([dp[0], dp[1], dp[2], dp[3]], [sp[0], sp[1], sp[2], sp[3]]);
                dp.copy_from_slice(&out);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/surface.rs"]
mod tests;
