use anyhow::Context;

use crate::{MaskResult, assets::source::SourceImage};

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> MaskResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    SourceImage::from_straight_rgba8(width, height, rgba.into_raw())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
