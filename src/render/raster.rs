//! Thin layer over `vello_cpu` for the anti-aliased parts of the pipeline.
//!
//! Every call builds its own `RenderContext` and `Pixmap`; nothing is reused across calls.

use std::sync::Arc;

use kurbo::Shape;

use crate::assets::source::SourceImage;
use crate::foundation::core::{RenderTarget, Rgba8Premul};
use crate::foundation::error::{MaskError, MaskResult};
use crate::render::bitmap::Bitmap;
use crate::render::place::Placement;

const PATH_TOLERANCE: f64 = 0.1;

/// Fill `shape` with a solid color onto a transparent `target`-sized bitmap.
pub(crate) fn fill_shape(
    target: RenderTarget,
    shape: &impl Shape,
    color: Rgba8Premul,
) -> MaskResult<Bitmap> {
    let mut path = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(PATH_TOLERANCE) {
        path.push(el);
    }

    render_with(target, |ctx| {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(premul_to_color(color));
        ctx.fill_path(&path);
    })
}

/// Draw `source` scaled per `placement`, anchored at the origin, onto a transparent bitmap.
pub(crate) fn draw_scaled_image(
    target: RenderTarget,
    source: &SourceImage,
    placement: Placement,
) -> MaskResult<Bitmap> {
    let paint = image_paint(source)?;
    let sx = f64::from(placement.draw_width) / f64::from(source.width());
    let sy = f64::from(placement.draw_height) / f64::from(source.height());
    let (src_w, src_h) = (f64::from(source.width()), f64::from(source.height()));

    render_with(target, |ctx| {
        ctx.set_transform(vello_cpu::kurbo::Affine::scale_non_uniform(sx, sy));
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(paint);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, src_w, src_h));
    })
}

fn render_with(
    target: RenderTarget,
    draw: impl FnOnce(&mut vello_cpu::RenderContext),
) -> MaskResult<Bitmap> {
    let target = target.validate()?;
    let (w, h) = (target.width_u16()?, target.height_u16()?);

    let mut ctx = vello_cpu::RenderContext::new(w, h);
    ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
    draw(&mut ctx);
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);
    Bitmap::from_premul_rgba8(
        target.width,
        target.height,
        pixmap.data_as_u8_slice().to_vec(),
    )
}

fn image_paint(source: &SourceImage) -> MaskResult<vello_cpu::Image> {
    let w: u16 = source
        .width()
        .try_into()
        .map_err(|_| MaskError::invalid_dimension("source width exceeds u16"))?;
    let h: u16 = source
        .height()
        .try_into()
        .map_err(|_| MaskError::invalid_dimension("source height exceeds u16"))?;

    // Pixmap stores PremulRgba8; source bytes are already premultiplied.
    let pixels = source
        .rgba8_premul()
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    let may_have_opacities = source.rgba8_premul().chunks_exact(4).any(|px| px[3] != 255);
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);

    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premul_to_color(c: Rgba8Premul) -> vello_cpu::peniko::Color {
    if c.a == 0 {
        return vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 0);
    }
    let a = u16::from(c.a);
    let unpremul = |v: u8| (((u16::from(v) * 255) + a / 2) / a).min(255) as u8;
    vello_cpu::peniko::Color::from_rgba8(unpremul(c.r), unpremul(c.g), unpremul(c.b), c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
