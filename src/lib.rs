//! Shapemask renders a rectangular source image clipped to a geometric mask.
//!
//! Supported masks are a solid circle, a full-target rounded rectangle, and a radial-gradient
//! soft-edge circle with an optional solid ring border. The last composited frame is memoized
//! per view and survives repeated paints until something invalidates it.
//!
//! # Pipeline overview
//!
//! 1. **Place**: `RenderTarget + source size -> Placement` ([`place`], per [`FitPolicy`])
//! 2. **Mask**: `RenderTarget + MaskShape -> MaskBitmap` ([`generate_mask`])
//! 3. **Composite**: scaled source, destination-in with the mask, then an optional ring drawn
//!    source-in against the mask and laid over the result ([`composite`])
//! 4. **Cache**: [`RenderCache`] holds the last frame and mask until invalidated, re-sized,
//!    or reclaimed through a [`ReclaimSignal`]
//!
//! [`MaskView`] wires these steps to host callbacks (`on_layout`, `on_source_image_changed`,
//! `on_paint`) and a [`DrawingSurface`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: mask generation and compositing are pure for a given input.
//! - **Premultiplied RGBA8** end-to-end: every bitmap holds premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod render;
mod view;

pub use assets::decode::decode_image;
pub use assets::source::SourceImage;
pub use foundation::core::{Argb, Point, Rect, RenderTarget, Rgba8Premul};
pub use foundation::error::{MaskError, MaskResult};
pub use render::bitmap::Bitmap;
pub use render::blend::{BlendRule, blend_in_place, blend_pixel};
pub use render::cache::{ReclaimSignal, RenderCache, RenderStats};
pub use render::composite::{RingSpec, composite, draw_scaled_source};
pub use render::mask::{
    GradientSpec, MaskBitmap, MaskShape, RadiusBasis, effective_corner_radius, generate_mask,
};
pub use render::place::{FitPolicy, Placement, place};
pub use view::config::{MaskViewConfig, ShapeKind};
pub use view::host::MaskView;
pub use view::surface::{DrawingSurface, PixelSurface};
