use crate::assets::source::SourceImage;
use crate::foundation::core::RenderTarget;
use crate::foundation::error::MaskResult;
use crate::render::cache::{ReclaimSignal, RenderCache, RenderStats};
use crate::view::config::MaskViewConfig;
use crate::view::surface::DrawingSurface;

/// A shape-masked image view: configuration, current layout and source, and a render cache.
///
/// The host drives it with the layout/source/paint callbacks. Every change that affects the
/// output invalidates the cache; unchanged values are ignored.
#[derive(Debug)]
pub struct MaskView {
    config: MaskViewConfig,
    target: Option<RenderTarget>,
    source: Option<SourceImage>,
    cache: RenderCache,
}

impl MaskView {
    /// Create a view after validating `config`.
    pub fn new(config: MaskViewConfig) -> MaskResult<Self> {
        Self::with_reclaim_signal(config, ReclaimSignal::new())
    }

    /// Create a view whose cache listens to a host-wide reclaim signal.
    pub fn with_reclaim_signal(config: MaskViewConfig, signal: ReclaimSignal) -> MaskResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            target: None,
            source: None,
            cache: RenderCache::with_reclaim_signal(signal),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &MaskViewConfig {
        &self.config
    }

    /// Last size reported by layout.
    pub fn target(&self) -> Option<RenderTarget> {
        self.target
    }

    /// Current source image.
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    /// Cache counters.
    pub fn stats(&self) -> RenderStats {
        self.cache.stats()
    }

    /// Handle the host fires under memory pressure.
    pub fn reclaim_signal(&self) -> ReclaimSignal {
        self.cache.reclaim_signal()
    }

    /// Record the size assigned by layout.
    pub fn on_layout(&mut self, target: RenderTarget) {
        if self.target == Some(target) {
            return;
        }
        tracing::debug!(w = target.width, h = target.height, "layout changed");
        self.target = Some(target);
        self.cache.invalidate();
    }

    /// Replace the source image. The cached mask survives; it does not depend on the source.
    pub fn on_source_image_changed(&mut self, source: SourceImage) {
        if let Some(current) = &self.source
            && (current.width(), current.height()) == (source.width(), source.height())
            && (current.shares_pixels_with(&source) || *current == source)
        {
            return;
        }
        self.source = Some(source);
        self.cache.invalidate_composite();
    }

    /// Draw the current frame onto `surface`.
    ///
    /// Returns `Ok(false)` when nothing was drawn: no layout or source yet, or a zero-sized
    /// target or source.
    pub fn on_paint<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> MaskResult<bool> {
        let (Some(target), Some(source)) = (self.target, self.source.as_ref()) else {
            tracing::debug!("paint before layout or source; nothing drawn");
            return Ok(false);
        };
        let shape = self.config.mask_shape();
        let ring = self.config.ring();

        match self
            .cache
            .get_or_compute(target, source, &shape, ring.as_ref())?
        {
            Some(frame) => {
                surface.blit(frame);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop all cached rendering; the next paint recomputes.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: MaskViewConfig) -> MaskResult<()> {
        config.validate()?;
        self.update(|c| *c = config);
        Ok(())
    }

    /// Ring stroke width; zero hides the ring.
    pub fn set_border_ring_width(&mut self, width: u32) {
        self.update(|c| c.border_ring_width = width);
    }

    /// Ring inset from the inscribed circle.
    pub fn set_border_ring_gap(&mut self, gap: u32) {
        self.update(|c| c.border_ring_gap = gap);
    }

    /// Corner radius of the rounded rectangle.
    pub fn set_corner_radius(&mut self, radius: u32) {
        self.update(|c| c.corner_radius = radius);
    }

    fn update(&mut self, f: impl FnOnce(&mut MaskViewConfig)) {
        let before = self.config;
        f(&mut self.config);
        if self.config != before {
            self.cache.invalidate();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/host.rs"]
mod tests;
