use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::assets::source::SourceImage;
use crate::foundation::core::RenderTarget;
use crate::foundation::error::{MaskError, MaskResult};
use crate::render::bitmap::Bitmap;
use crate::render::composite::{RingSpec, composite, draw_scaled_source};
use crate::render::mask::{MaskBitmap, MaskShape, generate_mask};
use crate::render::place::place;

/// Memory-pressure signal for cached bitmaps.
///
/// Cloneable and `Send + Sync`: a host may fire it from any thread. Firing marks every bitmap
/// stored before the call as reclaimed. Caches observe this lazily, at the start of their next
/// access, and drop what was reclaimed. The transition is one-way.
#[derive(Clone, Debug, Default)]
pub struct ReclaimSignal {
    epoch: Arc<AtomicU64>,
}

impl ReclaimSignal {
    /// Create a fresh signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reclaim everything cached so far.
    pub fn fire(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }
}

/// Instrumentation counters for a [`RenderCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Masks rendered by the mask generator.
    pub mask_generations: u64,
    /// Composites produced by the compositor.
    pub composites: u64,
    /// Calls served from the cached composite.
    pub cache_hits: u64,
    /// Cached bitmaps found reclaimed on access.
    pub reclaims: u64,
    /// Explicit invalidations (including stale-key clears).
    pub invalidations: u64,
    /// Frames skipped because of an invalid dimension.
    pub skipped_frames: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct CompositeKey {
    target: RenderTarget,
    shape: MaskShape,
    ring: Option<RingSpec>,
}

#[derive(Debug)]
struct Resident<T> {
    value: T,
    epoch: u64,
}

/// Holds at most one composite and one mask, each tagged with the reclaim epoch it was stored at.
#[derive(Debug, Default)]
struct CacheSlot {
    composite: Option<(CompositeKey, Resident<Bitmap>)>,
    mask: Option<Resident<MaskBitmap>>,
}

impl CacheSlot {
    /// `Ok(true)` when a composite is resident. A reclaimed composite is dropped and reported.
    fn check_composite(&mut self, epoch: u64) -> MaskResult<bool> {
        match &self.composite {
            None => Ok(false),
            Some((_, r)) if r.epoch == epoch => Ok(true),
            Some(_) => {
                self.composite = None;
                Err(MaskError::resource_unavailable("cached composite was reclaimed"))
            }
        }
    }

    /// `Ok(true)` when a mask is resident. A reclaimed mask is dropped and reported.
    fn check_mask(&mut self, epoch: u64) -> MaskResult<bool> {
        match &self.mask {
            None => Ok(false),
            Some(r) if r.epoch == epoch => Ok(true),
            Some(_) => {
                self.mask = None;
                Err(MaskError::resource_unavailable("cached mask was reclaimed"))
            }
        }
    }

    fn composite(&self) -> Option<&Bitmap> {
        self.composite.as_ref().map(|(_, r)| &r.value)
    }

    fn mask(&self) -> Option<&MaskBitmap> {
        self.mask.as_ref().map(|r| &r.value)
    }

    /// Drop entries produced for a different key. Returns `true` if anything was dropped.
    fn release_mismatched(&mut self, key: &CompositeKey) -> bool {
        let mut dropped = false;
        if self.composite.as_ref().is_some_and(|(k, _)| k != key) {
            self.composite = None;
            dropped = true;
        }
        if self
            .mask()
            .is_some_and(|m| m.target() != key.target || *m.shape() != key.shape)
        {
            self.mask = None;
            dropped = true;
        }
        dropped
    }
}

/// Single-slot memoization of the last composited frame for one view.
///
/// Not shared across views and not thread-safe; only the [`ReclaimSignal`] crosses threads.
/// Returned bitmaps are borrowed from the cache, so they cannot outlive the next mutation
/// (including [`RenderCache::invalidate`]).
#[derive(Debug, Default)]
pub struct RenderCache {
    slot: CacheSlot,
    signal: ReclaimSignal,
    stats: RenderStats,
}

impl RenderCache {
    /// Create an empty cache with its own reclaim signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache listening to `signal`.
    pub fn with_reclaim_signal(signal: ReclaimSignal) -> Self {
        Self {
            signal,
            ..Self::default()
        }
    }

    /// Handle to this cache's reclaim signal.
    pub fn reclaim_signal(&self) -> ReclaimSignal {
        self.signal.clone()
    }

    /// Snapshot of the instrumentation counters.
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Return the cached composite for these inputs, computing it if needed.
    ///
    /// `Ok(None)` means nothing can be drawn this frame: the target or source has a zero
    /// dimension, or a side beyond the rasterizer's `u16` range, and nothing was cached. In that case any previous result is returned unchanged
    /// instead. [`MaskError::DimensionMismatch`] is surfaced and nothing is stored.
    #[tracing::instrument(level = "debug", skip_all, fields(w = target.width, h = target.height))]
    pub fn get_or_compute(
        &mut self,
        target: RenderTarget,
        source: &SourceImage,
        shape: &MaskShape,
        ring: Option<&RingSpec>,
    ) -> MaskResult<Option<&Bitmap>> {
        let epoch = self.signal.epoch();

        let placement = match place(target, source.width(), source.height(), shape.fit_policy()) {
            Ok(p) => p,
            Err(MaskError::InvalidDimension(msg)) => {
                tracing::warn!(%msg, "skipping composite");
                self.stats.skipped_frames += 1;
                let resident = self.resident_composite(epoch);
                return Ok(if resident { self.slot.composite() } else { None });
            }
            Err(e) => return Err(e),
        };

        let key = CompositeKey {
            target,
            shape: *shape,
            ring: ring.copied(),
        };
        if self.slot.release_mismatched(&key) {
            tracing::warn!("cache inputs changed without invalidation; dropping stale entries");
            self.stats.invalidations += 1;
        }

        if self.resident_composite(epoch) {
            self.stats.cache_hits += 1;
            tracing::trace!("composite cache hit");
            return Ok(self.slot.composite());
        }

        if !self.resident_mask(epoch) {
            let mask = generate_mask(target, shape)?;
            self.stats.mask_generations += 1;
            self.slot.mask = Some(Resident { value: mask, epoch });
        }
        let mask = self
            .slot
            .mask()
            .ok_or_else(|| MaskError::resource_unavailable("mask missing after store"))?;

        let scaled = draw_scaled_source(target, source, placement)?;
        let out = composite(target, scaled, mask, ring)?;
        self.stats.composites += 1;
        tracing::debug!(scale = placement.scale, "composited frame");

        self.slot.composite = Some((key, Resident { value: out, epoch }));
        Ok(self.slot.composite())
    }

    /// The cached composite, if it is still resident.
    pub fn cached(&mut self) -> Option<&Bitmap> {
        let epoch = self.signal.epoch();
        if self.resident_composite(epoch) {
            self.slot.composite()
        } else {
            None
        }
    }

    /// `true` when a resident mask is cached.
    pub fn has_mask(&mut self) -> bool {
        let epoch = self.signal.epoch();
        self.resident_mask(epoch)
    }

    /// Drop the cached composite and release the cached mask.
    pub fn invalidate(&mut self) {
        self.slot.composite = None;
        self.slot.mask = None;
        self.stats.invalidations += 1;
        tracing::debug!("render cache invalidated");
    }

    /// Drop only the cached composite, keeping the mask.
    ///
    /// For callers that know only the source image changed: the mask depends on target and
    /// shape alone.
    pub fn invalidate_composite(&mut self) {
        self.slot.composite = None;
        self.stats.invalidations += 1;
        tracing::debug!("render cache composite invalidated; mask kept");
    }

    fn resident_mask(&mut self, epoch: u64) -> bool {
        match self.slot.check_mask(epoch) {
            Ok(resident) => resident,
            Err(e) => {
                self.stats.reclaims += 1;
                tracing::debug!(error = %e, "mask dropped");
                false
            }
        }
    }

    fn resident_composite(&mut self, epoch: u64) -> bool {
        match self.slot.check_composite(epoch) {
            Ok(resident) => resident,
            Err(e) => {
                self.stats.reclaims += 1;
                tracing::debug!(error = %e, "recomputing composite");
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cache.rs"]
mod tests;
