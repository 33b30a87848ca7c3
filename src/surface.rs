use crate::{
    foundation::core::Rect,
    foundation::error::{MarqueeError, MarqueeResult},
    measure::MeasureTrack,
    track::TripledTrack,
};

/// Fixed per-item layout metrics for a row: square slot width and
/// inter-item gap, both in pixel-units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceMetrics {
    /// Width (and height) of one item slot.
    pub slot_width: f64,
    /// Gap between adjacent slots. No leading or trailing gap.
    pub gap: f64,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        // The original site's logo rows: 80px square slots, 64px gaps.
        Self {
            slot_width: 80.0,
            gap: 64.0,
        }
    }
}

impl SurfaceMetrics {
    /// Reject non-finite or negative metrics. A zero slot width is
    /// allowed and simply yields a zero-width (non-scrolling) track.
    pub fn validate(self) -> MarqueeResult<()> {
        if !(self.slot_width.is_finite() && self.slot_width >= 0.0) {
            return Err(MarqueeError::validation(
                "slot_width must be finite and >= 0",
            ));
        }
        if !(self.gap.is_finite() && self.gap >= 0.0) {
            return Err(MarqueeError::validation("gap must be finite and >= 0"));
        }
        Ok(())
    }
}

/// One laid-out track slot: render key, display data, and its rect in
/// track space (viewport space after [`RenderSurface::visible`]).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedEntry {
    /// Stable render key (`label-index`).
    pub key: String,
    /// Item label.
    pub label: String,
    /// Opaque icon reference for the host to resolve.
    pub icon_ref: String,
    /// Slot rectangle.
    pub rect: Rect,
}

/// The horizontally clipped viewport over the tripled track.
///
/// Lays the track out as a single row with fixed slot width and gap,
/// exposes the clipped slice at a given scroll offset, and doubles as a
/// [`MeasureTrack`] for hosts whose layout matches the analytic one.
/// Holds no mutable state of its own; rebuilt only when the catalog
/// fingerprint changes.
#[derive(Clone, Debug)]
pub struct RenderSurface {
    placements: Vec<PlacedEntry>,
    metrics: SurfaceMetrics,
    fingerprint: u64,
    track_width: f64,
}

impl RenderSurface {
    /// Lay out the tripled track. An empty track yields zero placements
    /// and a zero track width.
    pub fn new(track: &TripledTrack, metrics: SurfaceMetrics) -> Self {
        let mut placements = Vec::with_capacity(track.len());
        let mut x = 0.0;
        for entry in track.entries() {
            placements.push(PlacedEntry {
                key: entry.display_key(),
                label: entry.item.label.clone(),
                icon_ref: entry.item.icon_ref.clone(),
                rect: Rect::new(x, 0.0, x + metrics.slot_width, metrics.slot_width),
            });
            x += metrics.slot_width + metrics.gap;
        }
        let track_width = if track.is_empty() {
            0.0
        } else {
            // Running x includes one trailing gap; the row has none.
            x - metrics.gap
        };
        Self {
            placements,
            metrics,
            fingerprint: track.fingerprint(),
            track_width,
        }
    }

    /// Relay out if `track` came from a different catalog than the one
    /// this surface was built from.
    pub fn rebuild(&mut self, track: &TripledTrack) {
        if track.fingerprint() != self.fingerprint {
            *self = Self::new(track, self.metrics);
        }
    }

    /// Analytic width of the laid-out track.
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Layout metrics this surface was built with.
    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    /// Catalog fingerprint this surface was built from.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// All placements in track order, in track space.
    pub fn placements(&self) -> &[PlacedEntry] {
        &self.placements
    }

    /// The slice of the track intersecting `[offset, offset + viewport_width)`,
    /// rects translated into viewport space.
    pub fn visible(&self, offset: f64, viewport_width: f64) -> Vec<PlacedEntry> {
        if !(viewport_width.is_finite() && viewport_width > 0.0) || !offset.is_finite() {
            return Vec::new();
        }
        let window_end = offset + viewport_width;
        self.placements
            .iter()
            .filter(|p| p.rect.x1 > offset && p.rect.x0 < window_end)
            .map(|p| {
                let mut p = p.clone();
                p.rect = Rect::new(p.rect.x0 - offset, p.rect.y0, p.rect.x1 - offset, p.rect.y1);
                p
            })
            .collect()
    }
}

impl MeasureTrack for RenderSurface {
    fn track_width(&self) -> f64 {
        self.track_width
    }
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
