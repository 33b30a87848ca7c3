use crate::{
    catalog::Catalog,
    driver::LoopDriver,
    foundation::core::{Direction, Velocity},
    foundation::error::MarqueeResult,
    measure::MeasureTrack,
    surface::{PlacedEntry, RenderSurface, SurfaceMetrics},
    track::TripledTrack,
};

/// Per-row configuration: direction, speed, and layout metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RowConfig {
    /// Scroll direction, fixed for the row's lifetime.
    pub direction: Direction,
    /// Linear speed in pixel-units per frame.
    pub velocity: Velocity,
    /// Slot/gap layout used by the row's render surface.
    pub metrics: SurfaceMetrics,
}

/// Row lifecycle. `Unmounted` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RowState {
    /// Frame callbacks advance and wrap the position.
    Mounted,
    /// Frame loop cancelled; no further mutation.
    Unmounted,
}

/// One scroller row: catalog, tripled track, render surface, and loop
/// driver, tied to a two-state lifecycle.
///
/// Construction is the mount — the row is ready for frame callbacks as
/// soon as it exists. [`ScrollerRow::unmount`] is the single terminal
/// transition; any tick arriving after it is a silent no-op, so a stale
/// scheduled callback can never mutate a torn-down row.
#[derive(Clone, Debug)]
pub struct ScrollerRow {
    track: TripledTrack,
    surface: RenderSurface,
    driver: LoopDriver,
    config: RowConfig,
    state: RowState,
}

impl ScrollerRow {
    /// Validate the catalog and configuration, build the tripled track
    /// and surface, and mount the row.
    pub fn new(catalog: &Catalog, config: RowConfig) -> MarqueeResult<Self> {
        catalog.validate()?;
        config.metrics.validate()?;
        let track = TripledTrack::from_catalog(catalog);
        let surface = RenderSurface::new(&track, config.metrics);
        let driver = LoopDriver::new(config.direction, config.velocity);
        tracing::debug!(
            items = catalog.len(),
            direction = ?config.direction,
            "row mounted"
        );
        Ok(Self {
            track,
            surface,
            driver,
            config,
            state: RowState::Mounted,
        })
    }

    /// Shorthand for a row with [`RowConfig::default`] and the given
    /// direction.
    pub fn with_direction(catalog: &Catalog, direction: Direction) -> MarqueeResult<Self> {
        Self::new(
            catalog,
            RowConfig {
                direction,
                ..RowConfig::default()
            },
        )
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RowState {
        self.state
    }

    /// True until [`ScrollerRow::unmount`] is called.
    pub fn is_mounted(&self) -> bool {
        self.state == RowState::Mounted
    }

    /// Row configuration.
    pub fn config(&self) -> RowConfig {
        self.config
    }

    /// The tripled track this row scrolls.
    pub fn track(&self) -> &TripledTrack {
        &self.track
    }

    /// The row's render surface.
    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    /// The row's loop driver (position, wrap count, frames advanced).
    pub fn driver(&self) -> &LoopDriver {
        &self.driver
    }

    /// Current horizontal scroll offset in pixel-units.
    pub fn offset(&self) -> f64 {
        self.driver.position()
    }

    /// One animation frame: re-read the measured track width, step the
    /// driver, and return the offset to apply to the viewport.
    ///
    /// After unmount this mutates nothing and returns the frozen offset.
    pub fn on_frame(&mut self, measure: &impl MeasureTrack) -> f64 {
        if self.state == RowState::Unmounted {
            return self.driver.position();
        }
        self.driver.advance(measure.track_width())
    }

    /// [`ScrollerRow::on_frame`] using the surface's analytic width, for
    /// hosts whose rendered layout matches the engine's.
    pub fn on_frame_self_measured(&mut self) -> f64 {
        if self.state == RowState::Unmounted {
            return self.driver.position();
        }
        let width = self.surface.track_width();
        self.driver.advance(width)
    }

    /// Transition to `Unmounted` and cancel stepping. Idempotent:
    /// unmounting an already unmounted row is a no-op.
    pub fn unmount(&mut self) {
        if self.state == RowState::Mounted {
            self.state = RowState::Unmounted;
            tracing::debug!(offset = self.driver.position(), "row unmounted");
        }
    }

    /// Swap the catalog, regenerating track and surface only when the
    /// content actually changed. Scroll position is kept; the next frame
    /// re-measures and wraps into the new segment.
    pub fn set_catalog(&mut self, catalog: &Catalog) -> MarqueeResult<()> {
        catalog.validate()?;
        if crate::track::catalog_fingerprint(catalog) == self.track.fingerprint() {
            return Ok(());
        }
        self.track = TripledTrack::from_catalog(catalog);
        self.surface.rebuild(&self.track);
        tracing::debug!(items = catalog.len(), "catalog swapped");
        Ok(())
    }

    /// The visible slice of the track at the current offset, translated
    /// into viewport space.
    pub fn visible(&self, viewport_width: f64) -> Vec<PlacedEntry> {
        self.surface.visible(self.driver.position(), viewport_width)
    }
}

#[cfg(test)]
#[path = "../tests/unit/row.rs"]
mod tests;
