//! Injected track-width measurement.
//!
//! The wrap threshold depends on the rendered width of the tripled track,
//! which only the host environment knows (items may reflow responsively).
//! The engine re-reads the accessor every frame and tolerates `0.0` or
//! stale values; it never computes the width analytically from item count
//! unless the host opts into [`RenderSurface`](crate::RenderSurface) as
//! its measurer.

/// Host-supplied accessor for the rendered pixel width of a row's tripled
/// track.
pub trait MeasureTrack {
    /// Current rendered track width. `0.0` means "not yet laid out".
    fn track_width(&self) -> f64;
}

impl<F> MeasureTrack for F
where
    F: Fn() -> f64,
{
    fn track_width(&self) -> f64 {
        self()
    }
}

/// Fixed-width measurer for static layouts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasure(pub f64);

impl MeasureTrack for FixedMeasure {
    fn track_width(&self) -> f64 {
        self.0
    }
}
