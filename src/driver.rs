//! Per-row loop driver: the stateful stepper that advances and wraps the
//! scroll position once per animation frame.
//!
//! The stepping rule is factored out of the frame loop as the pure
//! [`step`] function so the wrap semantics are unit-testable without a
//! display. [`LoopDriver`] owns the single mutable scalar per row and
//! layers priming, wrap counting, and the unmeasured-layout guard on top.

use crate::foundation::core::{Direction, FrameIndex, Velocity};

/// Outcome of a single frame step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Step {
    /// Position after the step, already wrapped into range.
    pub position: f64,
    /// True when this step crossed the wrap threshold.
    pub wrapped: bool,
}

/// Width of one catalog pass given the measured width of the tripled
/// track. Non-finite or non-positive measurements (empty catalog, layout
/// not yet measured) collapse to `0.0`, which downstream code treats as
/// "hold position".
pub fn segment_width(track_width: f64) -> f64 {
    if track_width.is_finite() && track_width > 0.0 {
        track_width / crate::track::TRACK_COPIES as f64
    } else {
        0.0
    }
}

/// Advance `position` by one frame.
///
/// Forward rows increment and reset to `0.0` on reaching `segment_width`;
/// reverse rows decrement and reset to `segment_width` on reaching `0.0`.
/// Both resets match the original carousels, which snap to the boundary
/// rather than carrying the overshoot. If `segment_width` is not a
/// positive finite number the step holds position and skips the wrap
/// check — no NaN, no oscillation.
pub fn step(position: f64, direction: Direction, velocity: Velocity, segment_width: f64) -> Step {
    if !(segment_width.is_finite() && segment_width > 0.0) {
        return Step {
            position,
            wrapped: false,
        };
    }

    let next = position + direction.sign() * velocity.px_per_frame();
    match direction {
        Direction::Forward if next >= segment_width => Step {
            position: 0.0,
            wrapped: true,
        },
        Direction::Reverse if next <= 0.0 => Step {
            position: segment_width,
            wrapped: true,
        },
        _ => Step {
            position: next,
            wrapped: false,
        },
    }
}

/// The per-row position counter.
///
/// Owns exactly one mutable scalar, touched only from the row's own frame
/// callback. Construction leaves the driver unprimed; the first frame
/// with a measurable track width sets the start position (`0` forward,
/// one segment width for reverse rows, so their first visible frame
/// already shows catalog content) before advancing.
#[derive(Clone, Debug)]
pub struct LoopDriver {
    position: f64,
    primed: bool,
    direction: Direction,
    velocity: Velocity,
    wraps: u64,
    frames: FrameIndex,
}

impl LoopDriver {
    /// Build an unprimed driver at position `0.0`.
    pub fn new(direction: Direction, velocity: Velocity) -> Self {
        Self {
            position: 0.0,
            primed: false,
            direction,
            velocity,
            wraps: 0,
            frames: FrameIndex(0),
        }
    }

    /// Current scroll position in pixel-units.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Scroll direction, fixed at construction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Per-frame speed, fixed at construction.
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// Number of wraps performed so far.
    pub fn wraps(&self) -> u64 {
        self.wraps
    }

    /// Number of frames that actually advanced the position.
    pub fn frames_advanced(&self) -> FrameIndex {
        self.frames
    }

    /// One frame: derive the segment width from the freshly measured
    /// track width, prime if needed, step, and return the new position.
    ///
    /// The width is taken per call rather than cached because item widths
    /// may reflow with the viewport; a zero or stale measurement simply
    /// holds position until the next frame.
    pub fn advance(&mut self, track_width: f64) -> f64 {
        let segment = segment_width(track_width);
        if segment <= 0.0 {
            return self.position;
        }

        if !self.primed {
            self.position = match self.direction {
                Direction::Forward => 0.0,
                Direction::Reverse => segment,
            };
            self.primed = true;
        }

        let step = step(self.position, self.direction, self.velocity, segment);
        self.position = step.position;
        self.frames = FrameIndex(self.frames.0 + 1);
        if step.wrapped {
            self.wraps += 1;
            tracing::trace!(position = self.position, wraps = self.wraps, "wrap");
        }
        self.position
    }
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
