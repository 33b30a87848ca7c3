use crate::foundation::error::{MarqueeError, MarqueeResult};

pub use kurbo::{Point, Rect, Vec2};

/// 0-based animation frame counter.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Scroll direction of a row, fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Position increases each frame (content drifts left).
    #[default]
    Forward,
    /// Position decreases each frame (content drifts right).
    Reverse,
}

impl Direction {
    /// Sign of the per-frame position increment: `+1.0` forward, `-1.0` reverse.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

/// Linear scroll speed in pixel-units per frame.
///
/// Validated finite and non-negative at construction; the engine has no
/// other animation physics, so this is the only tunable of the motion.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Velocity(f64);

impl Velocity {
    /// The speed every carousel in the original site used: 0.5 px/frame.
    pub const DEFAULT: Velocity = Velocity(0.5);

    /// Build a velocity, rejecting NaN, infinities, and negative speeds.
    pub fn new(px_per_frame: f64) -> MarqueeResult<Self> {
        if !px_per_frame.is_finite() {
            return Err(MarqueeError::validation("velocity must be finite"));
        }
        if px_per_frame < 0.0 {
            return Err(MarqueeError::validation(
                "velocity must be >= 0 (use Direction::Reverse for reverse rows)",
            ));
        }
        Ok(Self(px_per_frame))
    }

    /// The raw speed in pixel-units per frame.
    pub fn px_per_frame(self) -> f64 {
        self.0
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Velocity {
    type Error = MarqueeError;

    fn try_from(value: f64) -> MarqueeResult<Self> {
        Self::new(value)
    }
}

impl From<Velocity> for f64 {
    fn from(value: Velocity) -> f64 {
        value.px_per_frame()
    }
}
