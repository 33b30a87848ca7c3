//! Marquee is a deterministic engine for seamless infinite-loop
//! horizontal scrollers.
//!
//! A host page supplies an ordered catalog of labeled icons; the engine
//! triples it into a seamless track, advances a per-row scroll position
//! by a fixed velocity every animation frame, wraps at one catalog-pass
//! width, and exposes the clipped viewport contents at the current
//! offset.
//!
//! # Pipeline overview
//!
//! 1. **Triple**: `Catalog -> TripledTrack` (catalog concatenated with
//!    itself three times, so the viewport never sees a seam)
//! 2. **Lay out**: `TripledTrack + SurfaceMetrics -> RenderSurface`
//!    (fixed slot/gap row placements)
//! 3. **Step**: `LoopDriver` advances/wraps the position once per frame
//!    against the freshly measured track width
//! 4. **Clip**: `RenderSurface::visible` yields the slice to display at
//!    the driver's offset
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: stepping is pure; N frames against a given
//!   measurer always land on the same offset.
//! - **No IO, no display**: the host owns the real frame loop, layout
//!   measurement, and icon loading. The engine owns state and math.
//! - **Frame path never fails**: empty catalogs, unmeasured layouts, and
//!   ticks after teardown degrade to a static display instead of erroring.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod driver;
mod foundation;
mod measure;
mod row;
mod sim;
mod surface;
mod track;

pub use catalog::{Catalog, CatalogItem};
pub use driver::{LoopDriver, Step, segment_width, step};
pub use foundation::core::{Direction, FrameIndex, Point, Rect, Vec2, Velocity};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use measure::{FixedMeasure, MeasureTrack};
pub use row::{RowConfig, RowState, ScrollerRow};
pub use sim::{SimReport, simulate};
pub use surface::{PlacedEntry, RenderSurface, SurfaceMetrics};
pub use track::{TRACK_COPIES, TrackEntry, TripledTrack, catalog_fingerprint};
