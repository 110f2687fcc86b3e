//! Plotline turns a chart's sample series into drawable vector paths.
//!
//! For a series of `(index, value)` samples and a [`CoordinateMapper`] it produces:
//!
//! 1. a **straight** polyline through the mapped samples,
//! 2. a **smooth** path of cubic Beziers whose control points follow the local
//!    tangent at each sample (see [`DistancePolicy`]),
//! 3. the arc length of both, which seeds a stroke-dash reveal ([`StrokeReveal`]).
//!
//! Everything is pure and synchronous: [`CurveEngine::recompute`] is re-run by the
//! caller whenever the samples change and always returns the same output for the
//! same input.
//!
//! Sample values and mapped coordinates must be finite. NaN or infinite values are
//! rejected with [`PlotlineError::Validation`] and [`PlotlineError::Mapping`]
//! respectively; no partial output is produced.
#![forbid(unsafe_code)]

mod animation;
mod chart;
mod foundation;
mod path;
mod smooth;

pub use animation::ease::Ease;
pub use animation::reveal::StrokeReveal;
pub use chart::scale::{ChartLayout, ChartMapper, ContentInset, LinearScale};
pub use foundation::core::{BezPath, Point, Sample, Vec2, validate_samples};
pub use foundation::error::{PlotlineError, PlotlineResult};
pub use path::arclen::{DEFAULT_ACCURACY, path_length, point_at_length};
pub use path::segment::{Path, PathSegment};
pub use smooth::builder::{
    ControlArm, ControlOverlay, ControlPair, build_smooth_path, build_straight_path,
    control_points,
};
pub use smooth::config::{
    ArcLengthConfig, DistancePolicy, EngineConfig, OverlayFilter, RevealConfig, SmoothingConfig,
};
pub use smooth::engine::{ChartCurves, CurveEngine};
pub use smooth::mapper::{CoordinateMapper, FnMapper, IdentityMapper, map_samples};
