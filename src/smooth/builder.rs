//! Straight and tangent-smoothed paths through chart samples.
//!
//! The smooth path joins every pair of neighboring samples with a cubic Bezier.
//! At an interior sample `i` the tangent is estimated from the chord between
//! its neighbors `i-1` and `i+1`; the outgoing control point of the segment
//! leaving `i` lies along that tangent, and the incoming control point of the
//! segment arriving at `i` lies along the same line in the opposite sense. The
//! first and last samples have no such chord and use their own coordinate as
//! control point. A segment joining two coincident samples gets both control
//! points on that sample, so it has zero length.

use crate::foundation::core::{BezPath, Point, Sample, Vec2, validate_samples};
use crate::foundation::error::PlotlineResult;
use crate::path::segment::Path;
use crate::smooth::config::{DistancePolicy, OverlayFilter};
use crate::smooth::mapper::{CoordinateMapper, map_samples};

/// Control points of the cubic joining sample `segment` to sample `segment + 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPair {
    pub segment: usize,
    /// Outgoing control point at the segment's first sample.
    pub start: Point,
    /// Incoming control point at the segment's last sample.
    pub end: Point,
}

/// Offset from a sample towards its control point along the chord `from -> to`.
///
/// A zero-length chord has no direction, so the offset collapses to zero.
fn tangent_offset(from: Point, to: Point, policy: DistancePolicy) -> Vec2 {
    let chord = to - from;
    let chord_len = chord.hypot();
    if chord_len <= 0.0 {
        return Vec2::ZERO;
    }
    let distance = match policy {
        DistancePolicy::Proportional { ratio } => chord_len * ratio,
        DistancePolicy::Fixed { offset } => offset,
    };
    Vec2::from_angle(chord.atan2()) * distance
}

pub(crate) fn control_pairs_for(points: &[Point], policy: DistancePolicy) -> Vec<ControlPair> {
    let n = points.len();
    if n < 2 {
        return Vec::new();
    }
    (0..n - 1)
        .map(|i| {
            if points[i] == points[i + 1] {
                // Coincident samples: the segment collapses onto the shared point.
                return ControlPair {
                    segment: i,
                    start: points[i],
                    end: points[i + 1],
                };
            }
            let start = if i == 0 {
                points[0]
            } else {
                points[i] + tangent_offset(points[i - 1], points[i + 1], policy)
            };
            let end = if i + 2 == n {
                points[i + 1]
            } else {
                points[i + 1] + tangent_offset(points[i + 2], points[i], policy)
            };
            ControlPair {
                segment: i,
                start,
                end,
            }
        })
        .collect()
}

pub(crate) fn straight_path_for(points: &[Point]) -> PlotlineResult<Path> {
    let Some((&first, rest)) = points.split_first() else {
        return Ok(Path::empty());
    };
    let mut path = Path::starting_at(first);
    for &p in rest {
        path.line_to(p)?;
    }
    Ok(path)
}

pub(crate) fn smooth_path_for(points: &[Point], pairs: &[ControlPair]) -> PlotlineResult<Path> {
    let Some(&first) = points.first() else {
        return Ok(Path::empty());
    };
    let mut path = Path::starting_at(first);
    for pair in pairs {
        path.cubic_to(pair.start, pair.end, points[pair.segment + 1])?;
    }
    Ok(path)
}

fn mapped<M: CoordinateMapper>(samples: &[Sample], mapper: &M) -> PlotlineResult<Vec<Point>> {
    validate_samples(samples)?;
    map_samples(samples, mapper)
}

/// Polyline through the mapped samples: one `MoveTo`, then `N-1` `LineTo`s.
pub fn build_straight_path<M: CoordinateMapper>(
    samples: &[Sample],
    mapper: &M,
) -> PlotlineResult<Path> {
    straight_path_for(&mapped(samples, mapper)?)
}

/// Smoothed curve through the mapped samples: one `MoveTo`, then `N-1` `CubicTo`s.
pub fn build_smooth_path<M: CoordinateMapper>(
    samples: &[Sample],
    mapper: &M,
    policy: DistancePolicy,
) -> PlotlineResult<Path> {
    let points = mapped(samples, mapper)?;
    smooth_path_for(&points, &control_pairs_for(&points, policy))
}

/// Control points for every segment of the smooth path, in segment order.
pub fn control_points<M: CoordinateMapper>(
    samples: &[Sample],
    mapper: &M,
    policy: DistancePolicy,
) -> PlotlineResult<Vec<ControlPair>> {
    Ok(control_pairs_for(&mapped(samples, mapper)?, policy))
}

/// A short line from a sample to one of its control points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlArm {
    pub segment: usize,
    pub anchor: Point,
    pub control: Point,
}

impl ControlArm {
    fn is_degenerate(&self) -> bool {
        self.anchor == self.control
    }
}

/// Debug overlay of control arms, split by role so each can be styled separately.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlOverlay {
    /// Arms from each segment's first sample to its outgoing control point.
    pub start: Vec<ControlArm>,
    /// Arms from each segment's last sample to its incoming control point.
    pub end: Vec<ControlArm>,
}

impl ControlOverlay {
    pub(crate) fn from_pairs(
        points: &[Point],
        pairs: &[ControlPair],
        filter: &OverlayFilter,
    ) -> Self {
        let keep = |arm: &ControlArm| {
            !filter.exclude_segments.contains(&arm.segment)
                && !(filter.skip_degenerate && arm.is_degenerate())
        };
        let mut overlay = Self::default();
        for pair in pairs {
            let start = ControlArm {
                segment: pair.segment,
                anchor: points[pair.segment],
                control: pair.start,
            };
            let end = ControlArm {
                segment: pair.segment,
                anchor: points[pair.segment + 1],
                control: pair.end,
            };
            if keep(&start) {
                overlay.start.push(start);
            }
            if keep(&end) {
                overlay.end.push(end);
            }
        }
        overlay
    }

    pub fn start_bez_path(&self) -> BezPath {
        arms_to_bez_path(&self.start)
    }

    pub fn end_bez_path(&self) -> BezPath {
        arms_to_bez_path(&self.end)
    }

    pub fn start_svg(&self) -> String {
        self.start_bez_path().to_svg()
    }

    pub fn end_svg(&self) -> String {
        self.end_bez_path().to_svg()
    }
}

fn arms_to_bez_path(arms: &[ControlArm]) -> BezPath {
    let mut bez = BezPath::new();
    for arm in arms {
        bez.move_to(arm.anchor);
        bez.line_to(arm.control);
    }
    bez
}

#[cfg(test)]
#[path = "../../tests/unit/smooth/builder.rs"]
mod tests;
