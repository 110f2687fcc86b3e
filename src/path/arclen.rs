//! Arc length of paths and positions along them.
//!
//! Lines are measured exactly. Cubic segments have no closed-form length and
//! go through kurbo's adaptive Gauss-Legendre quadrature, which subdivides
//! until the estimate is within `accuracy` of the true arc length.

use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::Point;
use crate::path::segment::Path;

/// Default absolute error bound for cubic arc length, in path units.
pub const DEFAULT_ACCURACY: f64 = 1e-6;

/// Total arc length of `path`. Empty and single-point paths have length 0.
pub fn path_length(path: &Path, accuracy: f64) -> f64 {
    path.to_bez_path()
        .segments()
        .map(|seg| segment_length(seg, accuracy))
        .sum()
}

fn segment_length(seg: PathSeg, accuracy: f64) -> f64 {
    match seg {
        PathSeg::Line(line) => line.length(),
        // A cubic collapsed to one point makes kurbo's error estimate 0/0.
        PathSeg::Cubic(c) if c.p0 == c.p1 && c.p1 == c.p2 && c.p2 == c.p3 => 0.0,
        other => other.arclen(accuracy),
    }
}

/// Point reached after travelling `distance` along `path` from its start.
///
/// `distance` is clamped to `[0, path_length]`. Returns `None` for an empty path.
pub fn point_at_length(path: &Path, distance: f64, accuracy: f64) -> Option<Point> {
    let start = path.start()?;
    if distance <= 0.0 {
        return Some(start);
    }
    let mut remaining = distance;
    let mut last = start;
    for seg in path.to_bez_path().segments() {
        let len = segment_length(seg, accuracy);
        if remaining <= len {
            if len <= 0.0 {
                return Some(seg.end());
            }
            let t = match seg {
                PathSeg::Line(_) => remaining / len,
                other => other.inv_arclen(remaining, accuracy),
            };
            return Some(seg.eval(t));
        }
        remaining -= len;
        last = seg.end();
    }
    Some(last)
}

#[cfg(test)]
#[path = "../../tests/unit/path/arclen.rs"]
mod tests;
