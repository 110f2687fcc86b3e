use kurbo::PathEl;

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{PlotlineError, PlotlineResult};

/// A single drawing command.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
}

impl PathSegment {
    /// Point the pen rests on after this command.
    pub fn end_point(&self) -> Point {
        match *self {
            Self::MoveTo { x, y } | Self::LineTo { x, y } | Self::CubicTo { x, y, .. } => {
                Point::new(x, y)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Draw {
    Line(Point),
    Cubic(Point, Point, Point),
}

/// An open vector path: either empty, or one `MoveTo` followed by line/cubic segments.
///
/// The start point is kept apart from the drawing segments so a path can never
/// hold a second `MoveTo` or a segment without a start.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(into = "Vec<PathSegment>", try_from = "Vec<PathSegment>")]
pub struct Path {
    start: Option<Point>,
    draws: Vec<Draw>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_at(p: Point) -> Self {
        Self {
            start: Some(p),
            draws: Vec::new(),
        }
    }

    pub fn line_to(&mut self, p: Point) -> PlotlineResult<()> {
        self.require_start("LineTo")?;
        self.draws.push(Draw::Line(p));
        Ok(())
    }

    pub fn cubic_to(&mut self, c1: Point, c2: Point, p: Point) -> PlotlineResult<()> {
        self.require_start("CubicTo")?;
        self.draws.push(Draw::Cubic(c1, c2, p));
        Ok(())
    }

    fn require_start(&self, cmd: &str) -> PlotlineResult<()> {
        if self.start.is_none() {
            return Err(PlotlineError::validation(format!(
                "{cmd} requires a preceding MoveTo"
            )));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        match self.draws.last() {
            Some(Draw::Line(p)) | Some(Draw::Cubic(_, _, p)) => Some(*p),
            None => self.start,
        }
    }

    /// Number of `LineTo` commands.
    pub fn line_count(&self) -> usize {
        self.draws
            .iter()
            .filter(|d| matches!(d, Draw::Line(_)))
            .count()
    }

    /// Number of `CubicTo` commands.
    pub fn cubic_count(&self) -> usize {
        self.draws
            .iter()
            .filter(|d| matches!(d, Draw::Cubic(..)))
            .count()
    }

    /// All commands in drawing order, starting with the `MoveTo` when present.
    pub fn segments(&self) -> Vec<PathSegment> {
        let Some(start) = self.start else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(self.draws.len() + 1);
        out.push(PathSegment::MoveTo {
            x: start.x,
            y: start.y,
        });
        out.extend(self.draws.iter().map(|d| match *d {
            Draw::Line(p) => PathSegment::LineTo { x: p.x, y: p.y },
            Draw::Cubic(c1, c2, p) => PathSegment::CubicTo {
                c1x: c1.x,
                c1y: c1.y,
                c2x: c2.x,
                c2y: c2.y,
                x: p.x,
                y: p.y,
            },
        }));
        out
    }

    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let Some(start) = self.start else {
            return bez;
        };
        bez.move_to(start);
        for d in &self.draws {
            match *d {
                Draw::Line(p) => bez.line_to(p),
                Draw::Cubic(c1, c2, p) => bez.curve_to(c1, c2, p),
            }
        }
        bez
    }

    /// SVG `d` attribute for this path (empty string for an empty path).
    pub fn to_svg(&self) -> String {
        self.to_bez_path().to_svg()
    }

    /// Parses an SVG `d` attribute holding a single `M` followed by `L`/`C` commands.
    pub fn from_svg(d: &str) -> PlotlineResult<Self> {
        let bez = BezPath::from_svg(d)
            .map_err(|e| PlotlineError::serde(format!("invalid svg path data: {e}")))?;
        Self::try_from_bez_path(&bez)
    }

    pub fn try_from_bez_path(bez: &BezPath) -> PlotlineResult<Self> {
        let mut path = Self::empty();
        for el in bez.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    if !path.is_empty() {
                        return Err(PlotlineError::validation(
                            "path must contain a single subpath",
                        ));
                    }
                    path = Self::starting_at(p);
                }
                PathEl::LineTo(p) => path.line_to(p)?,
                PathEl::CurveTo(c1, c2, p) => path.cubic_to(c1, c2, p)?,
                PathEl::QuadTo(..) => {
                    return Err(PlotlineError::validation(
                        "quadratic segments are not supported",
                    ));
                }
                PathEl::ClosePath => {
                    return Err(PlotlineError::validation("closed paths are not supported"));
                }
            }
        }
        Ok(path)
    }
}

impl From<Path> for Vec<PathSegment> {
    fn from(path: Path) -> Self {
        path.segments()
    }
}

impl TryFrom<Vec<PathSegment>> for Path {
    type Error = PlotlineError;

    fn try_from(segments: Vec<PathSegment>) -> PlotlineResult<Self> {
        let mut path = Self::empty();
        for seg in segments {
            match seg {
                PathSegment::MoveTo { x, y } => {
                    if !path.is_empty() {
                        return Err(PlotlineError::validation(
                            "path must start with exactly one MoveTo",
                        ));
                    }
                    path = Self::starting_at(Point::new(x, y));
                }
                PathSegment::LineTo { x, y } => path.line_to(Point::new(x, y))?,
                PathSegment::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => path.cubic_to(
                    Point::new(c1x, c1y),
                    Point::new(c2x, c2y),
                    Point::new(x, y),
                )?,
            }
        }
        Ok(path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/segment.rs"]
mod tests;
