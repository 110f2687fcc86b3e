use crate::foundation::core::{Point, Sample, is_finite_point};
use crate::foundation::error::{PlotlineError, PlotlineResult};

/// Translates data-space samples into pixel space.
///
/// Implementations are treated as opaque pure functions. A mapper signals a
/// failure by returning a non-finite coordinate; the engine surfaces that as
/// [`PlotlineError::Mapping`].
pub trait CoordinateMapper {
    fn x(&self, index: u64) -> f64;
    fn y(&self, value: f64) -> f64;

    fn map(&self, sample: Sample) -> Point {
        Point::new(self.x(sample.index), self.y(sample.value))
    }
}

impl<M: CoordinateMapper + ?Sized> CoordinateMapper for &M {
    fn x(&self, index: u64) -> f64 {
        (**self).x(index)
    }

    fn y(&self, value: f64) -> f64 {
        (**self).y(value)
    }
}

/// Maps index to x and value to y unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityMapper;

impl CoordinateMapper for IdentityMapper {
    fn x(&self, index: u64) -> f64 {
        index as f64
    }

    fn y(&self, value: f64) -> f64 {
        value
    }
}

/// Mapper built from a pair of closures.
#[derive(Clone, Copy)]
pub struct FnMapper<X, Y> {
    fx: X,
    fy: Y,
}

impl<X, Y> FnMapper<X, Y>
where
    X: Fn(u64) -> f64,
    Y: Fn(f64) -> f64,
{
    pub fn new(fx: X, fy: Y) -> Self {
        Self { fx, fy }
    }
}

impl<X, Y> CoordinateMapper for FnMapper<X, Y>
where
    X: Fn(u64) -> f64,
    Y: Fn(f64) -> f64,
{
    fn x(&self, index: u64) -> f64 {
        (self.fx)(index)
    }

    fn y(&self, value: f64) -> f64 {
        (self.fy)(value)
    }
}

impl<X, Y> std::fmt::Debug for FnMapper<X, Y> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnMapper").finish_non_exhaustive()
    }
}

/// Maps every sample to pixel space, failing on the first non-finite coordinate.
pub fn map_samples<M: CoordinateMapper>(
    samples: &[Sample],
    mapper: &M,
) -> PlotlineResult<Vec<Point>> {
    let mut out = Vec::with_capacity(samples.len());
    for (pos, &s) in samples.iter().enumerate() {
        let p = mapper.map(s);
        if !is_finite_point(p) {
            return Err(PlotlineError::mapping(format!(
                "sample {pos} (index {}, value {}) mapped to non-finite point ({}, {})",
                s.index, s.value, p.x, p.y
            )));
        }
        out.push(p);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/smooth/mapper.rs"]
mod tests;
