use crate::foundation::error::{PlotlineError, PlotlineResult};

pub use kurbo::{BezPath, Point, Vec2};

/// One data point feeding a chart: a position along the x axis and a value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sample {
    pub index: u64,
    pub value: f64,
}

impl Sample {
    pub fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }

    /// Builds a contiguous `0..N-1` indexed series from plain values.
    pub fn series(values: &[f64]) -> Vec<Self> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| Self::new(i as u64, value))
            .collect()
    }
}

/// Rejects NaN and infinite sample values, naming the first offending position.
pub fn validate_samples(samples: &[Sample]) -> PlotlineResult<()> {
    for (pos, s) in samples.iter().enumerate() {
        if !s.value.is_finite() {
            return Err(PlotlineError::validation(format!(
                "sample {pos} (index {}) has non-finite value {}",
                s.index, s.value
            )));
        }
    }
    Ok(())
}

pub(crate) fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
