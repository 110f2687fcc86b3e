//! Axis scales mapping a sample series into a chart box.

use crate::foundation::core::{Sample, validate_samples};
use crate::foundation::error::{PlotlineError, PlotlineResult};
use crate::smooth::mapper::CoordinateMapper;

/// Continuous linear scale from a data domain to a pixel range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a domain value into the range. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn map(&self, v: f64) -> f64 {
        lerp(self.range, unit_offset(self.domain, v))
    }

    pub fn invert(&self, px: f64) -> f64 {
        lerp(self.domain, unit_offset(self.range, px))
    }
}

/// Position of `v` within `(a, b)` as a fraction. Halved before subtracting so
/// extents spanning most of the f64 range do not overflow.
fn unit_offset((a, b): (f64, f64), v: f64) -> f64 {
    let span = b * 0.5 - a * 0.5;
    if span == 0.0 {
        0.5
    } else {
        (v * 0.5 - a * 0.5) / span
    }
}

fn lerp((a, b): (f64, f64), t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Padding between the chart box edge and the plotted area.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContentInset {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub inset: ContentInset,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 300.0,
            inset: ContentInset {
                top: 20.0,
                bottom: 4.0,
                left: 0.0,
                right: 0.0,
            },
        }
    }
}

impl ChartLayout {
    pub fn validate(&self) -> PlotlineResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(PlotlineError::validation(format!(
                "chart width must be > 0, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(PlotlineError::validation(format!(
                "chart height must be > 0, got {}",
                self.height
            )));
        }
        let i = self.inset;
        if [i.top, i.bottom, i.left, i.right]
            .iter()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(PlotlineError::validation("chart inset values must be >= 0"));
        }
        if i.left + i.right > self.width || i.top + i.bottom > self.height {
            return Err(PlotlineError::validation("chart inset exceeds chart size"));
        }
        Ok(())
    }
}

/// Line-chart mapper: x over the sample index extent, y over the value extent
/// with larger values drawn higher (screen y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartMapper {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartMapper {
    pub fn fit(samples: &[Sample], layout: &ChartLayout) -> PlotlineResult<Self> {
        layout.validate()?;
        validate_samples(samples)?;
        let (mut i0, mut i1) = (u64::MAX, u64::MIN);
        let (mut v0, mut v1) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in samples {
            i0 = i0.min(s.index);
            i1 = i1.max(s.index);
            v0 = v0.min(s.value);
            v1 = v1.max(s.value);
        }
        if samples.is_empty() {
            (i0, i1, v0, v1) = (0, 0, 0.0, 0.0);
        }

        let inset = layout.inset;
        Ok(Self {
            x: LinearScale::new(
                (i0 as f64, i1 as f64),
                (inset.left, layout.width - inset.right),
            ),
            y: LinearScale::new((v0, v1), (layout.height - inset.bottom, inset.top)),
        })
    }
}

impl CoordinateMapper for ChartMapper {
    fn x(&self, index: u64) -> f64 {
        self.x.map(index as f64)
    }

    fn y(&self, value: f64) -> f64 {
        self.y.map(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chart/scale.rs"]
mod tests;
