//! Stroke-reveal animation state derived from a path length.
//!
//! A stroked path with dash array `[L]` and dash offset `L` is fully hidden; at
//! offset `0` it is fully drawn. The renderer drives a fraction from 0 to 1 and
//! sets the offset to `L - L * fraction`.

use crate::animation::ease::Ease;
use crate::foundation::error::{PlotlineError, PlotlineResult};
use crate::smooth::config::RevealConfig;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeReveal {
    pub length: f64,
    pub duration_ms: u64,
    pub ease: Ease,
}

impl StrokeReveal {
    pub fn new(length: f64, config: RevealConfig) -> PlotlineResult<Self> {
        if !length.is_finite() || length < 0.0 {
            return Err(PlotlineError::validation(format!(
                "stroke length must be finite and >= 0, got {length}"
            )));
        }
        if config.duration_ms == 0 {
            return Err(PlotlineError::validation("reveal duration_ms must be > 0"));
        }
        Ok(Self {
            length,
            duration_ms: config.duration_ms,
            ease: config.ease,
        })
    }

    /// Dash pattern: a single dash spanning the whole path.
    pub fn dash_array(&self) -> f64 {
        self.length
    }

    /// Dash offset for a reveal fraction; `length` at 0 and `0` at 1.
    /// A NaN fraction counts as 0 (fully hidden).
    pub fn dash_offset(&self, fraction: f64) -> f64 {
        let f = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.length - self.length * f
    }

    /// Eased reveal fraction after `elapsed_ms` of animation time.
    pub fn fraction_at(&self, elapsed_ms: u64) -> f64 {
        let t = elapsed_ms.min(self.duration_ms) as f64 / self.duration_ms as f64;
        self.ease.apply(t)
    }

    pub fn dash_offset_at(&self, elapsed_ms: u64) -> f64 {
        self.dash_offset(self.fraction_at(elapsed_ms))
    }

    /// Length of the stroke currently drawn.
    pub fn visible_length(&self, fraction: f64) -> f64 {
        self.length - self.dash_offset(fraction)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
