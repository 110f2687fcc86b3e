use std::path::Path as FsPath;

use crate::animation::ease::Ease;
use crate::chart::scale::ChartLayout;
use crate::foundation::error::{PlotlineError, PlotlineResult};
use crate::path::arclen::DEFAULT_ACCURACY;

/// How far a control point sits from its sample along the local tangent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistancePolicy {
    /// Neighbor-to-neighbor distance scaled by `ratio`.
    Proportional { ratio: f64 },
    /// Constant offset in pixels, independent of sample spacing.
    Fixed { offset: f64 },
}

impl DistancePolicy {
    pub const DEFAULT_RATIO: f64 = 0.15;

    pub fn validate(self) -> PlotlineResult<()> {
        let (name, v) = match self {
            Self::Proportional { ratio } => ("ratio", ratio),
            Self::Fixed { offset } => ("offset", offset),
        };
        if !v.is_finite() || v < 0.0 {
            return Err(PlotlineError::validation(format!(
                "distance policy {name} must be finite and >= 0, got {v}"
            )));
        }
        Ok(())
    }
}

impl Default for DistancePolicy {
    fn default() -> Self {
        Self::Proportional {
            ratio: Self::DEFAULT_RATIO,
        }
    }
}

/// Which control arms end up in the debug overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayFilter {
    /// Drop arms whose control point coincides with its anchor.
    pub skip_degenerate: bool,
    /// Segment indices whose arms are left out.
    pub exclude_segments: Vec<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    pub policy: DistancePolicy,
    pub overlay: OverlayFilter,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArcLengthConfig {
    pub accuracy: f64,
}

impl Default for ArcLengthConfig {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub duration_ms: u64,
    pub ease: Ease,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration_ms: 3000,
            ease: Ease::InOutQuad,
        }
    }
}

/// Complete engine configuration, typically loaded from JSON.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub smoothing: SmoothingConfig,
    pub arc_length: ArcLengthConfig,
    pub reveal: RevealConfig,
    pub chart: ChartLayout,
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> PlotlineResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| PlotlineError::serde(format!("engine config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &FsPath) -> PlotlineResult<Self> {
        let s = std::fs::read_to_string(path).map_err(|e| {
            PlotlineError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> PlotlineResult<()> {
        self.smoothing.policy.validate()?;
        let acc = self.arc_length.accuracy;
        if !acc.is_finite() || acc <= 0.0 {
            return Err(PlotlineError::validation(format!(
                "arc length accuracy must be finite and > 0, got {acc}"
            )));
        }
        if self.reveal.duration_ms == 0 {
            return Err(PlotlineError::validation("reveal duration_ms must be > 0"));
        }
        self.chart.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/smooth/config.rs"]
mod tests;
