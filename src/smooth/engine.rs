use crate::foundation::core::{Sample, validate_samples};
use crate::foundation::error::PlotlineResult;
use crate::path::arclen::path_length;
use crate::path::segment::Path;
use crate::smooth::builder::{
    ControlOverlay, ControlPair, control_pairs_for, smooth_path_for, straight_path_for,
};
use crate::smooth::config::EngineConfig;
use crate::smooth::mapper::{CoordinateMapper, map_samples};

/// Everything a renderer needs to draw and animate one chart series.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartCurves {
    pub straight: Path,
    pub smooth: Path,
    pub straight_length: f64,
    pub smooth_length: f64,
    pub controls: Vec<ControlPair>,
    pub overlay: ControlOverlay,
}

/// Stateless curve engine. Call [`CurveEngine::recompute`] whenever the samples change.
#[derive(Clone, Debug, Default)]
pub struct CurveEngine {
    config: EngineConfig,
}

impl CurveEngine {
    pub fn new(config: EngineConfig) -> PlotlineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[tracing::instrument(skip(self, samples, mapper), fields(n_samples = samples.len()))]
    pub fn recompute<M: CoordinateMapper>(
        &self,
        samples: &[Sample],
        mapper: &M,
    ) -> PlotlineResult<ChartCurves> {
        validate_samples(samples)?;
        let points = map_samples(samples, mapper)?;

        let smoothing = &self.config.smoothing;
        let controls = control_pairs_for(&points, smoothing.policy);
        let straight = straight_path_for(&points)?;
        let smooth = smooth_path_for(&points, &controls)?;
        let overlay = ControlOverlay::from_pairs(&points, &controls, &smoothing.overlay);

        let accuracy = self.config.arc_length.accuracy;
        let straight_length = path_length(&straight, accuracy);
        let smooth_length = path_length(&smooth, accuracy);
        tracing::debug!(straight_length, smooth_length, "curve lengths");

        Ok(ChartCurves {
            straight,
            smooth,
            straight_length,
            smooth_length,
            controls,
            overlay,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/smooth/engine.rs"]
mod tests;
