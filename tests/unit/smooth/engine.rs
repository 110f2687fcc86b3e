use super::*;
use crate::smooth::config::DistancePolicy;
use crate::smooth::mapper::{FnMapper, IdentityMapper};

#[test]
fn degenerate_inputs_have_zero_lengths() {
    let engine = CurveEngine::default();
    for samples in [vec![], vec![Sample::new(0, 12.0)]] {
        let out = engine.recompute(&samples, &IdentityMapper).unwrap();
        assert_eq!(out.straight_length, 0.0);
        assert_eq!(out.smooth_length, 0.0);
        assert!(out.straight.segments().len() <= 1);
        assert!(out.smooth.segments().len() <= 1);
        assert!(out.controls.is_empty());
        assert!(out.overlay.start.is_empty() && out.overlay.end.is_empty());
    }
}

#[test]
fn straight_length_is_sum_of_distances() {
    let samples = [Sample::new(0, 0.0), Sample::new(1, 0.0), Sample::new(1, 1.0)];
    let out = CurveEngine::default()
        .recompute(&samples, &IdentityMapper)
        .unwrap();
    assert!((out.straight_length - 2.0).abs() < 1e-12);
}

#[test]
fn smooth_length_is_at_least_the_chord() {
    let mapper = FnMapper::new(|i| i as f64 * 10.0, |v| 300.0 - v * 3.0);
    let samples = Sample::series(&[81.0, 41.0, 69.0, 90.0]);
    for policy in [
        DistancePolicy::default(),
        DistancePolicy::Fixed { offset: 7.5 },
    ] {
        let mut cfg = EngineConfig::default();
        cfg.smoothing.policy = policy;
        let out = CurveEngine::new(cfg).unwrap().recompute(&samples, &mapper).unwrap();
        let chord = (out.smooth.end().unwrap() - out.smooth.start().unwrap()).hypot();
        assert!(out.smooth_length.is_finite());
        assert!(out.smooth_length >= chord);
        assert_eq!(out.controls.len(), 3);
    }
}

#[test]
fn recompute_is_idempotent() {
    let engine = CurveEngine::default();
    let samples = Sample::series(&[3.0, 9.0, 1.0, 4.0, 4.0, 7.0]);
    let a = engine.recompute(&samples, &IdentityMapper).unwrap();
    let b = engine.recompute(&samples, &IdentityMapper).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut cfg = EngineConfig::default();
    cfg.smoothing.policy = DistancePolicy::Fixed { offset: f64::NAN };
    assert!(CurveEngine::new(cfg).is_err());
}

#[test]
fn bad_samples_produce_no_output() {
    let samples = Sample::series(&[1.0, f64::INFINITY]);
    assert!(CurveEngine::default().recompute(&samples, &IdentityMapper).is_err());
}
