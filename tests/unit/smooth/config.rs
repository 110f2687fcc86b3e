use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!(
        cfg.smoothing.policy,
        DistancePolicy::Proportional { ratio: 0.15 }
    );
    assert_eq!(cfg.reveal.duration_ms, 3000);
    assert_eq!(cfg.arc_length.accuracy, DEFAULT_ACCURACY);
}

#[test]
fn fixed_policy_parses() {
    let cfg = EngineConfig::from_json_str(
        r#"{ "smoothing": { "policy": { "kind": "fixed", "offset": 7.5 },
             "overlay": { "skip_degenerate": true } } }"#,
    )
    .unwrap();
    assert_eq!(cfg.smoothing.policy, DistancePolicy::Fixed { offset: 7.5 });
    assert!(cfg.smoothing.overlay.skip_degenerate);
    assert!(cfg.smoothing.overlay.exclude_segments.is_empty());
}

#[test]
fn invalid_values_are_rejected() {
    let err = EngineConfig::from_json_str(
        r#"{ "smoothing": { "policy": { "kind": "proportional", "ratio": -1 } } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, PlotlineError::Validation(_)));

    assert!(EngineConfig::from_json_str(r#"{ "arc_length": { "accuracy": 0 } }"#).is_err());
    assert!(EngineConfig::from_json_str(r#"{ "reveal": { "duration_ms": 0 } }"#).is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = EngineConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, PlotlineError::Serde(_)));
}

#[test]
fn missing_file_is_reported() {
    let err = EngineConfig::from_path(FsPath::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
