use super::*;

#[test]
fn series_assigns_contiguous_indices() {
    let s = Sample::series(&[81.0, 41.0, 69.0]);
    assert_eq!(
        s,
        vec![
            Sample::new(0, 81.0),
            Sample::new(1, 41.0),
            Sample::new(2, 69.0)
        ]
    );
}

#[test]
fn validate_rejects_nan_and_infinity() {
    assert!(validate_samples(&[]).is_ok());
    assert!(validate_samples(&Sample::series(&[1.0, 2.0])).is_ok());

    let err = validate_samples(&Sample::series(&[1.0, f64::NAN])).unwrap_err();
    assert!(matches!(err, PlotlineError::Validation(_)));
    assert!(err.to_string().contains("sample 1"));

    let err = validate_samples(&[Sample::new(7, f64::INFINITY)]).unwrap_err();
    assert!(err.to_string().contains("index 7"));
}

#[test]
fn sample_json_shape() {
    let s: Vec<Sample> = serde_json::from_str(r#"[{"index":0,"value":81}]"#).unwrap();
    assert_eq!(s, vec![Sample::new(0, 81.0)]);
}
