use super::*;

#[test]
fn linear_scale_maps_and_inverts() {
    let s = LinearScale::new((0.0, 100.0), (296.0, 20.0));
    assert_eq!(s.map(0.0), 296.0);
    assert_eq!(s.map(100.0), 20.0);
    assert_eq!(s.map(50.0), 158.0);
    assert!((s.invert(158.0) - 50.0).abs() < 1e-12);
}

#[test]
fn degenerate_domain_maps_to_range_middle() {
    let s = LinearScale::new((5.0, 5.0), (0.0, 10.0));
    assert_eq!(s.map(5.0), 5.0);
    assert_eq!(s.map(-3.0), 5.0);
}

#[test]
fn near_full_f64_domain_does_not_overflow() {
    let s = LinearScale::new((-1e308, 1e308), (0.0, 10.0));
    assert_eq!(s.map(1e308), 10.0);
    assert_eq!(s.map(-1e308), 0.0);
    assert_eq!(s.map(0.0), 5.0);
    assert_eq!(s.invert(10.0), 1e308);

    let samples = Sample::series(&[-1e308, 1e308]);
    let m = ChartMapper::fit(&samples, &ChartLayout::default()).unwrap();
    assert_eq!(m.y(1e308), 20.0);
    assert_eq!(m.y(-1e308), 296.0);
    let pts = crate::smooth::mapper::map_samples(&samples, &m).unwrap();
    assert_eq!(pts.len(), 2);
}

#[test]
fn fit_spans_the_inset_box() {
    let samples = Sample::series(&[81.0, 0.0, 97.0, 45.0]);
    let layout = ChartLayout {
        width: 300.0,
        ..ChartLayout::default()
    };
    let m = ChartMapper::fit(&samples, &layout).unwrap();
    assert_eq!(m.x(0), 0.0);
    assert_eq!(m.x(3), 300.0);
    assert_eq!(m.y(97.0), 20.0);
    assert_eq!(m.y(0.0), 296.0);
    assert!(m.y(81.0) < m.y(45.0));
}

#[test]
fn fit_on_empty_or_flat_series_is_defined() {
    let layout = ChartLayout::default();
    let m = ChartMapper::fit(&[], &layout).unwrap();
    assert!(m.x(0).is_finite() && m.y(0.0).is_finite());

    let m = ChartMapper::fit(&Sample::series(&[4.0, 4.0]), &layout).unwrap();
    assert_eq!(m.y(4.0), (296.0 + 20.0) / 2.0);
}

#[test]
fn invalid_layouts_are_rejected() {
    let bad = ChartLayout {
        width: 0.0,
        ..ChartLayout::default()
    };
    assert!(bad.validate().is_err());

    let bad = ChartLayout {
        height: 10.0,
        ..ChartLayout::default()
    };
    assert!(matches!(bad.validate(), Err(PlotlineError::Validation(_))));
    assert!(ChartMapper::fit(&Sample::series(&[1.0]), &bad).is_err());
}

#[test]
fn fit_rejects_non_finite_values() {
    for bad in [f64::NAN, f64::INFINITY] {
        let samples = Sample::series(&[1.0, bad]);
        let err = ChartMapper::fit(&samples, &ChartLayout::default()).unwrap_err();
        assert!(matches!(err, PlotlineError::Validation(_)));
    }
}
