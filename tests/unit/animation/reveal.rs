use super::*;

fn reveal(length: f64) -> StrokeReveal {
    StrokeReveal::new(length, RevealConfig::default()).unwrap()
}

#[test]
fn offset_endpoints_are_exact() {
    for len in [0.0, 1.0, 812.345_678, 1e6] {
        let r = reveal(len);
        assert_eq!(r.dash_array(), len);
        assert_eq!(r.dash_offset(0.0), len);
        assert_eq!(r.dash_offset(1.0), 0.0);
        assert_eq!(r.visible_length(0.0), 0.0);
    }
}

#[test]
fn offset_decreases_monotonically() {
    let r = reveal(500.0);
    let mut prev = r.dash_offset(0.0);
    for step in 1..=100 {
        let cur = r.dash_offset(f64::from(step) / 100.0);
        assert!(cur <= prev);
        prev = cur;
    }
    assert_eq!(r.dash_offset(-0.5), 500.0);
    assert_eq!(r.dash_offset(1.5), 0.0);
}

#[test]
fn nan_fraction_keeps_stroke_hidden() {
    let r = reveal(250.0);
    assert_eq!(r.dash_offset(f64::NAN), 250.0);
    assert_eq!(r.visible_length(f64::NAN), 0.0);
    assert_eq!(r.dash_offset(f64::INFINITY), 0.0);
}

#[test]
fn timed_reveal_spans_the_duration() {
    let r = reveal(300.0);
    assert_eq!(r.duration_ms, 3000);
    assert_eq!(r.dash_offset_at(0), 300.0);
    assert_eq!(r.dash_offset_at(3000), 0.0);
    assert_eq!(r.dash_offset_at(10_000), 0.0);
    // InOutQuad passes through the midpoint at half time.
    assert!((r.fraction_at(1500) - 0.5).abs() < 1e-12);
    assert!(r.dash_offset_at(1000) > r.dash_offset_at(2000));
}

#[test]
fn linear_ease_tracks_elapsed_time() {
    let cfg = RevealConfig {
        duration_ms: 1000,
        ease: Ease::Linear,
    };
    let r = StrokeReveal::new(200.0, cfg).unwrap();
    assert!((r.dash_offset_at(250) - 150.0).abs() < 1e-12);
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(StrokeReveal::new(-1.0, RevealConfig::default()).is_err());
    assert!(StrokeReveal::new(f64::NAN, RevealConfig::default()).is_err());
    let cfg = RevealConfig {
        duration_ms: 0,
        ease: Ease::Linear,
    };
    assert!(matches!(
        StrokeReveal::new(1.0, cfg),
        Err(PlotlineError::Validation(_))
    ));
}
