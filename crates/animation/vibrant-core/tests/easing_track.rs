use approx::assert_relative_eq;
use vibrant_core::{Ease, Easing, Rgb, Timing, TweenError};

fn timing(duration: f64, delay: f64) -> Timing {
    Timing::new(duration, Ease::InLinear)
        .and_then(|t| t.with_delay(delay))
        .unwrap()
}

#[test]
fn delay_holds_then_settles() {
    let mut track = Easing::start(0.0, 10.0, timing(1.0, 0.5));

    // Still inside the delay: nothing to write.
    assert_eq!(track.advance(0.25), None);
    assert_eq!(track.advance(0.2), None);
    assert!(track.is_active());

    // 0.45 + 0.3 = 0.75 -> 0.25 into the curve
    assert_relative_eq!(track.advance(0.3).unwrap(), 2.5, epsilon = 1e-12);

    // Reaching delay + duration writes the exact target and deactivates.
    assert_eq!(track.advance(0.75), Some(10.0));
    assert!(!track.is_active());
    assert_eq!(track.advance(1.0), None);
}

#[test]
fn restart_replaces_active_track() {
    let mut track = Easing::start(0.0, 10.0, timing(1.0, 0.0));
    let midway = track.advance(0.5).unwrap();
    assert_relative_eq!(midway, 5.0);

    track.restart(midway, -5.0, timing(2.0, 0.0));
    assert_relative_eq!(track.elapsed, 0.0);
    assert_relative_eq!(track.delta, -10.0);
    assert_eq!(track.advance(2.0), Some(-5.0));
}

#[test]
fn colors_interpolate_per_channel() {
    let mut track = Easing::start(
        Rgb::with_alpha(0.0, 0.0, 0.0, 0.0),
        Rgb::with_alpha(1.0, 0.5, 0.25, 1.0),
        timing(4.0, 0.0),
    );
    let c = track.advance(2.0).unwrap();
    assert_relative_eq!(c.r, 0.5);
    assert_relative_eq!(c.g, 0.25);
    assert_relative_eq!(c.b, 0.125);
    assert_relative_eq!(c.a, 0.5);
}

#[test]
fn timing_validation() {
    assert_eq!(
        Timing::new(0.0, Ease::InLinear),
        Err(TweenError::NonPositiveDuration { duration: 0.0 })
    );
    let err = Timing::new(1.0, Ease::InLinear)
        .unwrap()
        .with_delay(f64::INFINITY)
        .unwrap_err();
    assert!(matches!(err, TweenError::InvalidDelay { .. }));

    let parsed: Timing = serde_json::from_str(r#"{ "duration": 2.0 }"#).unwrap();
    assert_eq!(parsed.ease(), Ease::InLinear);
    assert_eq!(parsed.delay(), 0.0);
}

#[test]
fn deserializing_rejects_what_the_constructors_reject() {
    for json in [
        r#"{ "duration": 0.0 }"#,
        r#"{ "duration": -2.0, "ease": "out_sine" }"#,
        r#"{ "duration": -3.0, "delay": -1.0 }"#,
        r#"{ "duration": 1.0, "delay": -0.5 }"#,
    ] {
        let err = serde_json::from_str::<Timing>(json).unwrap_err();
        assert!(err.is_data(), "{json}: {err}");
    }

    let parsed: Timing =
        serde_json::from_str(r#"{ "duration": 1.5, "delay": 0.25, "ease": "out_sine" }"#).unwrap();
    assert_eq!(
        parsed,
        Timing::new(1.5, Ease::OutSine)
            .unwrap()
            .with_delay(0.25)
            .unwrap()
    );
}
