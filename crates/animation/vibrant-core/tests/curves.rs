use approx::assert_relative_eq;
use vibrant_core::{Ease, EaseFamily, EaseMode, Hsv, Rgb, Vector2};

#[test]
fn every_curve_lands_exactly_on_target() {
    for ease in Ease::ALL {
        let (b, c, d) = (3.25, -7.5, 0.8);
        assert_eq!(ease.apply(d, b, c, d), b + c, "{ease} f64");

        let (b, c) = (Vector2::new(1.0, -2.0), Vector2::new(0.3, 9.1));
        assert_eq!(ease.apply(d, b, c, d), b + c, "{ease} Vector2");

        let (b, c) = (Rgb::new(0.1, 0.2, 0.3), Rgb::with_alpha(0.5, 0.1, -0.2, -0.4));
        assert_eq!(ease.apply(d, b, c, d), b + c, "{ease} Rgb");

        let (b, c) = (Hsv::new(0.2, 0.5, 0.5), Hsv::new(0.1, 0.1, 0.1));
        assert_eq!(ease.apply(d, b, c, d), b + c, "{ease} Hsv");
    }
}

#[test]
fn every_curve_starts_at_beginning() {
    for ease in Ease::ALL {
        assert_relative_eq!(ease.apply(0.0, 10.0, 5.0, 2.0), 10.0, epsilon = 1e-9);
    }
}

#[test]
fn linear_midpoint_is_half_delta() {
    let b = Vector2::new(0.0, 100.0);
    let c = Vector2::new(50.0, -20.0);
    let mid = Ease::InLinear.apply(1.5, b, c, 3.0);
    assert_relative_eq!(mid.x, 25.0);
    assert_relative_eq!(mid.y, 90.0);

    for mode in [EaseMode::In, EaseMode::Out, EaseMode::InOut] {
        let ease = Ease::new(EaseFamily::Linear, mode);
        assert_relative_eq!(ease.apply(0.5, 2.0, 4.0, 1.0), 4.0);
    }
}

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    for ease in Ease::ALL
        .into_iter()
        .filter(|e| e.mode() == EaseMode::InOut)
    {
        assert_relative_eq!(ease.progress(0.5), 0.5, epsilon = 1e-9);
    }
}

#[test]
fn known_values() {
    assert_relative_eq!(Ease::InQuad.progress(0.5), 0.25);
    assert_relative_eq!(Ease::OutQuad.progress(0.5), 0.75);
    assert_relative_eq!(Ease::InCubic.progress(0.5), 0.125);
    assert_relative_eq!(Ease::OutBounce.progress(0.5), 0.765625, epsilon = 1e-12);
    // Back overshoots below zero early on.
    assert!(Ease::InBack.progress(0.2) < 0.0);
    // Elastic out overshoots above one.
    assert!(Ease::OutElastic.progress(0.1) > 1.0);
}

#[test]
fn lookup_by_family_and_mode() {
    assert_eq!(Ease::new(EaseFamily::Cubic, EaseMode::InOut), Ease::InOutCubic);
    assert_eq!(Ease::new(EaseFamily::Bounce, EaseMode::Out), Ease::OutBounce);
    assert_eq!("in_out_cubic".parse::<Ease>().unwrap(), Ease::InOutCubic);
    assert!("in_out_wobble".parse::<Ease>().is_err());
}

#[test]
fn serde_uses_names() {
    let json = serde_json::to_string(&Ease::OutExpo).unwrap();
    assert_eq!(json, "\"out_expo\"");
    let back: Ease = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Ease::OutExpo);
    assert!(serde_json::from_str::<Ease>("\"sideways\"").is_err());
}
