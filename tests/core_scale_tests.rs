use approx::assert_abs_diff_eq;
use scatter_rs::core::LinearScale;

#[test]
fn x_scale_maps_domain_endpoints_to_range_extent() {
    let scale = LinearScale::new((10.0, 30.0), (0.0, 300.0)).expect("valid scale");

    assert_eq!(scale.value_to_pixel(10.0).expect("min"), 0.0);
    assert_eq!(scale.value_to_pixel(30.0).expect("max"), 300.0);
    assert_eq!(scale.value_to_pixel(20.0).expect("mid"), 150.0);
}

#[test]
fn y_scale_uses_inverted_range() {
    let scale = LinearScale::new((10.0, 110.0), (600.0, 0.0)).expect("valid scale");

    assert_eq!(scale.value_to_pixel(10.0).expect("min"), 600.0);
    assert_eq!(scale.value_to_pixel(110.0).expect("max"), 0.0);
}

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.value_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_value(px).expect("from pixel");

    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new((42.0, 42.0), (0.0, 300.0)).expect("valid scale");

    assert_eq!(scale.value_to_pixel(42.0).expect("same"), 150.0);
    assert_eq!(scale.value_to_pixel(7.0).expect("other"), 150.0);

    // Inverse of a collapsed domain recovers the domain value.
    assert_eq!(scale.pixel_to_value(150.0).expect("inverse"), 42.0);
}

#[test]
fn degenerate_domain_with_inverted_range_still_hits_midpoint() {
    let scale = LinearScale::new((5.0, 5.0), (380.0, 0.0)).expect("valid scale");
    assert_eq!(scale.value_to_pixel(5.0).expect("same"), 190.0);
}

#[test]
fn zero_width_range_is_rejected() {
    assert!(LinearScale::new((0.0, 1.0), (100.0, 100.0)).is_err());
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 100.0)).is_err());
}

#[test]
fn non_finite_value_is_rejected() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    assert!(scale.value_to_pixel(f64::NAN).is_err());
    assert!(scale.pixel_to_value(f64::NEG_INFINITY).is_err());
}
