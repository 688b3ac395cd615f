use proptest::prelude::*;
use scatter_rs::core::LinearScale;

proptest! {
    #[test]
    fn scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0))
            .expect("valid scale");

        let px = scale.value_to_pixel(value).expect("to pixel");
        let recovered = scale.pixel_to_value(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn scale_endpoints_hit_range_extent(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        extent in 1.0f64..4096.0
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, extent))
            .expect("valid scale");

        let at_min = scale.value_to_pixel(domain_start).expect("min");
        let at_max = scale.value_to_pixel(domain_end).expect("max");

        prop_assert!(at_min.abs() <= extent * 1e-12);
        prop_assert!((at_max - extent).abs() <= extent * 1e-9);
    }

    #[test]
    fn inverted_scale_reverses_ordering(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        low_factor in 0.0f64..0.49,
        high_factor in 0.51f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let low = domain_start + low_factor * domain_span;
        let high = domain_start + high_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (500.0, 0.0))
            .expect("valid scale");

        let low_px = scale.value_to_pixel(low).expect("low");
        let high_px = scale.value_to_pixel(high).expect("high");

        // Larger values land higher on screen (smaller pixel y).
        prop_assert!(high_px < low_px);
    }
}
