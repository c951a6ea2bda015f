use super::*;

#[test]
fn field_has_requested_count() {
    assert_eq!(sparkle_field(SPARKLE_COUNT, 7).len(), 30);
    assert!(sparkle_field(0, 7).is_empty());
}

#[test]
fn sparkles_stay_within_ranges() {
    for spec in sparkle_field(500, 42) {
        assert!((0.0..100.0).contains(&spec.x_pct));
        assert!((0.0..100.0).contains(&spec.y_pct));
        assert!((2.0..6.0).contains(&spec.size_px));
        assert!((0.0..3.0).contains(&spec.repeat_delay_s));
    }
}

#[test]
fn delays_are_staggered_by_index() {
    let field = sparkle_field(4, 1);
    let delays = field.iter().map(|s| s.delay_s).collect::<Vec<_>>();
    for (i, delay) in delays.iter().enumerate() {
        assert!((delay - stagger(i)).abs() < 1e-9);
    }
    assert!((delays[3] - 0.3).abs() < 1e-9);
}

#[test]
fn same_seed_same_field() {
    assert_eq!(sparkle_field(10, 99), sparkle_field(10, 99));
}

#[test]
fn style_positions_sparkle() {
    let spec = SparkleSpec { x_pct: 12.5, y_pct: 80.0, size_px: 3.0, delay_s: 0.2, repeat_delay_s: 1.5 };
    assert_eq!(
        spec.style(),
        "left: 12.50%; top: 80.00%; width: 3.00px; height: 3.00px; animation-delay: 0.2s; --repeat-delay: 1.50s;"
    );
}
