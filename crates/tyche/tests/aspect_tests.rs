use tyche::aspects::{AspectCalculator, AspectKind, AspectPoint, AspectSettings};
use tyche::zodiac::{Angle, Body, ChartPoint, Sign};

#[test]
fn test_sextile_exact() {
    let calculator = AspectCalculator::default();
    let aspect = calculator.calculate_aspect(10.0, 70.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Sextile);
    assert_eq!(aspect.exact_angle, 60.0);
    assert_eq!(aspect.orb, 0.0);
}

#[test]
fn test_square_exact() {
    let calculator = AspectCalculator::default();
    let aspect = calculator.calculate_aspect(10.0, 100.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Square);
    assert_eq!(aspect.orb, 0.0);
}

#[test]
fn test_wide_opposition_not_reported() {
    let calculator = AspectCalculator::default();
    assert!(calculator.calculate_aspect(10.0, 200.0).is_none());
}

#[test]
fn test_conjunction_across_aries_point() {
    let calculator = AspectCalculator::default();
    let aspect = calculator.calculate_aspect(358.0, 2.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Conjunction);
    assert!((aspect.orb - 4.0).abs() < 1e-9);
}

#[test]
fn test_equal_orbs_keep_first_kind() {
    let calculator = AspectCalculator::new(AspectSettings { orb_limit: 15.0 });
    // 75 degrees is 15 from both the sextile and the square
    let aspect = calculator.calculate_aspect(0.0, 75.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Sextile);
    assert_eq!(aspect.exact_angle, 60.0);
    assert_eq!(aspect.orb, 15.0);

    let aspect = calculator.calculate_aspect(0.0, 76.0).unwrap();
    assert_eq!(aspect.kind, AspectKind::Square);
}

#[test]
fn test_order_of_arguments_does_not_matter() {
    let calculator = AspectCalculator::default();
    let a = calculator.calculate_aspect(33.0, 155.0).unwrap();
    let b = calculator.calculate_aspect(155.0, 33.0).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.kind, AspectKind::Trine);
}

#[test]
fn test_default_orb_is_five_degrees() {
    assert_eq!(AspectSettings::default().orb_limit, 5.0);
}

#[test]
fn test_scan_enumerates_pairs_in_order() {
    let calculator = AspectCalculator::default();
    let points = vec![
        AspectPoint { point: ChartPoint::Body(Body::Sun), longitude: 10.0 },
        AspectPoint { point: ChartPoint::Body(Body::Moon), longitude: 70.0 },
        AspectPoint { point: ChartPoint::Body(Body::Mars), longitude: 100.0 },
        AspectPoint { point: ChartPoint::Angle(Angle::Midheaven), longitude: 190.0 },
    ];
    let aspects = calculator.scan(&points, Sign::Aries);
    let kinds: Vec<(ChartPoint, ChartPoint, AspectKind)> = aspects
        .iter()
        .map(|a| (a.from.point, a.to.point, a.aspect.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (ChartPoint::Body(Body::Sun), ChartPoint::Body(Body::Moon), AspectKind::Sextile),
            (ChartPoint::Body(Body::Sun), ChartPoint::Body(Body::Mars), AspectKind::Square),
            (ChartPoint::Body(Body::Sun), ChartPoint::Angle(Angle::Midheaven), AspectKind::Opposition),
            (ChartPoint::Body(Body::Moon), ChartPoint::Angle(Angle::Midheaven), AspectKind::Trine),
            (ChartPoint::Body(Body::Mars), ChartPoint::Angle(Angle::Midheaven), AspectKind::Square),
        ]
    );
    // Midheaven in Libra with Aries rising
    assert_eq!(aspects[2].to.house, 7);
    assert_eq!(aspects[1].to.house, 4);
}
