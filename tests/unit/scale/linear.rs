use super::*;

#[test]
fn maps_domain_onto_range() {
    let s = LinearScale::new((0.0, 10.0), (100.0, 200.0));
    assert_eq!(s.apply(0.0), 100.0);
    assert_eq!(s.apply(5.0), 150.0);
    assert_eq!(s.apply(10.0), 200.0);
}

#[test]
fn inverted_range_grows_upward() {
    let s = LinearScale::new((0.0, 50.0), (340.0, 40.0));
    assert_eq!(s.apply(0.0), 340.0);
    assert_eq!(s.apply(50.0), 40.0);
    assert!(s.apply(40.0) < s.apply(10.0));
}

#[test]
fn headroom_extends_domain_max() {
    let s = LinearScale::zero_based(20.0, 1.1, (0.0, 1.0));
    assert!((s.domain().1 - 22.0).abs() < 1e-9);
    assert!(s.apply(20.0) < 1.0);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let s = LinearScale::zero_based(0.0, 1.2, (190.0, 30.0));
    assert!(s.is_degenerate());
    assert_eq!(s.apply(0.0), 110.0);
    assert_eq!(s.apply(42.0), 110.0);
    assert_eq!(s.ticks(10), vec![0.0]);

    let empty = LinearScale::zero_based(f64::NEG_INFINITY, 1.1, (0.0, 10.0));
    assert_eq!(empty.domain(), (0.0, 0.0));
    assert!(empty.apply(1.0).is_finite());
}

#[test]
fn nice_ticks() {
    let s = LinearScale::new((0.0, 22.0), (0.0, 1.0));
    assert_eq!(
        s.ticks(10),
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0]
    );

    let s = LinearScale::new((0.0, 3000.0), (0.0, 1.0));
    let t = s.ticks(10);
    assert_eq!(t.first(), Some(&0.0));
    assert_eq!(t.last(), Some(&3000.0));
    assert_eq!(t[1], 200.0);

    let s = LinearScale::new((0.0, 2.4), (0.0, 1.0));
    let t = s.ticks(10);
    assert_eq!(t.len(), 13);
    assert_eq!(t[1], 0.2);
    assert_eq!(t.last(), Some(&2.4));
}

#[test]
fn tick_labels_use_step_precision_and_grouping() {
    let fmt = LinearScale::new((0.0, 3000.0), (0.0, 1.0)).tick_format(10);
    assert_eq!(fmt(2500.0), "2,500");
    assert_eq!(fmt(0.0), "0");

    let fmt = LinearScale::new((0.0, 2.4), (0.0, 1.0)).tick_format(10);
    assert_eq!(fmt(0.2), "0.2");
    assert_eq!(fmt(1.0), "1.0");
}

#[test]
fn subnormal_domain_falls_back_to_endpoints() {
    let s = LinearScale::zero_based(1e-310, 1.2, (190.0, 30.0));
    let (lo, hi) = s.domain();
    assert_eq!(s.ticks(10), vec![lo, hi]);
    assert_eq!(s.tick_format(10)(hi), "0");
}

#[test]
fn huge_domain_stays_bounded() {
    let s = LinearScale::new((0.0, 1e300), (0.0, 1.0));
    let ticks = s.ticks(10);
    assert!(!ticks.is_empty() && ticks.len() <= 100, "{}", ticks.len());
    assert!(ticks.iter().all(|t| t.is_finite()));
}
