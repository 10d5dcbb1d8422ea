use super::*;
use crate::{
    records::{record::FlightRecord, testing::flight},
    render::{chart::compose, plan::DrawingInstructionSet},
    selection::filter::FilteredView,
};

fn circles(set: &DrawingInstructionSet) -> Vec<&CircleMark> {
    set.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle(c) => Some(c),
            _ => None,
        })
        .collect()
}

fn route(first_id: u64, n: u64, origin: &str, dest: &str, delay: f64, distance: f64) -> Vec<FlightRecord> {
    (first_id..first_id + n)
        .map(|id| {
            let mut r = flight(id, "AA", origin, dest, 0, delay);
            r.distance = distance;
            r
        })
        .collect()
}

fn sample_view() -> FilteredView {
    let mut records = route(1, 6, "ATL", "DFW", 40.0, 1000.0);
    records.extend(route(100, 5, "LAX", "ORD", 10.0, 2000.0));
    records.extend(route(200, 2, "DEN", "MIA", 90.0, 1500.0));
    FilteredView::from_records(records)
}

#[test]
fn one_bubble_per_significant_route() {
    let config = RoutesConfig::default();
    let set = compose(&RoutesChart::new(&config), &sample_view());
    let bubbles = circles(&set);
    assert_eq!(bubbles.len(), 2);

    assert_eq!(
        bubbles[0].tooltip,
        "ATL-DFW\nDistance: 1000 mi\nAvg Delay: 40.0 min\nFlights: 6"
    );
    assert_eq!(bubbles[0].fill, config.colors.high);
    assert_eq!(bubbles[1].fill, config.colors.low);
    assert_eq!(bubbles[0].fill_opacity, 0.6);
}

#[test]
fn bubble_area_tracks_flight_count() {
    let config = RoutesConfig::default();
    let set = compose(&RoutesChart::new(&config), &sample_view());
    let bubbles = circles(&set);
    assert_eq!(bubbles[0].radius, 15.0);
    let expected = 3.0 + (5.0f64).sqrt() / (6.0f64).sqrt() * 12.0;
    assert!((bubbles[1].radius - expected).abs() < 1e-9);
}

#[test]
fn positions_use_distance_and_delay() {
    let config = RoutesConfig::default();
    let set = compose(&RoutesChart::new(&config), &sample_view());
    let bubbles = circles(&set);
    assert!(bubbles[1].center.x > bubbles[0].center.x, "LAX-ORD is longer");
    assert!(bubbles[0].center.y < bubbles[1].center.y, "ATL-DFW is later");
}

#[test]
fn lower_floor_admits_small_routes() {
    let config = RoutesConfig {
        significance_floor: 2,
        ..RoutesConfig::default()
    };
    let set = compose(&RoutesChart::new(&config), &sample_view());
    assert_eq!(circles(&set).len(), 3);
}

#[test]
fn captions_without_routes() {
    let config = RoutesConfig::default();
    let set = compose(&RoutesChart::new(&config), &FilteredView::default());
    assert_eq!(set.marks().count(), 0);
    assert_eq!(set.axes().count(), 2);
    let texts: Vec<&str> = set.texts().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec![X_CAPTION, Y_CAPTION, TITLE]);
}
