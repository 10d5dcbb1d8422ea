use super::*;
use crate::records::testing::flight;

#[test]
fn empty_view_reports_zeros() {
    assert_eq!(compute_kpis(&FilteredView::default()), Kpis::default());
}

#[test]
fn rates_follow_on_time_threshold_and_cancellations() {
    let mut late = flight(3, "AA", "ATL", "DFW", 0, 15.0);
    late.cancelled = true;
    let view = FilteredView::from_records(vec![
        flight(1, "AA", "ATL", "DFW", 0, 0.0),
        flight(2, "AA", "ATL", "DFW", 0, 14.0),
        late,
        flight(4, "AA", "ATL", "DFW", 0, 51.0),
    ]);
    let k = compute_kpis(&view);
    assert_eq!(k.total_flights, 4);
    assert_eq!(k.on_time_rate, 50.0);
    assert_eq!(k.cancellation_rate, 25.0);
    assert_eq!(k.avg_delay, 20.0);

    let strict = compute_kpis_with(&view, 1.0);
    assert_eq!(strict.on_time_rate, 25.0);
}

#[test]
fn idempotent() {
    let view = FilteredView::from_records(vec![
        flight(1, "AA", "ATL", "DFW", 0, 7.0),
        flight(2, "DL", "LAX", "ORD", 1, 33.0),
    ]);
    assert_eq!(compute_kpis(&view), compute_kpis(&view));
    assert!(compute_kpis(&view).to_string().contains("flights 2"));
}
