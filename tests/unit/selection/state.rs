use super::*;
use crate::records::testing::flight;

#[test]
fn toggles_add_then_remove() {
    let mut s = SelectionState::default();
    s.toggle_carrier("AA");
    s.toggle_carrier("DL");
    assert_eq!(s.selected_carriers().len(), 2);
    s.toggle_carrier("AA");
    assert!(!s.selected_carriers().contains("AA"));

    s.toggle_airport("ATL");
    assert!(s.selected_airports().contains("ATL"));
    s.toggle_airport("ATL");
    assert!(s.selected_airports().is_empty());
}

#[test]
fn month_range_rejects_out_of_bounds_but_allows_inverted() {
    let mut s = SelectionState::default();
    assert!(s.set_month_range(0, 12).is_err());
    assert_eq!(s.month_range(), MonthRange::FULL);

    s.set_month_range(9, 2).unwrap();
    assert_eq!(s.month_range(), MonthRange { start: 9, end: 2 });
    assert!(!s.matches(&flight(1, "AA", "ATL", "DFW", 5, 0.0)));
    assert!(!s.matches(&flight(2, "AA", "ATL", "DFW", 10, 0.0)));
}

#[test]
fn clear_filters_keeps_active_view() {
    let mut s = SelectionState::default();
    s.toggle_carrier("AA");
    s.toggle_airport("ORD");
    s.set_month_range(3, 4).unwrap();
    s.set_active_view(ActiveView::Routes);
    assert!(s.has_filters());

    s.clear_filters();
    assert!(!s.has_filters());
    assert_eq!(s.month_range(), MonthRange { start: 0, end: 11 });
    assert_eq!(s.active_view(), ActiveView::Routes);
}

#[test]
fn airport_predicate_matches_either_endpoint() {
    let mut s = SelectionState::default();
    s.toggle_airport("DFW");
    assert!(s.matches(&flight(1, "AA", "ATL", "DFW", 0, 0.0)));
    assert!(s.matches(&flight(2, "AA", "DFW", "ORD", 0, 0.0)));
    assert!(!s.matches(&flight(3, "AA", "ATL", "ORD", 0, 0.0)));
}

#[test]
fn views_map_to_their_charts() {
    assert_eq!(
        ActiveView::Overview.charts(),
        &[ChartKind::Heatmap, ChartKind::Trend]
    );
    assert_eq!(ActiveView::Carriers.charts(), &[ChartKind::Breakdown]);
    assert_eq!(ActiveView::Routes.charts(), &[ChartKind::Routes]);
}
