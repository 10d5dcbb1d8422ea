use super::*;
use crate::{
    aggregate::pipeline::reduce,
    records::testing::{flight, year_store},
    selection::{filter::filter, filter::FilteredView, state::SelectionState},
};

#[test]
fn always_twelve_rows() {
    assert_eq!(reduce(&TrendReducer, &FilteredView::default()).len(), 12);
    let view = FilteredView::from_records(vec![flight(1, "AA", "ATL", "DFW", 4, 3.0)]);
    let rows = reduce(&TrendReducer, &view);
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[4].count, 1);
    assert_eq!(rows[4].avg_delay, 3.0);
}

#[test]
fn january_selection_leaves_other_months_empty() {
    let store = year_store();
    let mut sel = SelectionState::default();
    sel.set_month_range(0, 0).unwrap();
    let view = filter(&store, &sel);
    let rows = reduce(&TrendReducer, &view);

    assert_eq!(rows[0].month, Month::Jan);
    assert_eq!(rows[0].count, view.len());
    for row in &rows[1..] {
        assert_eq!(row.count, 0);
        assert_eq!(row.avg_delay, 0.0);
    }
}

#[test]
fn counts_partition_the_view() {
    let view = FilteredView::all(&year_store());
    let rows = reduce(&TrendReducer, &view);
    assert_eq!(rows.iter().map(|r| r.count).sum::<usize>(), view.len());
}
