use super::*;
use crate::{
    records::testing::{flight, year_store},
    selection::{filter::filter, state::SelectionState},
};

fn universe() -> Vec<String> {
    vec!["AA".to_string(), "DL".to_string()]
}

#[test]
fn rendering_is_deterministic() {
    let store = year_store();
    let view = FilteredView::all(&store);
    let config = DashboardConfig::default();
    for kind in ChartKind::ALL {
        let a = render_chart(kind, &view, &config, &universe());
        let b = render_chart(kind, &view, &config, &universe());
        assert_eq!(a, b, "{kind}");
        assert_eq!(a.chart, kind);
    }
}

#[test]
fn empty_views_draw_axes_and_labels_only() {
    let config = DashboardConfig::default();
    for kind in ChartKind::ALL {
        let set = render_chart(kind, &FilteredView::default(), &config, &[]);
        assert_eq!(set.marks().count(), 0, "{kind}");
        assert_eq!(set.axes().count(), 2, "{kind}");
        assert!(set.texts().count() >= 1, "{kind}");
    }
}

#[test]
fn draw_of_aggregate_matches_render_chart() {
    let store = year_store();
    let view = FilteredView::all(&store);
    let config = DashboardConfig::default();
    for kind in ChartKind::ALL {
        let dataset = aggregate(kind, &view, &config, &universe());
        assert_eq!(dataset.kind(), kind);
        assert_eq!(draw(&dataset, &config), render_chart(kind, &view, &config, &universe()));
    }
}

#[test]
fn generic_compose_matches_dispatch() {
    let store = year_store();
    let view = FilteredView::all(&store);
    let config = DashboardConfig::default();
    assert_eq!(
        compose(&TrendChart::new(&config.trend), &view),
        render_chart(ChartKind::Trend, &view, &config, &universe())
    );
}

#[test]
fn heatmap_axis_mode_picks_carrier_rows() {
    let store = year_store();
    let mut selection = SelectionState::default();
    selection.toggle_carrier("AA");
    let view = filter(&store, &selection);

    let mut config = DashboardConfig::default();
    let AggregateDataset::Heatmap { carriers, cells } =
        aggregate(ChartKind::Heatmap, &view, &config, &universe())
    else {
        panic!("expected heatmap dataset");
    };
    assert_eq!(carriers, vec!["AA"]);
    assert_eq!(cells.len(), 12);

    config.heatmap.axis = HeatmapAxis::Universe;
    let dataset = aggregate(ChartKind::Heatmap, &view, &config, &universe());
    assert_eq!(dataset.len(), 24);
}

#[test]
fn route_floor_comes_from_config() {
    let view = FilteredView::from_records(
        (1..=3)
            .map(|id| flight(id, "AA", "ATL", "DFW", 0, 5.0))
            .collect(),
    );
    let mut config = DashboardConfig::default();
    assert!(aggregate(ChartKind::Routes, &view, &config, &[]).is_empty());
    config.routes.significance_floor = 3;
    assert_eq!(aggregate(ChartKind::Routes, &view, &config, &[]).len(), 1);
}

#[test]
fn subnormal_delays_render_every_chart() {
    let store = crate::records::testing::store(vec![flight(1, "AA", "ATL", "DFW", 3, 1e-310)]);
    let view = FilteredView::all(&store);
    let config = DashboardConfig::default();
    for kind in ChartKind::ALL {
        let set = render_chart(kind, &view, &config, &universe());
        assert_eq!(set.axes().count(), 2, "{kind}");
    }
}
