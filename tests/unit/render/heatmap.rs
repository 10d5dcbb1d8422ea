use super::*;
use crate::{
    aggregate::pipeline::reduce,
    foundation::core::Point,
    records::testing::{flight, year_store},
    render::{
        chart::{compose, compose_rows},
        plan::DrawingInstructionSet,
    },
    scale::color::interpolate_rd_yl_gn,
    selection::filter::FilteredView,
};

fn rects(set: &DrawingInstructionSet) -> Vec<&RectMark> {
    set.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Rect(r) => Some(r),
            _ => None,
        })
        .collect()
}

fn carriers() -> Vec<String> {
    vec!["AA".to_string(), "DL".to_string()]
}

#[test]
fn one_rect_per_cell_with_tooltip() {
    let store = year_store();
    let config = HeatmapConfig::default();
    let set = compose(
        &HeatmapChart::new(&config, carriers()),
        &FilteredView::all(&store),
    );
    let cells = rects(&set);
    assert_eq!(cells.len(), 24);
    assert_eq!(cells[0].tooltip, "AA - Jan\nAvg Delay: 5.0 min\nFlights: 2");
    assert_eq!(cells[0].stroke, Some(config.cell_stroke));
    assert!(cells[0].rect.y0 < cells[12].rect.y0, "AA row above DL row");
    assert!(cells[0].rect.x0 < cells[1].rect.x0, "Jan left of Feb");
}

#[test]
fn cells_stay_within_plot_area() {
    let store = year_store();
    let config = HeatmapConfig::default();
    let set = compose(
        &HeatmapChart::new(&config, carriers()),
        &FilteredView::all(&store),
    );
    let (x0, x1) = config.layout.x_range();
    let (y0, y1) = config.layout.y_range();
    for r in rects(&set) {
        assert!(r.rect.x0 >= x0 && r.rect.x1 <= x1 + 1e-9);
        assert!(r.rect.y0 >= y0 && r.rect.y1 <= y1 + 1e-9);
    }
}

#[test]
fn empty_cells_use_neutral_fill() {
    let view = FilteredView::from_records(vec![
        flight(1, "AA", "ATL", "DFW", 0, 0.0),
        flight(2, "DL", "LAX", "ORD", 1, 60.0),
    ]);
    let config = HeatmapConfig::default();
    let chart = HeatmapChart::new(&config, carriers());
    let rows = reduce(&HeatmapReducer::new(carriers()), &view);
    let set = compose_rows(&chart, &rows);
    let cells = rects(&set);

    assert_eq!(cells[0].fill, interpolate_rd_yl_gn(1.0), "no delay is the green end");
    assert_eq!(cells[1].fill, config.empty_color);
    assert_eq!(cells[1].tooltip, "AA - Feb\nAvg Delay: no data\nFlights: 0");
    assert_eq!(cells[13].fill, interpolate_rd_yl_gn(0.0), "threshold delay is the red end");
}

#[test]
fn axes_list_months_and_carriers() {
    let config = HeatmapConfig::default();
    let set = compose(
        &HeatmapChart::new(&config, carriers()),
        &FilteredView::default(),
    );
    assert!(rects(&set).is_empty());

    let axes: Vec<_> = set.axes().collect();
    assert_eq!(axes[0].orient, AxisOrient::Bottom);
    assert_eq!(axes[0].offset, 190.0);
    assert_eq!(axes[0].ticks.len(), 12);
    assert_eq!(axes[0].ticks[0].label, "Jan");
    assert_eq!(axes[1].orient, AxisOrient::Left);
    assert_eq!(axes[1].offset, 80.0);
    let rows: Vec<&str> = axes[1].ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(rows, vec!["AA", "DL"]);

    let title = set.texts().next().unwrap();
    assert_eq!(title.text, TITLE);
    assert_eq!(title.pos, Point::new(300.0, 15.0));
}
