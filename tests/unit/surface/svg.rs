use super::*;
use crate::{
    dashboard::config::DashboardConfig,
    records::testing::year_store,
    render::{chart::render_chart, plan::ChartKind},
    selection::filter::FilteredView,
};

fn chart_svg(kind: ChartKind) -> String {
    let store = year_store();
    let set = render_chart(
        kind,
        &FilteredView::all(&store),
        &DashboardConfig::default(),
        &store.carriers(),
    );
    to_svg(&set)
}

#[test]
fn numbers_are_compact() {
    assert_eq!(num(2.0), "2");
    assert_eq!(num(1.5), "1.5");
    assert_eq!(num(1.23456), "1.235");
    assert_eq!(num(-0.0), "0");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape("a & <b> \"c\""), "a &amp; &lt;b&gt; &quot;c&quot;");
}

#[test]
fn heatmap_document_has_cells_and_tooltips() {
    let svg = chart_svg(ChartKind::Heatmap);
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"600\" height=\"250\""));
    assert!(svg.ends_with("</svg>\n"));
    // 24 cells plus the background
    assert_eq!(svg.matches("<rect ").count(), 25);
    assert!(svg.contains("<title>AA - Jan\nAvg Delay: 5.0 min\nFlights: 2</title>"));
    assert!(svg.contains("Average Delay by Carrier &amp; Month (minutes)"));
    assert_eq!(svg.matches("class=\"axis\"").count(), 2);
}

#[test]
fn trend_line_has_no_fill() {
    let svg = chart_svg(ChartKind::Trend);
    assert!(svg.contains(r##"fill="none" stroke="#3b82f6" stroke-width="3"/>"##));
    assert_eq!(svg.matches("<circle ").count(), 12);
    assert!(svg.contains(r#"transform="rotate(-45,"#));
}

#[test]
fn rotated_caption_turns_around_its_anchor() {
    let svg = chart_svg(ChartKind::Breakdown);
    assert!(svg.contains(r#"transform="rotate(-90,15,200)""#));
    assert!(svg.contains(">NAS/Airport</text>"));
}

#[test]
fn route_bubbles_are_translucent() {
    let svg = chart_svg(ChartKind::Routes);
    assert!(svg.contains(r#"fill-opacity="0.6""#));
}

#[test]
fn output_parses_as_svg() {
    for kind in ChartKind::ALL {
        let svg = chart_svg(kind);
        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok(), "{kind}: {:?}", tree.err());
    }
}

#[test]
fn single_rect_document() {
    let set = DrawingInstructionSet {
        chart: ChartKind::Heatmap,
        width: 10.0,
        height: 5.0,
        ops: vec![DrawOp::Rect(RectMark {
            rect: Rect::new(1.0, 1.0, 3.5, 4.0),
            fill: Rgba8::rgb(0xf0, 0xf0, 0xf0),
            stroke: Some(Stroke::new(Rgba8::WHITE, 1.0)),
            tooltip: "AA - Jan".to_string(),
        })],
    };
    assert_eq!(
        to_svg(&set),
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="5" viewBox="0 0 10 5" font-family="sans-serif">"#,
            "\n",
            r##"<rect width="10" height="5" fill="#ffffff"/>"##,
            "\n",
            r##"<rect x="1" y="1" width="2.5" height="3" fill="#f0f0f0" stroke="#ffffff" stroke-width="1"><title>AA - Jan</title></rect>"##,
            "\n</svg>\n"
        )
    );
}
