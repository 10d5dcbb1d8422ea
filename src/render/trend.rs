use crate::{
    aggregate::trend::{TrendPoint, TrendReducer},
    dashboard::config::TrendConfig,
    foundation::core::{ChartLayout, Month, Point},
    render::{
        axis::{labelled_axis, linear_axis},
        breakdown::Y_CAPTION,
        chart::Chart,
        curve::monotone_x,
        plan::{
            AxisOrient, ChartKind, CircleMark, DrawOp, PathMark, Stroke, TextAnchor, TextOp,
            TextStyle,
        },
    },
    scale::linear::LinearScale,
};

pub const TITLE: &str = "Seasonal Delay Trends";

/// Mean delay per month as a smoothed line with a marker per month.
pub struct TrendChart<'a> {
    config: &'a TrendConfig,
}

impl<'a> TrendChart<'a> {
    pub fn new(config: &'a TrendConfig) -> Self {
        Self { config }
    }
}

pub struct TrendScales {
    pub month: LinearScale,
    pub delay: LinearScale,
}

impl Chart for TrendChart<'_> {
    type Reducer = TrendReducer;
    type Scales = TrendScales;

    const KIND: ChartKind = ChartKind::Trend;

    fn layout(&self) -> &ChartLayout {
        &self.config.layout
    }

    fn reducer(&self) -> TrendReducer {
        TrendReducer
    }

    fn scales(&self, rows: &[TrendPoint]) -> TrendScales {
        let layout = &self.config.layout;
        let (top, bottom) = layout.y_range();
        let max = rows.iter().map(|p| p.avg_delay).fold(0.0, f64::max);
        TrendScales {
            month: LinearScale::new((0.0, f64::from(Month::MAX_INDEX)), layout.x_range()),
            delay: LinearScale::zero_based(max, self.config.headroom, (bottom, top)),
        }
    }

    fn marks(&self, rows: &[TrendPoint], scales: &TrendScales, ops: &mut Vec<DrawOp>) {
        if rows.iter().all(|p| p.count == 0) {
            return;
        }
        let points: Vec<Point> = rows
            .iter()
            .map(|p| {
                Point::new(
                    scales.month.apply(f64::from(p.month.index())),
                    scales.delay.apply(p.avg_delay),
                )
            })
            .collect();

        ops.push(DrawOp::Path(PathMark {
            path: monotone_x(&points),
            stroke: Stroke::new(self.config.line_color, self.config.line_width),
            fill: None,
        }));
        for (row, center) in rows.iter().zip(points) {
            ops.push(DrawOp::Circle(CircleMark {
                center,
                radius: self.config.point_radius,
                fill: self.config.line_color,
                fill_opacity: 1.0,
                stroke: Some(self.config.point_stroke),
                tooltip: format!(
                    "{}\nAvg Delay: {:.1} min\nFlights: {}",
                    row.month, row.avg_delay, row.count
                ),
            }));
        }
    }

    fn axes(&self, scales: &TrendScales, ops: &mut Vec<DrawOp>) {
        let layout = &self.config.layout;
        ops.push(DrawOp::Axis(labelled_axis(
            AxisOrient::Bottom,
            layout.height - layout.margin.bottom,
            &scales.month,
            Month::ALL
                .iter()
                .map(|m| (f64::from(m.index()), m.label())),
            TextStyle::sized(10.0)
                .anchored(TextAnchor::End)
                .rotated(-45.0),
        )));
        ops.push(DrawOp::Axis(linear_axis(
            AxisOrient::Left,
            layout.margin.left,
            &scales.delay,
            TextStyle::sized(11.0),
        )));
    }

    fn labels(&self, ops: &mut Vec<DrawOp>) {
        let layout = &self.config.layout;
        ops.push(DrawOp::Text(TextOp::new(
            (layout.margin.left - 45.0, layout.height / 2.0),
            Y_CAPTION,
            TextStyle::sized(12.0).rotated(-90.0),
        )));
        ops.push(DrawOp::Text(TextOp::new(
            (layout.width / 2.0, 20.0),
            TITLE,
            TextStyle::sized(14.0).semi_bold(),
        )));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/trend.rs"]
mod tests;
