use crate::{
    aggregate::routes::{RouteReducer, RouteStat},
    dashboard::config::RoutesConfig,
    foundation::core::{ChartLayout, Point},
    render::{
        axis::linear_axis,
        breakdown::Y_CAPTION,
        chart::Chart,
        plan::{AxisOrient, ChartKind, CircleMark, DrawOp, TextOp, TextStyle},
    },
    scale::{linear::LinearScale, size::SqrtScale},
};

pub const TITLE: &str = "Route Efficiency: Distance vs. Delay";
pub const X_CAPTION: &str = "Route Distance (miles)";

/// Scatter of routes: distance across, delay up, bubble area by flight count.
pub struct RoutesChart<'a> {
    config: &'a RoutesConfig,
}

impl<'a> RoutesChart<'a> {
    pub fn new(config: &'a RoutesConfig) -> Self {
        Self { config }
    }
}

pub struct RoutesScales {
    pub distance: LinearScale,
    pub delay: LinearScale,
    pub radius: SqrtScale,
}

impl Chart for RoutesChart<'_> {
    type Reducer = RouteReducer;
    type Scales = RoutesScales;

    const KIND: ChartKind = ChartKind::Routes;

    fn layout(&self) -> &ChartLayout {
        &self.config.layout
    }

    fn reducer(&self) -> RouteReducer {
        RouteReducer {
            significance_floor: self.config.significance_floor,
        }
    }

    fn scales(&self, rows: &[RouteStat]) -> RoutesScales {
        let layout = &self.config.layout;
        let (top, bottom) = layout.y_range();
        let max_distance = rows.iter().map(|r| r.avg_distance).fold(0.0, f64::max);
        let max_delay = rows.iter().map(|r| r.avg_delay).fold(0.0, f64::max);
        let max_count = rows.iter().map(|r| r.count).max().unwrap_or(0);
        RoutesScales {
            distance: LinearScale::zero_based(max_distance, self.config.headroom, layout.x_range()),
            delay: LinearScale::zero_based(max_delay, self.config.headroom, (bottom, top)),
            radius: SqrtScale::new(max_count as f64, self.config.radius_range),
        }
    }

    fn marks(&self, rows: &[RouteStat], scales: &RoutesScales, ops: &mut Vec<DrawOp>) {
        for row in rows {
            ops.push(DrawOp::Circle(CircleMark {
                center: Point::new(
                    scales.distance.apply(row.avg_distance),
                    scales.delay.apply(row.avg_delay),
                ),
                radius: scales.radius.apply(row.count as f64),
                fill: self.config.colors.apply(row.avg_delay),
                fill_opacity: self.config.fill_opacity,
                stroke: Some(self.config.bubble_stroke),
                tooltip: format!(
                    "{}\nDistance: {:.0} mi\nAvg Delay: {:.1} min\nFlights: {}",
                    row.route, row.avg_distance, row.avg_delay, row.count
                ),
            }));
        }
    }

    fn axes(&self, scales: &RoutesScales, ops: &mut Vec<DrawOp>) {
        let layout = &self.config.layout;
        let style = TextStyle::sized(11.0);
        ops.push(DrawOp::Axis(linear_axis(
            AxisOrient::Bottom,
            layout.height - layout.margin.bottom,
            &scales.distance,
            style,
        )));
        ops.push(DrawOp::Axis(linear_axis(
            AxisOrient::Left,
            layout.margin.left,
            &scales.delay,
            style,
        )));
    }

    fn labels(&self, ops: &mut Vec<DrawOp>) {
        let layout = &self.config.layout;
        ops.push(DrawOp::Text(TextOp::new(
            (layout.width / 2.0, layout.height - 10.0),
            X_CAPTION,
            TextStyle::sized(12.0),
        )));
        ops.push(DrawOp::Text(TextOp::new(
            (layout.margin.left - 45.0, layout.height / 2.0),
            Y_CAPTION,
            TextStyle::sized(12.0).rotated(-90.0),
        )));
        ops.push(DrawOp::Text(TextOp::new(
            (layout.width / 2.0, 25.0),
            TITLE,
            TextStyle::sized(16.0).semi_bold(),
        )));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/routes.rs"]
mod tests;
