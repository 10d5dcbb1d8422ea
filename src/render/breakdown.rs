use crate::{
    aggregate::breakdown::{BreakdownReducer, CarrierBreakdown},
    dashboard::config::BreakdownConfig,
    foundation::core::{ChartLayout, Rect, Rgba8},
    render::{
        axis::{band_axis, linear_axis},
        chart::Chart,
        plan::{
            AxisOrient, ChartKind, DrawOp, LegendSwatch, RectMark, TextAnchor, TextOp, TextStyle,
        },
    },
    scale::{band::BandScale, linear::LinearScale},
};

pub const TITLE: &str = "Carrier Performance: Delay Breakdown";
pub const Y_CAPTION: &str = "Average Delay (minutes)";

const SWATCH: f64 = 15.0;
const LEGEND_ROW: f64 = 25.0;

/// Stack layers bottom to top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    Carrier,
    Weather,
    Nas,
}

impl Component {
    pub const STACK: [Component; 3] = [Component::Carrier, Component::Weather, Component::Nas];

    pub fn label(self) -> &'static str {
        match self {
            Self::Carrier => "Carrier",
            Self::Weather => "Weather",
            Self::Nas => "NAS/Airport",
        }
    }

    fn value(self, row: &CarrierBreakdown) -> f64 {
        match self {
            Self::Carrier => row.avg_carrier,
            Self::Weather => row.avg_weather,
            Self::Nas => row.avg_nas,
        }
    }
}

/// Stacked bars of the mean delay components per carrier, worst carrier first.
pub struct BreakdownChart<'a> {
    config: &'a BreakdownConfig,
}

impl<'a> BreakdownChart<'a> {
    pub fn new(config: &'a BreakdownConfig) -> Self {
        Self { config }
    }

    fn color(&self, component: Component) -> Rgba8 {
        match component {
            Component::Carrier => self.config.carrier_color,
            Component::Weather => self.config.weather_color,
            Component::Nas => self.config.nas_color,
        }
    }
}

pub struct BreakdownScales {
    pub carriers: BandScale,
    pub delay: LinearScale,
}

impl Chart for BreakdownChart<'_> {
    type Reducer = BreakdownReducer;
    type Scales = BreakdownScales;

    const KIND: ChartKind = ChartKind::Breakdown;

    fn layout(&self) -> &ChartLayout {
        &self.config.layout
    }

    fn reducer(&self) -> BreakdownReducer {
        BreakdownReducer
    }

    fn scales(&self, rows: &[CarrierBreakdown]) -> BreakdownScales {
        let layout = &self.config.layout;
        let (top, bottom) = layout.y_range();
        let max = rows.iter().map(|r| r.avg_total).fold(0.0, f64::max);
        BreakdownScales {
            carriers: BandScale::new(
                rows.iter().map(|r| r.carrier.clone()).collect(),
                layout.x_range(),
                self.config.band_padding,
            ),
            delay: LinearScale::zero_based(max, self.config.headroom, (bottom, top)),
        }
    }

    fn marks(&self, rows: &[CarrierBreakdown], scales: &BreakdownScales, ops: &mut Vec<DrawOp>) {
        let mut base = vec![0.0; rows.len()];
        for component in Component::STACK {
            for (row, floor) in rows.iter().zip(base.iter_mut()) {
                let Some(x) = scales.carriers.apply(&row.carrier) else {
                    continue;
                };
                let ceil = *floor + component.value(row);
                let (y_top, y_bottom) = (scales.delay.apply(ceil), scales.delay.apply(*floor));
                *floor = ceil;
                ops.push(DrawOp::Rect(RectMark {
                    rect: Rect::new(x, y_top, x + scales.carriers.bandwidth(), y_bottom),
                    fill: self.color(component),
                    stroke: Some(self.config.segment_stroke),
                    tooltip: tooltip(row),
                }));
            }
        }
    }

    fn axes(&self, scales: &BreakdownScales, ops: &mut Vec<DrawOp>) {
        let layout = &self.config.layout;
        ops.push(DrawOp::Axis(band_axis(
            AxisOrient::Bottom,
            layout.height - layout.margin.bottom,
            &scales.carriers,
            TextStyle::sized(12.0).semi_bold(),
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
            (layout.width / 2.0, 25.0),
            TITLE,
            TextStyle::sized(16.0).semi_bold(),
        )));

        let x = layout.width - layout.margin.right + 20.0;
        for (i, component) in Component::STACK.into_iter().enumerate() {
            let y = layout.margin.top + i as f64 * LEGEND_ROW;
            ops.push(DrawOp::Swatch(LegendSwatch {
                rect: Rect::new(x, y, x + SWATCH, y + SWATCH),
                fill: self.color(component),
                label: TextOp::new(
                    (x + 20.0, y + 12.0),
                    component.label(),
                    TextStyle::sized(12.0).anchored(TextAnchor::Start),
                ),
            }));
        }
    }
}

fn tooltip(row: &CarrierBreakdown) -> String {
    format!(
        "{}\nTotal: {:.1} min\nFlights: {}",
        row.carrier, row.avg_total, row.count
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/breakdown.rs"]
mod tests;
