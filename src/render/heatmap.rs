use crate::{
    aggregate::heatmap::{HeatmapCell, HeatmapReducer},
    dashboard::config::HeatmapConfig,
    foundation::core::{ChartLayout, Month, Rect},
    render::{
        axis::band_axis,
        chart::Chart,
        plan::{AxisOrient, ChartKind, DrawOp, RectMark, TextOp, TextStyle},
    },
    scale::{band::BandScale, color::SequentialColorScale},
};

pub const TITLE: &str = "Average Delay by Carrier & Month (minutes)";

/// Carrier × month grid colored by mean delay.
pub struct HeatmapChart<'a> {
    config: &'a HeatmapConfig,
    carriers: Vec<String>,
}

impl<'a> HeatmapChart<'a> {
    pub fn new(config: &'a HeatmapConfig, carriers: Vec<String>) -> Self {
        Self { config, carriers }
    }
}

pub struct HeatmapScales {
    pub months: BandScale,
    pub carriers: BandScale,
    pub color: SequentialColorScale,
}

impl Chart for HeatmapChart<'_> {
    type Reducer = HeatmapReducer;
    type Scales = HeatmapScales;

    const KIND: ChartKind = ChartKind::Heatmap;

    fn layout(&self) -> &ChartLayout {
        &self.config.layout
    }

    fn reducer(&self) -> HeatmapReducer {
        HeatmapReducer::new(self.carriers.clone())
    }

    fn scales(&self, _rows: &[HeatmapCell]) -> HeatmapScales {
        let layout = &self.config.layout;
        let months = Month::ALL.iter().map(|m| m.label().to_string()).collect();
        HeatmapScales {
            months: BandScale::new(months, layout.x_range(), self.config.band_padding),
            carriers: BandScale::new(
                self.carriers.clone(),
                layout.y_range(),
                self.config.band_padding,
            ),
            color: SequentialColorScale::delay(self.config.high_delay_threshold),
        }
    }

    fn marks(&self, rows: &[HeatmapCell], scales: &HeatmapScales, ops: &mut Vec<DrawOp>) {
        if rows.iter().all(|c| c.count == 0) {
            return;
        }
        for cell in rows {
            let (Some(x), Some(y)) = (
                scales.months.apply(cell.month.label()),
                scales.carriers.apply(&cell.carrier),
            ) else {
                continue;
            };
            let fill = cell
                .avg_delay
                .map_or(self.config.empty_color, |avg| scales.color.apply(avg));
            ops.push(DrawOp::Rect(RectMark {
                rect: Rect::new(
                    x,
                    y,
                    x + scales.months.bandwidth(),
                    y + scales.carriers.bandwidth(),
                ),
                fill,
                stroke: Some(self.config.cell_stroke),
                tooltip: tooltip(cell),
            }));
        }
    }

    fn axes(&self, scales: &HeatmapScales, ops: &mut Vec<DrawOp>) {
        let layout = &self.config.layout;
        let style = TextStyle::sized(11.0);
        ops.push(DrawOp::Axis(band_axis(
            AxisOrient::Bottom,
            layout.height - layout.margin.bottom,
            &scales.months,
            style,
        )));
        ops.push(DrawOp::Axis(band_axis(
            AxisOrient::Left,
            layout.margin.left,
            &scales.carriers,
            style,
        )));
    }

    fn labels(&self, ops: &mut Vec<DrawOp>) {
        ops.push(DrawOp::Text(TextOp::new(
            (self.config.layout.width / 2.0, 15.0),
            TITLE,
            TextStyle::sized(14.0).semi_bold(),
        )));
    }
}

fn tooltip(cell: &HeatmapCell) -> String {
    let avg = match cell.avg_delay {
        Some(avg) => format!("{avg:.1} min"),
        None => "no data".to_string(),
    };
    format!(
        "{} - {}\nAvg Delay: {avg}\nFlights: {}",
        cell.carrier, cell.month, cell.count
    )
}

#[cfg(test)]
#[path = "../../tests/unit/render/heatmap.rs"]
mod tests;
