use crate::{
    aggregate::{
        breakdown::{BreakdownReducer, CarrierBreakdown},
        heatmap::{HeatmapCell, HeatmapReducer},
        pipeline::{Reducer, reduce},
        routes::{RouteReducer, RouteStat},
        trend::{TrendPoint, TrendReducer},
    },
    dashboard::config::{DashboardConfig, HeatmapAxis},
    foundation::core::ChartLayout,
    render::{
        breakdown::BreakdownChart,
        heatmap::HeatmapChart,
        plan::{ChartKind, DrawOp, DrawingInstructionSet},
        routes::RoutesChart,
        trend::TrendChart,
    },
    selection::filter::FilteredView,
};

/// Rows produced by a chart's reducer.
pub type Row<C> = <<C as Chart>::Reducer as Reducer>::Row;

/// One chart: a reducer, scales fitted to its rows, and the marks, axes and labels drawn with
/// them.
pub trait Chart {
    type Reducer: Reducer;
    type Scales;

    const KIND: ChartKind;

    fn layout(&self) -> &ChartLayout;

    fn reducer(&self) -> Self::Reducer;

    fn scales(&self, rows: &[<Self::Reducer as Reducer>::Row]) -> Self::Scales;

    /// Data-driven shapes. Emits nothing when `rows` carry no records.
    fn marks(
        &self,
        rows: &[<Self::Reducer as Reducer>::Row],
        scales: &Self::Scales,
        ops: &mut Vec<DrawOp>,
    );

    fn axes(&self, scales: &Self::Scales, ops: &mut Vec<DrawOp>);

    /// Titles, captions and legends.
    fn labels(&self, ops: &mut Vec<DrawOp>);
}

/// Reduce `view` with the chart's reducer and draw the result.
pub fn compose<C: Chart>(chart: &C, view: &FilteredView) -> DrawingInstructionSet {
    let rows = reduce(&chart.reducer(), view);
    compose_rows(chart, &rows)
}

/// Draw already reduced rows.
pub fn compose_rows<C: Chart>(chart: &C, rows: &[Row<C>]) -> DrawingInstructionSet {
    let scales = chart.scales(rows);
    let mut ops = Vec::new();
    chart.marks(rows, &scales, &mut ops);
    chart.axes(&scales, &mut ops);
    chart.labels(&mut ops);

    let layout = chart.layout();
    DrawingInstructionSet {
        chart: C::KIND,
        width: layout.width,
        height: layout.height,
        ops,
    }
}

/// Reduced rows of one chart, kept alongside its drawing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "chart", content = "rows", rename_all = "snake_case")]
pub enum AggregateDataset {
    Heatmap {
        carriers: Vec<String>,
        cells: Vec<HeatmapCell>,
    },
    Breakdown(Vec<CarrierBreakdown>),
    Trend(Vec<TrendPoint>),
    Routes(Vec<RouteStat>),
}

impl AggregateDataset {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Heatmap { .. } => ChartKind::Heatmap,
            Self::Breakdown(_) => ChartKind::Breakdown,
            Self::Trend(_) => ChartKind::Trend,
            Self::Routes(_) => ChartKind::Routes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Heatmap { cells, .. } => cells.len(),
            Self::Breakdown(rows) => rows.len(),
            Self::Trend(rows) => rows.len(),
            Self::Routes(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Carrier rows for the heatmap under the configured axis mode.
pub fn heatmap_carriers(
    view: &FilteredView,
    config: &DashboardConfig,
    universe: &[String],
) -> Vec<String> {
    match config.heatmap.axis {
        HeatmapAxis::Filtered => view.carriers(),
        HeatmapAxis::Universe => universe.to_vec(),
    }
}

/// Run the reducer of `kind` over `view`.
///
/// `universe` lists every carrier of the store; it is only read by the heatmap in
/// [`HeatmapAxis::Universe`] mode.
#[tracing::instrument(skip_all, fields(chart = %kind, records = view.len()))]
pub fn aggregate(
    kind: ChartKind,
    view: &FilteredView,
    config: &DashboardConfig,
    universe: &[String],
) -> AggregateDataset {
    match kind {
        ChartKind::Heatmap => {
            let carriers = heatmap_carriers(view, config, universe);
            let cells = reduce(&HeatmapReducer::new(carriers.clone()), view);
            AggregateDataset::Heatmap { carriers, cells }
        }
        ChartKind::Breakdown => AggregateDataset::Breakdown(reduce(&BreakdownReducer, view)),
        ChartKind::Trend => AggregateDataset::Trend(reduce(&TrendReducer, view)),
        ChartKind::Routes => AggregateDataset::Routes(reduce(
            &RouteReducer {
                significance_floor: config.routes.significance_floor,
            },
            view,
        )),
    }
}

/// Draw a dataset produced by [`aggregate`].
pub fn draw(dataset: &AggregateDataset, config: &DashboardConfig) -> DrawingInstructionSet {
    match dataset {
        AggregateDataset::Heatmap { carriers, cells } => {
            compose_rows(&HeatmapChart::new(&config.heatmap, carriers.clone()), cells)
        }
        AggregateDataset::Breakdown(rows) => {
            compose_rows(&BreakdownChart::new(&config.breakdown), rows)
        }
        AggregateDataset::Trend(rows) => compose_rows(&TrendChart::new(&config.trend), rows),
        AggregateDataset::Routes(rows) => compose_rows(&RoutesChart::new(&config.routes), rows),
    }
}

/// Aggregate and draw one chart.
pub fn render_chart(
    kind: ChartKind,
    view: &FilteredView,
    config: &DashboardConfig,
    universe: &[String],
) -> DrawingInstructionSet {
    draw(&aggregate(kind, view, config, universe), config)
}

#[cfg(test)]
#[path = "../../tests/unit/render/chart.rs"]
mod tests;
