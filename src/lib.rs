//! delayscope computes the derived state of a flight-delay dashboard.
//!
//! Records flow one way through the crate:
//!
//! - a [`SelectionState`] filters a [`RecordStore`] into a [`FilteredView`]
//! - reducers turn the view into per-chart datasets and [`Kpis`]
//! - scales and chart composers turn datasets into [`DrawingInstructionSet`]s
//! - surfaces write those as SVG or PNG; [`to_csv`] exports the view
//!
//! [`Dashboard`] ties the stages together and reruns them whenever an input changes.
#![forbid(unsafe_code)]

mod aggregate;
mod dashboard;
mod export;
mod foundation;
mod records;
mod render;
mod scale;
mod selection;
mod surface;

pub use crate::foundation::core::{BezPath, ChartLayout, Margin, Month, Point, Rect, Rgba8};
pub use crate::foundation::error::{DelayscopeError, DelayscopeResult};

pub use crate::records::record::FlightRecord;
pub use crate::records::sample::{SAMPLE_AIRPORTS, SAMPLE_CARRIERS, SampleOpts, generate_sample};
pub use crate::records::store::RecordStore;

pub use crate::selection::filter::{FilteredView, filter};
pub use crate::selection::state::{ActiveView, MonthRange, SelectionState};

pub use crate::aggregate::breakdown::{BreakdownReducer, CarrierBreakdown};
pub use crate::aggregate::heatmap::{HeatmapCell, HeatmapReducer};
pub use crate::aggregate::kpi::{DEFAULT_ON_TIME_THRESHOLD_MIN, Kpis, compute_kpis, compute_kpis_with};
pub use crate::aggregate::pipeline::{MeanAcc, Reducer, group, reduce};
pub use crate::aggregate::routes::{DEFAULT_SIGNIFICANCE_FLOOR, RouteReducer, RouteStat};
pub use crate::aggregate::trend::{TrendPoint, TrendReducer};

pub use crate::scale::band::BandScale;
pub use crate::scale::color::{
    DelayBand, SequentialColorScale, ThresholdColorScale, interpolate_rd_yl_gn,
};
pub use crate::scale::linear::LinearScale;
pub use crate::scale::size::SqrtScale;

pub use crate::render::breakdown::BreakdownChart;
pub use crate::render::chart::{
    AggregateDataset, Chart, aggregate, compose, compose_rows, draw, render_chart,
};
pub use crate::render::curve::monotone_x;
pub use crate::render::heatmap::HeatmapChart;
pub use crate::render::plan::{
    AxisOp, AxisOrient, ChartKind, CircleMark, DrawOp, DrawingInstructionSet, FontWeight,
    LegendSwatch, PathMark, RectMark, Stroke, TextAnchor, TextOp, TextStyle, Tick,
};
pub use crate::render::routes::RoutesChart;
pub use crate::render::trend::TrendChart;

pub use crate::surface::raster::{rasterize, rasterize_png};
pub use crate::surface::svg::to_svg;

pub use crate::export::csv::to_csv;

pub use crate::dashboard::config::{
    BreakdownConfig, DashboardConfig, HeatmapAxis, HeatmapConfig, RoutesConfig, TrendConfig,
};
pub use crate::dashboard::graph::{Artifact, Dependency, Input, evaluation_order};
pub use crate::dashboard::orchestrator::{CycleReport, Dashboard, Frame, Phase};
