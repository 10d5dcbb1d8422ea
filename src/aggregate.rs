pub(crate) mod breakdown;
pub(crate) mod heatmap;
pub(crate) mod kpi;
pub(crate) mod pipeline;
pub(crate) mod routes;
pub(crate) mod trend;
