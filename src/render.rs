pub(crate) mod axis;
pub(crate) mod breakdown;
pub(crate) mod chart;
pub(crate) mod curve;
pub(crate) mod heatmap;
pub(crate) mod plan;
pub(crate) mod routes;
pub(crate) mod trend;
