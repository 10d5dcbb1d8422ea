use crate::{
    aggregate::pipeline::{MeanAcc, Reducer},
    records::record::FlightRecord,
};

/// Minimum sample count for a route to be reported.
pub const DEFAULT_SIGNIFICANCE_FLOOR: usize = 5;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RouteStat {
    /// `"{origin}-{destination}"`.
    pub route: String,
    pub avg_delay: f64,
    pub avg_distance: f64,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RouteAcc {
    delay: MeanAcc,
    distance: MeanAcc,
}

/// Per directional route statistics, first-appearance order, below-floor routes dropped.
#[derive(Clone, Copy, Debug)]
pub struct RouteReducer {
    pub significance_floor: usize,
}

impl Default for RouteReducer {
    fn default() -> Self {
        Self {
            significance_floor: DEFAULT_SIGNIFICANCE_FLOOR,
        }
    }
}

impl Reducer for RouteReducer {
    type Key = (String, String);
    type Acc = RouteAcc;
    type Row = RouteStat;

    fn key(&self, record: &FlightRecord) -> Self::Key {
        (record.origin.clone(), record.destination.clone())
    }

    fn fold(&self, acc: &mut RouteAcc, record: &FlightRecord) {
        acc.delay.push(record.total_delay);
        acc.distance.push(record.distance);
    }

    fn finish(&self, groups: Vec<(Self::Key, RouteAcc)>) -> Vec<RouteStat> {
        groups
            .into_iter()
            .filter(|(_, acc)| acc.delay.count() >= self.significance_floor)
            .map(|((origin, destination), acc)| RouteStat {
                route: format!("{origin}-{destination}"),
                avg_delay: acc.delay.mean_or(0.0),
                avg_distance: acc.distance.mean_or(0.0),
                count: acc.delay.count(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/routes.rs"]
mod tests;
