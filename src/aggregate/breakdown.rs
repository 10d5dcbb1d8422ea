use crate::{
    aggregate::pipeline::{MeanAcc, Reducer},
    records::record::FlightRecord,
};

/// Per-carrier mean delay and its components.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CarrierBreakdown {
    pub carrier: String,
    pub avg_total: f64,
    pub avg_carrier: f64,
    pub avg_weather: f64,
    pub avg_nas: f64,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BreakdownAcc {
    total: MeanAcc,
    carrier: MeanAcc,
    weather: MeanAcc,
    nas: MeanAcc,
}

/// Groups by carrier, sorted by descending mean total delay (ties keep first appearance).
#[derive(Clone, Copy, Debug, Default)]
pub struct BreakdownReducer;

impl Reducer for BreakdownReducer {
    type Key = String;
    type Acc = BreakdownAcc;
    type Row = CarrierBreakdown;

    fn key(&self, record: &FlightRecord) -> String {
        record.carrier.clone()
    }

    fn fold(&self, acc: &mut BreakdownAcc, record: &FlightRecord) {
        acc.total.push(record.total_delay);
        acc.carrier.push(record.carrier_delay);
        acc.weather.push(record.weather_delay);
        acc.nas.push(record.nas_delay);
    }

    fn finish(&self, groups: Vec<(String, BreakdownAcc)>) -> Vec<CarrierBreakdown> {
        let mut rows: Vec<CarrierBreakdown> = groups
            .into_iter()
            .map(|(carrier, acc)| CarrierBreakdown {
                carrier,
                avg_total: acc.total.mean_or(0.0),
                avg_carrier: acc.carrier.mean_or(0.0),
                avg_weather: acc.weather.mean_or(0.0),
                avg_nas: acc.nas.mean_or(0.0),
                count: acc.total.count(),
            })
            .collect();
        rows.sort_by(|a, b| b.avg_total.total_cmp(&a.avg_total));
        rows
    }
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/breakdown.rs"]
mod tests;
