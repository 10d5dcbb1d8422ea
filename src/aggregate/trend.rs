use std::collections::HashMap;

use crate::{
    aggregate::pipeline::{MeanAcc, Reducer},
    foundation::core::Month,
    records::record::FlightRecord,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TrendPoint {
    pub month: Month,
    pub count: usize,
    /// `0` for months without records.
    pub avg_delay: f64,
}

/// Mean total delay per calendar month; always twelve rows, January first.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrendReducer;

impl Reducer for TrendReducer {
    type Key = Month;
    type Acc = MeanAcc;
    type Row = TrendPoint;

    fn key(&self, record: &FlightRecord) -> Month {
        record.month
    }

    fn fold(&self, acc: &mut MeanAcc, record: &FlightRecord) {
        acc.push(record.total_delay);
    }

    fn finish(&self, groups: Vec<(Month, MeanAcc)>) -> Vec<TrendPoint> {
        let by_month: HashMap<Month, MeanAcc> = groups.into_iter().collect();
        Month::ALL
            .iter()
            .map(|&month| {
                let acc = by_month.get(&month).copied().unwrap_or_default();
                TrendPoint {
                    month,
                    count: acc.count(),
                    avg_delay: acc.mean_or(0.0),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/trend.rs"]
mod tests;
