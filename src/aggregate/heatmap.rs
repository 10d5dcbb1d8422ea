use std::collections::HashMap;

use crate::{
    aggregate::pipeline::{MeanAcc, Reducer},
    foundation::core::Month,
    records::record::FlightRecord,
};

/// One carrier × month cell.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeatmapCell {
    pub carrier: String,
    pub month: Month,
    pub count: usize,
    /// `None` when no record fell into the cell.
    pub avg_delay: Option<f64>,
}

/// Mean total delay over the `carriers × 12 months` grid.
///
/// The carrier axis is supplied by the caller (sorted, unique). Records whose carrier is not on
/// the axis do not produce cells.
#[derive(Clone, Debug)]
pub struct HeatmapReducer {
    pub carriers: Vec<String>,
}

impl HeatmapReducer {
    pub fn new(carriers: Vec<String>) -> Self {
        Self { carriers }
    }
}

impl Reducer for HeatmapReducer {
    type Key = (String, Month);
    type Acc = MeanAcc;
    type Row = HeatmapCell;

    fn key(&self, record: &FlightRecord) -> Self::Key {
        (record.carrier.clone(), record.month)
    }

    fn fold(&self, acc: &mut MeanAcc, record: &FlightRecord) {
        acc.push(record.total_delay);
    }

    fn finish(&self, groups: Vec<(Self::Key, MeanAcc)>) -> Vec<HeatmapCell> {
        let by_cell: HashMap<(String, Month), MeanAcc> = groups.into_iter().collect();
        let mut out = Vec::with_capacity(self.carriers.len() * Month::ALL.len());
        for carrier in &self.carriers {
            for month in Month::ALL {
                let acc = by_cell
                    .get(&(carrier.clone(), month))
                    .copied()
                    .unwrap_or_default();
                out.push(HeatmapCell {
                    carrier: carrier.clone(),
                    month,
                    count: acc.count(),
                    avg_delay: acc.mean(),
                });
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/heatmap.rs"]
mod tests;
