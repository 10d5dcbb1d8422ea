use std::{collections::HashMap, hash::Hash};

use crate::{records::record::FlightRecord, selection::filter::FilteredView};

/// Group-then-reduce description for one aggregate dataset.
///
/// Every chart's reducer is expressed as a key function, a per-record fold into an accumulator,
/// and a finishing step that turns the grouped accumulators into output rows (sorting, padding
/// missing categories, dropping insignificant groups).
pub trait Reducer {
    type Key: Clone + Eq + Hash;
    type Acc: Default;
    type Row;

    fn key(&self, record: &FlightRecord) -> Self::Key;

    fn fold(&self, acc: &mut Self::Acc, record: &FlightRecord);

    /// `groups` arrive in first-appearance order of their key.
    fn finish(&self, groups: Vec<(Self::Key, Self::Acc)>) -> Vec<Self::Row>;
}

/// Group `view` by `reducer`'s key, preserving first-appearance order.
///
/// Linear in the view size: keys are resolved through a hash index into the group list.
pub fn group<R: Reducer>(reducer: &R, view: &FilteredView) -> Vec<(R::Key, R::Acc)> {
    let mut index: HashMap<R::Key, usize> = HashMap::new();
    let mut groups: Vec<(R::Key, R::Acc)> = Vec::new();

    for record in view.iter() {
        let key = reducer.key(record);
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                groups.push((key.clone(), R::Acc::default()));
                index.insert(key, groups.len() - 1);
                groups.len() - 1
            }
        };
        reducer.fold(&mut groups[slot].1, record);
    }

    groups
}

pub fn reduce<R: Reducer>(reducer: &R, view: &FilteredView) -> Vec<R::Row> {
    reducer.finish(group(reducer, view))
}

/// Running mean; an empty accumulator has no mean rather than `NaN`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    pub fn mean_or(&self, empty: f64) -> f64 {
        self.mean().unwrap_or(empty)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/pipeline.rs"]
mod tests;
