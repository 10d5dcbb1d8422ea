use std::{collections::BTreeSet, sync::Arc};

use crate::{
    records::{record::FlightRecord, store::RecordStore},
    selection::state::SelectionState,
};

/// Records passing the current selection, in store order.
///
/// Shares the store's record slice and keeps only the indices of passing records.
#[derive(Clone, Debug, Default)]
pub struct FilteredView {
    records: Arc<[FlightRecord]>,
    indices: Vec<usize>,
}

impl FilteredView {
    /// View over every record of `store`.
    pub fn all(store: &RecordStore) -> Self {
        Self {
            records: Arc::clone(store.records()),
            indices: (0..store.len()).collect(),
        }
    }

    /// View over an ad hoc record list, in the given order.
    ///
    /// Records are taken as-is; invariants are the producer's responsibility.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let indices = (0..records.len()).collect();
        Self {
            records: records.into(),
            indices,
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &FlightRecord> + '_ {
        self.indices.iter().map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sorted, unique carriers present in the view.
    pub fn carriers(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.iter().map(|r| r.carrier.as_str()).collect();
        set.into_iter().map(str::to_owned).collect()
    }
}

impl PartialEq for FilteredView {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

/// Apply the carrier, airport and month predicates of `selection` to `store`.
///
/// Never fails; a selection matching nothing yields an empty view.
#[tracing::instrument(skip_all, fields(records = store.len()))]
pub fn filter(store: &RecordStore, selection: &SelectionState) -> FilteredView {
    let indices: Vec<usize> = store
        .iter()
        .enumerate()
        .filter(|(_, r)| selection.matches(r))
        .map(|(i, _)| i)
        .collect();
    tracing::trace!(passed = indices.len(), "filtered records");
    FilteredView {
        records: Arc::clone(store.records()),
        indices,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/selection/filter.rs"]
mod tests;
