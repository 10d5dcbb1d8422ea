use std::{collections::BTreeSet, collections::HashSet, sync::Arc};

use crate::{
    foundation::error::{DelayscopeError, DelayscopeResult},
    records::record::FlightRecord,
};

/// Immutable, shared collection of flight records for one session.
///
/// Cloning is cheap: the record slice is reference counted and never mutated after construction.
#[derive(Clone, Debug, Default)]
pub struct RecordStore {
    records: Arc<[FlightRecord]>,
}

impl RecordStore {
    /// Validate and take ownership of `records`.
    ///
    /// Rejects duplicate ids and any record violating [`FlightRecord::validate`].
    pub fn new(records: Vec<FlightRecord>) -> DelayscopeResult<Self> {
        let mut ids = HashSet::with_capacity(records.len());
        for r in &records {
            r.validate()?;
            if !ids.insert(r.id) {
                return Err(DelayscopeError::data(format!(
                    "duplicate record id {}",
                    r.id
                )));
            }
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn from_json_str(s: &str) -> DelayscopeResult<Self> {
        let records: Vec<FlightRecord> = serde_json::from_str(s)?;
        Self::new(records)
    }

    pub fn to_json_string(&self) -> DelayscopeResult<String> {
        Ok(serde_json::to_string_pretty(&*self.records)?)
    }

    pub fn records(&self) -> &Arc<[FlightRecord]> {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted, unique carrier codes present in the store.
    pub fn carriers(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.carrier.as_str()).collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Sorted, unique airport codes appearing as origin or destination.
    pub fn airports(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| [r.origin.as_str(), r.destination.as_str()])
            .collect();
        set.into_iter().map(str::to_owned).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/records/store.rs"]
mod tests;
