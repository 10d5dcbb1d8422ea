use crate::{
    foundation::{core::Month, error::DelayscopeResult},
    records::{record::FlightRecord, store::RecordStore},
};

pub const SAMPLE_CARRIERS: [&str; 8] = ["AA", "DL", "UA", "WN", "B6", "NK", "F9", "AS"];
pub const SAMPLE_AIRPORTS: [&str; 10] = [
    "ATL", "DFW", "DEN", "ORD", "LAX", "CLT", "MCO", "LAS", "PHX", "MIA",
];

/// Parameters for [`generate_sample`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleOpts {
    pub seed: u64,
    pub count: usize,
}

impl Default for SampleOpts {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 1000,
        }
    }
}

/// Generate a deterministic synthetic record set.
///
/// The same `seed` and `count` always produce the same records. Delay components are rounded to
/// whole minutes and `total_delay` is their exact sum.
pub fn generate_sample(opts: SampleOpts) -> DelayscopeResult<RecordStore> {
    let mut rng = fastrand::Rng::with_seed(opts.seed);
    let mut records = Vec::with_capacity(opts.count);

    for i in 0..opts.count {
        let carrier = SAMPLE_CARRIERS[rng.usize(..SAMPLE_CARRIERS.len())];
        let origin = SAMPLE_AIRPORTS[rng.usize(..SAMPLE_AIRPORTS.len())];
        let mut destination = SAMPLE_AIRPORTS[rng.usize(..SAMPLE_AIRPORTS.len())];
        while destination == origin {
            destination = SAMPLE_AIRPORTS[rng.usize(..SAMPLE_AIRPORTS.len())];
        }

        let month_index = rng.u8(..=Month::MAX_INDEX);
        let month = Month::ALL[usize::from(month_index)];

        // Skewed toward zero: most flights carry no delay in a given component.
        let carrier_delay = (rng.f64() * 60.0 - 20.0).max(0.0).round();
        let weather_delay = (rng.f64() * 40.0 - 25.0).max(0.0).round();
        let nas_delay = (rng.f64() * 30.0 - 15.0).max(0.0).round();

        records.push(FlightRecord {
            id: i as u64 + 1,
            carrier: carrier.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            month,
            month_index,
            carrier_delay,
            weather_delay,
            nas_delay,
            total_delay: carrier_delay + weather_delay + nas_delay,
            cancelled: rng.f64() < 0.05,
            distance: (rng.f64() * 2500.0 + 300.0).floor(),
        });
    }

    tracing::debug!(seed = opts.seed, count = records.len(), "generated sample records");
    RecordStore::new(records)
}

#[cfg(test)]
#[path = "../../tests/unit/records/sample.rs"]
mod tests;
