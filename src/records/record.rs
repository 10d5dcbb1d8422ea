use crate::foundation::{
    core::Month,
    error::{DelayscopeError, DelayscopeResult},
};

/// Largest accepted gap between `total_delay` and the sum of its components.
///
/// Components and totals are rounded independently to whole minutes upstream.
const TOTAL_DELAY_TOLERANCE_MIN: f64 = 1.0;

/// One flight's observed performance attributes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlightRecord {
    pub id: u64,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub month: Month,
    pub month_index: u8,
    pub carrier_delay: f64, // minutes
    pub weather_delay: f64,
    pub nas_delay: f64,
    pub total_delay: f64,
    pub cancelled: bool,
    pub distance: f64, // miles
}

impl FlightRecord {
    /// Directional route key, `"{origin}-{destination}"`.
    pub fn route_key(&self) -> String {
        format!("{}-{}", self.origin, self.destination)
    }

    pub fn validate(&self) -> DelayscopeResult<()> {
        if self.carrier.trim().is_empty() {
            return Err(DelayscopeError::data(format!(
                "record {} has an empty carrier code",
                self.id
            )));
        }
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err(DelayscopeError::data(format!(
                "record {} has an empty airport code",
                self.id
            )));
        }
        if self.origin == self.destination {
            return Err(DelayscopeError::data(format!(
                "record {} has origin == destination ('{}')",
                self.id, self.origin
            )));
        }
        if self.month.index() != self.month_index {
            return Err(DelayscopeError::data(format!(
                "record {} month '{}' does not match month_index {}",
                self.id, self.month, self.month_index
            )));
        }

        let parts = [self.carrier_delay, self.weather_delay, self.nas_delay];
        if parts.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(DelayscopeError::data(format!(
                "record {} has a negative or non-finite delay component",
                self.id
            )));
        }
        let sum: f64 = parts.iter().sum();
        if !self.total_delay.is_finite()
            || (self.total_delay - sum).abs() > TOTAL_DELAY_TOLERANCE_MIN
        {
            return Err(DelayscopeError::data(format!(
                "record {} total_delay {} does not match component sum {}",
                self.id, self.total_delay, sum
            )));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(DelayscopeError::data(format!(
                "record {} distance must be > 0",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/records/record.rs"]
mod tests;
