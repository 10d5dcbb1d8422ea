use std::collections::BTreeSet;

use crate::{
    foundation::{
        core::Month,
        error::{DelayscopeError, DelayscopeResult},
    },
    records::record::FlightRecord,
    render::plan::ChartKind,
};

/// Inclusive month-index range.
///
/// Both ends are within `0..=11`. `start > end` is accepted and matches no record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct MonthRange {
    pub start: u8,
    pub end: u8,
}

impl MonthRange {
    pub const FULL: Self = Self {
        start: 0,
        end: Month::MAX_INDEX,
    };

    pub fn new(start: u8, end: u8) -> DelayscopeResult<Self> {
        for (name, v) in [("start", start), ("end", end)] {
            if v > Month::MAX_INDEX {
                return Err(DelayscopeError::validation(format!(
                    "month range {name} must be in 0..=11 (got {v})"
                )));
            }
        }
        Ok(Self { start, end })
    }

    pub fn contains(self, month_index: u8) -> bool {
        month_index >= self.start && month_index <= self.end
    }
}

impl Default for MonthRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Which dashboard tab is visible; decides which charts a recompute cycle renders.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ActiveView {
    #[default]
    Overview,
    Carriers,
    Routes,
}

impl ActiveView {
    pub const ALL: [ActiveView; 3] = [ActiveView::Overview, ActiveView::Carriers, ActiveView::Routes];

    pub fn charts(self) -> &'static [ChartKind] {
        match self {
            Self::Overview => &[ChartKind::Heatmap, ChartKind::Trend],
            Self::Carriers => &[ChartKind::Breakdown],
            Self::Routes => &[ChartKind::Routes],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Carriers => "carriers",
            Self::Routes => "routes",
        }
    }
}

/// User-controlled filter parameters plus the active view.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionState {
    selected_carriers: BTreeSet<String>,
    selected_airports: BTreeSet<String>,
    month_range: MonthRange,
    active_view: ActiveView,
}

impl SelectionState {
    pub fn selected_carriers(&self) -> &BTreeSet<String> {
        &self.selected_carriers
    }

    pub fn selected_airports(&self) -> &BTreeSet<String> {
        &self.selected_airports
    }

    pub fn month_range(&self) -> MonthRange {
        self.month_range
    }

    pub fn active_view(&self) -> ActiveView {
        self.active_view
    }

    /// Add `code` to the carrier set, or remove it when already present.
    pub fn toggle_carrier(&mut self, code: &str) {
        toggle(&mut self.selected_carriers, code);
    }

    /// Add `code` to the airport set, or remove it when already present.
    pub fn toggle_airport(&mut self, code: &str) {
        toggle(&mut self.selected_airports, code);
    }

    pub fn set_month_range(&mut self, start: u8, end: u8) -> DelayscopeResult<()> {
        self.month_range = MonthRange::new(start, end)?;
        Ok(())
    }

    pub fn set_active_view(&mut self, view: ActiveView) {
        self.active_view = view;
    }

    /// Reset carriers, airports and month range; the active view is kept.
    pub fn clear_filters(&mut self) {
        self.selected_carriers.clear();
        self.selected_airports.clear();
        self.month_range = MonthRange::FULL;
    }

    pub fn has_filters(&self) -> bool {
        !self.selected_carriers.is_empty()
            || !self.selected_airports.is_empty()
            || self.month_range != MonthRange::FULL
    }

    /// Carrier, airport and month predicates combined.
    pub fn matches(&self, record: &FlightRecord) -> bool {
        let carrier_ok =
            self.selected_carriers.is_empty() || self.selected_carriers.contains(&record.carrier);
        let airport_ok = self.selected_airports.is_empty()
            || self.selected_airports.contains(&record.origin)
            || self.selected_airports.contains(&record.destination);
        carrier_ok && airport_ok && self.month_range.contains(record.month_index)
    }
}

fn toggle(set: &mut BTreeSet<String>, code: &str) {
    if !set.remove(code) {
        set.insert(code.to_string());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/selection/state.rs"]
mod tests;
