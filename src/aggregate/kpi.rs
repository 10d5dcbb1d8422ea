use std::fmt;

use crate::selection::filter::FilteredView;

/// Delay below which a flight counts as on time, in minutes.
pub const DEFAULT_ON_TIME_THRESHOLD_MIN: f64 = 15.0;

/// Summary figures for the KPI cards. Rates are percentages in `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct Kpis {
    pub on_time_rate: f64,
    pub avg_delay: f64,
    pub cancellation_rate: f64,
    pub total_flights: usize,
}

pub fn compute_kpis(view: &FilteredView) -> Kpis {
    compute_kpis_with(view, DEFAULT_ON_TIME_THRESHOLD_MIN)
}

/// As [`compute_kpis`], with an explicit on-time threshold (`total_delay < threshold`).
pub fn compute_kpis_with(view: &FilteredView, on_time_threshold: f64) -> Kpis {
    let total = view.len();
    if total == 0 {
        return Kpis::default();
    }

    let mut on_time = 0usize;
    let mut cancelled = 0usize;
    let mut delay_sum = 0.0;
    for r in view.iter() {
        if r.total_delay < on_time_threshold {
            on_time += 1;
        }
        if r.cancelled {
            cancelled += 1;
        }
        delay_sum += r.total_delay;
    }

    let n = total as f64;
    Kpis {
        on_time_rate: on_time as f64 / n * 100.0,
        avg_delay: delay_sum / n,
        cancellation_rate: cancelled as f64 / n * 100.0,
        total_flights: total,
    }
}

impl fmt::Display for Kpis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "on-time {:.1}% | avg delay {:.1} min | cancelled {:.1}% | flights {}",
            self.on_time_rate, self.avg_delay, self.cancellation_rate, self.total_flights
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/aggregate/kpi.rs"]
mod tests;
