use std::collections::HashMap;

/// Ordered categories mapped to equal, padded intervals of a pixel range.
///
/// Inner and outer padding are both `padding` (a fraction of the step), and the bands are
/// centered in the range.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// `range` is `(start, end)` with `start <= end`; `padding` is clamped to `[0, 1]`.
    pub fn new(labels: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let padding = if padding.is_finite() {
            padding.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let (r0, r1) = range;
        let n = labels.len() as f64;

        let step = (r1 - r0) / (n - padding + padding * 2.0).max(1.0);
        let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        let index = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.clone(), i))
            .collect();
        Self {
            labels,
            index,
            range,
            start,
            step,
            bandwidth,
        }
    }

    /// Leading edge of `label`'s band, or `None` for an unknown label.
    pub fn apply(&self, label: &str) -> Option<f64> {
        self.index
            .get(label)
            .map(|&i| self.start + self.step * i as f64)
    }

    pub fn center(&self, label: &str) -> Option<f64> {
        self.apply(label).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/band.rs"]
mod tests;
