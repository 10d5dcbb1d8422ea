/// Square-root map from a count domain `[0, max]` onto a radius range.
///
/// Circle area, not radius, grows proportionally with the count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    max: f64,
    range: (f64, f64),
}

impl SqrtScale {
    pub fn new(max: f64, range: (f64, f64)) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        Self { max, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        let d1 = self.max.sqrt();
        if d1 == 0.0 || !value.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + value.max(0.0).sqrt() / d1 * (r1 - r0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/size.rs"]
mod tests;
