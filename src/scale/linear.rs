/// Linear map from a numeric domain onto a pixel range.
///
/// Vertical axes pass an inverted range (`(bottom, top)`) so larger values land higher.
/// A degenerate domain (`d0 == d1`) maps every input to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain `[0, observed_max * headroom]`.
    ///
    /// Non-finite or negative maxima (an empty dataset) collapse to a zero domain.
    pub fn zero_based(observed_max: f64, headroom: f64, range: (f64, f64)) -> Self {
        let max = if observed_max.is_finite() && observed_max > 0.0 {
            observed_max * headroom
        } else {
            0.0
        };
        Self::new((0.0, max), range)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn is_degenerate(&self) -> bool {
        self.domain.0 == self.domain.1
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if self.is_degenerate() || !value.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Roughly `count` evenly spaced "nice" values (1, 2 or 5 × 10^k steps) covering the domain.
    ///
    /// Domains too narrow or too wide for a finite step fall back to their two endpoints.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = ordered(self.domain);
        if !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi || count == 0 {
            return vec![lo];
        }

        let inc = tick_increment(lo, hi, count);
        if !inc.is_finite() || inc == 0.0 {
            return vec![lo, hi];
        }
        // Negative increments are inverted steps, so values like 0.2 stay exact.
        let (i0, i1) = if inc > 0.0 {
            ((lo / inc).ceil(), (hi / inc).floor())
        } else {
            ((lo * -inc).ceil(), (hi * -inc).floor())
        };
        let max_ticks = (count * 10) as f64;
        if !i0.is_finite() || !i1.is_finite() || i1 < i0 || i1 - i0 > max_ticks {
            return vec![lo, hi];
        }

        let (i0, i1) = (i0 as i64, i1 as i64);
        if inc > 0.0 {
            (i0..=i1).map(|i| i as f64 * inc).collect()
        } else {
            (i0..=i1).map(|i| i as f64 / -inc).collect()
        }
    }

    /// Label formatter matching [`LinearScale::ticks`]`(count)` precision, with thousands
    /// separators.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String + use<> {
        let (lo, hi) = ordered(self.domain);
        let decimals = if lo < hi && lo.is_finite() && hi.is_finite() && count > 0 {
            let inc = tick_increment(lo, hi, count);
            if inc.is_finite() && inc < 0.0 {
                (-inc).log10().ceil() as usize
            } else {
                0
            }
        } else {
            0
        };
        move |v| format_grouped(v, decimals)
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Tick step for `count` ticks over `[lo, hi]`; below 1 it is returned as `-1 / step`.
fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

fn format_grouped(v: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, v.abs());
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s.as_str(), None),
    };

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = v < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0');
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac {
        out.push('.');
        out.push_str(f);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scale/linear.rs"]
mod tests;
