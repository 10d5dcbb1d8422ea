use crate::foundation::core::Rgba8;

/// ColorBrewer RdYlGn, 11 classes, red end first.
const RD_YL_GN: [Rgba8; 11] = [
    Rgba8::rgb(0xa5, 0x00, 0x26),
    Rgba8::rgb(0xd7, 0x30, 0x27),
    Rgba8::rgb(0xf4, 0x6d, 0x43),
    Rgba8::rgb(0xfd, 0xae, 0x61),
    Rgba8::rgb(0xfe, 0xe0, 0x8b),
    Rgba8::rgb(0xff, 0xff, 0xbf),
    Rgba8::rgb(0xd9, 0xef, 0x8b),
    Rgba8::rgb(0xa6, 0xd9, 0x6a),
    Rgba8::rgb(0x66, 0xbd, 0x63),
    Rgba8::rgb(0x1a, 0x98, 0x50),
    Rgba8::rgb(0x00, 0x68, 0x37),
];

/// Red → yellow → green ramp at `t` in `[0, 1]` (clamped), smoothed with a uniform cubic
/// B-spline through the scheme's stops.
pub fn interpolate_rd_yl_gn(t: f64) -> Rgba8 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
    let n = RD_YL_GN.len() - 1;
    let i = if t >= 1.0 {
        n - 1
    } else {
        (t * n as f64).floor() as usize
    };
    let local = (t - i as f64 / n as f64) * n as f64;

    let channel = |pick: fn(Rgba8) -> u8| -> u8 {
        let v1 = f64::from(pick(RD_YL_GN[i]));
        let v2 = f64::from(pick(RD_YL_GN[i + 1]));
        let v0 = if i > 0 {
            f64::from(pick(RD_YL_GN[i - 1]))
        } else {
            2.0 * v1 - v2
        };
        let v3 = if i + 2 <= n {
            f64::from(pick(RD_YL_GN[i + 2]))
        } else {
            2.0 * v2 - v1
        };
        basis(local, v0, v1, v2, v3).round().clamp(0.0, 255.0) as u8
    };

    Rgba8::rgb(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
}

fn basis(t: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    ((1.0 - 3.0 * t + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Delay minutes onto the RdYlGn ramp with a reversed domain `[high, 0]`:
/// no delay is green, `high` minutes or more is red.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialColorScale {
    domain: (f64, f64),
}

impl SequentialColorScale {
    pub fn delay(high_delay_threshold: f64) -> Self {
        Self {
            domain: (high_delay_threshold, 0.0),
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn apply(&self, value: f64) -> Rgba8 {
        let (d0, d1) = self.domain;
        if d0 == d1 {
            return interpolate_rd_yl_gn(0.5);
        }
        interpolate_rd_yl_gn((value - d0) / (d1 - d0))
    }
}

/// Three-way delay classification used by the route chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DelayBand {
    Low,
    Moderate,
    High,
}

/// `delay > high_above` is high, `delay > moderate_above` is moderate, anything else low.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThresholdColorScale {
    pub moderate_above: f64,
    pub high_above: f64,
    pub low: Rgba8,
    pub moderate: Rgba8,
    pub high: Rgba8,
}

impl Default for ThresholdColorScale {
    fn default() -> Self {
        Self {
            moderate_above: 15.0,
            high_above: 30.0,
            low: Rgba8::rgb(0x10, 0xb9, 0x81),
            moderate: Rgba8::rgb(0xf5, 0x9e, 0x0b),
            high: Rgba8::rgb(0xef, 0x44, 0x44),
        }
    }
}

impl ThresholdColorScale {
    pub fn classify(&self, delay: f64) -> DelayBand {
        if delay > self.high_above {
            DelayBand::High
        } else if delay > self.moderate_above {
            DelayBand::Moderate
        } else {
            DelayBand::Low
        }
    }

    pub fn apply(&self, delay: f64) -> Rgba8 {
        match self.classify(delay) {
            DelayBand::Low => self.low,
            DelayBand::Moderate => self.moderate,
            DelayBand::High => self.high,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scale/color.rs"]
mod tests;
