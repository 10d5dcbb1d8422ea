use std::fmt;

use crate::foundation::error::{DelayscopeError, DelayscopeResult};

pub use kurbo::{BezPath, Point, Rect};

/// One of the twelve fixed calendar month labels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Highest valid month index (December).
    pub const MAX_INDEX: u8 = 11;

    pub fn from_index(idx: u8) -> Option<Self> {
        Self::ALL.get(usize::from(idx)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Straight (non-premultiplied) RGBA8 color.
///
/// Serializes as `#rrggbb` (or `#rrggbbaa` when not opaque). Deserializes from the same hex forms
/// or from an `{ "r": .., "g": .., "b": .., "a": .. }` object with 0..255 channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn from_hex(s: &str) -> DelayscopeResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> DelayscopeResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| DelayscopeError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        if !s.is_ascii() {
            return Err(DelayscopeError::validation("hex color must be ASCII"));
        }
        match s.len() {
            6 => Ok(Self::rgb(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self {
                r: hex_byte(&s[0..2])?,
                g: hex_byte(&s[2..4])?,
                b: hex_byte(&s[4..6])?,
                a: hex_byte(&s[6..8])?,
            }),
            _ => Err(DelayscopeError::validation(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            )),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl serde::Serialize for Rgba8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b, a } => Ok(Self { r, g, b, a }),
        }
    }
}

/// Chart margins in pixels around the plot area.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Outer size and margins of one chart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartLayout {
    pub const fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Horizontal plot extent `[left, width - right]`.
    pub fn x_range(&self) -> (f64, f64) {
        (self.margin.left, self.width - self.margin.right)
    }

    /// Vertical plot extent `[top, height - bottom]`, top to bottom.
    pub fn y_range(&self) -> (f64, f64) {
        (self.margin.top, self.height - self.margin.bottom)
    }

    pub fn validate(&self, name: &str) -> DelayscopeResult<()> {
        let finite = [
            self.width,
            self.height,
            self.margin.top,
            self.margin.right,
            self.margin.bottom,
            self.margin.left,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0);
        if !finite {
            return Err(DelayscopeError::validation(format!(
                "{name}: size and margins must be finite and >= 0"
            )));
        }
        if self.margin.left + self.margin.right >= self.width
            || self.margin.top + self.margin.bottom >= self.height
        {
            return Err(DelayscopeError::validation(format!(
                "{name}: margins leave no plot area"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
