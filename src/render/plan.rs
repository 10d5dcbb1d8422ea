use crate::foundation::core::{BezPath, Point, Rect, Rgba8};

/// The four dashboard charts.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Heatmap,
    Breakdown,
    Trend,
    Routes,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Heatmap,
        ChartKind::Breakdown,
        ChartKind::Trend,
        ChartKind::Routes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Heatmap => "heatmap",
            Self::Breakdown => "breakdown",
            Self::Trend => "trend",
            Self::Routes => "routes",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend-agnostic description of one chart.
///
/// Ops are listed in paint order: marks first, then axes, then static labels. Two sets built
/// from the same inputs compare equal.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DrawingInstructionSet {
    pub chart: ChartKind,
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl DrawingInstructionSet {
    /// Data-driven primitives (rects, circles, paths).
    pub fn marks(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| op.is_mark())
    }

    pub fn axes(&self) -> impl Iterator<Item = &AxisOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Axis(a) => Some(a),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Tooltip strings of every interactive mark, in paint order.
    pub fn tooltips(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(DrawOp::tooltip)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: Rgba8,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba8, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    SemiBold,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextStyle {
    pub font_size: f64,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
    /// Degrees, clockwise, around the text position.
    pub rotate: f64,
}

impl TextStyle {
    pub const fn sized(font_size: f64) -> Self {
        Self {
            font_size,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Middle,
            rotate: 0.0,
        }
    }

    pub const fn semi_bold(mut self) -> Self {
        self.weight = FontWeight::SemiBold;
        self
    }

    pub const fn anchored(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }
}

/// Draw operation emitted by a chart composer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Rect(RectMark),
    Circle(CircleMark),
    Path(PathMark),
    Axis(AxisOp),
    Text(TextOp),
    Swatch(LegendSwatch),
}

impl DrawOp {
    pub fn is_mark(&self) -> bool {
        matches!(self, Self::Rect(_) | Self::Circle(_) | Self::Path(_))
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            Self::Rect(r) => Some(&r.tooltip),
            Self::Circle(c) => Some(&c.tooltip),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RectMark {
    pub rect: Rect,
    pub fill: Rgba8,
    pub stroke: Option<Stroke>,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CircleMark {
    pub center: Point,
    pub radius: f64,
    pub fill: Rgba8,
    pub fill_opacity: f64,
    pub stroke: Option<Stroke>,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathMark {
    pub path: BezPath,
    pub stroke: Stroke,
    pub fill: Option<Rgba8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Tick {
    /// Pixel position along the axis.
    pub pos: f64,
    pub label: String,
}

/// Axis line plus ticks.
///
/// `offset` is the y of a bottom axis or the x of a left axis; `extent` spans the scale range.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AxisOp {
    pub orient: AxisOrient,
    pub offset: f64,
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
    pub label_style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextOp {
    pub pos: Point,
    pub text: String,
    pub style: TextStyle,
}

impl TextOp {
    pub fn new(pos: impl Into<Point>, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            pos: pos.into(),
            text: text.into(),
            style,
        }
    }
}

/// Static legend entry: a filled square and its label.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LegendSwatch {
    pub rect: Rect,
    pub fill: Rgba8,
    pub label: TextOp,
}
