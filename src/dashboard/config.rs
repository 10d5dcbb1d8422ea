use crate::{
    aggregate::{kpi::DEFAULT_ON_TIME_THRESHOLD_MIN, routes::DEFAULT_SIGNIFICANCE_FLOOR},
    foundation::{
        core::{ChartLayout, Margin, Rgba8},
        error::{DelayscopeError, DelayscopeResult},
    },
    render::plan::Stroke,
    scale::color::ThresholdColorScale,
};

/// Where the heatmap takes its carrier rows from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapAxis {
    /// Carriers present in the filtered view.
    #[default]
    Filtered,
    /// Every carrier in the record store, so rows stay put while filtering.
    Universe,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub layout: ChartLayout,
    pub band_padding: f64,
    /// Delay (minutes) at the red end of the ramp.
    pub high_delay_threshold: f64,
    pub empty_color: Rgba8,
    pub cell_stroke: Stroke,
    pub axis: HeatmapAxis,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::new(600.0, 250.0, Margin::new(20.0, 80.0, 60.0, 80.0)),
            band_padding: 0.05,
            high_delay_threshold: 60.0,
            empty_color: Rgba8::rgb(0xf0, 0xf0, 0xf0),
            cell_stroke: Stroke::new(Rgba8::WHITE, 1.0),
            axis: HeatmapAxis::Filtered,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BreakdownConfig {
    pub layout: ChartLayout,
    pub band_padding: f64,
    pub headroom: f64,
    pub carrier_color: Rgba8,
    pub weather_color: Rgba8,
    pub nas_color: Rgba8,
    pub segment_stroke: Stroke,
}

impl Default for BreakdownConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::new(700.0, 400.0, Margin::new(40.0, 150.0, 60.0, 60.0)),
            band_padding: 0.3,
            headroom: 1.1,
            carrier_color: Rgba8::rgb(0xef, 0x44, 0x44),
            weather_color: Rgba8::rgb(0xf5, 0x9e, 0x0b),
            nas_color: Rgba8::rgb(0x3b, 0x82, 0xf6),
            segment_stroke: Stroke::new(Rgba8::WHITE, 1.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    pub layout: ChartLayout,
    pub headroom: f64,
    pub line_color: Rgba8,
    pub line_width: f64,
    pub point_radius: f64,
    pub point_stroke: Stroke,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::new(600.0, 250.0, Margin::new(30.0, 30.0, 60.0, 60.0)),
            headroom: 1.2,
            line_color: Rgba8::rgb(0x3b, 0x82, 0xf6),
            line_width: 3.0,
            point_radius: 5.0,
            point_stroke: Stroke::new(Rgba8::WHITE, 2.0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RoutesConfig {
    pub layout: ChartLayout,
    pub headroom: f64,
    /// Bubble radius for the smallest and largest route count.
    pub radius_range: (f64, f64),
    pub significance_floor: usize,
    pub colors: ThresholdColorScale,
    pub fill_opacity: f64,
    pub bubble_stroke: Stroke,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            layout: ChartLayout::new(700.0, 400.0, Margin::new(40.0, 30.0, 60.0, 60.0)),
            headroom: 1.1,
            radius_range: (3.0, 15.0),
            significance_floor: DEFAULT_SIGNIFICANCE_FLOOR,
            colors: ThresholdColorScale::default(),
            fill_opacity: 0.6,
            bubble_stroke: Stroke::new(Rgba8::WHITE, 1.0),
        }
    }
}

/// Every tunable of the dashboard. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub heatmap: HeatmapConfig,
    pub breakdown: BreakdownConfig,
    pub trend: TrendConfig,
    pub routes: RoutesConfig,
    /// A flight is on time when `total_delay` is strictly below this many minutes.
    pub on_time_threshold: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            heatmap: HeatmapConfig::default(),
            breakdown: BreakdownConfig::default(),
            trend: TrendConfig::default(),
            routes: RoutesConfig::default(),
            on_time_threshold: DEFAULT_ON_TIME_THRESHOLD_MIN,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(s: &str) -> DelayscopeResult<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DelayscopeResult<()> {
        self.heatmap.layout.validate("heatmap")?;
        self.breakdown.layout.validate("breakdown")?;
        self.trend.layout.validate("trend")?;
        self.routes.layout.validate("routes")?;

        padding("heatmap.band_padding", self.heatmap.band_padding)?;
        padding("breakdown.band_padding", self.breakdown.band_padding)?;
        headroom("breakdown.headroom", self.breakdown.headroom)?;
        headroom("trend.headroom", self.trend.headroom)?;
        headroom("routes.headroom", self.routes.headroom)?;

        positive("heatmap.high_delay_threshold", self.heatmap.high_delay_threshold)?;
        positive("trend.point_radius", self.trend.point_radius)?;
        non_negative("trend.line_width", self.trend.line_width)?;
        non_negative("on_time_threshold", self.on_time_threshold)?;

        let (r0, r1) = self.routes.radius_range;
        positive("routes.radius_range.0", r0)?;
        positive("routes.radius_range.1", r1)?;
        if r0 > r1 {
            return Err(DelayscopeError::validation(
                "routes.radius_range must be ascending",
            ));
        }
        if !(0.0..=1.0).contains(&self.routes.fill_opacity) {
            return Err(DelayscopeError::validation(
                "routes.fill_opacity must be in [0, 1]",
            ));
        }

        let colors = &self.routes.colors;
        non_negative("routes.colors.moderate_above", colors.moderate_above)?;
        non_negative("routes.colors.high_above", colors.high_above)?;
        if colors.moderate_above > colors.high_above {
            return Err(DelayscopeError::validation(
                "routes.colors.moderate_above must not exceed high_above",
            ));
        }
        Ok(())
    }
}

fn padding(name: &str, v: f64) -> DelayscopeResult<()> {
    if v.is_finite() && (0.0..1.0).contains(&v) {
        Ok(())
    } else {
        Err(DelayscopeError::validation(format!(
            "{name} must be in [0, 1) (got {v})"
        )))
    }
}

fn headroom(name: &str, v: f64) -> DelayscopeResult<()> {
    if v.is_finite() && v >= 1.0 {
        Ok(())
    } else {
        Err(DelayscopeError::validation(format!(
            "{name} must be >= 1 (got {v})"
        )))
    }
}

fn positive(name: &str, v: f64) -> DelayscopeResult<()> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(DelayscopeError::validation(format!(
            "{name} must be > 0 (got {v})"
        )))
    }
}

fn non_negative(name: &str, v: f64) -> DelayscopeResult<()> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(DelayscopeError::validation(format!(
            "{name} must be >= 0 (got {v})"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dashboard/config.rs"]
mod tests;
