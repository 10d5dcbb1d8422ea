use crate::{
    render::plan::{AxisOp, AxisOrient, Tick, TextStyle},
    scale::{band::BandScale, linear::LinearScale},
};

/// Default tick count for numeric axes.
pub const LINEAR_TICKS: usize = 10;

/// One tick per band, at the band center, labelled with the category.
pub fn band_axis(
    orient: AxisOrient,
    offset: f64,
    scale: &BandScale,
    label_style: TextStyle,
) -> AxisOp {
    let ticks = scale
        .labels()
        .iter()
        .filter_map(|label| {
            scale.center(label).map(|pos| Tick {
                pos,
                label: label.clone(),
            })
        })
        .collect();
    AxisOp {
        orient,
        offset,
        extent: scale.range(),
        ticks,
        label_style,
    }
}

/// Nice ticks over the scale domain, formatted to the tick step.
pub fn linear_axis(
    orient: AxisOrient,
    offset: f64,
    scale: &LinearScale,
    label_style: TextStyle,
) -> AxisOp {
    let format = scale.tick_format(LINEAR_TICKS);
    let ticks = scale
        .ticks(LINEAR_TICKS)
        .into_iter()
        .map(|v| Tick {
            pos: scale.apply(v),
            label: format(v),
        })
        .collect();
    AxisOp {
        orient,
        offset,
        extent: scale.range(),
        ticks,
        label_style,
    }
}

/// Explicit `(value, label)` ticks placed through `scale`.
pub fn labelled_axis<'a>(
    orient: AxisOrient,
    offset: f64,
    scale: &LinearScale,
    ticks: impl IntoIterator<Item = (f64, &'a str)>,
    label_style: TextStyle,
) -> AxisOp {
    AxisOp {
        orient,
        offset,
        extent: scale.range(),
        ticks: ticks
            .into_iter()
            .map(|(v, label)| Tick {
                pos: scale.apply(v),
                label: label.to_string(),
            })
            .collect(),
        label_style,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/axis.rs"]
mod tests;
