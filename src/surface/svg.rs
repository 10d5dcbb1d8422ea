use std::fmt::{self, Write};

use kurbo::PathEl;

use crate::{
    foundation::core::{Rect, Rgba8},
    render::plan::{
        AxisOp, AxisOrient, CircleMark, DrawOp, DrawingInstructionSet, FontWeight, PathMark,
        RectMark, Stroke, TextAnchor, TextOp, TextStyle,
    },
};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;
const AXIS_COLOR: &str = "#000000";
const FONT_FAMILY: &str = "sans-serif";

/// Standalone SVG document for a drawing. Tooltips become `<title>` children of their shapes.
pub fn to_svg(set: &DrawingInstructionSet) -> String {
    let mut out = String::new();
    // `fmt::Write` for `String` never fails.
    let _ = write_document(&mut out, set);
    out
}

fn write_document(out: &mut impl Write, set: &DrawingInstructionSet) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
        w = num(set.width),
        h = num(set.height),
    )?;
    writeln!(
        out,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        num(set.width),
        num(set.height),
        Rgba8::WHITE.to_hex()
    )?;
    for op in &set.ops {
        match op {
            DrawOp::Rect(r) => write_rect(out, r)?,
            DrawOp::Circle(c) => write_circle(out, c)?,
            DrawOp::Path(p) => write_path(out, p)?,
            DrawOp::Axis(a) => write_axis(out, a)?,
            DrawOp::Text(t) => write_text(out, t)?,
            DrawOp::Swatch(s) => {
                write!(out, "<rect {}", rect_attrs(s.rect))?;
                write_fill(out, s.fill)?;
                out.write_str("/>\n")?;
                write_text(out, &s.label)?;
            }
        }
    }
    out.write_str("</svg>\n")
}

fn write_rect(out: &mut impl Write, r: &RectMark) -> fmt::Result {
    write!(out, "<rect {}", rect_attrs(r.rect))?;
    write_fill(out, r.fill)?;
    write_stroke(out, r.stroke)?;
    writeln!(out, "><title>{}</title></rect>", escape(&r.tooltip))
}

fn write_circle(out: &mut impl Write, c: &CircleMark) -> fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}""#,
        num(c.center.x),
        num(c.center.y),
        num(c.radius)
    )?;
    write_fill(out, c.fill)?;
    if c.fill_opacity < 1.0 {
        write!(out, r#" fill-opacity="{}""#, num(c.fill_opacity))?;
    }
    write_stroke(out, c.stroke)?;
    writeln!(out, "><title>{}</title></circle>", escape(&c.tooltip))
}

fn write_path(out: &mut impl Write, p: &PathMark) -> fmt::Result {
    out.write_str(r#"<path d=""#)?;
    write_path_data(out, p.path.elements())?;
    out.write_char('"')?;
    match p.fill {
        Some(color) => write_fill(out, color)?,
        None => out.write_str(r#" fill="none""#)?,
    }
    write_stroke(out, Some(p.stroke))?;
    out.write_str("/>\n")
}

fn write_axis(out: &mut impl Write, axis: &AxisOp) -> fmt::Result {
    let (r0, r1) = axis.extent;
    let o = axis.offset;
    writeln!(
        out,
        r#"<g class="axis" font-size="{}">"#,
        num(axis.label_style.font_size)
    )?;
    match axis.orient {
        AxisOrient::Bottom => writeln!(
            out,
            r#"<path d="M{},{}V{}H{}V{}" fill="none" stroke="{AXIS_COLOR}"/>"#,
            num(r0),
            num(o + TICK_SIZE),
            num(o),
            num(r1),
            num(o + TICK_SIZE)
        )?,
        AxisOrient::Left => writeln!(
            out,
            r#"<path d="M{},{}H{}V{}H{}" fill="none" stroke="{AXIS_COLOR}"/>"#,
            num(o - TICK_SIZE),
            num(r0),
            num(o),
            num(r1),
            num(o - TICK_SIZE)
        )?,
    }
    for tick in &axis.ticks {
        let (line, label_pos, dy, default_anchor) = match axis.orient {
            AxisOrient::Bottom => (
                (tick.pos, o, tick.pos, o + TICK_SIZE),
                (tick.pos, o + TICK_SIZE + TICK_PADDING),
                "0.71em",
                TextAnchor::Middle,
            ),
            AxisOrient::Left => (
                (o - TICK_SIZE, tick.pos, o, tick.pos),
                (o - TICK_SIZE - TICK_PADDING, tick.pos),
                "0.32em",
                TextAnchor::End,
            ),
        };
        writeln!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{AXIS_COLOR}"/>"#,
            num(line.0),
            num(line.1),
            num(line.2),
            num(line.3)
        )?;
        // Rotated labels keep their own anchor; unrotated ones follow the axis side.
        let mut style = axis.label_style;
        if style.rotate == 0.0 {
            style.anchor = default_anchor;
        }
        write!(
            out,
            r#"<text x="{}" y="{}" dy="{dy}""#,
            num(label_pos.0),
            num(label_pos.1)
        )?;
        write_text_attrs(out, &style, label_pos, false)?;
        writeln!(out, ">{}</text>", escape(&tick.label))?;
    }
    out.write_str("</g>\n")
}

fn write_text(out: &mut impl Write, t: &TextOp) -> fmt::Result {
    write!(out, r#"<text x="{}" y="{}""#, num(t.pos.x), num(t.pos.y))?;
    write_text_attrs(out, &t.style, (t.pos.x, t.pos.y), true)?;
    writeln!(out, ">{}</text>", escape(&t.text))
}

fn write_text_attrs(
    out: &mut impl Write,
    style: &TextStyle,
    (x, y): (f64, f64),
    with_size: bool,
) -> fmt::Result {
    let anchor = match style.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    write!(out, r#" text-anchor="{anchor}""#)?;
    if with_size {
        write!(out, r#" font-size="{}""#, num(style.font_size))?;
    }
    if style.weight == FontWeight::SemiBold {
        out.write_str(r#" font-weight="600""#)?;
    }
    if style.rotate != 0.0 {
        write!(
            out,
            r#" transform="rotate({},{},{})""#,
            num(style.rotate),
            num(x),
            num(y)
        )?;
    }
    Ok(())
}

fn rect_attrs(r: Rect) -> String {
    format!(
        r#"x="{}" y="{}" width="{}" height="{}""#,
        num(r.x0),
        num(r.y0),
        num(r.width().max(0.0)),
        num(r.height().max(0.0))
    )
}

fn write_fill(out: &mut impl Write, color: Rgba8) -> fmt::Result {
    write!(out, r#" fill="{}""#, hex6(color))?;
    if color.a != 255 {
        write!(out, r#" fill-opacity="{}""#, num(f64::from(color.a) / 255.0))?;
    }
    Ok(())
}

fn write_stroke(out: &mut impl Write, stroke: Option<Stroke>) -> fmt::Result {
    match stroke {
        Some(s) => write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            hex6(s.color),
            num(s.width)
        ),
        None => Ok(()),
    }
}

fn hex6(c: Rgba8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn write_path_data(out: &mut impl Write, elements: &[PathEl]) -> fmt::Result {
    for el in elements {
        match *el {
            PathEl::MoveTo(p) => write!(out, "M{},{}", num(p.x), num(p.y))?,
            PathEl::LineTo(p) => write!(out, "L{},{}", num(p.x), num(p.y))?,
            PathEl::QuadTo(a, p) => {
                write!(out, "Q{},{},{},{}", num(a.x), num(a.y), num(p.x), num(p.y))?
            }
            PathEl::CurveTo(a, b, p) => write!(
                out,
                "C{},{},{},{},{},{}",
                num(a.x),
                num(a.y),
                num(b.x),
                num(b.y),
                num(p.x),
                num(p.y)
            )?,
            PathEl::ClosePath => out.write_char('Z')?,
        }
    }
    Ok(())
}

/// Coordinates rounded to 1/1000 px; `-0` and trailing zeros dropped.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 1000.0).round() / 1000.0;
    let s = format!("{rounded:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/svg.rs"]
mod tests;
