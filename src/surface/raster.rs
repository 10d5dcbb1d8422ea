use std::{path::Path, sync::Arc};

use anyhow::Context as _;

use crate::{
    foundation::error::{DelayscopeError, DelayscopeResult},
    render::plan::DrawingInstructionSet,
    surface::svg::to_svg,
};

/// Upper bound on either raster dimension.
const MAX_DIM: u32 = 16_384;

/// Rasterize a drawing into straight-alpha RGBA8 pixels through its SVG form.
///
/// Text uses system fonts; without any installed font, labels are skipped but shapes still
/// render.
pub fn rasterize(set: &DrawingInstructionSet) -> DelayscopeResult<image::RgbaImage> {
    let svg = to_svg(set);

    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let opts = usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts)
        .map_err(|e| DelayscopeError::render(format!("parse {} svg: {e}", set.chart)))?;

    let (width, height) = (to_px(tree.size().width())?, to_px(tree.size().height())?);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| DelayscopeError::render("failed to allocate pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity(pixmap.pixels().len() * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| DelayscopeError::render("pixel buffer does not match raster size"))
}

/// Rasterize and write a PNG file.
#[tracing::instrument(skip(set), fields(chart = %set.chart))]
pub fn rasterize_png(set: &DrawingInstructionSet, path: &Path) -> DelayscopeResult<()> {
    let img = rasterize(set)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn to_px(v: f32) -> DelayscopeResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(DelayscopeError::render("drawing has invalid width/height"));
    }
    let px = v.ceil() as u32;
    if px > MAX_DIM {
        return Err(DelayscopeError::render(format!(
            "raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
