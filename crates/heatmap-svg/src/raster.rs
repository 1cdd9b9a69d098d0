//! SVG rasterization to PNG via usvg/resvg.

use crate::RenderError;

/// Rasterize an SVG document to PNG bytes at its intrinsic size.
pub fn rasterize(svg: &str) -> Result<Vec<u8>, RenderError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| RenderError::Raster(format!("SVG parse failed: {e}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| RenderError::Raster("zero-sized pixmap".to_string()))?;

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Raster(format!("PNG encode failed: {e}")))
}
