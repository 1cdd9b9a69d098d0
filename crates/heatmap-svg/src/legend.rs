//! Color legend: the eleven palette swatches with a boundary axis.

use std::fmt::Write;

use heatmap_common::{CellGeometry, ChartLayout, QuantizeScale, HEAT_PALETTE};

use crate::RenderError;

const TICK_LENGTH: f64 = 5.0;

/// Draw the legend strip below the plot area.
///
/// Swatch sizes derive from the cell height so the legend tracks the chart
/// proportions; the boundary axis labels all twelve bucket edges.
pub fn legend(
    svg: &mut String,
    scale: &QuantizeScale,
    layout: &ChartLayout,
    geometry: &CellGeometry,
) -> Result<(), RenderError> {
    let swatch_width = geometry.cell_height * 2.0;
    let swatch_height = geometry.cell_height / 2.0;
    let origin_x = layout.padding * 2.0;
    let origin_y = layout.height - layout.padding / 2.0;

    writeln!(svg, r#"  <g id="legend">"#)?;
    writeln!(
        svg,
        r#"    <text id="legend-caption" x="{}" y="{}">Temperature Range</text>"#,
        layout.padding / 3.0 * 2.0,
        layout.height - layout.padding / 3.0
    )?;

    for (i, color) in HEAT_PALETTE.iter().enumerate() {
        writeln!(
            svg,
            r#"    <rect x="{}" y="{origin_y}" width="{swatch_width}" height="{swatch_height}" fill="{}"/>"#,
            origin_x + i as f64 * swatch_width,
            color.hex()
        )?;
    }

    let axis_y = origin_y + swatch_height;
    writeln!(
        svg,
        r#"    <g id="legend-axis" class="axis" transform="translate({origin_x},{axis_y})">"#
    )?;
    for (i, bound) in scale.boundaries().iter().enumerate() {
        let x = i as f64 * swatch_width;
        writeln!(svg, r#"      <line x1="{x}" y1="0" x2="{x}" y2="{TICK_LENGTH}"/>"#)?;
        writeln!(
            svg,
            r#"      <text x="{x}" y="{}" text-anchor="middle" font-size="10">{bound:.3}°C</text>"#,
            TICK_LENGTH + 11.0
        )?;
    }
    writeln!(svg, "    </g>")?;
    writeln!(svg, "  </g>")?;
    Ok(())
}
