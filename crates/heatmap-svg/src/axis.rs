//! Axis rendering: domain line, tick marks, labels.

use std::fmt::Write;

use heatmap_common::{CellGeometry, ChartLayout, LinearScale, MonthIndex};

use crate::RenderError;

const TICK_LENGTH: f64 = 6.0;
/// Target tick count for the year axis; the 1/2/5 ladder lands near it.
const YEAR_TICK_TARGET: usize = 20;

/// Bottom year axis, drawn at the base of the plot area.
pub fn x_axis(svg: &mut String, scale: &LinearScale, layout: &ChartLayout) -> Result<(), RenderError> {
    let baseline = layout.height - layout.padding;
    let (r0, r1) = scale.range();

    writeln!(
        svg,
        r#"  <g id="x-axis" class="axis" transform="translate(0,{baseline})">"#
    )?;
    writeln!(svg, r#"    <line x1="{r0}" y1="0" x2="{r1}" y2="0"/>"#)?;
    for tick in scale.ticks(YEAR_TICK_TARGET) {
        let x = scale.map(tick);
        writeln!(svg, r#"    <line x1="{x}" y1="0" x2="{x}" y2="{TICK_LENGTH}"/>"#)?;
        writeln!(
            svg,
            r#"    <text x="{x}" y="{}" text-anchor="middle">{tick}</text>"#,
            TICK_LENGTH + 14.0
        )?;
    }
    writeln!(svg, "  </g>")?;
    Ok(())
}

/// Left month axis. The group is shifted down half a cell so ticks sit
/// centered against their rows.
pub fn y_axis(
    svg: &mut String,
    scale: &LinearScale,
    layout: &ChartLayout,
    geometry: &CellGeometry,
) -> Result<(), RenderError> {
    writeln!(
        svg,
        r#"  <g id="y-axis" class="axis" transform="translate({},{})">"#,
        layout.padding,
        geometry.cell_height / 2.0
    )?;
    let (r0, r1) = scale.range();
    writeln!(svg, r#"    <line x1="0" y1="{r0}" x2="0" y2="{r1}"/>"#)?;
    for month in MonthIndex::all() {
        let y = scale.map(month.index() as f64);
        writeln!(svg, r#"    <line x1="-{TICK_LENGTH}" y1="{y}" x2="0" y2="{y}"/>"#)?;
        writeln!(
            svg,
            r#"    <text x="-{}" y="{}" text-anchor="end">{}</text>"#,
            TICK_LENGTH + 3.0,
            y + 4.0,
            month.name()
        )?;
    }
    writeln!(svg, "  </g>")?;
    Ok(())
}

/// Axis captions: "Year" centered under the plot, "Month" rotated along the
/// left edge.
pub fn captions(svg: &mut String, layout: &ChartLayout) -> Result<(), RenderError> {
    writeln!(
        svg,
        r#"  <text class="axis-label" x="{}" y="{}" text-anchor="middle">Year</text>"#,
        layout.width / 2.0,
        layout.height - layout.padding / 3.0 * 2.0
    )?;
    writeln!(
        svg,
        r#"  <text class="axis-label" x="{}" y="{}" text-anchor="middle" transform="rotate(-90)">Month</text>"#,
        (layout.padding - layout.height) / 2.0,
        layout.padding / 3.0
    )?;
    Ok(())
}
