//! Heat-map chart assembly.
//!
//! Emits a standalone SVG document: description line, one cell per record,
//! year and month axes, the palette legend, and an embedded hover tooltip.
//! Control flows once: plan geometry, build scales, write markup.

use std::fmt::Write;

use heatmap_common::{CellGeometry, ChartLayout, Dataset};
use tracing::debug;

use crate::axis;
use crate::legend;
use crate::tooltip;
use crate::RenderError;

const STYLE: &str = "\
    text { font-family: sans-serif; font-size: 12px; } \
    .axis line { stroke: #000000; } \
    .axis-label { font-size: 14px; } \
    .cell:hover { stroke: #000000; stroke-width: 0.5; } \
    #tooltip { pointer-events: none; } \
    #description { font-size: 16px; }";

/// Render the full chart for a validated dataset.
pub fn render_chart(dataset: &Dataset, layout: &ChartLayout) -> Result<String, RenderError> {
    dataset.validate()?;

    let geometry = CellGeometry::plan(layout, dataset);
    let x_scale = geometry.x_scale(layout);
    let y_scale = geometry.y_scale(layout);
    let temp_scale = geometry.temp_scale();

    debug!(
        records = dataset.record_count(),
        cell_width = geometry.cell_width,
        cell_height = geometry.cell_height,
        "planned chart geometry"
    );

    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height
    )?;
    writeln!(svg, "  <style>{STYLE}</style>")?;

    let (min_year, max_year) = geometry.year_domain;
    writeln!(
        svg,
        r#"  <text id="description" x="{}" y="{}" text-anchor="middle">Between {min_year} and {max_year}, the global land surface base temperature was {base:.3}°C.</text>"#,
        layout.width / 2.0,
        layout.padding / 2.0,
        base = dataset.base_temperature
    )?;

    writeln!(svg, r#"  <g id="cells">"#)?;
    for record in &dataset.monthly_variance {
        let month = record.month_index()?;
        let temp = record.absolute_temp(dataset.base_temperature);
        let (note, trend) = tooltip::baseline_note(record.variance);
        writeln!(
            svg,
            r#"    <rect class="cell" x="{x}" y="{y}" width="{cw}" height="{ch}" fill="{fill}" data-year="{year}" data-month="{month}" data-temp="{temp:.3}" data-heading="{heading}" data-note="{note}" data-trend="{trend}"/>"#,
            x = x_scale.map(record.year as f64),
            y = y_scale.map(month.index() as f64),
            cw = geometry.cell_width,
            ch = geometry.cell_height,
            fill = temp_scale.color(temp).hex(),
            year = record.year,
            month = month.index(),
            heading = tooltip::heading(month, record.year, temp),
            trend = trend.color()
        )?;
    }
    writeln!(svg, "  </g>")?;

    axis::x_axis(&mut svg, &x_scale, layout)?;
    axis::y_axis(&mut svg, &y_scale, layout, &geometry)?;
    axis::captions(&mut svg, layout)?;
    legend::legend(&mut svg, &temp_scale, layout, &geometry)?;
    tooltip::tooltip_group(&mut svg)?;

    writeln!(svg, "  <script><![CDATA[{}]]></script>", tooltip::HOVER_SCRIPT)?;
    writeln!(svg, "</svg>")?;
    Ok(svg)
}
