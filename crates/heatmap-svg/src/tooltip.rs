//! Tooltip text formatting and the embedded hover script.
//!
//! All tooltip text is precomputed in Rust and stored on each cell as
//! `data-*` attributes; the script only copies attributes into the tooltip
//! group and positions it at the pointer.

use std::fmt::Write;

use heatmap_common::MonthIndex;

use crate::RenderError;

/// Direction of a record's deviation from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Warmer,
    Steady,
    Cooler,
}

impl Trend {
    pub fn of(variance: f64) -> Self {
        if variance > 0.0 {
            Trend::Warmer
        } else if variance < 0.0 {
            Trend::Cooler
        } else {
            Trend::Steady
        }
    }

    /// Tooltip text color for this trend.
    pub fn color(self) -> &'static str {
        match self {
            Trend::Warmer => "red",
            Trend::Steady => "green",
            Trend::Cooler => "blue",
        }
    }
}

/// First tooltip line: month, year and absolute temperature.
pub fn heading(month: MonthIndex, year: i32, absolute_temp: f64) -> String {
    format!("{} {}: {:.3}°C", month.name(), year, absolute_temp)
}

/// Second tooltip line: comparison against the baseline. The magnitude is
/// always displayed positive; the trend carries the sign.
pub fn baseline_note(variance: f64) -> (String, Trend) {
    let trend = Trend::of(variance);
    let text = match trend {
        Trend::Warmer => format!("{variance}°C above baseline"),
        Trend::Steady => format!("{variance}°C - at baseline"),
        Trend::Cooler => format!("{}°C below baseline", -variance),
    };
    (text, trend)
}

/// The hidden tooltip group, shown and filled by the hover script.
pub fn tooltip_group(svg: &mut String) -> Result<(), RenderError> {
    writeln!(svg, r#"  <g id="tooltip" visibility="hidden">"#)?;
    writeln!(
        svg,
        r##"    <rect width="250" height="44" rx="4" fill="#000000" opacity="0.8"/>"##
    )?;
    writeln!(
        svg,
        r##"    <text id="tooltip-heading" x="10" y="18" fill="#FFFFFF" font-size="13"></text>"##
    )?;
    writeln!(
        svg,
        r#"    <text id="tooltip-note" x="10" y="36" font-size="13"></text>"#
    )?;
    writeln!(svg, "  </g>")?;
    Ok(())
}

/// Hover wiring for viewers that run embedded scripts. On pointer enter the
/// tooltip is filled from the cell's data attributes and placed at pointer
/// + (16, -16); on pointer leave it is hidden again.
pub const HOVER_SCRIPT: &str = r#"
(function () {
  var tip = document.getElementById('tooltip');
  var heading = document.getElementById('tooltip-heading');
  var note = document.getElementById('tooltip-note');
  var cells = document.querySelectorAll('.cell');
  function show(event) {
    var cell = event.target;
    heading.textContent = cell.getAttribute('data-heading');
    note.textContent = cell.getAttribute('data-note');
    note.setAttribute('fill', cell.getAttribute('data-trend'));
    tip.setAttribute('data-year', cell.getAttribute('data-year'));
    tip.setAttribute('transform',
      'translate(' + (event.clientX + 16) + ',' + (event.clientY - 16) + ')');
    tip.setAttribute('visibility', 'visible');
  }
  function hide() {
    tip.setAttribute('visibility', 'hidden');
  }
  for (var i = 0; i < cells.length; i++) {
    cells[i].addEventListener('mouseover', show);
    cells[i].addEventListener('mouseout', hide);
  }
})();
"#;
