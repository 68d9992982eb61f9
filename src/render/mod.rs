//! Render routines, one per chart mode

pub mod drop;
pub mod iso_cycle;
pub mod line_chart;
pub mod sigmoid;

use std::path::Path;

use tracing::debug;

use crate::chart::RenderedChart;
use crate::error::Result;
use crate::request::CurveRequest;

/// Render the chart for `request` into an encoded image.
pub fn render(request: &CurveRequest) -> Result<RenderedChart> {
    debug!(mode = request.mode_name(), "rendering");
    match request {
        CurveRequest::Sigmoid(p) => sigmoid::render(p),
        CurveRequest::Drop(p) => drop::render(p),
        CurveRequest::IsoCycle(p) => iso_cycle::render(p),
    }
}

/// Render `request` and write the PNG to `out`.
///
/// The file is only touched once the whole image has been encoded.
pub fn render_to_file(request: &CurveRequest, out: &Path) -> Result<RenderedChart> {
    let chart = render(request)?;
    chart.write_to(out)?;
    Ok(chart)
}
