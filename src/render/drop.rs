//! Exponential drop chart

use tracing::debug;

use super::line_chart::{LineChart, SAMPLE_INTERVALS};
use crate::chart::RenderedChart;
use crate::curves::{drop_eval, SampleSeries};
use crate::error::Result;
use crate::request::DropParams;

pub fn sample(p: &DropParams) -> SampleSeries {
    let shape = p.shape();
    SampleSeries::sample(p.drop_min, SAMPLE_INTERVALS, |t| {
        drop_eval(t, p.drop_min, p.beat_target, shape)
    })
}

/// Parameter lines under the chart.
///
/// The mode line follows the `slide` flag as given, so a stepped request
/// whose step settings fall back to the continuous curve still reads as
/// stepped, with the raw step length and count.
pub fn annotations(p: &DropParams) -> [String; 2] {
    let first = format!(
        "start={:.3}Hz  target={:.3}Hz  D={:.1}min",
        p.beat_start, p.beat_target, p.drop_min
    );
    let second = if p.slide {
        format!("{} mode: continuous exponential (s)", p.kind.label())
    } else {
        format!(
            "{} mode: stepped exponential (k/default), step={}s n={}",
            p.kind.label(),
            p.step_len_sec,
            p.n_step
        )
    };
    [first, second]
}

pub fn render(p: &DropParams) -> Result<RenderedChart> {
    p.validate()?;
    let series = sample(p);
    debug!(
        samples = series.len(),
        stepped = p.shape().is_stepped(),
        range = ?series.value_range(),
        "sampled drop"
    );

    LineChart {
        series: &series,
        duration: p.drop_min,
        start: p.beat_start,
        target: p.beat_target,
        annotations: annotations(p),
    }
    .render()
}
