//! Isochronic single-cycle chart
//!
//! Two stacked panels over one pulse period: the gate envelope on top and
//! the gated, scaled carrier below.

use tracing::debug;

use crate::chart::style::{
    ACCENT, CURVE, DUAL_PANEL, PANEL_GAP, TITLE, TITLE_FONT_SIZE, X_DIVISIONS,
};
use crate::chart::{descending_ticks, paint, FontWeight, Panel, RenderedChart};
use crate::curves::SampleSeries;
use crate::error::Result;
use crate::request::IsoCycleParams;

/// Samples per curve, counted as intervals over one period
pub const SAMPLE_INTERVALS: usize = 8000;

const TITLE_TEXT: &str = "ISOCHRONIC SINGLE-CYCLE PLOT";
const X_TITLE: &str = "TIME SEC";
const ENVELOPE_TITLE: &str = "ENVELOPE";
const WAVEFORM_TITLE: &str = "WAVEFORM";
const ANNOTATION_FONT_SIZE: f64 = 13.0;

const TITLE_TOP: f64 = 15.0;
/// Distance from the lower panel's bottom edge to the x-axis title
const X_TITLE_BELOW_PANEL: f64 = 43.0;
const ANNOTATION_ROWS_FROM_BOTTOM: [f64; 2] = [64.0, 38.0];
const PANEL_TITLE_CENTER_X: f64 = 22.0;

/// Envelope and waveform samples for one pulse period
pub struct CycleSamples {
    pub envelope: SampleSeries,
    pub waveform: SampleSeries,
}

pub fn sample(p: &IsoCycleParams) -> CycleSamples {
    let period = p.period_sec();
    let envelope = p.envelope();
    let amplitude = p.amplitude();

    let envelope_series = SampleSeries::sample(period, SAMPLE_INTERVALS, |t| {
        envelope.gain(p.pulse_hz * t)
    });
    let waveform_series = SampleSeries::sample(period, SAMPLE_INTERVALS, |t| {
        p.waveform.sample(p.carrier_hz * t) * envelope.gain(p.pulse_hz * t) * amplitude
    });

    CycleSamples {
        envelope: envelope_series,
        waveform: waveform_series,
    }
}

pub fn annotations(p: &IsoCycleParams) -> [String; 2] {
    [
        format!(
            "c={:.1}Hz  p={:.2}Hz  a={:.1}%  w={}",
            p.carrier_hz,
            p.pulse_hz,
            p.amp_pct,
            p.waveform.name()
        ),
        p.envelope().describe(),
    ]
}

/// The envelope panel on top, the waveform panel below it
pub fn panels(period: f64) -> (Panel, Panel) {
    let layout = DUAL_PANEL;
    let height = (layout.plot_height() - PANEL_GAP) / 2.0;
    let top = Panel {
        x0: layout.margin_left,
        y0: layout.margin_top,
        width: layout.plot_width(),
        height,
        x_end: period,
        y_min: 0.0,
        y_max: 1.0,
    };
    let bottom = Panel {
        y0: top.y0 + height + PANEL_GAP,
        y_min: -1.0,
        ..top
    };
    (top, bottom)
}

pub fn render(p: &IsoCycleParams) -> Result<RenderedChart> {
    p.validate()?;
    let period = p.period_sec();
    let samples = sample(p);
    debug!(
        period_sec = period,
        samples = samples.envelope.len(),
        custom_gate = p.gate.is_some(),
        "sampled isochronic cycle"
    );

    let (env_panel, wave_panel) = panels(period);
    let env_ticks = descending_ticks(1.0, 0.1, 10);
    let wave_ticks = descending_ticks(1.0, 0.2, 10);
    let x_ticks: Vec<f64> = (0..=X_DIVISIONS)
        .map(|i| period * i as f64 / X_DIVISIONS as f64)
        .collect();
    let notes = annotations(p);
    let layout = DUAL_PANEL;

    paint(layout.width, layout.height, |canvas| {
        env_panel.draw_frame(canvas, X_DIVISIONS, &env_ticks)?;
        wave_panel.draw_frame(canvas, X_DIVISIONS, &wave_ticks)?;

        env_panel.draw_curve(canvas, &samples.envelope, ACCENT, 2)?;
        wave_panel.draw_curve(canvas, &samples.waveform, CURVE, 1)?;

        wave_panel.draw_x_ticks(canvas, &x_ticks)?;
        env_panel.draw_y_ticks(canvas, &env_ticks)?;
        wave_panel.draw_y_ticks(canvas, &wave_ticks)?;

        let (center_x, _) = env_panel.center();
        canvas
            .set_color(TITLE)
            .set_font(TITLE_FONT_SIZE, FontWeight::Bold);
        canvas.show_text_centered(TITLE_TEXT, center_x, TITLE_TOP)?;
        canvas.show_text_centered(X_TITLE, center_x, wave_panel.bottom() + X_TITLE_BELOW_PANEL)?;
        for (title, panel) in [(ENVELOPE_TITLE, &env_panel), (WAVEFORM_TITLE, &wave_panel)] {
            let (_, center_y) = panel.center();
            canvas.show_text_vertical(title, (PANEL_TITLE_CENTER_X, center_y))?;
        }

        let height = layout.height as f64;
        canvas.set_font(ANNOTATION_FONT_SIZE, FontWeight::Normal);
        for (line, offset) in notes.iter().zip(ANNOTATION_ROWS_FROM_BOTTOM) {
            canvas.show_text_centered(line, center_x, height - offset)?;
        }
        Ok(())
    })
}
