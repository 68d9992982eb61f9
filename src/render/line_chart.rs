//! Single-panel frequency-over-time chart shared by the sigmoid and drop modes

use tracing::debug;

use crate::chart::style::{
    ACCENT, AXIS_TITLE_FONT_SIZE, CURVE, LABEL, SINGLE_PANEL, X_DIVISIONS,
};
use crate::chart::{integer_ticks, paint, AxisRange, FontWeight, Panel, RenderedChart};
use crate::curves::SampleSeries;
use crate::error::Result;

/// Samples per curve, counted as intervals over the domain
pub const SAMPLE_INTERVALS: usize = 2000;

const X_TITLE: &str = "TIME MIN";
const Y_TITLE: &str = "FREQ HZ";
const ANNOTATION_FONT_SIZE: f64 = 14.0;

/// Offsets from the bottom edge of the canvas to the top of each text row
const X_TITLE_FROM_BOTTOM: f64 = 84.0;
const ANNOTATION_ROWS_FROM_BOTTOM: [f64; 2] = [51.0, 29.0];
/// Horizontal centre of the rotated y-axis title
const Y_TITLE_CENTER_X: f64 = 32.0;

/// Everything needed to draw one frequency curve
pub struct LineChart<'a> {
    pub series: &'a SampleSeries,
    /// Duration in minutes; the x axis runs from 0 to here
    pub duration: f64,
    /// Frequencies that must stay visible on the y axis
    pub start: f64,
    pub target: f64,
    pub annotations: [String; 2],
}

impl LineChart<'_> {
    pub fn y_axis(&self) -> AxisRange {
        let (lo, hi) = self.series.value_range().unwrap_or_else(|| {
            (self.start.min(self.target), self.start.max(self.target))
        });
        AxisRange::covering(lo, hi, self.start, self.target)
    }

    pub fn render(&self) -> Result<RenderedChart> {
        let layout = SINGLE_PANEL;
        let axis = self.y_axis();
        let y_ticks = axis.ticks();
        let x_ticks = integer_ticks(self.duration);
        debug!(
            y_min = axis.min,
            y_max = axis.max,
            y_step = axis.tick_step,
            y_ticks = y_ticks.len(),
            x_ticks = x_ticks.len(),
            "computed axes"
        );

        let panel = Panel {
            x0: layout.margin_left,
            y0: layout.margin_top,
            width: layout.plot_width(),
            height: layout.plot_height(),
            x_end: self.duration,
            y_min: axis.min,
            y_max: axis.max,
        };
        let endpoints: Vec<(f64, f64)> =
            self.series.first().into_iter().chain(self.series.last()).collect();

        paint(layout.width, layout.height, |canvas| {
            panel.draw_frame(canvas, X_DIVISIONS, &y_ticks)?;
            panel.draw_curve(canvas, self.series, CURVE, 2)?;
            panel.draw_markers(canvas, &endpoints, ACCENT)?;
            panel.draw_x_ticks(canvas, &x_ticks)?;
            panel.draw_y_ticks(canvas, &y_ticks)?;

            let height = layout.height as f64;
            let (center_x, center_y) = panel.center();

            canvas
                .set_color(LABEL)
                .set_font(AXIS_TITLE_FONT_SIZE, FontWeight::Bold);
            canvas.show_text_centered(X_TITLE, center_x, height - X_TITLE_FROM_BOTTOM)?;
            canvas.show_text_vertical(Y_TITLE, (Y_TITLE_CENTER_X, center_y))?;

            canvas.set_font(ANNOTATION_FONT_SIZE, FontWeight::Normal);
            for (line, offset) in self.annotations.iter().zip(ANNOTATION_ROWS_FROM_BOTTOM) {
                canvas.show_text_centered(line, center_x, height - offset)?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_axis_keeps_start_visible() {
        // Curve never reaches the configured start frequency
        let series = SampleSeries::sample(10.0, SAMPLE_INTERVALS, |t| 5.0 - t * 0.1);
        let chart = LineChart {
            series: &series,
            duration: 10.0,
            start: 12.0,
            target: 4.0,
            annotations: [String::new(), String::new()],
        };
        let axis = chart.y_axis();
        assert!(axis.min < 4.0 && axis.max > 12.0);
    }

    #[test]
    fn test_y_axis_without_finite_samples() {
        let series = SampleSeries::sample(10.0, 10, |_| f64::NAN);
        let chart = LineChart {
            series: &series,
            duration: 10.0,
            start: 8.0,
            target: 2.0,
            annotations: [String::new(), String::new()],
        };
        let axis = chart.y_axis();
        assert!(axis.min < 2.0 && axis.max > 8.0);
    }
}
