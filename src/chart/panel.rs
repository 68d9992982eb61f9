//! Plot panels: data-to-pixel mapping and the shared panel decorations

use plotters::style::RGBColor;

use super::axis::format_tick;
use super::canvas::{Canvas, FontWeight};
use super::style::{
    BORDER, GRID, LABEL, MARKER_RADIUS, PANEL_FILL, TICK_FONT_SIZE, TICK_LABEL_GAP, TICK_LENGTH,
};
use crate::curves::SampleSeries;
use crate::error::Result;

/// A rectangular plot region with its data ranges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub x0: f64,
    pub y0: f64,
    pub width: f64,
    pub height: f64,
    /// Right end of the x domain; the left end is 0
    pub x_end: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Panel {
    pub fn map_x(&self, t: f64) -> f64 {
        self.x0 + (self.width - 1.0) * (t / self.x_end)
    }

    pub fn map_y(&self, v: f64) -> f64 {
        self.y0 + (self.y_max - v) * (self.height - 1.0) / (self.y_max - self.y_min)
    }

    pub fn map(&self, (t, v): (f64, f64)) -> (f64, f64) {
        (self.map_x(t), self.map_y(v))
    }

    pub fn bottom(&self) -> f64 {
        self.y0 + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x0 + self.width / 2.0, self.y0 + self.height / 2.0)
    }

    /// Background, grid and border.
    ///
    /// `x_divisions` vertical lines split the panel evenly; one horizontal
    /// line is drawn per y tick.
    pub fn draw_frame(
        &self,
        canvas: &mut Canvas<'_>,
        x_divisions: usize,
        y_ticks: &[f64],
    ) -> Result<()> {
        canvas.set_color(PANEL_FILL);
        canvas.fill_rect(self.x0, self.y0, self.width, self.height)?;

        canvas.set_color(GRID).set_line_width(1);
        let right = self.x0 + self.width - 1.0;
        let bottom = self.y0 + self.height - 1.0;
        for i in 0..=x_divisions {
            let x = self.x0 + (self.width - 1.0) * i as f64 / x_divisions as f64;
            canvas.line((x, self.y0), (x, bottom))?;
        }
        for &v in y_ticks {
            let y = self.map_y(v);
            canvas.line((self.x0, y), (right, y))?;
        }

        canvas.set_color(BORDER);
        canvas.stroke_rect(self.x0, self.y0, self.width, self.height)
    }

    pub fn draw_curve(
        &self,
        canvas: &mut Canvas<'_>,
        series: &SampleSeries,
        color: RGBColor,
        line_width: u32,
    ) -> Result<()> {
        let path: Vec<(f64, f64)> = series
            .points()
            .iter()
            .filter(|(_, v)| v.is_finite())
            .map(|&p| self.map(p))
            .collect();
        canvas.set_color(color).set_line_width(line_width);
        canvas.polyline(&path)
    }

    pub fn draw_markers(
        &self,
        canvas: &mut Canvas<'_>,
        points: &[(f64, f64)],
        color: RGBColor,
    ) -> Result<()> {
        canvas.set_color(color);
        for &p in points.iter().filter(|(_, v)| v.is_finite()) {
            canvas.fill_circle(self.map(p), MARKER_RADIUS)?;
        }
        Ok(())
    }

    /// Tick marks below the panel with labels centred under them.
    pub fn draw_x_ticks(&self, canvas: &mut Canvas<'_>, ticks: &[f64]) -> Result<()> {
        canvas.set_font(TICK_FONT_SIZE, FontWeight::Normal).set_line_width(1);
        let edge = self.bottom() - 1.0;
        for &t in ticks {
            let x = self.map_x(t);
            canvas.set_color(BORDER);
            canvas.line((x, edge), (x, edge + TICK_LENGTH + 1.0))?;
            canvas.set_color(LABEL);
            canvas.show_text_centered(&format_tick(t), x, self.bottom() + TICK_LABEL_GAP)?;
        }
        Ok(())
    }

    /// Tick marks left of the panel with right-aligned labels.
    pub fn draw_y_ticks(&self, canvas: &mut Canvas<'_>, ticks: &[f64]) -> Result<()> {
        canvas.set_font(TICK_FONT_SIZE, FontWeight::Normal).set_line_width(1);
        for &v in ticks {
            let y = self.map_y(v);
            canvas.set_color(BORDER);
            canvas.line((self.x0 - TICK_LENGTH, y), (self.x0, y))?;
            canvas.set_color(LABEL);
            canvas.show_text_right_aligned(&format_tick(v), self.x0 - TICK_LABEL_GAP, y)?;
        }
        Ok(())
    }
}
