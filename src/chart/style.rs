//! Fixed chart geometry and colours

use plotters::style::RGBColor;

/// Canvas size and plot margins, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Layout {
    pub fn plot_width(&self) -> f64 {
        self.width as f64 - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height as f64 - self.margin_top - self.margin_bottom
    }
}

/// Sigmoid and drop charts
pub const SINGLE_PANEL: Layout = Layout {
    width: 1200,
    height: 700,
    margin_left: 150.0,
    margin_right: 40.0,
    margin_top: 40.0,
    margin_bottom: 120.0,
};

/// Isochronic envelope + waveform chart
pub const DUAL_PANEL: Layout = Layout {
    width: 1600,
    height: 980,
    margin_left: 130.0,
    margin_right: 40.0,
    margin_top: 40.0,
    margin_bottom: 160.0,
};

/// Vertical gap between the two iso-cycle panels
pub const PANEL_GAP: f64 = 70.0;

/// Vertical grid divisions per panel
pub const X_DIVISIONS: usize = 10;

pub const BACKGROUND: RGBColor = RGBColor(255, 255, 255);
pub const PANEL_FILL: RGBColor = RGBColor(250, 250, 250);
pub const GRID: RGBColor = RGBColor(237, 237, 237);
pub const BORDER: RGBColor = RGBColor(89, 89, 89);
pub const LABEL: RGBColor = RGBColor(38, 38, 38);
pub const TITLE: RGBColor = RGBColor(31, 31, 31);
pub const CURVE: RGBColor = RGBColor(33, 94, 224);
pub const ACCENT: RGBColor = RGBColor(219, 41, 41);

pub const TICK_FONT_SIZE: f64 = 16.0;
pub const AXIS_TITLE_FONT_SIZE: f64 = 18.0;
pub const TITLE_FONT_SIZE: f64 = 17.0;

/// Length of a tick mark outside the panel border
pub const TICK_LENGTH: f64 = 4.0;
/// Space between a tick mark and its label
pub const TICK_LABEL_GAP: f64 = 8.0;
pub const MARKER_RADIUS: f64 = 3.0;
