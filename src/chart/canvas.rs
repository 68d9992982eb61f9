//! Raster drawing surface
//!
//! [`paint`] owns the pixel buffer for the duration of one chart: it hands
//! a [`Canvas`] to the drawing closure, and only once the closure has
//! finished does it present the surface and encode it as PNG. The canvas
//! keeps the current colour, line width and font between calls, so a
//! chart is drawn as a sequence of state changes and strokes.

use std::fs;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};
use tracing::debug;

use super::backend::{self, FONT_FAMILY};
use super::style::BACKGROUND;
use crate::error::{PlotError, Result};

/// Font weight for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl From<FontWeight> for FontStyle {
    fn from(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => FontStyle::Normal,
            FontWeight::Bold => FontStyle::Bold,
        }
    }
}

/// An encoded chart, ready to be written out
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub png_bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedChart {
    /// Write the PNG to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PlotError::io(parent, e))?;
        }
        fs::write(path, &self.png_bytes).map_err(|e| PlotError::io(path, e))?;
        debug!(
            path = %path.display(),
            bytes = self.png_bytes.len(),
            "wrote chart"
        );
        Ok(())
    }
}

/// Drawing context over an RGB pixel buffer
pub struct Canvas<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    color: RGBColor,
    line_width: u32,
    font_size: f64,
    font_weight: FontWeight,
}

/// Allocate a `width` x `height` canvas, run `draw` on it, then encode
/// the result. Nothing is encoded if `draw` fails.
pub fn paint<F>(width: u32, height: u32, draw: F) -> Result<RenderedChart>
where
    F: FnOnce(&mut Canvas<'_>) -> Result<()>,
{
    backend::init()?;

    let mut buf = vec![0u8; width as usize * height as usize * 3];
    {
        let area = BitMapBackend::with_buffer(&mut buf, (width, height)).into_drawing_area();
        area.fill(&BACKGROUND).map_err(draw_err)?;

        let mut canvas = Canvas {
            area,
            color: BLACK,
            line_width: 1,
            font_size: 16.0,
            font_weight: FontWeight::Normal,
        };
        draw(&mut canvas)?;
        canvas.area.present().map_err(draw_err)?;
    }

    let png_bytes = encode_rgb_to_png(&buf, width, height)?;
    Ok(RenderedChart {
        png_bytes,
        width,
        height,
    })
}

fn encode_rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(rgb, width, height, ExtendedColorType::Rgb8)?;
    Ok(png)
}

fn draw_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Draw(e.to_string())
}

fn px(v: f64) -> i32 {
    v.round() as i32
}

fn point((x, y): (f64, f64)) -> (i32, i32) {
    (px(x), px(y))
}

impl Canvas<'_> {
    pub fn set_color(&mut self, color: RGBColor) -> &mut Self {
        self.color = color;
        self
    }

    pub fn set_line_width(&mut self, width: u32) -> &mut Self {
        self.line_width = width.max(1);
        self
    }

    pub fn set_font(&mut self, size: f64, weight: FontWeight) -> &mut Self {
        self.font_size = size;
        self.font_weight = weight;
        self
    }

    fn stroke_style(&self) -> ShapeStyle {
        self.color.stroke_width(self.line_width)
    }

    fn text_style(&self) -> TextStyle<'static> {
        FontDesc::new(FONT_FAMILY, self.font_size, self.font_weight.into()).color(&self.color)
    }

    /// Fill the `width` x `height` rectangle whose top-left corner is `(x, y)`.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        let rect = Rectangle::new(
            [(px(x), px(y)), (px(x + width) - 1, px(y + height) - 1)],
            self.color.filled(),
        );
        self.area.draw(&rect).map_err(draw_err)
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        let (x1, y1) = (x + width - 1.0, y + height - 1.0);
        self.polyline(&[(x, y), (x1, y), (x1, y1), (x, y1), (x, y)])
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64)) -> Result<()> {
        self.polyline(&[from, to])
    }

    /// Stroke a connected path through `points`.
    pub fn polyline(&mut self, points: &[(f64, f64)]) -> Result<()> {
        if points.len() < 2 {
            return Ok(());
        }
        let path: Vec<(i32, i32)> = points.iter().copied().map(point).collect();
        self.area
            .draw(&PathElement::new(path, self.stroke_style()))
            .map_err(draw_err)
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64) -> Result<()> {
        let radius = radius.round().max(1.0) as u32;
        self.area
            .draw(&Circle::new(point(center), radius, self.color.filled()))
            .map_err(draw_err)
    }

    /// Width and height of `text` in the current font.
    pub fn text_extents(&self, text: &str) -> Result<(f64, f64)> {
        let (w, h) = self
            .area
            .estimate_text_size(text, &self.text_style())
            .map_err(draw_err)?;
        Ok((w as f64, h as f64))
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn show_text(&mut self, text: &str, (x, y): (f64, f64)) -> Result<()> {
        let label = Text::new(text.to_string(), (px(x), px(y)), self.text_style());
        self.area.draw(&label).map_err(draw_err)
    }

    /// Draw `text` horizontally centred on `center_x`, top edge at `top`.
    pub fn show_text_centered(&mut self, text: &str, center_x: f64, top: f64) -> Result<()> {
        let (w, _) = self.text_extents(text)?;
        self.show_text(text, (center_x - w / 2.0, top))
    }

    /// Draw `text` ending at `right`, vertically centred on `center_y`.
    pub fn show_text_right_aligned(&mut self, text: &str, right: f64, center_y: f64) -> Result<()> {
        let (w, h) = self.text_extents(text)?;
        self.show_text(text, (right - w, center_y - h / 2.0))
    }

    /// Draw `text` reading bottom-to-top, centred on `center`.
    pub fn show_text_vertical(&mut self, text: &str, center: (f64, f64)) -> Result<()> {
        let (w, h) = self.text_extents(text)?;
        let origin = (px(center.0 - h / 2.0), px(center.1 + w / 2.0));
        let style = self.text_style().transform(FontTransform::Rotate270);
        self.area
            .draw(&Text::new(text.to_string(), origin, style))
            .map_err(draw_err)
    }
}
