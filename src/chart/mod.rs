//! Chart rendering
//!
//! Axis computation, panel drawing and the raster canvas the render
//! routines draw onto.

pub mod axis;
pub mod backend;
pub mod canvas;
pub mod panel;
pub mod style;

pub use axis::{descending_ticks, format_tick, integer_ticks, AxisRange};
pub use canvas::{paint, Canvas, FontWeight, RenderedChart};
pub use panel::Panel;
