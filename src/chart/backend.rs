//! Text rendering backend
//!
//! Labels use the system sans-serif face, which plotters resolves through
//! the platform font service. Setup is one text measurement per weight,
//! run once per process. If it fails, charts cannot be drawn at all.

use std::panic;
use std::sync::OnceLock;

use plotters::prelude::{BitMapBackend, IntoDrawingArea};
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};
use tracing::debug;

use crate::error::{PlotError, Result};

/// Family name every chart label is drawn with.
pub const FONT_FAMILY: FontFamily<'static> = FontFamily::SansSerif;

const PROBE_TEXT: &str = "0.5";

static READY: OnceLock<std::result::Result<(), String>> = OnceLock::new();

/// Make sure label text can be rasterized.
///
/// Safe to call repeatedly; the probe runs once.
pub fn init() -> Result<()> {
    READY
        .get_or_init(|| {
            probe(FontStyle::Normal)?;
            probe(FontStyle::Bold)
        })
        .clone()
        .map_err(PlotError::Backend)
}

fn probe(style: FontStyle) -> std::result::Result<(), String> {
    // Font lookup can panic when the platform font library is missing
    let measured = panic::catch_unwind(move || {
        let mut buf = vec![0u8; 32 * 32 * 3];
        let area = BitMapBackend::with_buffer(&mut buf, (32, 32)).into_drawing_area();
        let text = TextStyle::from(FontDesc::new(FONT_FAMILY, 16.0, style));
        let size = area.estimate_text_size(PROBE_TEXT, &text);
        size.map_err(|e| e.to_string())
    })
    .map_err(|_| "font lookup aborted".to_string())?;

    let (w, h) = measured.map_err(|e| format!("text measurement failed: {}", e))?;
    if w == 0 || h == 0 {
        return Err(format!("{} face produced empty glyph extents", style.as_str()));
    }
    debug!(style = style.as_str(), width = w, height = h, "label font ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init().map_err(|e| e.to_string());
        let second = init().map_err(|e| e.to_string());
        assert_eq!(first, second);
    }

    #[test]
    fn test_failure_is_backend_error() {
        if let Err(e) = init() {
            assert!(matches!(e, PlotError::Backend(_)));
            assert!(!e.to_string().is_empty());
        }
    }
}
