use ticker_core::{LineMetrics, TextMeasure};
use unicode_width::UnicodeWidthStr;

/// Measures text in terminal cells.
///
/// Every glyph row is one cell high.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalMeasure;

impl TextMeasure for TerminalMeasure {
    fn measure(&self, text: &str) -> f32 {
        text.width() as f32
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            height: 1.0,
            baseline: 1.0,
        }
    }
}
