//! Text measurement and the drawing metrics shared by all columns.

use std::collections::HashMap;
use std::fmt;

use crate::cycle::ScrollDirection;
use crate::glyph::Glyph;

/// Vertical metrics of one line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMetrics {
    /// Distance between the top and bottom of a glyph row
    pub height: f32,
    /// Distance from the top of a glyph row to its baseline
    pub baseline: f32,
}

/// Measures text for the font the ticker is drawn with.
///
/// Implementations must be deterministic for a given font configuration;
/// results are cached per glyph until [`DrawMetrics::invalidate`] is called.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f32;

    fn line_metrics(&self) -> LineMetrics;
}

/// Every non-empty run is `advance` wide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMeasure {
    pub advance: f32,
    pub height: f32,
}

impl FixedWidthMeasure {
    pub fn new(advance: f32, height: f32) -> Self {
        Self { advance, height }
    }
}

impl TextMeasure for FixedWidthMeasure {
    fn measure(&self, text: &str) -> f32 {
        if text.is_empty() {
            0.0
        } else {
            self.advance
        }
    }

    fn line_metrics(&self) -> LineMetrics {
        LineMetrics {
            height: self.height,
            baseline: self.height,
        }
    }
}

/// Cached glyph widths, line metrics and the preferred scroll direction.
pub struct DrawMetrics {
    measure: Box<dyn TextMeasure>,
    widths: HashMap<Glyph, f32>,
    line: LineMetrics,
    direction: ScrollDirection,
}

impl fmt::Debug for DrawMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawMetrics")
            .field("cached_widths", &self.widths.len())
            .field("line", &self.line)
            .field("direction", &self.direction)
            .finish()
    }
}

impl DrawMetrics {
    pub fn new(measure: impl TextMeasure + 'static) -> Self {
        let line = measure.line_metrics();
        Self {
            measure: Box::new(measure),
            widths: HashMap::with_capacity(256),
            line,
            direction: ScrollDirection::default(),
        }
    }

    /// Swap the measurement collaborator (a font change) and drop all cached values
    pub fn set_measure(&mut self, measure: impl TextMeasure + 'static) {
        self.measure = Box::new(measure);
        self.invalidate();
    }

    /// Forget cached widths and re-read the line metrics
    pub fn invalidate(&mut self) {
        self.widths.clear();
        self.line = self.measure.line_metrics();
        tracing::debug!(height = self.line.height, "Draw metrics invalidated");
    }

    /// Width of `glyph`, measured on first use. EMPTY is always 0.
    pub fn glyph_width(&mut self, glyph: &Glyph) -> f32 {
        if glyph.is_empty() {
            return 0.0;
        }
        if let Some(&width) = self.widths.get(glyph) {
            return width;
        }

        let width = match glyph {
            Glyph::Empty => 0.0,
            Glyph::Plain(text) => self.measure.measure(text),
            Glyph::Composite(runs) => runs
                .iter()
                .map(|run| {
                    run.replacement_width
                        .unwrap_or_else(|| self.measure.measure(&run.text))
                })
                .sum(),
        };
        self.widths.insert(glyph.clone(), width);
        width
    }

    #[inline]
    pub fn char_height(&self) -> f32 {
        self.line.height
    }

    #[inline]
    pub fn char_baseline(&self) -> f32 {
        self.line.baseline
    }

    #[inline]
    pub fn preferred_direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn set_preferred_direction(&mut self, direction: ScrollDirection) {
        self.direction = direction;
    }

    /// Number of glyphs with a cached width
    pub fn cached_widths(&self) -> usize {
        self.widths.len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::glyph::GlyphRun;

    /// Counts how often text gets measured
    struct CountingMeasure {
        calls: Rc<Cell<usize>>,
    }

    impl TextMeasure for CountingMeasure {
        fn measure(&self, text: &str) -> f32 {
            self.calls.set(self.calls.get() + 1);
            text.chars().count() as f32 * 2.0
        }

        fn line_metrics(&self) -> LineMetrics {
            LineMetrics {
                height: 12.0,
                baseline: 9.0,
            }
        }
    }

    #[test]
    fn test_widths_are_cached() {
        let calls = Rc::new(Cell::new(0));
        let mut metrics = DrawMetrics::new(CountingMeasure {
            calls: Rc::clone(&calls),
        });

        assert_eq!(metrics.glyph_width(&Glyph::from("ab")), 4.0);
        assert_eq!(metrics.glyph_width(&Glyph::from("ab")), 4.0);
        assert_eq!(calls.get(), 1);

        metrics.invalidate();
        assert_eq!(metrics.cached_widths(), 0);
        assert_eq!(metrics.glyph_width(&Glyph::from("ab")), 4.0);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_empty_is_zero_width() {
        let mut metrics = DrawMetrics::new(FixedWidthMeasure::new(5.0, 10.0));
        assert_eq!(metrics.glyph_width(&Glyph::Empty), 0.0);
        assert_eq!(metrics.cached_widths(), 0);
    }

    #[test]
    fn test_composite_uses_replacement_widths() {
        let mut metrics = DrawMetrics::new(FixedWidthMeasure::new(5.0, 10.0));
        let glyph = Glyph::composite(vec![GlyphRun::text("a"), GlyphRun::replaced("😀", 18.0)]);
        assert_eq!(metrics.glyph_width(&glyph), 23.0);
    }

    #[test]
    fn test_line_metrics() {
        let calls = Rc::new(Cell::new(0));
        let metrics = DrawMetrics::new(CountingMeasure { calls });
        assert_eq!(metrics.char_height(), 12.0);
        assert_eq!(metrics.char_baseline(), 9.0);
    }

    #[test]
    fn test_set_measure_resets_cache() {
        let mut metrics = DrawMetrics::new(FixedWidthMeasure::new(5.0, 10.0));
        metrics.glyph_width(&Glyph::from("1"));
        metrics.set_measure(FixedWidthMeasure::new(7.0, 14.0));
        assert_eq!(metrics.cached_widths(), 0);
        assert_eq!(metrics.glyph_width(&Glyph::from("1")), 7.0);
        assert_eq!(metrics.char_height(), 14.0);
    }
}
