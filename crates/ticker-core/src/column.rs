//! A single ticker column.
//!
//! A column scrolls vertically through a strip of glyphs (a cycle's entry
//! array, or a direct two-glyph strip for glyphs no cycle knows) from its
//! current glyph to its target glyph. Animation progress in [0, 1] maps
//! linearly onto the strip. When a new target arrives mid-animation, the
//! vertical offset the column was showing is carried into the new animation
//! and faded out with the remaining progress, so the interruption does not
//! jump.

use std::sync::Arc;

use crate::cycle::{GlyphCycle, ScrollDirection, Traversal};
use crate::glyph::Glyph;
use crate::metrics::DrawMetrics;

/// Paints glyphs for a column.
///
/// `x` is the left edge of the column, `offset` the vertical offset of the
/// glyph relative to the baseline (positive is further down).
pub trait GlyphCanvas {
    fn draw_glyph(&mut self, glyph: &Glyph, x: f32, offset: f32);
}

/// A glyph together with its vertical offset from the baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph<'a> {
    pub glyph: &'a Glyph,
    pub offset: f32,
}

/// Coarse lifecycle state of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnState {
    /// Showing nothing and heading nowhere
    Idle,
    /// Scrolling toward a different glyph
    Targeting,
    /// Current glyph equals the target glyph
    Settled,
}

#[derive(Debug, Clone)]
pub struct TickerColumn {
    cycles: Arc<[GlyphCycle]>,

    current: Glyph,
    target: Glyph,

    // The strip being scrolled through and where the animation starts and ends in it
    strip: Arc<[Glyph]>,
    start_index: usize,
    end_index: usize,
    direction_adjustment: f32,

    // Draw state, refreshed on every progress update
    bottom_index: isize,
    bottom_delta: f32,
    char_height: f32,

    source_width: f32,
    current_width: f32,
    target_width: f32,
    minimum_required_width: f32,

    // Offset of the bottom glyph last shown, and the one inherited from an
    // interrupted animation. A zero delta means the glyph sits on the
    // baseline; a negative one means it pokes out below and part of the
    // glyph above is visible.
    current_bottom_delta: f32,
    previous_bottom_delta: f32,
}

impl TickerColumn {
    pub fn new(cycles: Arc<[GlyphCycle]>) -> Self {
        Self {
            cycles,
            current: Glyph::Empty,
            target: Glyph::Empty,
            strip: Arc::from(vec![Glyph::Empty]),
            start_index: 0,
            end_index: 0,
            direction_adjustment: 1.0,
            bottom_index: 0,
            bottom_delta: 0.0,
            char_height: 0.0,
            source_width: 0.0,
            current_width: 0.0,
            target_width: 0.0,
            minimum_required_width: 0.0,
            current_bottom_delta: 0.0,
            previous_bottom_delta: 0.0,
        }
    }

    /// Replace the cycles used for the next traversal
    pub fn set_cycles(&mut self, cycles: Arc<[GlyphCycle]>) {
        self.cycles = cycles;
    }

    /// Start scrolling toward `target` from whatever glyph is showing now.
    pub fn set_target(&mut self, target: Glyph, metrics: &mut DrawMetrics) {
        self.target = target;
        self.source_width = self.current_width;
        self.target_width = metrics.glyph_width(&self.target);
        self.minimum_required_width = self.source_width.max(self.target_width);

        self.resolve_traversal(metrics.preferred_direction());
        self.direction_adjustment = if self.end_index >= self.start_index { 1.0 } else { -1.0 };

        self.previous_bottom_delta = self.current_bottom_delta;
        self.current_bottom_delta = 0.0;

        tracing::trace!(
            current = %self.current,
            target = %self.target,
            start = self.start_index,
            end = self.end_index,
            carried_delta = self.previous_bottom_delta,
            "Column retargeted"
        );
    }

    /// Pick the first cycle that knows both glyphs, or scroll directly.
    fn resolve_traversal(&mut self, direction: ScrollDirection) {
        let resolved = self.cycles.iter().find_map(|cycle| {
            cycle
                .traversal(&self.current, &self.target, direction)
                .map(|traversal| (Arc::clone(cycle.entries()), traversal))
        });

        let (strip, traversal) = match resolved {
            Some(found) => found,
            None if self.current == self.target => (
                Arc::from(vec![self.current.clone()]),
                Traversal { start: 0, end: 0 },
            ),
            None => (
                Arc::from(vec![self.current.clone(), self.target.clone()]),
                Traversal { start: 0, end: 1 },
            ),
        };

        self.strip = strip;
        self.start_index = traversal.start;
        self.end_index = traversal.end;
    }

    /// Move the animation to `progress` (0 = where it started, 1 = at the target).
    pub fn set_animation_progress(&mut self, progress: f32, metrics: &DrawMetrics) {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };

        if progress >= 1.0 {
            self.current = self.target.clone();
            self.current_bottom_delta = 0.0;
            self.previous_bottom_delta = 0.0;
        }

        let char_height = metrics.char_height();

        // Position of the bottom glyph, in glyph heights from the start.
        // 4.5 means the 4th glyph past the start, half a glyph off the baseline.
        let position = progress * self.start_index.abs_diff(self.end_index) as f32;
        let whole = position.floor();
        let fraction = position - whole;

        // Whatever offset an interrupted animation left behind fades out
        // along with this animation.
        let inherited = self.previous_bottom_delta * (1.0 - progress);

        self.bottom_delta = fraction * char_height * self.direction_adjustment + inherited;
        self.bottom_index =
            self.start_index as isize + whole as isize * self.direction_adjustment as isize;
        self.char_height = char_height;
        self.current_width = self.source_width + (self.target_width - self.source_width) * progress;

        // Remember what is showing in case the next target interrupts us
        if let Some(glyph) = self.entry(self.bottom_index) {
            self.current = glyph.clone();
            self.current_bottom_delta = self.bottom_delta;
        }
    }

    /// The glyphs to draw for the current progress: the bottom glyph, the one
    /// above it and the one below it, skipping positions outside the strip.
    ///
    /// The glyph below matters when an interrupted animation pushed the
    /// bottom glyph above the baseline.
    pub fn draw_state(&self) -> Vec<PlacedGlyph<'_>> {
        [
            (self.bottom_index, self.bottom_delta),
            (self.bottom_index + 1, self.bottom_delta - self.char_height),
            (self.bottom_index - 1, self.bottom_delta + self.char_height),
        ]
        .into_iter()
        .filter_map(|(index, offset)| self.entry(index).map(|glyph| PlacedGlyph { glyph, offset }))
        .collect()
    }

    /// Paint the draw state with the column's left edge at `x`
    pub fn draw(&self, canvas: &mut dyn GlyphCanvas, x: f32) {
        for placed in self.draw_state() {
            canvas.draw_glyph(placed.glyph, x, placed.offset);
        }
    }

    fn entry(&self, index: isize) -> Option<&Glyph> {
        usize::try_from(index).ok().and_then(|i| self.strip.get(i))
    }

    /// Called once every column of a batch reached the end of its animation
    pub fn on_animation_end(&mut self) {
        self.minimum_required_width = self.current_width;
    }

    /// Adopt new glyph widths after the measurement collaborator changed.
    ///
    /// Only a column that is done resizing snaps to the new width; one that is
    /// still animating keeps heading for the width measured when it was
    /// retargeted.
    pub fn refresh_metrics(&mut self, metrics: &mut DrawMetrics) {
        let measured = metrics.glyph_width(&self.target);
        if self.current_width == self.target_width && self.target_width != measured {
            self.minimum_required_width = measured;
            self.current_width = measured;
            self.target_width = measured;
        }
        self.char_height = metrics.char_height();
    }

    pub fn state(&self) -> ColumnState {
        if self.current.is_empty() && self.target.is_empty() {
            ColumnState::Idle
        } else if self.current == self.target {
            ColumnState::Settled
        } else {
            ColumnState::Targeting
        }
    }

    #[inline]
    pub fn current_glyph(&self) -> &Glyph {
        &self.current
    }

    #[inline]
    pub fn target_glyph(&self) -> &Glyph {
        &self.target
    }

    #[inline]
    pub fn current_width(&self) -> f32 {
        self.current_width
    }

    #[inline]
    pub fn minimum_required_width(&self) -> f32 {
        self.minimum_required_width
    }

    /// Resolved start and end positions in the strip
    pub fn traversal(&self) -> Traversal {
        Traversal {
            start: self.start_index,
            end: self.end_index,
        }
    }
}
