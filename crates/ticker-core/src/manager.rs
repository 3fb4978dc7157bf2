//! The column manager: owns the columns of one ticker and turns text
//! changes into per-column targets.

use std::collections::HashSet;
use std::sync::Arc;

use crate::align::{align, ColumnAction};
use crate::column::{GlyphCanvas, TickerColumn};
use crate::cycle::{GlyphCycle, ScrollDirection};
use crate::error::{Error, Result};
use crate::glyph::Glyph;
use crate::metrics::{DrawMetrics, TextMeasure};
use crate::segment::Segmentation;

#[derive(Debug)]
pub struct TickerColumnManager {
    columns: Vec<TickerColumn>,
    metrics: DrawMetrics,
    /// Swapped as a whole on reconfiguration; `None` until configured
    cycles: Option<Arc<[GlyphCycle]>>,
    /// Union of every configured cycle's glyphs
    animatable: HashSet<Glyph>,
    /// Lists the cycles were built from, re-split when the segmentation changes
    lists: Option<Vec<String>>,
    segmentation: Segmentation,
}

impl TickerColumnManager {
    pub fn new(measure: impl TextMeasure + 'static) -> Self {
        Self::with_metrics(DrawMetrics::new(measure))
    }

    pub fn with_metrics(metrics: DrawMetrics) -> Self {
        Self {
            columns: Vec::new(),
            metrics,
            cycles: None,
            animatable: HashSet::new(),
            lists: None,
            segmentation: Segmentation::default(),
        }
    }

    /// How cycle lists and text are split into glyphs from now on.
    ///
    /// Cycles configured from lists are rebuilt under the new mode. A failed
    /// rebuild leaves both the mode and the cycles unchanged.
    pub fn set_segmentation(&mut self, segmentation: Segmentation) -> Result<()> {
        if segmentation == self.segmentation {
            return Ok(());
        }
        if let Some(lists) = &self.lists {
            let cycles = build_cycles(lists.as_slice(), segmentation)?;
            self.install_cycles(cycles);
        }
        self.segmentation = segmentation;
        Ok(())
    }

    pub fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Configure the glyph cycles, in priority order.
    ///
    /// Every list is validated before anything changes, so a failed call
    /// leaves the previous configuration in place. Existing columns keep
    /// their glyphs and pick up the new cycles on their next retarget.
    pub fn set_supported_glyphs<S: AsRef<str>>(&mut self, lists: &[S]) -> Result<()> {
        let cycles = build_cycles(lists, self.segmentation)?;
        self.install_cycles(cycles);
        self.lists = Some(lists.iter().map(|list| list.as_ref().to_string()).collect());
        Ok(())
    }

    /// Configure already built cycles, in priority order.
    ///
    /// These are kept as given when the segmentation changes later.
    pub fn set_cycles(&mut self, cycles: Vec<GlyphCycle>) {
        self.install_cycles(cycles);
        self.lists = None;
    }

    fn install_cycles(&mut self, cycles: Vec<GlyphCycle>) {
        let animatable: HashSet<Glyph> = cycles
            .iter()
            .flat_map(|cycle| cycle.glyphs().cloned())
            .collect();
        let cycles: Arc<[GlyphCycle]> = cycles.into();

        for column in &mut self.columns {
            column.set_cycles(Arc::clone(&cycles));
        }

        tracing::debug!(
            cycles = cycles.len(),
            animatable = animatable.len(),
            columns = self.columns.len(),
            "Supported glyphs configured"
        );

        self.cycles = Some(cycles);
        self.animatable = animatable;
    }

    pub fn is_configured(&self) -> bool {
        self.cycles.is_some()
    }

    pub fn set_preferred_direction(&mut self, direction: ScrollDirection) {
        self.metrics.set_preferred_direction(direction);
    }

    pub fn preferred_direction(&self) -> ScrollDirection {
        self.metrics.preferred_direction()
    }

    /// Retarget the columns to show `text`.
    ///
    /// Columns that already collapsed to zero width are dropped first, then
    /// the remaining columns are aligned against the new glyphs.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let cycles = self.cycles.clone().ok_or(Error::NotConfigured)?;
        let target = self.segmentation.segment(text);

        let live: Vec<bool> = self.columns.iter().map(|c| c.current_width() > 0.0).collect();
        let current: Vec<Glyph> = self
            .columns
            .iter()
            .zip(&live)
            .filter(|(_, keep)| **keep)
            .map(|(column, _)| column.current_glyph().clone())
            .collect();

        let actions = align(&current, &target, &self.animatable);
        check_actions(&actions, current.len(), target.len())?;

        let before = self.columns.len();
        let mut keep = live.into_iter();
        self.columns.retain(|_| keep.next().unwrap_or(false));
        let pruned = before - self.columns.len();

        let mut glyphs = target.into_iter();
        for (index, action) in actions.iter().enumerate() {
            match action {
                ColumnAction::Insert => {
                    self.columns.insert(index, TickerColumn::new(Arc::clone(&cycles)));
                    let glyph = glyphs.next().unwrap_or_default();
                    self.columns[index].set_target(glyph, &mut self.metrics);
                }
                ColumnAction::Same => {
                    let glyph = glyphs.next().unwrap_or_default();
                    self.columns[index].set_target(glyph, &mut self.metrics);
                }
                ColumnAction::Delete => {
                    self.columns[index].set_target(Glyph::Empty, &mut self.metrics);
                }
            }
        }

        tracing::debug!(
            pruned,
            columns = self.columns.len(),
            actions = %actions.iter().map(|a| a.symbol()).collect::<String>(),
            "Text set"
        );
        Ok(())
    }

    /// Move every column's animation to `progress`
    pub fn set_animation_progress(&mut self, progress: f32) {
        for column in &mut self.columns {
            column.set_animation_progress(progress, &self.metrics);
        }
    }

    pub fn on_animation_end(&mut self) {
        for column in &mut self.columns {
            column.on_animation_end();
        }
    }

    /// Paint all columns left to right starting at x = 0
    pub fn draw(&self, canvas: &mut dyn GlyphCanvas) {
        let mut x = 0.0;
        for column in &self.columns {
            column.draw(canvas, x);
            x += column.current_width();
        }
    }

    pub fn total_current_width(&self) -> f32 {
        self.columns.iter().map(TickerColumn::current_width).sum()
    }

    pub fn minimum_required_width(&self) -> f32 {
        self.columns.iter().map(TickerColumn::minimum_required_width).sum()
    }

    /// Glyphs currently shown, one per column
    pub fn current_text(&self) -> Vec<Glyph> {
        self.columns.iter().map(|c| c.current_glyph().clone()).collect()
    }

    /// Glyphs the columns are heading to; EMPTY for columns being removed
    pub fn target_text(&self) -> Vec<Glyph> {
        self.columns.iter().map(|c| c.target_glyph().clone()).collect()
    }

    pub fn columns(&self) -> &[TickerColumn] {
        &self.columns
    }

    pub fn metrics(&self) -> &DrawMetrics {
        &self.metrics
    }

    /// Drop cached measurements, e.g. after the font changed
    pub fn invalidate_metrics(&mut self) {
        self.metrics.invalidate();
        self.refresh_columns();
    }

    /// Swap the measurement collaborator
    pub fn set_measure(&mut self, measure: impl TextMeasure + 'static) {
        self.metrics.set_measure(measure);
        self.refresh_columns();
    }

    fn refresh_columns(&mut self) {
        for column in &mut self.columns {
            column.refresh_metrics(&mut self.metrics);
        }
    }
}

/// Make sure the actions consume exactly the old columns and new glyphs
fn check_actions(actions: &[ColumnAction], columns: usize, glyphs: usize) -> Result<()> {
    let consumed_columns = actions.iter().filter(|a| a.uses_old()).count();
    let consumed_glyphs = actions.iter().filter(|a| a.uses_new()).count();
    if consumed_columns != columns || consumed_glyphs != glyphs {
        return Err(Error::Alignment {
            columns,
            glyphs,
            consumed_columns,
            consumed_glyphs,
        });
    }
    Ok(())
}

fn build_cycles<S: AsRef<str>>(lists: &[S], segmentation: Segmentation) -> Result<Vec<GlyphCycle>> {
    lists
        .iter()
        .map(|list| GlyphCycle::from_text(list.as_ref(), segmentation))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::to_display_string;
    use crate::metrics::FixedWidthMeasure;

    fn manager(lists: &[&str]) -> TickerColumnManager {
        let mut manager = TickerColumnManager::new(FixedWidthMeasure::new(5.0, 10.0));
        manager.set_supported_glyphs(lists).unwrap();
        manager
    }

    fn finish(manager: &mut TickerColumnManager) {
        manager.set_animation_progress(1.0);
        manager.on_animation_end();
    }

    fn texts(glyphs: &[Glyph]) -> Vec<String> {
        glyphs
            .iter()
            .map(|g| if g.is_empty() { "_".to_string() } else { g.to_string() })
            .collect()
    }

    #[test]
    fn test_set_text_requires_configuration() {
        let mut manager = TickerColumnManager::new(FixedWidthMeasure::new(5.0, 10.0));
        assert!(matches!(manager.set_text("12"), Err(Error::NotConfigured)));
        assert!(manager.columns().is_empty());
        assert!(!manager.is_configured());
    }

    #[test]
    fn test_invalid_configuration_keeps_previous_cycles() {
        let mut manager = manager(&["0123456789"]);
        let err = manager.set_supported_glyphs(&["abc", "1\02"]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(manager.is_configured());

        manager.set_text("42").unwrap();
        finish(&mut manager);
        assert_eq!(to_display_string(&manager.current_text()), "42");
    }

    #[test]
    fn test_empty_list_is_allowed() {
        let mut manager = manager(&[""]);
        manager.set_text("ab").unwrap();
        finish(&mut manager);
        assert_eq!(to_display_string(&manager.current_text()), "ab");
    }

    #[test]
    fn test_delete_then_prune() {
        let mut manager = manager(&["1234567890"]);

        manager.set_text("1234").unwrap();
        finish(&mut manager);
        assert_eq!(texts(&manager.target_text()), vec!["1", "2", "3", "4"]);

        manager.set_text("999").unwrap();
        assert_eq!(manager.columns().len(), 4);
        assert_eq!(texts(&manager.target_text()), vec!["_", "9", "9", "9"]);

        finish(&mut manager);
        assert_eq!(manager.columns()[0].current_width(), 0.0);

        manager.set_text("899").unwrap();
        assert_eq!(manager.columns().len(), 3);
        assert_eq!(texts(&manager.target_text()), vec!["8", "9", "9"]);
    }

    #[test]
    fn test_unanimated_columns_are_pruned() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("1234").unwrap();
        // No progress yet: every column is still zero wide
        manager.set_text("999").unwrap();
        assert_eq!(texts(&manager.target_text()), vec!["9", "9", "9"]);
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("$1.50").unwrap();
        finish(&mut manager);
        manager.set_text("$12.50").unwrap();
        assert_eq!(to_display_string(&manager.target_text()), "$12.50");
        assert_eq!(texts(&manager.current_text()), vec!["$", "1", "_", ".", "5", "0"]);
    }

    #[test]
    fn test_interrupted_text_aligns_against_shown_glyphs() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("11").unwrap();
        finish(&mut manager);

        manager.set_text("55").unwrap();
        manager.set_animation_progress(0.5);
        // Halfway from 1 to 5
        assert_eq!(to_display_string(&manager.current_text()), "33");

        manager.set_text("9").unwrap();
        assert_eq!(texts(&manager.current_text()), vec!["3", "3"]);
        assert_eq!(texts(&manager.target_text()), vec!["_", "9"]);
    }

    #[test]
    fn test_widths_aggregate() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("12").unwrap();
        assert_eq!(manager.minimum_required_width(), 10.0);
        manager.set_animation_progress(0.5);
        assert_eq!(manager.total_current_width(), 5.0);
        finish(&mut manager);
        assert_eq!(manager.total_current_width(), 10.0);

        manager.set_text("1").unwrap();
        assert_eq!(manager.minimum_required_width(), 10.0);
        finish(&mut manager);
        assert_eq!(manager.minimum_required_width(), 5.0);
    }

    #[test]
    fn test_reconfiguration_reaches_existing_columns() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("1").unwrap();
        finish(&mut manager);

        manager.set_supported_glyphs(&["9876543210"]).unwrap();
        manager.set_text("3").unwrap();
        let traversal = manager.columns()[0].traversal();
        assert_eq!((traversal.start, traversal.end), (9, 7));
    }

    #[test]
    fn test_preferred_direction() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("4").unwrap();
        finish(&mut manager);

        manager.set_preferred_direction(ScrollDirection::Up);
        assert_eq!(manager.preferred_direction(), ScrollDirection::Up);
        manager.set_text("6").unwrap();
        let traversal = manager.columns()[0].traversal();
        assert_eq!((traversal.start, traversal.end), (15, 7));
    }

    #[test]
    fn test_segmentation_change_rebuilds_cycles() {
        let accented = "e\u{301}";
        let list = format!("{accented}x");
        let mut manager = manager(&[list.as_str()]);
        manager.set_segmentation(Segmentation::Unicode).unwrap();
        assert_eq!(manager.segmentation(), Segmentation::Unicode);

        manager.set_text("x").unwrap();
        finish(&mut manager);
        manager.set_text(accented).unwrap();

        // One animatable column scrolling inside the rebuilt cycle
        assert_eq!(manager.columns().len(), 1);
        let traversal = manager.columns()[0].traversal();
        assert_eq!((traversal.start, traversal.end), (2, 1));

        finish(&mut manager);
        assert_eq!(to_display_string(&manager.current_text()), accented);
    }

    #[test]
    fn test_set_measure_resizes_settled_columns() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("12").unwrap();
        finish(&mut manager);

        manager.set_measure(FixedWidthMeasure::new(7.0, 14.0));
        assert_eq!(manager.total_current_width(), 14.0);
        assert_eq!(manager.metrics().char_height(), 14.0);

        manager.invalidate_metrics();
        assert_eq!(manager.total_current_width(), 14.0);
    }

    struct Recorder(Vec<(String, f32, f32)>);

    impl GlyphCanvas for Recorder {
        fn draw_glyph(&mut self, glyph: &Glyph, x: f32, offset: f32) {
            if offset == 0.0 {
                self.0.push((glyph.to_string(), x, offset));
            }
        }
    }

    #[test]
    fn test_draw_places_columns_side_by_side() {
        let mut manager = manager(&["0123456789"]);
        manager.set_text("1,2").unwrap();
        finish(&mut manager);

        let mut canvas = Recorder(Vec::new());
        manager.draw(&mut canvas);
        assert_eq!(
            canvas.0,
            vec![
                ("1".to_string(), 0.0, 0.0),
                (",".to_string(), 5.0, 0.0),
                ("2".to_string(), 10.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_check_actions_rejects_mismatch() {
        let err = check_actions(&[ColumnAction::Same, ColumnAction::Insert], 2, 2).unwrap_err();
        assert!(matches!(
            err,
            Error::Alignment {
                consumed_columns: 1,
                consumed_glyphs: 2,
                ..
            }
        ));
        assert!(check_actions(&[ColumnAction::Delete], 1, 0).is_ok());
    }
}
