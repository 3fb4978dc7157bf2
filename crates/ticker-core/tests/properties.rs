//! Property tests for alignment, traversal and segmentation.
//!
//! 1. Replaying the actions against the old text yields the new text.
//! 2. Equal-length animatable texts update every column in place.
//! 3. Aligning a text with itself is all Same.
//! 4. ANY takes the shorter way around a cycle.
//! 5. Both segmentation modes are lossless.
//! 6. A finished animation shows exactly the new text.
//! 7. Retargeting mid-animation does not move the shown glyph.

use std::collections::HashSet;

use proptest::prelude::*;
use ticker_core::glyph::to_display_string;
use ticker_core::segment::{segment, split_clusters};
use ticker_core::{
    align, ColumnAction, FixedWidthMeasure, Glyph, GlyphCycle, ScrollDirection, Segmentation,
    TickerColumnManager, ALPHABETICAL_LIST, NUMBER_LIST,
};

// ── Strategies ────────────────────────────────────────────────────────────

fn ticker_text() -> impl Strategy<Value = String> {
    "[0-9,.$]{0,10}"
}

fn digits(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u32..10, len).prop_map(|ds| {
        ds.into_iter()
            .filter_map(|d| char::from_digit(d, 10))
            .collect()
    })
}

fn emoji_soup() -> impl Strategy<Value = String> {
    let pieces = vec![
        "a", "1", "😀", "👍", "\u{200D}", "\u{FE0F}", "\u{1F3FD}", "🇺", "🇸", "e", "\u{301}", "\0",
    ];
    prop::collection::vec(prop::sample::select(pieces), 0..24).prop_map(|v| v.concat())
}

fn number_set() -> HashSet<Glyph> {
    segment(NUMBER_LIST).into_iter().collect()
}

/// Replay `actions`, returning the old columns consumed and the per-column targets.
fn replay(new: &[Glyph], actions: &[ColumnAction]) -> (usize, Vec<Glyph>) {
    let mut old_used = 0;
    let mut new_glyphs = new.iter();
    let mut targets = Vec::new();
    for action in actions {
        if action.uses_old() {
            old_used += 1;
        }
        if action.uses_new() {
            targets.push(new_glyphs.next().cloned().unwrap_or_default());
        } else {
            targets.push(Glyph::Empty);
        }
    }
    assert!(new_glyphs.next().is_none());
    (old_used, targets)
}

fn manager() -> TickerColumnManager {
    let mut manager = TickerColumnManager::new(FixedWidthMeasure::new(5.0, 10.0));
    manager.set_supported_glyphs(&[NUMBER_LIST]).unwrap();
    manager
}

// ── Properties ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn replay_reconstructs_new_text(old in ticker_text(), new in ticker_text()) {
        let old = segment(&old);
        let new_glyphs = segment(&new);
        let actions = align(&old, &new_glyphs, &number_set());

        let (old_used, targets) = replay(&new_glyphs, &actions);
        prop_assert_eq!(old_used, old.len());
        prop_assert_eq!(to_display_string(&targets), new);
        prop_assert!(actions.len() >= old.len().max(new_glyphs.len()));
    }

    #[test]
    fn equal_length_is_all_same((a, b) in (0usize..10).prop_flat_map(|n| (digits(n), digits(n)))) {
        let actions = align(&segment(&a), &segment(&b), &number_set());
        prop_assert!(actions.iter().all(|a| *a == ColumnAction::Same));
    }

    #[test]
    fn identity_is_all_same(text in ticker_text(), empty_set in any::<bool>()) {
        let set = if empty_set { HashSet::new() } else { number_set() };
        let glyphs = segment(&text);
        let actions = align(&glyphs, &glyphs, &set);
        prop_assert_eq!(actions.len(), glyphs.len());
        prop_assert!(actions.iter().all(|a| *a == ColumnAction::Same));
    }

    #[test]
    fn any_takes_the_shortest_way((n, s, e) in (1usize..30).prop_flat_map(|n| (Just(n), 0..n, 0..n))) {
        let list: String = ALPHABETICAL_LIST.chars().take(n).collect();
        let cycle = GlyphCycle::from_text(&list, Segmentation::Emoji).unwrap();
        let glyphs: Vec<Glyph> = cycle.glyphs().cloned().collect();

        let traversal = cycle
            .traversal(&glyphs[s], &glyphs[e], ScrollDirection::Any)
            .unwrap();
        let non_wrap = s.abs_diff(e);
        prop_assert_eq!(traversal.distance(), non_wrap.min(n - non_wrap));

        // Both ends land on the requested glyphs
        prop_assert_eq!(&cycle.entries()[traversal.start], &glyphs[s]);
        prop_assert_eq!(&cycle.entries()[traversal.end], &glyphs[e]);
    }

    #[test]
    fn segmentation_is_lossless(text in emoji_soup()) {
        prop_assert_eq!(split_clusters(&text).concat(), text.clone());
        prop_assert_eq!(Segmentation::Unicode.split(&text).concat(), text.clone());
        prop_assert!(split_clusters(&text).iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn finished_animation_shows_new_text(texts in prop::collection::vec(ticker_text(), 1..5)) {
        let mut manager = manager();
        for text in &texts {
            manager.set_text(text).unwrap();
            manager.set_animation_progress(1.0);
            manager.on_animation_end();
            prop_assert_eq!(&to_display_string(&manager.current_text()), text);
        }
    }

    #[test]
    fn retarget_is_continuous(
        from in 0u32..10,
        via in 0u32..10,
        to in 0u32..10,
        progress in 0.0f32..1.0,
        direction in prop::sample::select(vec![
            ScrollDirection::Any,
            ScrollDirection::Up,
            ScrollDirection::Down,
        ]),
    ) {
        let mut manager = manager();
        manager.set_preferred_direction(direction);
        manager.set_text(&from.to_string()).unwrap();
        manager.set_animation_progress(1.0);
        manager.on_animation_end();

        manager.set_text(&via.to_string()).unwrap();
        manager.set_animation_progress(progress);
        let before = manager.columns()[0].draw_state()[0];
        let (glyph, offset) = (before.glyph.clone(), before.offset);

        manager.set_text(&to.to_string()).unwrap();
        manager.set_animation_progress(0.0);
        let after = manager.columns()[0].draw_state()[0];
        prop_assert_eq!(after.glyph, &glyph);
        prop_assert!((after.offset - offset).abs() < 1e-3);

        manager.set_animation_progress(1.0);
        prop_assert_eq!(manager.current_text(), vec![Glyph::from(to.to_string().as_str())]);
    }
}
