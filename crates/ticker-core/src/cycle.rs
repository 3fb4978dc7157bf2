//! Supported glyph cycles.
//!
//! A cycle decides which glyphs a column scrolls through on its way from one
//! glyph to another. Given "abcde", animating from 'd' to 'b' shows 'd', 'c'
//! and then 'b'. The glyphs are stored twice behind a leading EMPTY entry,
//! `[EMPTY, g0..gN-1, g0..gN-1]`, so any traversal, including one that wraps
//! around the end of the cycle, is a contiguous index range.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::glyph::Glyph;
use crate::segment::Segmentation;

/// Digits, in the order a numeric ticker scrolls through them
pub const NUMBER_LIST: &str = "0123456789";

/// Lower case then upper case latin letters
pub const ALPHABETICAL_LIST: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Preferred scrolling direction of a column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Take the shortest way around the cycle
    #[default]
    Any,
    Up,
    Down,
}

impl ScrollDirection {
    /// The next direction in Any -> Up -> Down order
    pub fn next(self) -> Self {
        match self {
            ScrollDirection::Any => ScrollDirection::Up,
            ScrollDirection::Up => ScrollDirection::Down,
            ScrollDirection::Down => ScrollDirection::Any,
        }
    }
}

/// Start and end positions of a traversal within [`GlyphCycle::entries`].
///
/// `end` may equal `entries().len()` when a column scrolls past the last
/// entry and disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    pub start: usize,
    pub end: usize,
}

impl Traversal {
    /// Number of glyph heights between start and end
    #[inline]
    pub fn distance(&self) -> usize {
        self.start.abs_diff(self.end)
    }
}

/// An immutable, deduplicated cycle of supported glyphs
#[derive(Debug, Clone)]
pub struct GlyphCycle {
    /// Number of distinct glyphs (N)
    len: usize,
    /// `[EMPTY, g0..gN-1, g0..gN-1]`
    entries: Arc<[Glyph]>,
    /// Glyph to position of its first copy in `entries`
    positions: HashMap<Glyph, usize>,
}

impl GlyphCycle {
    /// Build a cycle from glyphs in scroll order.
    ///
    /// Duplicates are dropped, keeping the first occurrence. Fails if the
    /// EMPTY glyph is among the inputs.
    pub fn new<I>(glyphs: I) -> Result<Self>
    where
        I: IntoIterator<Item = Glyph>,
    {
        let mut ordered: Vec<Glyph> = Vec::new();
        let mut positions = HashMap::new();

        for glyph in glyphs {
            if glyph.is_empty() {
                return Err(Error::InvalidConfiguration(
                    "the EMPTY glyph cannot be part of a glyph cycle".to_string(),
                ));
            }
            if !positions.contains_key(&glyph) {
                positions.insert(glyph.clone(), ordered.len() + 1);
                ordered.push(glyph);
            }
        }

        let len = ordered.len();
        let mut entries = Vec::with_capacity(len * 2 + 1);
        entries.push(Glyph::Empty);
        entries.extend(ordered.iter().cloned());
        entries.extend(ordered);

        Ok(Self {
            len,
            entries: entries.into(),
            positions,
        })
    }

    /// Segment `list` and build a cycle from its glyphs
    pub fn from_text(list: &str, segmentation: Segmentation) -> Result<Self> {
        Self::new(segmentation.segment(list))
    }

    /// Number of distinct supported glyphs
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The doubled, EMPTY-prefixed entry array
    #[inline]
    pub fn entries(&self) -> &Arc<[Glyph]> {
        &self.entries
    }

    /// Whether `glyph` is one of the configured glyphs (EMPTY is not)
    pub fn supports(&self, glyph: &Glyph) -> bool {
        self.positions.contains_key(glyph)
    }

    /// The configured glyphs in scroll order
    pub fn glyphs(&self) -> impl Iterator<Item = &Glyph> {
        self.entries[1..=self.len].iter()
    }

    /// Position of `glyph` in the first copy of the cycle; EMPTY is 0
    fn position(&self, glyph: &Glyph) -> Option<usize> {
        if glyph.is_empty() {
            Some(0)
        } else {
            self.positions.get(glyph).copied()
        }
    }

    /// Resolve how to scroll from `start` to `end`.
    ///
    /// Returns `None` when either glyph is outside this cycle.
    pub fn traversal(&self, start: &Glyph, end: &Glyph, direction: ScrollDirection) -> Option<Traversal> {
        let mut start_index = self.position(start)?;
        let mut end_index = self.position(end)?;
        let n = self.len;

        match direction {
            ScrollDirection::Down => {
                if end.is_empty() {
                    end_index = self.entries.len();
                } else if end_index < start_index {
                    end_index += n;
                }
            }
            ScrollDirection::Up => {
                if start_index < end_index {
                    start_index += n;
                }
            }
            ScrollDirection::Any => {
                if !start.is_empty() && !end.is_empty() {
                    if end_index < start_index {
                        // Backwards, unless wrapping forwards is shorter
                        let non_wrap = start_index - end_index;
                        let wrap = n - start_index + end_index;
                        if wrap < non_wrap {
                            end_index += n;
                        }
                    } else if start_index < end_index {
                        // Forwards, unless wrapping backwards is shorter
                        let non_wrap = end_index - start_index;
                        let wrap = n - end_index + start_index;
                        if wrap < non_wrap {
                            start_index += n;
                        }
                    }
                }
            }
        }

        Some(Traversal {
            start: start_index,
            end: end_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits() -> GlyphCycle {
        GlyphCycle::from_text(NUMBER_LIST, Segmentation::Emoji).unwrap()
    }

    fn g(s: &str) -> Glyph {
        Glyph::from(s)
    }

    /// Glyphs visited by a traversal, in order
    fn path(cycle: &GlyphCycle, t: Traversal) -> String {
        let entries = cycle.entries();
        let indices: Vec<usize> = if t.start <= t.end {
            (t.start..=t.end).collect()
        } else {
            (t.end..=t.start).rev().collect()
        };
        indices
            .into_iter()
            .filter_map(|i| entries.get(i))
            .map(|g| if g.is_empty() { "_".to_string() } else { g.to_string() })
            .collect()
    }

    #[test]
    fn test_layout() {
        let cycle = GlyphCycle::from_text("abc", Segmentation::Emoji).unwrap();
        assert_eq!(cycle.len(), 3);
        let entries: Vec<String> = cycle.entries().iter().map(|g| g.text().into_owned()).collect();
        assert_eq!(entries, vec!["\0", "a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_rejects_empty_glyph() {
        let err = GlyphCycle::from_text("12\03", Segmentation::Emoji).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(GlyphCycle::new(vec![g("1"), Glyph::Empty]).is_err());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let cycle = GlyphCycle::from_text("abca", Segmentation::Emoji).unwrap();
        assert_eq!(cycle.len(), 3);
        let t = cycle.traversal(&Glyph::Empty, &g("a"), ScrollDirection::Any).unwrap();
        assert_eq!(t.end, 1);
    }

    #[test]
    fn test_unsupported_glyph() {
        let cycle = digits();
        assert!(cycle.traversal(&g("1"), &g("x"), ScrollDirection::Any).is_none());
        assert!(cycle.traversal(&g("x"), &Glyph::Empty, ScrollDirection::Down).is_none());
        assert!(!cycle.supports(&Glyph::Empty));
        assert!(cycle.supports(&g("7")));
    }

    #[test]
    fn test_down_wraps_forward() {
        let cycle = digits();
        // 4 -> 6 goes straight down
        let t = cycle.traversal(&g("4"), &g("6"), ScrollDirection::Down).unwrap();
        assert_eq!(path(&cycle, t), "456");
        // 6 -> 4 wraps through 9 and 0
        let t = cycle.traversal(&g("6"), &g("4"), ScrollDirection::Down).unwrap();
        assert_eq!(path(&cycle, t), "678901234");
    }

    #[test]
    fn test_down_to_empty_scrolls_off_the_end() {
        let cycle = digits();
        let t = cycle.traversal(&g("3"), &Glyph::Empty, ScrollDirection::Down).unwrap();
        assert_eq!(t.end, cycle.entries().len());
        // From EMPTY the column scrolls down from the top
        let t = cycle.traversal(&Glyph::Empty, &g("3"), ScrollDirection::Down).unwrap();
        assert_eq!(path(&cycle, t), "_0123");
    }

    #[test]
    fn test_up_reads_backwards() {
        let cycle = digits();
        // 4 -> 6 wraps the start so the path descends 4, 3, ... 0, 9, ... 6
        let t = cycle.traversal(&g("4"), &g("6"), ScrollDirection::Up).unwrap();
        assert_eq!(t.start, 5 + 10);
        assert_eq!(t.end, 7);
        assert!(t.start > t.end);
        assert_eq!(path(&cycle, t), "432109876");

        let t = cycle.traversal(&g("6"), &g("4"), ScrollDirection::Up).unwrap();
        assert_eq!(path(&cycle, t), "654");
    }

    #[test]
    fn test_up_with_empty() {
        let cycle = digits();
        let t = cycle.traversal(&Glyph::Empty, &g("2"), ScrollDirection::Up).unwrap();
        assert_eq!(t, Traversal { start: 10, end: 3 });
        let t = cycle.traversal(&g("2"), &Glyph::Empty, ScrollDirection::Up).unwrap();
        assert_eq!(t, Traversal { start: 3, end: 0 });
    }

    #[test]
    fn test_any_takes_shortest_path() {
        let cycle = digits();
        // 1 -> 9: wrapping backwards through 0 is two steps
        let t = cycle.traversal(&g("1"), &g("9"), ScrollDirection::Any).unwrap();
        assert_eq!(t.distance(), 2);
        assert_eq!(path(&cycle, t), "109");
        // 9 -> 1: wrapping forwards through 0 is two steps
        let t = cycle.traversal(&g("9"), &g("1"), ScrollDirection::Any).unwrap();
        assert_eq!(t.distance(), 2);
        assert_eq!(path(&cycle, t), "901");
        // 2 -> 4 stays put
        let t = cycle.traversal(&g("2"), &g("4"), ScrollDirection::Any).unwrap();
        assert_eq!(path(&cycle, t), "234");
    }

    #[test]
    fn test_any_tie_keeps_non_wrapped_path() {
        let cycle = digits();
        // 0 -> 5 is five steps either way
        let t = cycle.traversal(&g("0"), &g("5"), ScrollDirection::Any).unwrap();
        assert_eq!(t, Traversal { start: 1, end: 6 });
    }

    #[test]
    fn test_any_with_empty_never_wraps() {
        let cycle = digits();
        let t = cycle.traversal(&Glyph::Empty, &g("9"), ScrollDirection::Any).unwrap();
        assert_eq!(t, Traversal { start: 0, end: 10 });
        let t = cycle.traversal(&g("9"), &Glyph::Empty, ScrollDirection::Any).unwrap();
        assert_eq!(t, Traversal { start: 10, end: 0 });
    }

    #[test]
    fn test_same_glyph() {
        let cycle = digits();
        for direction in [ScrollDirection::Any, ScrollDirection::Up, ScrollDirection::Down] {
            let t = cycle.traversal(&g("5"), &g("5"), direction).unwrap();
            assert_eq!(t.distance(), 0, "{:?}", direction);
        }
    }

    #[test]
    fn test_direction_cycles() {
        assert_eq!(ScrollDirection::Any.next(), ScrollDirection::Up);
        assert_eq!(ScrollDirection::Up.next(), ScrollDirection::Down);
        assert_eq!(ScrollDirection::Down.next(), ScrollDirection::Any);
    }
}
