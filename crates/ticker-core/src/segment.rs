//! Splitting raw text into glyph tokens.
//!
//! The default scanner keeps the emoji sequences a ticker is likely to see in
//! one piece: zero-width-joiner chains, variation selectors, skin-tone
//! modifiers and regional-indicator flag pairs. It looks at most two
//! codepoints ahead and bounds the number of extension rounds per cluster, so
//! hostile input (a long joiner chain, say) cannot make it run away.
//!
//! Both modes are lossless: concatenating the produced tokens gives back the
//! input text.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::glyph::Glyph;

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const VARIATION_SELECTOR_16: char = '\u{FE0F}';

/// Upper bound on extension rounds (joiner, modifier, selector) per cluster
const MAX_EXTENSIONS: usize = 4;

/// How raw text is split into glyphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmentation {
    /// Emoji-aware codepoint scanner
    #[default]
    Emoji,
    /// UAX #29 extended grapheme clusters
    Unicode,
}

impl Segmentation {
    /// Split `text` into cluster slices
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Segmentation::Emoji => split_clusters(text),
            Segmentation::Unicode => text.graphemes(true).collect(),
        }
    }

    /// Split `text` into glyph tokens
    pub fn segment(&self, text: &str) -> Vec<Glyph> {
        self.split(text).into_iter().map(Glyph::plain).collect()
    }
}

/// Segment with the default emoji-aware scanner.
pub fn segment(text: &str) -> Vec<Glyph> {
    Segmentation::Emoji.segment(text)
}

/// Split `text` into clusters with the emoji-aware scanner.
pub fn split_clusters(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut clusters = Vec::with_capacity(chars.len());

    let mut start = 0;
    while start < chars.len() {
        let len = cluster_len(&chars[start..]);
        let end = start + len;
        let from = chars[start].0;
        let to = chars.get(end).map_or(text.len(), |&(offset, _)| offset);
        clusters.push(&text[from..to]);
        start = end;
    }

    clusters
}

/// Number of codepoints in the cluster starting at `chars[0]`.
fn cluster_len(chars: &[(usize, char)]) -> usize {
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);

    let mut len = 1;
    for _ in 0..MAX_EXTENSIONS {
        let Some(next) = at(len) else {
            break;
        };
        let after = at(len + 1);

        match next {
            ZERO_WIDTH_JOINER => {
                // The joiner and the glyph it joins, if there is one
                len += 1;
                if at(len).is_some() {
                    len += 1;
                }
            }
            c if is_skin_tone_modifier(c) => len += 1,
            VARIATION_SELECTOR_16 if after == Some(ZERO_WIDTH_JOINER) => len += 1,
            VARIATION_SELECTOR_16 => {
                len += 1;
                break;
            }
            c if is_regional_indicator(c) && len == 1 && is_regional_indicator(chars[0].1) => {
                len += 1;
                break;
            }
            _ => break,
        }
    }

    len
}

#[inline]
fn is_skin_tone_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

#[inline]
fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}
