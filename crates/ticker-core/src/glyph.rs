//! Glyph tokens: the unit a ticker column scrolls through.
//!
//! A glyph is either the EMPTY sentinel, a plain grapheme cluster, or a
//! composite made of several runs where some runs carry a replacement width
//! (an emoji drawn from an image font, for instance). Measurement and drawing
//! collaborators match on the variant.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Raw text that stands for the EMPTY glyph.
pub const EMPTY_TEXT: &str = "\0";

/// One run of text inside a composite glyph.
#[derive(Debug, Clone)]
pub struct GlyphRun {
    pub text: String,
    /// Width to use instead of measuring `text`
    pub replacement_width: Option<f32>,
}

impl GlyphRun {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            replacement_width: None,
        }
    }

    pub fn replaced(text: impl Into<String>, width: f32) -> Self {
        Self {
            text: text.into(),
            replacement_width: Some(width),
        }
    }
}

impl PartialEq for GlyphRun {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.replacement_width.map(f32::to_bits) == other.replacement_width.map(f32::to_bits)
    }
}

impl Eq for GlyphRun {}

impl Hash for GlyphRun {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.replacement_width.map(f32::to_bits).hash(state);
    }
}

/// A single displayable unit of ticker text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Nothing is shown; columns scroll to this glyph before they are removed
    #[default]
    Empty,
    Plain(String),
    Composite(Vec<GlyphRun>),
}

impl Glyph {
    /// Build a plain glyph. [`EMPTY_TEXT`] maps to [`Glyph::Empty`].
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text == EMPTY_TEXT {
            Glyph::Empty
        } else {
            Glyph::Plain(text)
        }
    }

    pub fn composite(runs: Vec<GlyphRun>) -> Self {
        Glyph::Composite(runs)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Glyph::Empty)
    }

    /// The raw text of this glyph. Composite runs are concatenated.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Glyph::Empty => Cow::Borrowed(EMPTY_TEXT),
            Glyph::Plain(text) => Cow::Borrowed(text),
            Glyph::Composite(runs) => {
                Cow::Owned(runs.iter().map(|run| run.text.as_str()).collect())
            }
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Empty => Ok(()),
            other => f.write_str(&other.text()),
        }
    }
}

impl From<&str> for Glyph {
    fn from(text: &str) -> Self {
        Glyph::plain(text)
    }
}

impl From<char> for Glyph {
    fn from(c: char) -> Self {
        Glyph::plain(c.to_string())
    }
}

/// Render a glyph sequence back into a string, skipping EMPTY glyphs.
pub fn to_display_string(glyphs: &[Glyph]) -> String {
    glyphs.iter().map(|g| g.to_string()).collect()
}
