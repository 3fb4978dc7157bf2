pub mod align;
pub mod column;
pub mod config;
pub mod cycle;
pub mod error;
pub mod glyph;
pub mod manager;
pub mod metrics;
pub mod segment;

pub use align::{align, ColumnAction};
pub use column::{ColumnState, GlyphCanvas, PlacedGlyph, TickerColumn};
pub use config::{EasingType, Gravity, TickerConfig};
pub use cycle::{GlyphCycle, ScrollDirection, Traversal, ALPHABETICAL_LIST, NUMBER_LIST};
pub use error::{Error, Result};
pub use glyph::{Glyph, GlyphRun};
pub use manager::TickerColumnManager;
pub use metrics::{DrawMetrics, FixedWidthMeasure, LineMetrics, TextMeasure};
pub use segment::Segmentation;
