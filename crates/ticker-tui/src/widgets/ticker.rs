//! Renders a column manager into a ratatui buffer.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use ticker_core::{Glyph, GlyphCanvas, Gravity, TickerColumnManager};
use unicode_width::UnicodeWidthStr;

/// A ticker drawn around the middle row of its area.
///
/// Glyphs scrolling in or out land on the rows above and below the middle
/// row; give the widget a single row to show only the settled glyphs.
pub struct TickerWidget<'a> {
    manager: &'a TickerColumnManager,
    gravity: Gravity,
    animate_measurement_change: bool,
    style: Style,
    reel_style: Option<Style>,
}

impl<'a> TickerWidget<'a> {
    pub fn new(manager: &'a TickerColumnManager) -> Self {
        Self {
            manager,
            gravity: Gravity::default(),
            animate_measurement_change: false,
            style: Style::default(),
            reel_style: None,
        }
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Follow the columns' current width instead of reserving the widest
    /// width the running animation needs
    pub fn animate_measurement_change(mut self, animate: bool) -> Self {
        self.animate_measurement_change = animate;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for glyphs off the middle row
    pub fn reel_style(mut self, style: Style) -> Self {
        self.reel_style = Some(style);
        self
    }

    /// Width in cells the ticker occupies
    pub fn content_width(&self) -> f32 {
        if self.animate_measurement_change {
            self.manager.total_current_width()
        } else {
            self.manager.minimum_required_width()
        }
    }
}

impl Widget for TickerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let width = (self.content_width().ceil().max(0.0) as u16).min(area.width);
        let free = area.width - width;
        let origin = match self.gravity {
            Gravity::Left => 0,
            Gravity::Center => free / 2,
            Gravity::Right => free,
        };

        let mut canvas = BufferCanvas {
            buf,
            area,
            origin: area.x + origin,
            baseline: area.y + area.height / 2,
            line_height: self.manager.metrics().char_height().max(1.0),
            style: self.style,
            reel_style: self.reel_style.unwrap_or(self.style),
        };
        self.manager.draw(&mut canvas);
    }
}

/// Paints glyphs into a buffer, one cell row per glyph height
struct BufferCanvas<'b> {
    buf: &'b mut Buffer,
    area: Rect,
    origin: u16,
    baseline: u16,
    line_height: f32,
    style: Style,
    reel_style: Style,
}

impl BufferCanvas<'_> {
    fn put(&mut self, col: f32, row: u16, text: &str, style: Style) {
        if col < self.area.left() as f32 || col >= self.area.right() as f32 {
            return;
        }
        let col = col as u16;
        let max_width = (self.area.right() - col) as usize;
        self.buf.set_stringn(col, row, text, max_width, style);
    }
}

impl GlyphCanvas for BufferCanvas<'_> {
    fn draw_glyph(&mut self, glyph: &Glyph, x: f32, offset: f32) {
        let row = self.baseline as f32 + (offset / self.line_height).round();
        if row < self.area.top() as f32 || row >= self.area.bottom() as f32 {
            return;
        }
        let row = row as u16;
        let style = if row == self.baseline {
            self.style
        } else {
            self.reel_style
        };

        let col = self.origin as f32 + x.round();
        match glyph {
            Glyph::Empty => {}
            Glyph::Plain(text) => self.put(col, row, text, style),
            Glyph::Composite(runs) => {
                let mut col = col;
                for run in runs {
                    self.put(col, row, &run.text, style);
                    col += run
                        .replacement_width
                        .unwrap_or_else(|| run.text.width() as f32)
                        .round();
                }
            }
        }
    }
}
