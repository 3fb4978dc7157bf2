use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{direction_name, App};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(Paragraph::new(Self::line(app, area.width)), area);
    }

    fn line(app: &App, width: u16) -> Line<'static> {
        let theme = &app.theme;
        let mode_str = if app.paused { "PAUSED" } else { "RUNNING" };
        let animate_str = if app.animate { "animate" } else { "jump" };
        let direction = app
            .tickers
            .last()
            .map(|t| direction_name(t.direction()))
            .unwrap_or("-");
        let updated = app
            .last_update
            .map(|at| at.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | direction: {} | updated {}",
                mode_str, animate_str, direction, updated
            )
        };

        let help_hint = " q:quit space:pause n:next d:direction a:animate ";
        let padding_len =
            (width as usize).saturating_sub(status_text.width() + help_hint.width());

        let mode_color = if app.paused { theme.paused } else { theme.fg };

        Line::from(vec![
            Span::styled(status_text, Style::default().fg(mode_color).bg(theme.status_bg)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.status_bg)),
            Span::styled(help_hint, Style::default().fg(theme.dim).bg(theme.status_bg)),
        ])
    }
}
