use std::time::Instant;

use chrono::{DateTime, Local};
use ticker_core::{ScrollDirection, TickerColumnManager, TickerConfig, NUMBER_LIST};

use crate::animation::TickerAnimator;
use crate::input::Action;
use crate::measure::TerminalMeasure;
use crate::theme::Theme;

/// Glyphs the mixed ticker draws its values from
pub const MIXED_LIST: &str = "0123456789abcdefghiklmnop\u{1F477}\u{1F3FF}\u{200D}\u{2640}\u{FE0F}";

/// Letters scrolled by the mixed ticker
const MIXED_LETTERS: &str = "abcdefghiklmnop";

/// What a demo ticker shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerKind {
    /// A plain integer
    Number,
    /// A dollar amount
    Price,
    /// Random glyphs from [`MIXED_LIST`]
    Mixed,
}

/// One labelled ticker of the demo
pub struct DemoTicker {
    pub kind: TickerKind,
    pub label: &'static str,
    pub animator: TickerAnimator,
}

impl DemoTicker {
    pub fn direction(&self) -> ScrollDirection {
        self.animator.manager().preferred_direction()
    }
}

/// Demo application state
pub struct App {
    pub config: TickerConfig,
    pub theme: Theme,
    pub tickers: Vec<DemoTicker>,
    pub paused: bool,
    pub animate: bool,
    pub last_update: Option<DateTime<Local>>,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: TickerConfig, theme: Theme) -> ticker_core::Result<Self> {
        let lists = config.ticker.resolved_lists();
        let mixed_lists = vec![NUMBER_LIST.to_string(), MIXED_LETTERS.to_string()];

        let tickers = vec![
            build_ticker(&config, TickerKind::Number, "Number", &lists, ScrollDirection::Down)?,
            build_ticker(&config, TickerKind::Price, "Price", &lists, ScrollDirection::Up)?,
            build_ticker(
                &config,
                TickerKind::Mixed,
                "Mixed",
                &mixed_lists,
                config.ticker.direction,
            )?,
        ];

        Ok(Self {
            config,
            theme,
            tickers,
            paused: false,
            animate: true,
            last_update: None,
            status_message: None,
            should_quit: false,
        })
    }

    /// Push one new value per ticker, in ticker order
    pub fn apply_values(&mut self, values: &[String], at: DateTime<Local>) -> ticker_core::Result<()> {
        for (ticker, value) in self.tickers.iter_mut().zip(values) {
            ticker.animator.set_text(value, self.animate)?;
        }
        self.last_update = Some(at);
        Ok(())
    }

    /// Advance all animations; returns whether any is still running
    pub fn update(&mut self, now: Instant) -> bool {
        self.tickers
            .iter_mut()
            .fold(false, |running, ticker| ticker.animator.update(now) || running)
    }

    pub fn is_animating(&self) -> bool {
        self.tickers.iter().any(|t| t.animator.is_animating())
    }

    /// Apply a key action. Returns true when new values are wanted right away.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePause => {
                self.paused = !self.paused;
                self.set_status(if self.paused { "Paused" } else { "Resumed" });
            }
            Action::NextValue => return true,
            Action::CycleDirection => self.cycle_direction(),
            Action::ToggleAnimation => {
                self.animate = !self.animate;
                self.set_status(if self.animate {
                    "Animation on"
                } else {
                    "Animation off"
                });
            }
            Action::None => {}
        }
        false
    }

    /// Any -> Up -> Down on the last ticker
    fn cycle_direction(&mut self) {
        let Some(ticker) = self.tickers.last_mut() else {
            return;
        };
        let direction = ticker.direction().next();
        ticker.animator.manager_mut().set_preferred_direction(direction);
        let message = format!("{} scrolls {}", ticker.label, direction_name(direction));
        self.set_status(message);
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

fn build_ticker(
    config: &TickerConfig,
    kind: TickerKind,
    label: &'static str,
    lists: &[String],
    direction: ScrollDirection,
) -> ticker_core::Result<DemoTicker> {
    let mut manager = TickerColumnManager::new(TerminalMeasure);
    manager.set_segmentation(config.ticker.segmentation)?;
    manager.set_supported_glyphs(lists)?;
    manager.set_preferred_direction(direction);

    Ok(DemoTicker {
        kind,
        label,
        animator: TickerAnimator::new(manager, config.animation.clone()),
    })
}

pub fn direction_name(direction: ScrollDirection) -> &'static str {
    match direction {
        ScrollDirection::Any => "any",
        ScrollDirection::Up => "up",
        ScrollDirection::Down => "down",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticker_core::glyph::to_display_string;

    fn app() -> App {
        App::new(TickerConfig::default(), Theme::default()).unwrap()
    }

    fn shown(app: &App) -> Vec<String> {
        app.tickers
            .iter()
            .map(|t| to_display_string(&t.animator.manager().current_text()))
            .collect()
    }

    #[test]
    fn test_three_tickers() {
        let app = app();
        let directions: Vec<ScrollDirection> = app.tickers.iter().map(|t| t.direction()).collect();
        assert_eq!(
            directions,
            vec![ScrollDirection::Down, ScrollDirection::Up, ScrollDirection::Any]
        );
        assert_eq!(app.tickers[2].kind, TickerKind::Mixed);
    }

    #[test]
    fn test_apply_values_without_animation() {
        let mut app = app();
        app.handle_action(Action::ToggleAnimation);
        let values = vec!["123456".to_string(), "$12.34".to_string(), "ab1".to_string()];
        app.apply_values(&values, Local::now()).unwrap();

        assert!(!app.is_animating());
        assert_eq!(shown(&app), values);
        assert!(app.last_update.is_some());
    }

    #[test]
    fn test_apply_values_animates() {
        let mut app = app();
        let values = vec!["1".to_string(), "$2".to_string(), "3".to_string()];
        app.apply_values(&values, Local::now()).unwrap();
        assert!(app.is_animating());

        let later = Instant::now() + std::time::Duration::from_secs(5);
        assert!(!app.update(later));
        assert_eq!(shown(&app), values);
    }

    #[test]
    fn test_actions() {
        let mut app = app();
        assert!(app.handle_action(Action::NextValue));

        assert!(!app.handle_action(Action::TogglePause));
        assert!(app.paused);
        assert_eq!(app.status_message.as_deref(), Some("Paused"));

        app.handle_action(Action::CycleDirection);
        assert_eq!(app.tickers[2].direction(), ScrollDirection::Up);
        assert_eq!(app.status_message.as_deref(), Some("Mixed scrolls up"));

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }
}
