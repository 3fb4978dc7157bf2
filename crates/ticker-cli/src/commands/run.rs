use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use ticker_core::config::DemoConfig;
use ticker_core::segment::split_clusters;
use ticker_core::TickerConfig;
use ticker_tui::{
    app::{direction_name, TickerKind, MIXED_LIST},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    load_theme,
    widgets::{StatusBarWidget, TickerWidget},
    App,
};

pub async fn run(config: TickerConfig) -> Result<()> {
    let theme = load_theme(&config.ui.theme);
    let mut app = App::new(config, theme)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Ticker"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let event_handler =
        EventHandler::with_animation_fps(app.config.ui.tick_rate_ms, app.config.animation.fps);

    let kinds: Vec<TickerKind> = app.tickers.iter().map(|t| t.kind).collect();
    let mut rng = StdRng::from_os_rng();

    // First values right away, then one batch per interval
    app.apply_values(&random_values(&kinds, &app.config.demo, &mut rng), Local::now())?;

    let (value_tx, mut value_rx) = mpsc::unbounded_channel::<Vec<String>>();
    spawn_value_task(kinds.clone(), app.config.demo.clone(), value_tx);

    loop {
        while let Ok(values) = value_rx.try_recv() {
            if !app.paused {
                app.apply_values(&values, Local::now())?;
            }
        }

        app.update(Instant::now());
        terminal.draw(|frame| render(frame, app))?;

        let event = if app.is_animating() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(AppEvent::Key(key)) = event {
            app.clear_status();
            if app.handle_action(handle_key_event(key)) {
                app.apply_values(&random_values(&kinds, &app.config.demo, &mut rng), Local::now())?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Produce a new batch of values every `update_interval_ms` until the receiver is gone
fn spawn_value_task(kinds: Vec<TickerKind>, demo: DemoConfig, tx: mpsc::UnboundedSender<Vec<String>>) {
    tokio::spawn(async move {
        let mut rng = StdRng::from_os_rng();
        let mut interval = tokio::time::interval(Duration::from_millis(demo.update_interval_ms.max(1)));
        // The first tick fires immediately and the loop already showed a first batch
        interval.tick().await;

        loop {
            interval.tick().await;
            let values = random_values(&kinds, &demo, &mut rng);
            if tx.send(values).is_err() {
                tracing::debug!("Value receiver dropped, stopping value task");
                break;
            }
        }
    });
}

fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = frame.area();

    let mut constraints: Vec<Constraint> = app.tickers.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

    for (ticker, chunk) in app.tickers.iter().zip(chunks.iter()) {
        let title = format!(" {} ({}) ", ticker.label, direction_name(ticker.direction()));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim))
            .title(title)
            .title_style(Style::default().fg(theme.label));
        let inner = block.inner(*chunk);
        frame.render_widget(block, *chunk);

        let widget = TickerWidget::new(ticker.animator.manager())
            .gravity(app.config.ui.gravity)
            .animate_measurement_change(app.config.animation.animate_measurement_change)
            .style(Style::default().fg(theme.fg).add_modifier(Modifier::BOLD))
            .reel_style(Style::default().fg(theme.dim));
        frame.render_widget(widget, inner);
    }

    StatusBarWidget::render(frame, chunks[chunks.len() - 1], app);
}

/// One value per ticker kind
fn random_values(kinds: &[TickerKind], demo: &DemoConfig, rng: &mut impl Rng) -> Vec<String> {
    kinds
        .iter()
        .map(|kind| {
            let digits = digit_count(demo, rng);
            match kind {
                TickerKind::Number => random_number(digits, rng),
                TickerKind::Price => random_price(rng),
                TickerKind::Mixed => random_glyphs(digits, rng),
            }
        })
        .collect()
}

fn digit_count(demo: &DemoConfig, rng: &mut impl Rng) -> usize {
    let min = demo.min_digits.max(1);
    let max = demo.max_digits.max(min);
    rng.random_range(min..=max) as usize
}

/// A number with exactly `digits` digits
fn random_number(digits: usize, rng: &mut impl Rng) -> String {
    let mut value = String::with_capacity(digits);
    value.push(char::from(b'1' + rng.random_range(0..9u8)));
    for _ in 1..digits {
        value.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    value
}

fn random_price(rng: &mut impl Rng) -> String {
    format!("${:.2}", rng.random::<f32>() * 100.0)
}

/// `count` glyphs picked from the mixed list
fn random_glyphs(count: usize, rng: &mut impl Rng) -> String {
    let clusters = split_clusters(MIXED_LIST);
    (0..count)
        .filter_map(|_| clusters.choose(rng).copied())
        .collect()
}
