use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticker_core::config::GlyphConfig;
use ticker_core::{ScrollDirection, TickerConfig};

mod commands;

#[derive(Parser)]
#[command(name = "ticker")]
#[command(author, version, about = "Animated glyph tickers for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the ticker demo
    Run,
    /// Print the column actions that turn one text into another
    Align {
        /// Text currently shown
        old: String,
        /// Text to show next
        new: String,
        /// Glyph cycle, may be repeated (defaults to the configured lists)
        #[arg(short = 'l', long = "list")]
        lists: Vec<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the draw state of every column frame by frame
    Trace {
        /// Text to start from
        from: String,
        /// Text to animate to
        to: String,
        /// Number of frames after the first
        #[arg(short, long, default_value_t = 8)]
        frames: u32,
        /// Scroll direction (defaults to the configured direction)
        #[arg(short, long, value_enum)]
        direction: Option<DirectionArg>,
        /// Glyph cycle, may be repeated (defaults to the configured lists)
        #[arg(short = 'l', long = "list")]
        lists: Vec<String>,
    },
    /// Show the config file, or write the defaults
    Config {
        /// Write the default configuration
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file with --init
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Any,
    Up,
    Down,
}

impl From<DirectionArg> for ScrollDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Any => ScrollDirection::Any,
            DirectionArg::Up => ScrollDirection::Up,
            DirectionArg::Down => ScrollDirection::Down,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; `config` has to work even when the file is broken
    let loaded = TickerConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|config| config.general.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(log_level),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(Commands::Config { init, force }) = cli.command {
        return commands::config::run(init, force);
    }

    let config = loaded?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Align {
            old,
            new,
            lists,
            json,
        }) => {
            let lists = lists_or_configured(lists, &config);
            commands::align::run(&old, &new, &lists, config.ticker.segmentation, json)
        }
        Some(Commands::Trace {
            from,
            to,
            frames,
            direction,
            lists,
        }) => {
            let lists = lists_or_configured(lists, &config);
            let direction = direction.map_or(config.ticker.direction, ScrollDirection::from);
            commands::trace::run(&from, &to, frames, direction, &lists, config.ticker.segmentation)
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// Lists from the command line, or the configured ones; preset names expand either way
fn lists_or_configured(lists: Vec<String>, config: &TickerConfig) -> Vec<String> {
    if lists.is_empty() {
        return config.ticker.resolved_lists();
    }
    GlyphConfig {
        character_lists: lists,
        ..config.ticker.clone()
    }
    .resolved_lists()
}
