pub mod animation;
pub mod app;
pub mod event;
pub mod input;
pub mod measure;
pub mod theme;
pub mod widgets;

pub use animation::TickerAnimator;
pub use app::App;
pub use measure::TerminalMeasure;
pub use theme::{load_theme, Theme};
