mod status_bar;
mod ticker;

pub use status_bar::StatusBarWidget;
pub use ticker::TickerWidget;
