//! Animation driver for terminal tickers
//!
//! The core crate only knows about progress values in [0, 1]. This module
//! maps wall clock time onto those values.
//!
//! - `easing` - Pure easing curves
//! - `timing` - Progress and frame interval calculations
//! - `animator` - Animation controller combining the two with a column manager
//!
//! # Usage
//!
//! ```ignore
//! use ticker_tui::animation::TickerAnimator;
//!
//! let mut animator = TickerAnimator::new(manager, config.animation.clone());
//! animator.set_text("1,234", true)?;
//!
//! // In main loop, update each frame
//! let animating = animator.update(Instant::now());
//! ```

pub mod animator;
pub mod easing;
pub mod timing;

pub use animator::TickerAnimator;
pub use easing::{EasingType, EasingTypeExt};
