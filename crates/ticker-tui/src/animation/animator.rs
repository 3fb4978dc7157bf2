//! Ticker animation controller
//!
//! Turns wall clock time into animation progress for a column manager.
//! Call `set_text()` when the value changes, then `update()` each frame.

use std::time::{Duration, Instant};

use ticker_core::config::AnimationConfig;
use ticker_core::TickerColumnManager;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{has_started, progress};

/// Active ticker animation state
#[derive(Debug, Clone, Copy)]
struct ActiveAnimation {
    /// When the text changed
    start: Instant,
    /// Wait before the columns start moving
    delay: Duration,
    /// Animation duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Drives a [`TickerColumnManager`] from a clock.
#[derive(Debug)]
pub struct TickerAnimator {
    manager: TickerColumnManager,
    config: AnimationConfig,
    animation: Option<ActiveAnimation>,
    /// Last text handed to the manager
    text: Option<String>,
}

impl TickerAnimator {
    pub fn new(manager: TickerColumnManager, config: AnimationConfig) -> Self {
        Self {
            manager,
            config,
            animation: None,
            text: None,
        }
    }

    /// Update configuration; applies to the next text change
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn manager(&self) -> &TickerColumnManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut TickerColumnManager {
        &mut self.manager
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Check if an animation is currently active
    /// Use this to determine if we need high frame rate
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Show `text`, animating from whatever is visible now
    pub fn set_text(&mut self, text: &str, animate: bool) -> ticker_core::Result<()> {
        self.set_text_at(text, animate, Instant::now())
    }

    /// Same as [`set_text`](Self::set_text) with an explicit clock reading
    pub fn set_text_at(&mut self, text: &str, animate: bool, now: Instant) -> ticker_core::Result<()> {
        if self.text.as_deref() == Some(text) {
            return Ok(());
        }

        self.manager.set_text(text)?;
        self.text = Some(text.to_string());

        let duration = Duration::from_millis(self.config.duration_ms);
        if animate && !duration.is_zero() {
            // Supersedes any animation in flight; the columns carry the
            // visible offset over on their own
            self.animation = Some(ActiveAnimation {
                start: now,
                delay: Duration::from_millis(self.config.delay_ms),
                duration,
                easing: self.config.easing,
            });
            // Columns show where they start from until the delay is over
            self.manager.set_animation_progress(0.0);
        } else {
            self.animation = None;
            self.manager.set_animation_progress(1.0);
            self.manager.on_animation_end();
        }

        Ok(())
    }

    /// Advance the animation to `now`
    ///
    /// Returns whether an animation is still running.
    pub fn update(&mut self, now: Instant) -> bool {
        let Some(animation) = self.animation else {
            return false;
        };

        if !has_started(animation.start, animation.delay, now) {
            return true;
        }

        let linear = progress(animation.start, animation.delay, animation.duration, now);
        let eased = animation.easing.apply(linear);
        self.manager.set_animation_progress(eased as f32);

        if linear >= 1.0 {
            self.manager.on_animation_end();
            self.animation = None;
            tracing::trace!(text = ?self.text, "Ticker animation finished");
            return false;
        }

        true
    }
}
