//! Time calculation utilities for ticker animations
//!
//! Pure functions over explicit instants so the animator can be driven by a
//! fake clock in tests.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - When the animation was requested
/// * `delay` - Time to wait before the animation begins moving
/// * `duration` - Total animation duration, not counting the delay
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, delay: Duration, duration: Duration, now: Instant) -> f64 {
    let elapsed = now.saturating_duration_since(start).saturating_sub(delay);
    if duration.is_zero() {
        return if has_started(start, delay, now) { 1.0 } else { 0.0 };
    }
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Whether the delay before the animation has passed
#[inline]
pub fn has_started(start: Instant, delay: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= delay
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, delay: Duration, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= delay + duration
}

/// Frame interval for a target frame rate
#[inline]
pub fn frame_interval(fps: u32) -> Duration {
    if fps == 0 {
        Duration::from_millis(16) // ~60fps fallback
    } else {
        Duration::from_millis(1000 / fps as u64)
    }
}
