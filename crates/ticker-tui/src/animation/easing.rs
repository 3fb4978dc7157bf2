//! Pure easing functions for ticker animations
//!
//! Each curve maps animation time in [0, 1] to animation progress in [0, 1].

pub use ticker_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::AccelerateDecelerate => accelerate_decelerate(t),
            EasingType::Decelerate => decelerate(t),
            EasingType::Cubic => cubic_ease_out(t),
        }
    }
}

/// Cosine ramp: f(t) = cos((t + 1)π) / 2 + 0.5
#[inline]
fn accelerate_decelerate(t: f64) -> f64 {
    ((t + 1.0) * std::f64::consts::PI).cos() / 2.0 + 0.5
}

/// Quadratic ease-out: f(t) = 1 - (1-t)²
#[inline]
fn decelerate(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
