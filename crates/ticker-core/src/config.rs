use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::cycle::{ScrollDirection, ALPHABETICAL_LIST, NUMBER_LIST};
use crate::segment::Segmentation;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ticker: GlyphConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// Glyph cycles in priority order, e.g. "0123456789"
    #[serde(default = "default_character_lists")]
    pub character_lists: Vec<String>,
    /// Preferred scroll direction: "any", "up" or "down"
    #[serde(default)]
    pub direction: ScrollDirection,
    /// How text is split into glyphs: "emoji" or "unicode"
    #[serde(default)]
    pub segmentation: Segmentation,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            character_lists: default_character_lists(),
            direction: ScrollDirection::default(),
            segmentation: Segmentation::default(),
        }
    }
}

impl GlyphConfig {
    /// Expand the preset names "number" and "alphabetical" into their lists
    pub fn resolved_lists(&self) -> Vec<String> {
        self.character_lists
            .iter()
            .map(|list| match list.as_str() {
                "number" => NUMBER_LIST.to_string(),
                "alphabetical" => ALPHABETICAL_LIST.to_string(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// Easing curve applied to animation progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end value when the animation completes
    None,
    Linear,
    /// Slow start and end, fast middle
    #[default]
    AccelerateDecelerate,
    /// Quadratic ease-out
    Decelerate,
    /// Cubic ease-out
    Cubic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animation duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Delay before an animation starts, in milliseconds
    #[serde(default)]
    pub delay_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Target frame rate while animating
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Let the occupied width follow the columns while they resize
    #[serde(default)]
    pub animate_measurement_change: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            delay_ms: 0,
            easing: EasingType::default(),
            fps: default_fps(),
            animate_measurement_change: false,
        }
    }
}

/// Horizontal placement of the ticker inside its area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    Left,
    Center,
    #[default]
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub gravity: Gravity,
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::default(),
            tick_rate_ms: default_tick_rate(),
            theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// How often the demo produces a new value, in milliseconds
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
    #[serde(default = "default_min_digits")]
    pub min_digits: u32,
    #[serde(default = "default_max_digits")]
    pub max_digits: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
            min_digits: default_min_digits(),
            max_digits: default_max_digits(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_character_lists() -> Vec<String> {
    vec![NUMBER_LIST.to_string()]
}

fn default_duration_ms() -> u64 {
    350
}

fn default_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    16
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_update_interval_ms() -> u64 {
    2000
}

fn default_min_digits() -> u32 {
    6
}

fn default_max_digits() -> u32 {
    7
}

impl TickerConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
            Ok(config.sanitized())
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the config file path
    /// Uses ~/.config/ticker/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("ticker")
            .join("config.toml")
    }

    /// Replace values the animation cannot work with
    fn sanitized(mut self) -> Self {
        if self.animation.fps == 0 {
            tracing::warn!("animation.fps must be positive, using {}", default_fps());
            self.animation.fps = default_fps();
        }
        if self.demo.min_digits == 0 || self.demo.min_digits > self.demo.max_digits {
            tracing::warn!(
                min = self.demo.min_digits,
                max = self.demo.max_digits,
                "Invalid demo digit range, using defaults"
            );
            self.demo.min_digits = default_min_digits();
            self.demo.max_digits = default_max_digits();
        }
        self
    }
}
