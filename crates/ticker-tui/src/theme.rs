use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg: Color,
    pub status_bg: Color,

    // Foreground colors
    pub fg: Color,
    pub dim: Color,

    // Semantic colors
    pub accent: Color,
    pub label: Color,
    pub paused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            status_bg: Color::Rgb(0x45, 0x40, 0x3d),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            dim: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            label: Color::Rgb(0xa8, 0x99, 0x84),
            paused: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

/// Dracula
/// https://draculatheme.com/
fn dracula() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x2a, 0x36),
        status_bg: Color::Rgb(0x44, 0x47, 0x5a),
        fg: Color::Rgb(0xf8, 0xf8, 0xf2),
        dim: Color::Rgb(0x62, 0x72, 0xa4),
        accent: Color::Rgb(0xbd, 0x93, 0xf9),
        label: Color::Rgb(0x8b, 0xe9, 0xfd),
        paused: Color::Rgb(0xff, 0xb8, 0x6c),
    }
}

/// Nord
/// https://www.nordtheme.com/
fn nord() -> Theme {
    Theme {
        bg: Color::Rgb(0x2e, 0x34, 0x40),
        status_bg: Color::Rgb(0x43, 0x4c, 0x5e),
        fg: Color::Rgb(0xec, 0xef, 0xf4),
        dim: Color::Rgb(0x4c, 0x56, 0x6a),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        label: Color::Rgb(0x81, 0xa1, 0xc1),
        paused: Color::Rgb(0xd0, 0x87, 0x70),
    }
}

/// Monokai
fn monokai() -> Theme {
    Theme {
        bg: Color::Rgb(0x27, 0x28, 0x22),
        status_bg: Color::Rgb(0x49, 0x48, 0x3e),
        fg: Color::Rgb(0xf8, 0xf8, 0xf2),
        dim: Color::Rgb(0x75, 0x71, 0x5e),
        accent: Color::Rgb(0xa6, 0xe2, 0x2e),
        label: Color::Rgb(0x66, 0xd9, 0xef),
        paused: Color::Rgb(0xfd, 0x97, 0x1f),
    }
}

/// Load a theme by name, falling back to the default theme
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "default" | "gruvbox" | "gruvbox-dark" => Theme::default(),
        "dracula" => dracula(),
        "nord" => nord(),
        "monokai" => monokai(),
        other => {
            tracing::warn!("Unknown theme '{}', using default", other);
            Theme::default()
        }
    }
}
