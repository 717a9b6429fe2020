use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use ratatui::style::Color;

/// Named colour scheme chosen by the player and saved between sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Classic,
    Ocean,
    Fire,
    Forest,
    Candy,
    Monochrome,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Classic,
        ColorScheme::Ocean,
        ColorScheme::Fire,
        ColorScheme::Forest,
        ColorScheme::Candy,
        ColorScheme::Monochrome,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Classic => "Classic",
            ColorScheme::Ocean => "Ocean",
            ColorScheme::Fire => "Fire",
            ColorScheme::Forest => "Forest",
            ColorScheme::Candy => "Candy",
            ColorScheme::Monochrome => "Monochrome",
        }
    }

    /// The scheme after this one, wrapping around
    pub fn next(self) -> ColorScheme {
        let index = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn theme(self) -> Theme {
        match self {
            ColorScheme::Classic => Theme {
                body: Color::Rgb(0, 255, 0),
                head: Color::Rgb(0, 100, 0),
                food: Color::Rgb(213, 50, 80),
                special_food: Color::Rgb(255, 215, 0),
                background: Color::Rgb(0, 0, 0),
            },
            ColorScheme::Ocean => Theme {
                body: Color::Rgb(50, 153, 213),
                head: Color::Rgb(0, 0, 128),
                food: Color::Rgb(255, 127, 80),
                special_food: Color::Rgb(0, 255, 255),
                background: Color::Rgb(0, 20, 40),
            },
            ColorScheme::Fire => Theme {
                body: Color::Rgb(255, 165, 0),
                head: Color::Rgb(213, 50, 80),
                food: Color::Rgb(255, 255, 0),
                special_food: Color::Rgb(255, 255, 255),
                background: Color::Rgb(40, 0, 0),
            },
            ColorScheme::Forest => Theme {
                body: Color::Rgb(50, 205, 50),
                head: Color::Rgb(0, 100, 0),
                food: Color::Rgb(165, 42, 42),
                special_food: Color::Rgb(255, 165, 0),
                background: Color::Rgb(20, 40, 20),
            },
            ColorScheme::Candy => Theme {
                body: Color::Rgb(255, 105, 180),
                head: Color::Rgb(128, 0, 128),
                food: Color::Rgb(0, 255, 255),
                special_food: Color::Rgb(255, 255, 0),
                background: Color::Rgb(230, 230, 250),
            },
            ColorScheme::Monochrome => Theme {
                body: Color::Rgb(255, 255, 255),
                head: Color::Rgb(100, 100, 100),
                food: Color::Rgb(255, 255, 255),
                special_food: Color::Rgb(255, 255, 255),
                background: Color::Rgb(0, 0, 0),
            },
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| anyhow!("unknown colour scheme '{wanted}'"))
    }
}

/// Concrete colours used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub body: Color,
    pub head: Color,
    pub food: Color,
    pub special_food: Color,
    pub background: Color,
}

impl Theme {
    /// Special food colour scaled by the pulse intensity, never fully dark
    pub fn pulsed_special(&self, intensity: f32) -> Color {
        scale(self.special_food, 0.4 + 0.6 * intensity.clamp(0.0, 1.0))
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorScheme::default().theme()
    }
}

/// Predator colour pushed toward red as anger rises
pub fn anger_tint(base: (u8, u8, u8), anger: u8) -> Color {
    let tint = anger.saturating_sub(1) as u16 * 30;
    let (r, g, b) = base;
    Color::Rgb(
        (r as u16 + tint).min(255) as u8,
        (g as u16).saturating_sub(tint / 2) as u8,
        (b as u16).saturating_sub(tint / 2) as u8,
    )
}

fn scale(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (r as f32 * factor) as u8,
            (g as f32 * factor) as u8,
            (b as f32 * factor) as u8,
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.to_string().parse::<ColorScheme>().unwrap(), scheme);
        }
        assert_eq!("ocean".parse::<ColorScheme>().unwrap(), ColorScheme::Ocean);
        assert!("Neon".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut scheme = ColorScheme::Classic;
        for _ in 0..ColorScheme::ALL.len() {
            scheme = scheme.next();
        }
        assert_eq!(scheme, ColorScheme::Classic);
        assert_eq!(ColorScheme::Monochrome.next(), ColorScheme::Classic);
    }

    #[test]
    fn test_anger_tint_reddens() {
        let calm = anger_tint((165, 42, 42), 1);
        let furious = anger_tint((165, 42, 42), 4);
        assert_eq!(calm, Color::Rgb(165, 42, 42));
        assert_eq!(furious, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_pulsed_special_dims() {
        let theme = ColorScheme::Classic.theme();
        assert_eq!(theme.pulsed_special(1.0), Color::Rgb(255, 215, 0));
        assert_ne!(theme.pulsed_special(0.0), theme.special_food);
    }
}
