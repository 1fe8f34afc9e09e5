use crate::core::FADE_ZONE_ROWS;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// One palette: `background` clears the frame, `secondary` draws chrome and
/// walls, `accent` draws the search itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
}

pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme {
            name: "midnight".to_string(),
            background: Rgb { r: 13, g: 17, b: 23 },
            secondary: Rgb { r: 139, g: 148, b: 158 },
            accent: Rgb { r: 88, g: 166, b: 255 },
        },
        Theme {
            name: "paper".to_string(),
            background: Rgb { r: 246, g: 248, b: 250 },
            secondary: Rgb { r: 87, g: 96, b: 106 },
            accent: Rgb { r: 9, g: 105, b: 218 },
        },
    ]
}

/// Loads palettes from a JSON array of `{name, background, secondary,
/// accent}` objects with `{r, g, b}` channels.
pub fn load_themes(path: &str) -> Result<Vec<Theme>, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let themes: Vec<Theme> = serde_json::from_str(&data)?;
    if themes.is_empty() {
        return Err("theme file contains no palettes".into());
    }
    Ok(themes)
}

/// Terminal stand-in for canvas translucency: moves `base` toward `over` by
/// `alpha`, clamped to [0, 1].
pub fn blend(base: Rgb, over: Rgb, alpha: f32) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let channel = |b: u8, o: u8| (b as f32 + (o as f32 - b as f32) * alpha).round() as u8;
    Rgb {
        r: channel(base.r, over.r),
        g: channel(base.g, over.g),
        b: channel(base.b, over.b),
    }
}

/// Vertical fade under the header: fully transparent through the top half of
/// the fade zone, ramping linearly to fully opaque at the zone's bottom edge.
pub fn fade_factor(y: usize) -> f32 {
    let half = FADE_ZONE_ROWS as f32 / 2.0;
    let y = y as f32;
    if y >= FADE_ZONE_ROWS as f32 {
        1.0
    } else if y < half {
        0.0
    } else {
        (y - half) / half
    }
}
