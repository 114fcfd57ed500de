use std::str::FromStr;

use anyhow::{anyhow, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }
}

fn channel(s: &str, color: &str) -> Result<u8, Error> {
    u8::from_str_radix(s, 16).map_err(|e| anyhow!("invalid color {:?}: {}", color, e))
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(anyhow!("invalid color: {}", s));
        }
        if hex.len() == 6 {
            let r = channel(&hex[0..2], s)?;
            let g = channel(&hex[2..4], s)?;
            let b = channel(&hex[4..6], s)?;
            Ok(Color { r, g, b, a: 255 })
        } else if hex.len() == 8 {
            let r = channel(&hex[0..2], s)?;
            let g = channel(&hex[2..4], s)?;
            let b = channel(&hex[4..6], s)?;
            let a = channel(&hex[6..8], s)?;
            Ok(Color { r, g, b, a })
        } else {
            Err(anyhow!("invalid color: {}", s))
        }
    }
}

#[cfg(feature = "sdl2")]
impl From<Color> for sdl2::pixels::Color {
    fn from(value: Color) -> Self {
        sdl2::pixels::Color::RGBA(value.r, value.g, value.b, value.a)
    }
}
